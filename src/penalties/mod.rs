use ndarray::{Array1, ArrayView1};

use crate::helpers::prox::soft_thresholding;
use crate::Float;

#[cfg(test)]
mod tests;

/// This trait provides the three methods needed to update the weights during
/// the optimization routine.
pub trait Penalty<F: Float> {
    /// This method is called when evaluating the objective value.
    ///
    /// It is jointly used with [`Quadratic::value`](crate::datafits::Quadratic::value)
    /// in order to compute the value of the objective.
    fn value(&self, w: ArrayView1<F>) -> F;

    /// This method computes the proximal gradient step during the update of the
    /// weights. For a given penalty, it implements its proximal operator.
    fn prox(&self, value: F, step_size: F) -> F;

    /// This method computes the distance between the gradient of the datafit
    /// and the subdifferential of the penalty, feature by feature, as well as
    /// the maximum distance. A null maximum distance certifies optimality.
    fn subdiff_distance(&self, w: ArrayView1<F>, grad: ArrayView1<F>) -> (Array1<F>, F);
}

/// The elastic net penalty
///
/// A convex combination of the L1 penalty of the Lasso and the squared L2
/// penalty of Ridge, weighted by the mixing parameter `alpha` and scaled by
/// the penalty strength `lambda`:
/// ```ignore
/// pen(w) = lambda * (alpha * ||w||_1 + (1 - alpha) * ||w||^2_2 / 2)
/// ```
/// `alpha = 1` gives the Lasso and `alpha = 0` gives Ridge.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetPenalty<F: Float> {
    lambda: F,
    alpha: F,
}

impl<F: Float> ElasticNetPenalty<F> {
    /// Instantiates an elastic net penalty with a non-negative penalty strength
    /// and a mixing parameter between 0 and 1.
    pub fn new(lambda: F, alpha: F) -> Self {
        ElasticNetPenalty { lambda, alpha }
    }

    pub fn lambda(&self) -> F {
        self.lambda
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }
}

impl<F: Float> Penalty<F> for ElasticNetPenalty<F> {
    fn value(&self, w: ArrayView1<F>) -> F {
        self.lambda
            * (self.alpha * w.iter().map(|&wj| wj.abs()).sum()
                + F::cast(0.5) * (F::one() - self.alpha) * w.dot(&w))
    }

    /// Computes the proximal operator of the elastic net for a weight scalar
    ///
    /// prox(x, t) = S(x, t * lambda * alpha) / (1 + t * lambda * (1 - alpha))
    ///
    /// With `x = w_j - grad_j / L_j` and `t = 1 / L_j`, this is the exact
    /// minimizer of the objective along coordinate `j`.
    fn prox(&self, value: F, step_size: F) -> F {
        let prox = soft_thresholding(value, self.alpha * self.lambda * step_size);
        prox / (F::one() + step_size * (F::one() - self.alpha) * self.lambda)
    }

    /// Computes the distance of the gradient to the subdifferential
    ///
    /// dist(grad, subdiff) = max(0, |grad| - lambda * alpha)         if w[j] = 0
    ///                       |- grad - lambda * (sign(w[j]) * alpha
    ///                        + (1 - alpha) * w[j])|                 otherwise
    fn subdiff_distance(&self, w: ArrayView1<F>, grad: ArrayView1<F>) -> (Array1<F>, F) {
        let subdiff_dist = Array1::from_iter(grad.iter().zip(w).map(|(&grad_j, &w_j)| {
            match w_j == F::zero() {
                true => F::max(F::zero(), grad_j.abs() - self.lambda * self.alpha),
                false => (-grad_j
                    - self.lambda
                        * (w_j.signum() * self.alpha + (F::one() - self.alpha) * w_j))
                    .abs(),
            }
        }));
        let max_dist = subdiff_dist.fold(F::zero(), |max_val, &dist| F::max(max_val, dist));
        (subdiff_dist, max_dist)
    }
}
