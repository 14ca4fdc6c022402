use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};

use crate::datafits::Quadratic;
use crate::datasets::{DatasetBase, DesignMatrix};
use crate::penalties::Penalty;
use crate::Float;

#[cfg(test)]
mod tests;

/// Summary of one call to [`coordinate_descent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CDOutcome<F> {
    /// Number of full cycles over the features
    pub n_iterations: usize,
    /// Whether the last cycle moved every coefficient by less than the tolerance
    pub converged: bool,
    /// Largest absolute coefficient change during the last cycle
    pub max_change: F,
}

/// This function computes the distance of the gradient of the datafit to the
/// subdifferential of the penalty. It returns an array containing the
/// distances for each feature as well as the maximum distance, which is null
/// at the exact solution.
pub fn kkt_violation<F, D, T, P>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    w: ArrayView1<F>,
    Xw: ArrayView1<F>,
    datafit: &Quadratic<F>,
    penalty: &P,
) -> (Array1<F>, F)
where
    F: Float,
    D: Data<Elem = F>,
    T: Data<Elem = F>,
    P: Penalty<F>,
{
    let grad = datafit.full_grad(dataset, Xw);
    penalty.subdiff_distance(w, grad.view())
}

/// This is the backbone function of the crate. It implements cyclic
/// coordinate descent for one value of the penalty.
///
/// Each cycle visits the features in order. For feature `j`, holding the
/// other coefficients fixed, the objective along `j` is minimized in closed
/// form by a proximal step of size `1 / L_j`, `L_j` being the Lipschitz
/// constant of the datafit along `j`:
/// ```ignore
/// w_j <- prox(w_j - grad_j / L_j, 1 / L_j)
///      = S(X_j^T r / n + L_j w_j, lambda * alpha) / (L_j + lambda * (1 - alpha))
/// ```
/// where `r = y - Xw` and `S` is the soft-thresholding operator. Features with
/// a null Lipschitz constant are skipped: their coefficient stays where it is.
///
/// `w` and `Xw` hold the starting point on entry, which allows warm starts
/// along a regularization path, and the solution on exit. `Xw` must equal
/// `X w` on entry; it is kept up to date after every coordinate update. The
/// `datafit` must have been initialized on `dataset`.
///
/// The descent stops as soon as a full cycle changes no coefficient by more
/// than `tolerance`, or after `max_iterations` cycles. In the latter case the
/// returned [`CDOutcome`] reports the descent as not converged and `w` holds
/// the last iterate.
pub fn coordinate_descent<F, D, T, P>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    datafit: &Quadratic<F>,
    penalty: &P,
    w: &mut Array1<F>,
    Xw: &mut Array1<F>,
    max_iterations: usize,
    tolerance: F,
) -> CDOutcome<F>
where
    F: Float,
    D: Data<Elem = F>,
    T: Data<Elem = F>,
    P: Penalty<F>,
{
    let lipschitz = datafit.lipschitz();
    let mut max_change = F::zero();

    for epoch in 0..max_iterations {
        max_change = F::zero();

        for j in 0..w.len() {
            if lipschitz[j] == F::zero() {
                continue;
            }
            let old_w_j = w[j];
            let grad_j = datafit.gradient_j(dataset, Xw.view(), j);
            w[j] = penalty.prox(old_w_j - grad_j / lipschitz[j], F::one() / lipschitz[j]);

            let diff = w[j] - old_w_j;
            if diff != F::zero() {
                dataset.design_matrix().update_model_fit(Xw, diff, j);
                max_change = F::max(max_change, diff.abs());
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            let p_obj = datafit.value(dataset, Xw.view()) + penalty.value(w.view());
            log::trace!(
                "epoch: {} :: obj: {} :: max change: {}",
                epoch,
                p_obj,
                max_change
            );
        }

        if max_change < tolerance {
            return CDOutcome {
                n_iterations: epoch + 1,
                converged: true,
                max_change,
            };
        }
    }

    CDOutcome {
        n_iterations: max_iterations,
        converged: false,
        max_change,
    }
}
