use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Ix1, Ix2};

use crate::datasets::{DatasetBase, Targets};
use crate::Float;

#[cfg(test)]
mod tests;

/// Quadratic datafit
///
/// The squared-norm residuals datafit used in least-squares regression:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw||^2_2
/// ```
/// It stores the quantities pre-computed once per dataset and reused by every
/// coordinate update: the per-feature Lipschitz constants `||X_j||^2 / n_samples`
/// and the matrix-vector product `X^T y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<F: Float> {
    lipschitz: Array1<F>,
    Xty: Array1<F>,
}

impl<F: Float> Default for Quadratic<F> {
    fn default() -> Self {
        Quadratic::new()
    }
}

impl<F: Float> Quadratic<F> {
    pub fn new() -> Self {
        Quadratic {
            lipschitz: Array1::<F>::zeros(0),
            Xty: Array1::<F>::zeros(0),
        }
    }

    /// This method pre-computes the Lipschitz constants and the matrix-vector
    /// product XTy useful during the optimization routine.
    pub fn initialize<D: Data<Elem = F>, T: Data<Elem = F>>(
        &mut self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) {
        let n_samples = F::cast(dataset.targets().n_samples());
        let X = dataset.design_matrix();
        let y = dataset.targets().as_single_target();
        self.Xty = X.t().dot(&y);
        self.lipschitz = X.map_axis(Axis(0), |Xj| Xj.dot(&Xj) / n_samples);
    }

    /// This method computes the value of the datafit given the model fit.
    pub fn value<D: Data<Elem = F>, T: Data<Elem = F>>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
        Xw: ArrayView1<F>,
    ) -> F {
        let n_samples = dataset.targets().n_samples();
        let r = dataset.targets() - &Xw;
        r.dot(&r) / F::cast(2 * n_samples)
    }

    /// This method computes the value of the gradient at some point w for
    /// coordinate j:
    /// ```ignore
    /// grad_j = (X_j^T Xw - X_j^T y) / n_samples
    /// ```
    pub fn gradient_j<D: Data<Elem = F>, T: Data<Elem = F>>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
        Xw: ArrayView1<F>,
        j: usize,
    ) -> F {
        let n_samples = F::cast(dataset.targets().n_samples());
        let XjTXw = dataset.design_matrix().column(j).dot(&Xw);
        (XjTXw - self.Xty[j]) / n_samples
    }

    /// This method computes the full gradient of the datafit with respect to
    /// the weight vector.
    pub fn full_grad<D: Data<Elem = F>, T: Data<Elem = F>>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
        Xw: ArrayView1<F>,
    ) -> Array1<F> {
        Array1::from_iter(
            (0..dataset.design_matrix().ncols()).map(|j| self.gradient_j(dataset, Xw, j)),
        )
    }

    /// The quadratic datafit is Lipschitz-continuous along every coordinate,
    /// hence the optimal step size is the inverse of the Lipschitz constant.
    pub fn lipschitz(&self) -> ArrayView1<'_, F> {
        self.lipschitz.view()
    }
}
