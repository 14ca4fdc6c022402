use super::DesignMatrix;
use crate::Float;
use ndarray::{s, Array1, ArrayBase, Axis, Data, Ix2};

/// This implements the [`DesignMatrix`] trait for dense matrices.
impl<F: Float, S: Data<Elem = F>> DesignMatrix for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_features(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn update_model_fit(&self, Xw: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize) {
        Xw.scaled_add(diff, &self.slice(s![.., j]));
    }
}
