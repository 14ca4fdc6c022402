use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;
mod standardize;


pub use standardize::Standardizer;

/// A design matrix bundled with its response vector.
///
/// The design matrix holds one row per observation and one column per
/// predictor. The intercept is never stored as a column: it is handled by
/// the estimators.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<DM, T> {
    pub design_matrix: DM,
    pub targets: T,
}

/// An owned dataset
pub type Dataset<F> = DatasetBase<Array2<F>, Array1<F>>;

/// A borrowed dataset
pub type DatasetView<'a, F> = DatasetBase<ArrayView2<'a, F>, ArrayView1<'a, F>>;

/// This trait provides the operations the coordinate descent routine needs
/// from a design matrix.
pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;

    fn n_features(&self) -> usize;

    /// Adds `diff * X[:, j]` to the model fit `Xw`. This is called every
    /// time a coefficient changes during a coordinate descent cycle.
    fn update_model_fit(&self, Xw: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize);
}

/// This trait gives access to the response vector of a dataset.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;

    fn as_single_target(&self) -> ArrayView1<'_, Self::Elem>;
}
