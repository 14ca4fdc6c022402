use crate::datasets::DatasetBase;

use super::error::Result;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of design matrix and targets). More formally, the model estimates coefficients
/// that minimizes an empirical risk (loss function).
pub trait Fit<DM, T, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> std::result::Result<Self::Object, E>;
}

/// Predict trait
///
/// A fitted model maps a design matrix to predictions. The design matrix must
/// have as many columns as the data the model was fitted on.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> Result<T>;
}
