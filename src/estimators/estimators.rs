use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::error::{EstimatorError, Result};
use super::hyperparams::{
    ElasticNetCVParams, ElasticNetCVValidParams, ElasticNetParams, ElasticNetPathParams,
    ElasticNetPathValidParams, ElasticNetValidParams,
};
use super::traits::{Fit, Predict};

use crate::cv::{complement, fold_assignment, fold_errors, summarize};
use crate::datasets::{DatasetBase, Standardizer};
use crate::helpers::helpers::{compute_lambda_max, mean_squared_error};
use crate::path::{lambda_grid, solve_path};
use crate::Float;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// The elastic net estimator
///
/// This struct holds an elastic net model fitted at a single penalty strength:
/// the coefficients on the scale of the original predictors, the intercept and
/// a summary of the coordinate descent run.
///
/// The model minimizes
/// ```ignore
/// 1 / (2 * n_samples) * ||y - b0 - Xw||^2_2
///     + lambda * (alpha * ||w||_1 + (1 - alpha) / 2 * ||w||^2_2)
/// ```
/// on the standardized data. `alpha = 1` gives the lasso, `alpha = 0` ridge
/// regression.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNet<F> {
    coefficients: Array1<F>,
    intercept: F,
    lambda: F,
    alpha: F,
    n_iterations: usize,
    converged: bool,
}

impl<F: Float> ElasticNet<F> {
    /// Create a default parameter set for construction of an elastic net model
    pub fn params() -> ElasticNetParams<F> {
        ElasticNetParams::new()
    }

    /// Create a ridge only model
    pub fn ridge() -> ElasticNetParams<F> {
        ElasticNetParams::new().alpha(F::zero())
    }

    /// Create a lasso only model
    pub fn lasso() -> ElasticNetParams<F> {
        ElasticNetParams::new().alpha(F::one())
    }

    /// Coefficients on the scale of the original predictors
    pub fn coefficients(&self) -> ArrayView1<'_, F> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn lambda(&self) -> F {
        self.lambda
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Number of coordinate descent cycles run, `0` for a null model
    /// detected without iterating.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Whether the coordinate descent met its tolerance before the iteration
    /// cap. The coefficients of a non-converged model are the last iterate.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of non-zero coefficients
    pub fn n_nonzero(&self) -> usize {
        self.coefficients.iter().filter(|&&w| w != F::zero()).count()
    }
}

fn check_features(expected: usize, found: usize) -> Result<()> {
    match expected == found {
        true => Ok(()),
        false => Err(EstimatorError::FeatureMismatch { expected, found }),
    }
}

impl<F: Float, D: Data<Elem = F>> Predict<&ArrayBase<D, Ix2>, Array1<F>> for ElasticNet<F> {
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the fitted values `b0 + X w`.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        check_features(self.coefficients.len(), x.ncols())?;
        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// An elastic net regularization path
///
/// Models fitted for a decreasing sequence of penalty strengths with a shared
/// mixing parameter. Row `i` of the coefficient matrix is the model fitted at
/// `lambdas()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetPath<F> {
    lambdas: Array1<F>,
    alpha: F,
    coefficients: Array2<F>,
    intercepts: Array1<F>,
    n_iterations: Vec<usize>,
    converged: Vec<bool>,
}

impl<F: Float> ElasticNetPath<F> {
    /// Create a default parameter set for construction of a regularization path
    pub fn params() -> ElasticNetPathParams<F> {
        ElasticNetPathParams::new()
    }

    /// Penalty strengths, in decreasing order
    pub fn lambdas(&self) -> ArrayView1<'_, F> {
        self.lambdas.view()
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Coefficients on the scale of the original predictors, one row per
    /// penalty strength
    pub fn coefficients(&self) -> ArrayView2<'_, F> {
        self.coefficients.view()
    }

    pub fn intercepts(&self) -> ArrayView1<'_, F> {
        self.intercepts.view()
    }

    pub fn n_iterations(&self) -> &[usize] {
        &self.n_iterations
    }

    pub fn converged(&self) -> &[bool] {
        &self.converged
    }

    pub fn len(&self) -> usize {
        self.lambdas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lambdas.is_empty()
    }

    /// Number of non-zero coefficients at each penalty strength
    pub fn n_nonzero(&self) -> Vec<usize> {
        self.coefficients
            .rows()
            .into_iter()
            .map(|w| w.iter().filter(|&&wj| wj != F::zero()).count())
            .collect()
    }

    /// The model fitted at the `idx`-th penalty strength
    pub fn model(&self, idx: usize) -> Option<ElasticNet<F>> {
        (idx < self.len()).then(|| self.model_at(idx))
    }

    /// Iterates over the models of the path, by decreasing penalty strength
    pub fn iter(&self) -> impl Iterator<Item = ElasticNet<F>> + '_ {
        (0..self.len()).map(move |idx| self.model_at(idx))
    }

    fn model_at(&self, idx: usize) -> ElasticNet<F> {
        ElasticNet {
            coefficients: self.coefficients.row(idx).to_owned(),
            intercept: self.intercepts[idx],
            lambda: self.lambdas[idx],
            alpha: self.alpha,
            n_iterations: self.n_iterations[idx],
            converged: self.converged[idx],
        }
    }
}

impl<F: Float, D: Data<Elem = F>> Predict<&ArrayBase<D, Ix2>, Array2<F>> for ElasticNetPath<F> {
    /// Returns the `(n_samples, n_lambdas)` matrix whose column `i` holds the
    /// fitted values of the `i`-th model.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        check_features(self.coefficients.ncols(), x.ncols())?;
        Ok(x.dot(&self.coefficients.t()) + &self.intercepts)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// A cross-validated elastic net regularization path
///
/// Holds the path fitted on the full data, the held-out mean squared error of
/// every fold at every penalty strength and the selected penalty strengths:
/// `lambda_min` minimizes the mean held-out error and `lambda_1se` is the
/// largest penalty strength whose mean error lies within one standard error
/// of that minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetCV<F> {
    path: ElasticNetPath<F>,
    cv_mean: Array1<F>,
    cv_std_error: Array1<F>,
    fold_mse: Array2<F>,
    folds: Vec<Vec<usize>>,
    index_min: usize,
    index_1se: usize,
}

impl<F: Float> ElasticNetCV<F> {
    /// Create a default parameter set for cross-validation
    pub fn params() -> ElasticNetCVParams<F> {
        ElasticNetCVParams::new()
    }

    /// The path fitted on the full data
    pub fn path(&self) -> &ElasticNetPath<F> {
        &self.path
    }

    pub fn lambdas(&self) -> ArrayView1<'_, F> {
        self.path.lambdas()
    }

    /// Mean held-out error per penalty strength
    pub fn cv_mean(&self) -> ArrayView1<'_, F> {
        self.cv_mean.view()
    }

    /// Standard error of the mean held-out error per penalty strength
    pub fn cv_std_error(&self) -> ArrayView1<'_, F> {
        self.cv_std_error.view()
    }

    /// Held-out mean squared errors, one row per fold
    pub fn fold_mse(&self) -> ArrayView2<'_, F> {
        self.fold_mse.view()
    }

    /// Sorted row indices held out by each fold
    pub fn folds(&self) -> &[Vec<usize>] {
        &self.folds
    }

    pub fn index_min(&self) -> usize {
        self.index_min
    }

    pub fn index_1se(&self) -> usize {
        self.index_1se
    }

    pub fn lambda_min(&self) -> F {
        self.path.lambdas[self.index_min]
    }

    pub fn lambda_1se(&self) -> F {
        self.path.lambdas[self.index_1se]
    }

    /// The full-data model at `lambda_min`
    pub fn best_model(&self) -> ElasticNet<F> {
        self.path.model_at(self.index_min)
    }

    /// The full-data model at `lambda_1se`
    pub fn model_1se(&self) -> ElasticNet<F> {
        self.path.model_at(self.index_1se)
    }
}

impl<F: Float, D: Data<Elem = F>> Predict<&ArrayBase<D, Ix2>, Array1<F>> for ElasticNetCV<F> {
    /// Predicts with the full-data model at `lambda_min`.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        self.best_model().predict(x)
    }
}

/// This implements the fitting of a regularization path on dense data.
///
/// The design matrix and the response are centered and scaled, the path is
/// solved on the transformed problem and the coefficients are mapped back to
/// the scale of the original predictors.
impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>, EstimatorError> for ElasticNetPathValidParams<F>
{
    type Object = ElasticNetPath<F>;

    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        dataset.validate()?;
        let X = dataset.design_matrix();
        let y = dataset.targets();

        let standardizer = Standardizer::fit(X, y, self.fit_intercept(), self.standardize());
        let transformed = DatasetBase::from((
            standardizer.transform_design(X),
            standardizer.transform_targets(y),
        ));

        let lambdas = match self.lambdas() {
            Some(lambdas) => lambdas.clone(),
            None => {
                let lambda_max = compute_lambda_max(
                    transformed.design_matrix().view(),
                    transformed.targets().view(),
                    self.alpha(),
                );
                lambda_grid(lambda_max, self.n_lambdas(), self.lambda_min_ratio())
            }
        };
        log::debug!(
            "fitting {} lambdas on {} samples and {} features (alpha {})",
            lambdas.len(),
            X.nrows(),
            X.ncols(),
            self.alpha()
        );

        let solution = solve_path(
            &transformed,
            lambdas.view(),
            self.alpha(),
            self.max_iterations(),
            self.tolerance(),
        );

        let mut coefficients = Array2::<F>::zeros(solution.coefficients.raw_dim());
        let mut intercepts = Array1::<F>::zeros(lambdas.len());
        for (idx, w) in solution.coefficients.rows().into_iter().enumerate() {
            let (unscaled, intercept) = standardizer.unscale_coefficients(w);
            coefficients.row_mut(idx).assign(&unscaled);
            intercepts[idx] = intercept;
        }

        Ok(ElasticNetPath {
            lambdas,
            alpha: self.alpha(),
            coefficients,
            intercepts,
            n_iterations: solution.n_iterations,
            converged: solution.converged,
        })
    }
}

/// A single elastic net model is the one-point regularization path at its
/// penalty strength.
impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>, EstimatorError> for ElasticNetValidParams<F>
{
    type Object = ElasticNet<F>;

    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        let path = self.as_path().fit(dataset)?;
        path.model(0).ok_or(EstimatorError::InvalidPathLength(0))
    }
}

/// This implements k-fold cross-validation of a regularization path.
///
/// The penalty strengths are set once on the full data. Each fold then fits
/// the path on the remaining rows over those exact penalty strengths and
/// scores every model by its mean squared error on the held-out rows.
impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>, EstimatorError> for ElasticNetCVValidParams<F>
{
    type Object = ElasticNetCV<F>;

    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        dataset.validate()?;
        let n_samples = dataset.n_samples();
        let folds = fold_assignment(n_samples, self.n_folds(), self.seed())?;

        let path = self.path().fit(dataset)?;
        let fold_params = self.path().with_lambdas(path.lambdas.clone());
        let data = dataset.view();

        let fold_mse = fold_errors(self.n_folds(), path.len(), self.parallel(), |fold| {
            let held_out = &folds[fold];
            let train = data.select(&complement(held_out, n_samples));
            let test = data.select(held_out);

            let fold_path = fold_params.fit(&train)?;
            let predictions = fold_path.predict(test.design_matrix())?;
            log::debug!(
                "fold {} :: {} training rows :: {} held-out rows",
                fold,
                train.n_samples(),
                test.n_samples()
            );
            Ok(predictions
                .columns()
                .into_iter()
                .map(|y_pred| mean_squared_error(test.targets(), &y_pred))
                .collect())
        })?;

        let summary = summarize(fold_mse.view())?;
        log::info!(
            "{}-fold cross-validation :: lambda.min {} (mean error {}) :: lambda.1se {} (mean error {})",
            self.n_folds(),
            path.lambdas[summary.index_min],
            summary.mean[summary.index_min],
            path.lambdas[summary.index_1se],
            summary.mean[summary.index_1se]
        );

        Ok(ElasticNetCV {
            path,
            cv_mean: summary.mean,
            cv_std_error: summary.std_error,
            fold_mse,
            folds,
            index_min: summary.index_min,
            index_1se: summary.index_1se,
        })
    }
}
