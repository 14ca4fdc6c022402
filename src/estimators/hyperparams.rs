use ndarray::Array1;

use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::Float;

fn check_lambda<F: Float>(lambda: F) -> Result<()> {
    match lambda >= F::zero() && lambda.is_finite() {
        true => Ok(()),
        false => Err(EstimatorError::InvalidRegularization(
            lambda.to_f32().unwrap_or(f32::NAN),
        )),
    }
}

fn check_alpha<F: Float>(alpha: F) -> Result<()> {
    match alpha >= F::zero() && alpha <= F::one() {
        true => Ok(()),
        false => Err(EstimatorError::InvalidMixing(
            alpha.to_f32().unwrap_or(f32::NAN),
        )),
    }
}

fn check_solver<F: Float>(tolerance: F, max_iterations: usize) -> Result<()> {
    if !(tolerance > F::zero() && tolerance.is_finite()) {
        Err(EstimatorError::InvalidTolerance(
            tolerance.to_f32().unwrap_or(f32::NAN),
        ))
    } else if max_iterations == 0 {
        Err(EstimatorError::InvalidMaxIterations(max_iterations))
    } else {
        Ok(())
    }
}

/// A verified hyperparameter set ready for the fitting of an elastic net
/// model at a single penalty strength
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetValidParams<F> {
    lambda: F,
    alpha: F,
    tolerance: F,
    max_iterations: usize,
    standardize: bool,
    fit_intercept: bool,
}

impl<F: Float> ElasticNetValidParams<F> {
    pub fn lambda(&self) -> F {
        self.lambda
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn standardize(&self) -> bool {
        self.standardize
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// The one-point path solving the same problem.
    pub(crate) fn as_path(&self) -> ElasticNetPathValidParams<F> {
        ElasticNetPathValidParams {
            alpha: self.alpha,
            n_lambdas: 1,
            lambda_min_ratio: F::cast(1e-4),
            lambdas: Some(Array1::from_elem(1, self.lambda)),
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            standardize: self.standardize,
            fit_intercept: self.fit_intercept,
        }
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - b0 - Xw||^2_2
///     + lambda * (alpha * ||w||_1 + (1 - alpha) / 2 * ||w||^2_2)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetParams<F>(ElasticNetValidParams<F>);

impl<F: Float> Default for ElasticNetParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an elastic net model
impl<F: Float> ElasticNetParams<F> {
    /// Create default elastic net hyper parameters
    pub fn new() -> ElasticNetParams<F> {
        Self(ElasticNetValidParams {
            lambda: F::one(),
            alpha: F::one(),
            tolerance: F::cast(1e-7),
            max_iterations: 100_000,
            standardize: true,
            fit_intercept: true,
        })
    }

    /// Set the penalty strength. A higher value shrinks the coefficients
    /// further. It is expressed on the scale of the standardized problem.
    /// Defaults to `1` if not set.
    pub fn lambda(mut self, lambda: F) -> Self {
        self.0.lambda = lambda;
        self
    }

    /// Set the mixing parameter between ridge (`0`) and lasso (`1`).
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the stopping criterion: the descent stops once a full cycle moves
    /// no coefficient by more than this value.
    /// Defaults to `1e-7` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the maximum number of coordinate descent cycles.
    /// Defaults to `100000` if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Scale the predictors to unit variance before fitting.
    /// Defaults to `true` if not set.
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.0.standardize = standardize;
        self
    }

    /// Fit an unpenalized intercept.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl<F: Float> ParamGuard for ElasticNetParams<F> {
    type Checked = ElasticNetValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_lambda(self.0.lambda)?;
        check_alpha(self.0.alpha)?;
        check_solver(self.0.tolerance, self.0.max_iterations)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of an elastic net
/// regularization path
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetPathValidParams<F> {
    alpha: F,
    n_lambdas: usize,
    lambda_min_ratio: F,
    lambdas: Option<Array1<F>>,
    tolerance: F,
    max_iterations: usize,
    standardize: bool,
    fit_intercept: bool,
}

impl<F: Float> ElasticNetPathValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn n_lambdas(&self) -> usize {
        self.n_lambdas
    }

    pub fn lambda_min_ratio(&self) -> F {
        self.lambda_min_ratio
    }

    /// Explicit penalty strengths, in decreasing order, if any were given.
    pub fn lambdas(&self) -> Option<&Array1<F>> {
        self.lambdas.as_ref()
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn standardize(&self) -> bool {
        self.standardize
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// The same settings with the path pinned to `lambdas`.
    pub(crate) fn with_lambdas(&self, lambdas: Array1<F>) -> Self {
        ElasticNetPathValidParams {
            n_lambdas: lambdas.len(),
            lambdas: Some(lambdas),
            ..self.clone()
        }
    }
}

/// A hyper-parameter set during construction
///
/// Configures the regularization path of an elastic net model. Unless
/// explicit penalty strengths are given with
/// [`lambdas`](ElasticNetPathParams::lambdas), the path holds `n_lambdas`
/// values evenly spaced on a log scale from the smallest penalty strength
/// giving a null model down to that value times `lambda_min_ratio`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetPathParams<F>(ElasticNetPathValidParams<F>);

impl<F: Float> Default for ElasticNetPathParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an elastic net regularization path
impl<F: Float> ElasticNetPathParams<F> {
    /// Create default path hyper parameters
    pub fn new() -> ElasticNetPathParams<F> {
        Self(ElasticNetPathValidParams {
            alpha: F::one(),
            n_lambdas: 100,
            lambda_min_ratio: F::cast(1e-4),
            lambdas: None,
            tolerance: F::cast(1e-7),
            max_iterations: 100_000,
            standardize: true,
            fit_intercept: true,
        })
    }

    /// Set the mixing parameter between ridge (`0`) and lasso (`1`).
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the number of penalty strengths of the generated path.
    /// Defaults to `100` if not set.
    pub fn n_lambdas(mut self, n_lambdas: usize) -> Self {
        self.0.n_lambdas = n_lambdas;
        self
    }

    /// Set the ratio between the smallest and the largest penalty strength of
    /// the generated path.
    /// Defaults to `1e-4` if not set.
    pub fn lambda_min_ratio(mut self, lambda_min_ratio: F) -> Self {
        self.0.lambda_min_ratio = lambda_min_ratio;
        self
    }

    /// Use explicit penalty strengths instead of a generated path. They are
    /// sorted in decreasing order before fitting.
    pub fn lambdas(mut self, lambdas: Array1<F>) -> Self {
        let mut sorted = lambdas.to_vec();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        self.0.n_lambdas = sorted.len();
        self.0.lambdas = Some(Array1::from(sorted));
        self
    }

    /// Set the stopping criterion: the descent stops once a full cycle moves
    /// no coefficient by more than this value.
    /// Defaults to `1e-7` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the maximum number of coordinate descent cycles per penalty strength.
    /// Defaults to `100000` if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Scale the predictors to unit variance before fitting.
    /// Defaults to `true` if not set.
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.0.standardize = standardize;
        self
    }

    /// Fit an unpenalized intercept.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

fn check_path<F: Float>(params: &ElasticNetPathValidParams<F>) -> Result<()> {
    check_alpha(params.alpha)?;
    check_solver(params.tolerance, params.max_iterations)?;
    match &params.lambdas {
        Some(lambdas) => {
            if lambdas.is_empty() || lambdas.iter().any(|&l| check_lambda(l).is_err()) {
                return Err(EstimatorError::InvalidLambdas);
            }
        }
        None => {
            if params.n_lambdas == 0 {
                return Err(EstimatorError::InvalidPathLength(params.n_lambdas));
            }
            let ratio = params.lambda_min_ratio;
            if !(ratio > F::zero() && ratio < F::one()) {
                return Err(EstimatorError::InvalidLambdaRatio(
                    ratio.to_f32().unwrap_or(f32::NAN),
                ));
            }
        }
    }
    Ok(())
}

impl<F: Float> ParamGuard for ElasticNetPathParams<F> {
    type Checked = ElasticNetPathValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_path(&self.0)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the cross-validation of an
/// elastic net regularization path
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetCVValidParams<F> {
    path: ElasticNetPathValidParams<F>,
    n_folds: usize,
    seed: u64,
    parallel: bool,
}

impl<F: Float> ElasticNetCVValidParams<F> {
    /// The settings of the cross-validated path
    pub fn path(&self) -> &ElasticNetPathValidParams<F> {
        &self.path
    }

    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

/// A hyper-parameter set during construction
///
/// Configures the k-fold cross-validation of an elastic net regularization
/// path. The path settings are the ones of [`ElasticNetPathParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetCVParams<F>(ElasticNetCVValidParams<F>);

impl<F: Float> Default for ElasticNetCVParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a cross-validated elastic net model
impl<F: Float> ElasticNetCVParams<F> {
    /// Create default cross-validation hyper parameters
    pub fn new() -> ElasticNetCVParams<F> {
        Self(ElasticNetCVValidParams {
            path: ElasticNetPathParams::new().0,
            n_folds: 10,
            seed: 42,
            parallel: true,
        })
    }

    /// Set the number of folds.
    /// Defaults to `10` if not set.
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.0.n_folds = n_folds;
        self
    }

    /// Set the seed of the random fold assignment.
    /// Defaults to `42` if not set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = seed;
        self
    }

    /// Fit the folds concurrently on the rayon thread pool. Results do not
    /// depend on this setting.
    /// Defaults to `true` if not set.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.0.parallel = parallel;
        self
    }

    fn map_path(
        mut self,
        f: impl FnOnce(ElasticNetPathParams<F>) -> ElasticNetPathParams<F>,
    ) -> Self {
        self.0.path = f(ElasticNetPathParams(self.0.path)).0;
        self
    }

    /// See [`ElasticNetPathParams::alpha`].
    pub fn alpha(self, alpha: F) -> Self {
        self.map_path(|p| p.alpha(alpha))
    }

    /// See [`ElasticNetPathParams::n_lambdas`].
    pub fn n_lambdas(self, n_lambdas: usize) -> Self {
        self.map_path(|p| p.n_lambdas(n_lambdas))
    }

    /// See [`ElasticNetPathParams::lambda_min_ratio`].
    pub fn lambda_min_ratio(self, lambda_min_ratio: F) -> Self {
        self.map_path(|p| p.lambda_min_ratio(lambda_min_ratio))
    }

    /// See [`ElasticNetPathParams::lambdas`].
    pub fn lambdas(self, lambdas: Array1<F>) -> Self {
        self.map_path(|p| p.lambdas(lambdas))
    }

    /// See [`ElasticNetPathParams::tolerance`].
    pub fn tolerance(self, tolerance: F) -> Self {
        self.map_path(|p| p.tolerance(tolerance))
    }

    /// See [`ElasticNetPathParams::max_iterations`].
    pub fn max_iterations(self, max_iterations: usize) -> Self {
        self.map_path(|p| p.max_iterations(max_iterations))
    }

    /// See [`ElasticNetPathParams::standardize`].
    pub fn standardize(self, standardize: bool) -> Self {
        self.map_path(|p| p.standardize(standardize))
    }

    /// See [`ElasticNetPathParams::fit_intercept`].
    pub fn fit_intercept(self, fit_intercept: bool) -> Self {
        self.map_path(|p| p.fit_intercept(fit_intercept))
    }
}

impl<F: Float> ParamGuard for ElasticNetCVParams<F> {
    type Checked = ElasticNetCVValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters. The number of folds is checked against
    /// the number of samples when fitting.
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_path(&self.0.path)?;
        if self.0.n_folds < 2 {
            return Err(EstimatorError::InvalidFolds {
                n_folds: self.0.n_folds,
                n_samples: 0,
            });
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
