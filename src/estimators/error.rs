use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
///
/// Every variant reports invalid input. They are raised before any descent
/// runs and are never retried: the computation is deterministic, so a retry
/// would fail the same way. A descent hitting its iteration cap is not an
/// error, see [`ElasticNet::converged`](crate::ElasticNet::converged).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid lambda {0}, must be non-negative and finite")]
    InvalidRegularization(f32),
    #[error("invalid alpha {0}, must lie in [0, 1]")]
    InvalidMixing(f32),
    #[error("invalid tolerance {0}, must be positive and finite")]
    InvalidTolerance(f32),
    #[error("invalid maximum number of iterations {0}")]
    InvalidMaxIterations(usize),
    #[error("invalid number of lambdas {0}")]
    InvalidPathLength(usize),
    #[error("invalid lambda min ratio {0}, must lie in (0, 1)")]
    InvalidLambdaRatio(f32),
    #[error("explicit lambdas must be non-empty, non-negative and finite")]
    InvalidLambdas,
    #[error("invalid number of folds {n_folds} for {n_samples} samples")]
    InvalidFolds { n_folds: usize, n_samples: usize },
    #[error("invalid split ratio {0}, must lie in (0, 1) and leave both parts non-empty")]
    InvalidSplitRatio(f32),
    #[error("design matrix has {n_samples} rows but targets have {n_targets} entries")]
    DimensionMismatch { n_samples: usize, n_targets: usize },
    #[error("expected {expected} features, got {found}")]
    FeatureMismatch { expected: usize, found: usize },
    #[error("dataset has no samples")]
    NoSamples,
    #[error("design matrix has no features")]
    NoFeatures,
    #[error("input contains non-finite values")]
    NonFiniteInput,
    #[error("cross-validation error is undefined for some lambda")]
    UndefinedCrossValidationError,
}
