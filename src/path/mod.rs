use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix1, Ix2};

use crate::cd::coordinate_descent;
use crate::datafits::Quadratic;
use crate::datasets::DatasetBase;
use crate::helpers::helpers::{compute_lambda_max, geomspace, ALPHA_FLOOR};
use crate::penalties::ElasticNetPenalty;
use crate::Float;

#[cfg(test)]
mod tests;

/// Builds the default regularization path: `n_lambdas` values evenly spaced
/// on a log scale from `lambda_max` down to `lambda_max * lambda_min_ratio`.
///
/// A null `lambda_max` (constant response) yields a path of zeros.
pub fn lambda_grid<F: Float>(lambda_max: F, n_lambdas: usize, lambda_min_ratio: F) -> Array1<F> {
    if lambda_max == F::zero() {
        return Array1::zeros(n_lambdas);
    }
    geomspace(lambda_max, lambda_max * lambda_min_ratio, n_lambdas)
}

/// Coefficients of a regularization path, on the scale of the data the path
/// was solved on.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSolution<F> {
    /// One row of coefficients per penalty strength
    pub coefficients: Array2<F>,
    /// Number of coordinate descent cycles run for each penalty strength
    pub n_iterations: Vec<usize>,
    /// Convergence flag for each penalty strength
    pub converged: Vec<bool>,
}

/// Solves the elastic net problem for every penalty strength of `lambdas`,
/// in the given order, warm-starting each solve from the previous solution.
///
/// The dataset is taken as is: centering and scaling happen upstream. When
/// `alpha` is at least [`ALPHA_FLOOR`] and a penalty strength is at least
/// the `lambda_max` of the dataset, the solution is null by the optimality
/// conditions and no descent is run.
///
/// Non-converged solves are logged as warnings and their best-effort
/// coefficients are kept.
pub fn solve_path<F, D, T>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    lambdas: ArrayView1<F>,
    alpha: F,
    max_iterations: usize,
    tolerance: F,
) -> PathSolution<F>
where
    F: Float,
    D: Data<Elem = F>,
    T: Data<Elem = F>,
{
    let X = dataset.design_matrix();
    let y = dataset.targets();
    let n_samples = X.nrows();
    let n_features = X.ncols();
    let n_lambdas = lambdas.len();

    let mut datafit = Quadratic::new();
    datafit.initialize(dataset);

    let lambda_max = compute_lambda_max(X.view(), y.view(), alpha);
    let has_null_region = alpha >= F::cast(ALPHA_FLOOR);

    let mut coefficients = Array2::<F>::zeros((n_lambdas, n_features));
    let mut n_iterations = Vec::with_capacity(n_lambdas);
    let mut converged = Vec::with_capacity(n_lambdas);

    let mut w = Array1::<F>::zeros(n_features);
    let mut Xw = Array1::<F>::zeros(n_samples);

    for (idx, &lambda) in lambdas.iter().enumerate() {
        if has_null_region && lambda >= lambda_max {
            w.fill(F::zero());
            Xw.fill(F::zero());
            n_iterations.push(0);
            converged.push(true);
            log::debug!("lambda {} :: null solution", lambda);
            continue;
        }

        let penalty = ElasticNetPenalty::new(lambda, alpha);
        let outcome = coordinate_descent(
            dataset,
            &datafit,
            &penalty,
            &mut w,
            &mut Xw,
            max_iterations,
            tolerance,
        );

        if !outcome.converged {
            log::warn!(
                "coordinate descent did not converge for lambda {} after {} iterations \
                 (last coefficient change {}, tolerance {})",
                lambda,
                outcome.n_iterations,
                outcome.max_change,
                tolerance
            );
        }
        log::debug!(
            "lambda {} :: iterations {} :: non-zero coefficients {}",
            lambda,
            outcome.n_iterations,
            w.iter().filter(|&&wj| wj != F::zero()).count()
        );

        coefficients.row_mut(idx).assign(&w);
        n_iterations.push(outcome.n_iterations);
        converged.push(outcome.converged);
    }

    PathSolution {
        coefficients,
        n_iterations,
        converged,
    }
}
