use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_stats::QuantileExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::estimators::error::{EstimatorError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// Randomly partitions the row indices `0..n_samples` into `n_folds`
/// disjoint folds.
///
/// The indices are shuffled by a generator seeded with `seed`, then the
/// `i`-th shuffled index goes to fold `i % n_folds`. Fold sizes therefore
/// differ by at most one. Each fold is sorted.
pub fn fold_assignment(n_samples: usize, n_folds: usize, seed: u64) -> Result<Vec<Vec<usize>>> {
    if n_folds < 2 || n_folds > n_samples {
        return Err(EstimatorError::InvalidFolds {
            n_folds,
            n_samples,
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut folds = vec![Vec::with_capacity(n_samples / n_folds + 1); n_folds];
    for (position, &idx) in indices.iter().enumerate() {
        folds[position % n_folds].push(idx);
    }
    folds.iter_mut().for_each(|fold| fold.sort_unstable());
    Ok(folds)
}

/// Sorted indices of `0..n_samples` that are not in the sorted `fold`.
pub fn complement(fold: &[usize], n_samples: usize) -> Vec<usize> {
    let mut held_out = fold.iter().peekable();
    (0..n_samples)
        .filter(|idx| match held_out.peek() {
            Some(&&next) if next == *idx => {
                held_out.next();
                false
            }
            _ => true,
        })
        .collect()
}

/// Evaluates `fit_fold` on every fold and stacks the returned held-out errors
/// into a `n_folds x n_lambdas` matrix, one row per fold.
///
/// With `parallel` set the folds run on the rayon global pool. Rows are
/// collected in fold order either way, so the result does not depend on
/// `parallel`. The first failing fold aborts the evaluation.
pub fn fold_errors<F, M>(
    n_folds: usize,
    n_lambdas: usize,
    parallel: bool,
    fit_fold: M,
) -> Result<Array2<F>>
where
    F: Float,
    M: Fn(usize) -> Result<Array1<F>> + Sync,
{
    let rows: Vec<Array1<F>> = match parallel {
        true => (0..n_folds)
            .into_par_iter()
            .map(&fit_fold)
            .collect::<Result<_>>()?,
        false => (0..n_folds).map(&fit_fold).collect::<Result<_>>()?,
    };

    let mut errors = Array2::<F>::zeros((n_folds, n_lambdas));
    for (mut row, fold_row) in errors.rows_mut().into_iter().zip(rows.iter()) {
        row.assign(fold_row);
    }
    Ok(errors)
}

/// Aggregated cross-validation errors along a path of decreasing penalty
/// strengths.
#[derive(Debug, Clone, PartialEq)]
pub struct CVSummary<F> {
    /// Mean held-out error per penalty strength
    pub mean: Array1<F>,
    /// Standard error of the mean per penalty strength
    pub std_error: Array1<F>,
    /// Index of the smallest mean error, the largest penalty strength on ties
    pub index_min: usize,
    /// Index of the largest penalty strength whose mean error is within one
    /// standard error of the minimum
    pub index_1se: usize,
}

/// Reduces a `n_folds x n_lambdas` matrix of held-out errors, whose columns
/// follow penalty strengths in decreasing order.
///
/// The standard error is the sample standard deviation across folds (with a
/// `n_folds - 1` denominator) divided by `sqrt(n_folds)`.
pub fn summarize<F: Float>(fold_mse: ArrayView2<F>) -> Result<CVSummary<F>> {
    let n_folds = fold_mse.nrows();
    if n_folds < 2 {
        return Err(EstimatorError::InvalidFolds {
            n_folds,
            n_samples: n_folds,
        });
    }

    let mean = fold_mse
        .mean_axis(Axis(0))
        .ok_or(EstimatorError::UndefinedCrossValidationError)?;
    let std_error = fold_mse.std_axis(Axis(0), F::one()) / F::cast(n_folds).sqrt();

    let index_min = mean
        .argmin()
        .map_err(|_| EstimatorError::UndefinedCrossValidationError)?;
    let threshold = mean[index_min] + std_error[index_min];
    let index_1se = mean
        .iter()
        .position(|&m| m <= threshold)
        .unwrap_or(index_min);

    Ok(CVSummary {
        mean,
        std_error,
        index_min,
        index_1se,
    })
}
