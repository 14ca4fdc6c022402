use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use crate::cv::*;
use crate::estimators::error::EstimatorError;

#[test]
fn test_fold_assignment_partitions_rows() {
    let folds = fold_assignment(23, 5, 42).unwrap();
    assert_eq!(folds.len(), 5);

    let mut sizes: Vec<usize> = folds.iter().map(|f| f.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![4, 4, 5, 5, 5]);

    let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
    assert!(folds
        .iter()
        .all(|f| f.iter().zip(f.iter().skip(1)).all(|(a, b)| a < b)));
    all.sort_unstable();
    assert_eq!(all, (0..23).collect::<Vec<_>>());
}

#[test]
fn test_fold_assignment_is_seeded() {
    assert_eq!(fold_assignment(50, 10, 7), fold_assignment(50, 10, 7));
    assert_ne!(
        fold_assignment(50, 10, 7).unwrap(),
        fold_assignment(50, 10, 8).unwrap()
    );
}

#[test]
fn test_fold_assignment_invalid_folds() {
    assert_eq!(
        fold_assignment(5, 6, 0),
        Err(EstimatorError::InvalidFolds {
            n_folds: 6,
            n_samples: 5
        })
    );
    assert!(fold_assignment(5, 1, 0).is_err());
    // Leave-one-out
    let folds = fold_assignment(5, 5, 0).unwrap();
    assert!(folds.iter().all(|f| f.len() == 1));
}

#[test]
fn test_complement() {
    assert_eq!(complement(&[1, 3, 4], 6), vec![0, 2, 5]);
    assert_eq!(complement(&[], 3), vec![0, 1, 2]);
    assert_eq!(complement(&[0, 1, 2], 3), Vec::<usize>::new());
}

#[test]
fn test_fold_errors_keep_fold_order() {
    let fit_fold = |fold: usize| Ok(Array1::from_elem(3, fold as f64));
    let sequential = fold_errors(8, 3, false, fit_fold).unwrap();
    let parallel = fold_errors(8, 3, true, fit_fold).unwrap();
    assert_eq!(sequential, parallel);
    for (fold, row) in sequential.rows().into_iter().enumerate() {
        assert!(row.iter().all(|&e| e == fold as f64));
    }
}

#[test]
fn test_fold_errors_propagate_failure() {
    let fit_fold = |fold: usize| match fold {
        2 => Err(EstimatorError::NoSamples),
        _ => Ok(Array1::<f64>::zeros(2)),
    };
    assert_eq!(
        fold_errors(4, 2, true, fit_fold),
        Err(EstimatorError::NoSamples)
    );
}

#[test]
fn test_summarize() {
    // Columns: lambdas in decreasing order
    let fold_mse = array![[4., 2., 1.2, 1.5], [6., 2.4, 1.0, 1.3], [5., 2.2, 1.4, 1.1]];
    let summary = summarize(fold_mse.view()).unwrap();

    assert_abs_diff_eq!(summary.mean, array![5., 2.2, 1.2, 1.3], epsilon = 1e-12);
    // Sample standard deviations are 1, 0.2, 0.2, 0.2
    let se = array![1., 0.2, 0.2, 0.2] / 3f64.sqrt();
    assert_abs_diff_eq!(summary.std_error, se, epsilon = 1e-12);
    assert_eq!(summary.index_min, 2);
    // 2.2 is above 1.2 + 0.115
    assert_eq!(summary.index_1se, 2);
}

#[test]
fn test_summarize_one_standard_error_rule_picks_larger_lambda() {
    let fold_mse = array![[1.0, 0.5, 0.25], [1.5, 1.0, 1.25]];
    let summary = summarize(fold_mse.view()).unwrap();
    // Means 1.25, 0.75, 0.75: ties go to the larger lambda
    assert_eq!(summary.index_min, 1);
    // se at the minimum is 0.25, so 1.25 > 1.0 stays excluded
    assert_eq!(summary.index_1se, 1);

    let fold_mse = array![[0.75, 0.5, 0.25], [1.0, 1.0, 1.0]];
    let summary = summarize(fold_mse.view()).unwrap();
    // Means 0.875, 0.75, 0.625, se at the minimum 0.375
    assert_eq!(summary.index_min, 2);
    assert_eq!(summary.index_1se, 0);
}

#[test]
fn test_summarize_undefined_error() {
    let fold_mse = array![[1.0, f64::NAN], [1.0, 2.0]];
    assert_eq!(
        summarize(fold_mse.view()),
        Err(EstimatorError::UndefinedCrossValidationError)
    );
}
