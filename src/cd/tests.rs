use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use crate::cd::*;
use crate::datafits::Quadratic;
use crate::datasets::DatasetBase;
use crate::helpers::helpers::compute_lambda_max;
use crate::helpers::prox::soft_thresholding;
use crate::helpers::test_helpers::*;
use crate::penalties::ElasticNetPenalty;

#[test]
fn test_single_feature_closed_form() {
    let X = array![[1.], [2.], [-1.], [0.5]];
    let y = array![2., 3., -1., 0.];
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);

    let (lambda, alpha) = (0.3, 0.6);
    let penalty = ElasticNetPenalty::new(lambda, alpha);

    let mut w = Array1::zeros(1);
    let mut Xw = Array1::zeros(4);
    let outcome = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 100, 1e-12);

    // X^T y / n = 9 / 4 and ||X||^2 / n = 6.25 / 4
    let expected = soft_thresholding(2.25, lambda * alpha) / (1.5625 + lambda * (1. - alpha));
    assert_abs_diff_eq!(w[0], expected, epsilon = 1e-12);
    assert!(outcome.converged);
    assert_eq!(outcome.n_iterations, 2);
}

#[test]
fn test_kkt_conditions_at_convergence() {
    let (X, y) = generate_random_data(30, 10, 0.5, 5);
    let lambda_max = compute_lambda_max(X.view(), y.view(), 0.5);
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);
    let penalty = ElasticNetPenalty::new(0.1 * lambda_max, 0.5);

    let mut w = Array1::zeros(10);
    let mut Xw = Array1::zeros(30);
    let outcome = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 10_000, 1e-12);
    assert!(outcome.converged);

    let (_, kkt_max) = kkt_violation(&dataset, w.view(), Xw.view(), &datafit, &penalty);
    assert!(kkt_max < 1e-8, "kkt violation {}", kkt_max);

    // The model fit is tracked along the updates
    assert_array_all_close(Xw.view(), dataset.design_matrix().dot(&w).view(), 1e-10);
}

#[test]
fn test_warm_start_from_solution() {
    let (X, y) = generate_random_data(30, 5, 0.5, 8);
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);
    let penalty = ElasticNetPenalty::new(0.05, 1.);

    let mut w = Array1::zeros(5);
    let mut Xw = Array1::zeros(30);
    let cold = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 10_000, 1e-10);
    let warm = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 10_000, 1e-10);

    assert!(cold.converged && warm.converged);
    assert_eq!(warm.n_iterations, 1);
}

#[test]
fn test_iteration_cap_reports_non_convergence() {
    let (X, y) = generate_random_data(20, 8, 0.1, 2);
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);
    let penalty = ElasticNetPenalty::new(1e-4, 0.5);

    let mut w = Array1::zeros(8);
    let mut Xw = Array1::zeros(20);
    let outcome = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 1, 1e-12);

    assert!(!outcome.converged);
    assert_eq!(outcome.n_iterations, 1);
    assert!(outcome.max_change > 1e-12);
    // Best-effort coefficients are still returned
    assert!(w.iter().any(|&wj| wj != 0.));
}

#[test]
fn test_null_column_is_skipped() {
    let X = array![[0., 1.], [0., 2.], [0., 3.]];
    let y = array![1., 2., 3.];
    let dataset = DatasetBase::from((X, y));

    let mut datafit = Quadratic::new();
    datafit.initialize(&dataset);
    let penalty = ElasticNetPenalty::new(0., 0.);

    let mut w = Array1::zeros(2);
    let mut Xw = Array1::zeros(3);
    let outcome = coordinate_descent(&dataset, &datafit, &penalty, &mut w, &mut Xw, 100, 1e-12);

    assert!(outcome.converged);
    assert_eq!(w[0], 0.);
    assert_abs_diff_eq!(w[1], 1., epsilon = 1e-12);
}
