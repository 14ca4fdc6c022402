use ndarray::{array, Array1};

use crate::datasets::{DatasetBase, Standardizer};
use crate::helpers::helpers::compute_lambda_max;
use crate::helpers::test_helpers::*;
use crate::path::*;

#[test]
fn test_lambda_grid() {
    let grid = lambda_grid(2., 5, 1e-4);
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0], 2.);
    assert_eq!(grid[4], 2e-4);
    assert!(grid.iter().zip(grid.iter().skip(1)).all(|(a, b)| a > b));
    assert_array_all_close(grid.view(), array![2., 0.2, 0.02, 0.002, 0.0002].view(), 1e-12);
}

#[test]
fn test_lambda_grid_with_null_lambda_max() {
    let grid = lambda_grid(0., 4, 1e-4);
    assert_eq!(grid, Array1::<f64>::zeros(4));
}

#[test]
fn test_null_solution_at_lambda_max() {
    let (X, y) = generate_random_data(40, 6, 0.5, 21);
    let standardizer = Standardizer::fit(&X, &y, true, true);
    let dataset = DatasetBase::from((
        standardizer.transform_design(&X),
        standardizer.transform_targets(&y),
    ));

    for &alpha in &[1., 0.37, 0.05] {
        let lambda_max = compute_lambda_max(
            dataset.design_matrix().view(),
            dataset.targets().view(),
            alpha,
        );
        let lambdas = lambda_grid(lambda_max, 10, 1e-3);
        let solution = solve_path(&dataset, lambdas.view(), alpha, 100_000, 1e-10);

        assert!(solution.coefficients.row(0).iter().all(|&w| w == 0.));
        assert_eq!(solution.n_iterations[0], 0);
        // Right below lambda_max some coefficient is active
        assert!(solution.coefficients.row(1).iter().any(|&w| w != 0.));
    }
}

#[test]
fn test_warm_started_path_matches_cold_solves() {
    let (X, y) = generate_random_data(30, 8, 0.3, 4);
    let dataset = DatasetBase::from((X, y));
    let lambdas = array![0.5, 0.1, 0.02];

    let path = solve_path(&dataset, lambdas.view(), 0.8, 100_000, 1e-12);
    assert!(path.converged.iter().all(|&c| c));

    for (idx, &lambda) in lambdas.iter().enumerate() {
        let cold = solve_path(&dataset, array![lambda].view(), 0.8, 100_000, 1e-12);
        assert_array_all_close(
            path.coefficients.row(idx),
            cold.coefficients.row(0),
            1e-8,
        );
    }
}

#[test]
fn test_non_convergence_keeps_best_effort_coefficients() {
    let (X, y) = generate_random_data(20, 10, 0.1, 9);
    let dataset = DatasetBase::from((X, y));
    let lambdas = array![0.01, 0.001];

    let solution = solve_path(&dataset, lambdas.view(), 0.5, 2, 1e-14);
    assert_eq!(solution.converged, vec![false, false]);
    assert_eq!(solution.n_iterations, vec![2, 2]);
    assert!(solution.coefficients.iter().all(|w| w.is_finite()));
    assert!(solution.coefficients.row(1).iter().any(|&w| w != 0.));
}
