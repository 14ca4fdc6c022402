use approx::assert_abs_diff_eq;
use ndarray::array;

use crate::datafits::*;
use crate::datasets::DatasetBase;
use crate::helpers::test_helpers::*;

#[test]
fn test_initialization() {
    let x = array![[3.4, 2.1, 2.3], [3.4, -1.2, 0.2]];
    let y = array![-3.4, 2.1];
    let dataset = DatasetBase::from((x, y));

    let mut df = Quadratic::new();
    df.initialize(&dataset);

    assert_array_all_close(df.lipschitz(), array![11.56, 2.925, 2.665].view(), 1e-10);
    // At w = 0 the gradient is -X^T y / n_samples
    let grad = df.full_grad(&dataset, array![0., 0.].view());
    assert_array_all_close(grad.view(), array![2.21, 4.83, 3.7].view(), 1e-10);
}

#[test]
fn test_value() {
    let x = array![[3.4, 2.1, 2.3], [3.4, -1.2, 0.2]];
    let y = array![-3.4, 2.1];
    let w = array![1., 0., -1.];
    let xw = x.dot(&w);
    let dataset = DatasetBase::from((x, y));

    let df = Quadratic::new();
    assert_abs_diff_eq!(df.value(&dataset, xw.view()), 5.365, epsilon = 1e-10);
}

#[test]
fn test_gradient() {
    let x = array![[3.4, 2.1, 2.3], [3.4, -1.2, 0.2]];
    let y = array![-3.4, 2.1];
    let w = array![1., 0., -1.];
    let xw = x.dot(&w);
    let dataset = DatasetBase::from((x, y));

    let mut df = Quadratic::new();
    df.initialize(&dataset);
    assert_abs_diff_eq!(df.gradient_j(&dataset, xw.view(), 1), 4.065, epsilon = 1e-10);
}

#[test]
fn test_full_grad_matches_residual_correlation() {
    let (x, y) = generate_random_data(15, 6, 0.3, 11);
    let w = array![0.5, -1., 0., 0., 2., 0.1];
    let xw = x.dot(&w);
    let expected = x.t().dot(&(&y - &xw)) / -15.;
    let dataset = DatasetBase::from((x, y));

    let mut df = Quadratic::new();
    df.initialize(&dataset);
    let grad = df.full_grad(&dataset, xw.view());

    assert_array_all_close(grad.view(), expected.view(), 1e-10);
}
