use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use crate::helpers::test_helpers::assert_array_all_close;
use crate::penalties::*;

macro_rules! penalty_tests {
    ($($penalty_name:ident: $payload:expr,)*) => {
        $(
            mod $penalty_name {
                use super::*;

                #[test]
                fn test_value() {
                    let a = array![3.4, 2.1, -2.3, -0.3, 4.5];
                    let payload = $payload;
                    let val = payload.penalty.value(a.view());
                    assert_abs_diff_eq!(val, payload.value, epsilon = 1e-10);
                }

                #[test]
                fn test_prox() {
                    let payload = $payload;
                    let penalty = payload.penalty;

                    assert_abs_diff_eq!(penalty.prox(0.3, 2.), payload.prox.0, epsilon = 1e-10);
                    assert_abs_diff_eq!(penalty.prox(12.4, 2.), payload.prox.1, epsilon = 1e-10);
                    assert_abs_diff_eq!(penalty.prox(-49.2, 2.), payload.prox.2, epsilon = 1e-10);
                }

                #[test]
                fn test_subdiff_dist() {
                    let w = array![-3.3, 0., 3.2];
                    let grad = array![0.4, 3.2, -3.4];

                    let payload = $payload;
                    let (subdiff_dist, max_dist) =
                        payload.penalty.subdiff_distance(w.view(), grad.view());

                    assert_array_all_close(subdiff_dist.view(), payload.subdiff_dist.0.view(), 1e-10);
                    assert_abs_diff_eq!(max_dist, payload.subdiff_dist.1, epsilon = 1e-10);
                }
            }
        )*
    }
}

struct Payload<T: Penalty<f64>> {
    penalty: T,
    value: f64,
    prox: (f64, f64, f64),
    subdiff_dist: (Array1<f64>, f64),
}

penalty_tests! {
    lasso: Payload {
        penalty: ElasticNetPenalty::new(2., 1.),
        value: 25.2,
        prox: (0., 8.4, -45.2),
        subdiff_dist: (array![1.6, 1.2, 1.4], 1.6),
    },
    ridge: Payload {
        penalty: ElasticNetPenalty::new(2., 0.),
        value: 41.6,
        prox: (0.06, 2.48, -9.84),
        subdiff_dist: (array![6.2, 3.2, 3.0], 6.2),
    },
    elastic_net: Payload {
        penalty: ElasticNetPenalty::new(2., 0.7),
        value: 30.12,
        prox: (0., 9.6 / 2.2, -46.4 / 2.2),
        subdiff_dist: (array![2.98, 1.8, 0.08], 2.98),
    },
}

#[test]
fn test_prox_is_coordinate_minimizer() {
    // For f(b) = (L / 2) * (b - z)^2 + pen(b), the proximal step at z with
    // step size 1 / L minimizes f, so f grows in both directions.
    let penalty = ElasticNetPenalty::new(0.4, 0.3);
    let lipschitz = 1.7;
    let z = 0.9;
    let objective = |b: f64| {
        0.5 * lipschitz * (b - z) * (b - z) + penalty.value(array![b].view())
    };

    let b_star = penalty.prox(z, 1. / lipschitz);
    for delta in [1e-3, 1e-2, 1e-1] {
        assert!(objective(b_star) <= objective(b_star + delta));
        assert!(objective(b_star) <= objective(b_star - delta));
    }
}
