
/// This module implements the proximal operator of the penalties.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator `S(x, t) = sign(x) * max(|x| - t, 0)` is
    /// the proximal operator of the L1 norm, used by
    /// [`ElasticNetPenalty`](crate::penalties::ElasticNetPenalty).
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }
}

/// This module contains helper functions to compute the regularization path
/// and to score fitted models.
pub mod helpers {
    use crate::Float;
    use ndarray::{Array1, ArrayBase, ArrayView1, ArrayView2, Data, Ix1};

    /// Smallest mixing parameter used to compute the largest penalty strength.
    /// Ridge has no finite penalty strength zeroing every coefficient, so the
    /// path of a ridge model starts where an elastic net with this mixing
    /// parameter would be null.
    pub const ALPHA_FLOOR: f64 = 1e-3;

    /// This function computes the smallest penalty strength for which every
    /// penalized coefficient is null:
    /// ```ignore
    /// lambda_max = max_j |X_j^T y| / (n_samples * max(alpha, ALPHA_FLOOR))
    /// ```
    /// The design matrix and the response are expected to be centered (and
    /// scaled) the way the solver sees them.
    pub fn compute_lambda_max<F: 'static + Float>(X: ArrayView2<F>, y: ArrayView1<F>, alpha: F) -> F {
        let n_samples = F::cast(X.nrows());
        let Xty = X.t().dot(&y);
        let Xty_max = Xty.fold(F::zero(), |max_val, &x| x.abs().max(max_val));
        Xty_max / n_samples / alpha.max(F::cast(ALPHA_FLOOR))
    }

    /// Returns `n_points` values evenly spaced on a log scale from `start`
    /// down (or up) to `end`, both included.
    pub fn geomspace<F: Float>(start: F, end: F, n_points: usize) -> Array1<F> {
        match n_points {
            0 => Array1::zeros(0),
            1 => Array1::from_elem(1, start),
            _ => {
                let ratio = end / start;
                let last = F::cast(n_points - 1);
                let mut grid = Array1::from_iter(
                    (0..n_points).map(|k| start * ratio.powf(F::cast(k) / last)),
                );
                // Pins both ends against round-off in powf
                grid[n_points - 1] = end;
                grid
            }
        }
    }

    /// Mean of the squared differences between targets and predictions.
    pub fn mean_squared_error<F, S1, S2>(y: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> F
    where
        F: Float,
        S1: Data<Elem = F>,
        S2: Data<Elem = F>,
    {
        let r = y - y_pred;
        r.dot(&r) / F::cast(y.len())
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    /// Draws `capacity` independent standard normal values.
    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();
        (0..capacity).map(|_| normal.sample(&mut r)).collect()
    }

    /// Draws a design matrix with independent standard normal entries.
    pub fn random_design(n_samples: usize, n_features: usize, seed: u64) -> Array2<f64> {
        let data_x = fill_random_vector(n_samples * n_features, seed);
        Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap()
    }

    /// Draws a random design matrix, random true coefficients and a response
    /// `y = X w + noise * e` with standard normal `e`.
    pub fn generate_random_data(
        n_samples: usize,
        n_features: usize,
        noise: f64,
        seed: u64,
    ) -> (Array2<f64>, Array1<f64>) {
        let X = random_design(n_samples, n_features, seed);
        let true_w = Array1::from(fill_random_vector(n_features, seed + 1));
        let e = Array1::from(fill_random_vector(n_samples, seed + 2));
        let y = X.dot(&true_w) + e * noise;
        (X, y)
    }

    /// The sparse signal `y = 2 X[:, 0] - X[:, 1] + 0.5 * e` on three
    /// independent standard normal predictors.
    pub fn generate_sparse_signal(n_samples: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
        let X = random_design(n_samples, 3, seed);
        let e = Array1::from(fill_random_vector(n_samples, seed + 1));
        let y = &X.column(0) * 2. - &X.column(1) + e * 0.5;
        (X, y)
    }
}
