use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix1, Ix2, Zip};

use crate::Float;

/// Centering and scaling of a design matrix and its response.
///
/// When an intercept is fitted, every column of the design matrix and the
/// response are centered on their means. When standardization is requested,
/// every column is further divided by its population standard deviation
/// (or by its root mean square when no intercept is fitted). Coefficients
/// estimated on the transformed problem are mapped back to the original
/// predictor scale by [`Standardizer::unscale_coefficients`].
///
/// A column with no spread cannot be scaled. Such a column keeps a scale of
/// one and is replaced by zeros in the transformed design matrix, so that its
/// coefficient stays null.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer<F> {
    x_center: Array1<F>,
    x_scale: Array1<F>,
    degenerate: Vec<bool>,
    y_center: F,
    fit_intercept: bool,
}

impl<F: Float> Standardizer<F> {
    /// Computes the centers and scales of a dataset.
    pub fn fit<D: Data<Elem = F>, T: Data<Elem = F>>(
        X: &ArrayBase<D, Ix2>,
        y: &ArrayBase<T, Ix1>,
        fit_intercept: bool,
        standardize: bool,
    ) -> Self {
        let n_samples = F::cast(X.nrows());
        let n_features = X.ncols();

        let (x_center, y_center) = if fit_intercept {
            (
                X.sum_axis(Axis(0)) / n_samples,
                y.sum() / n_samples,
            )
        } else {
            (Array1::zeros(n_features), F::zero())
        };

        let mut x_scale = Array1::<F>::ones(n_features);
        let mut degenerate = vec![false; n_features];

        for (j, Xj) in X.columns().into_iter().enumerate() {
            let center = x_center[j];
            let spread = (Xj.fold(F::zero(), |acc, &x| acc + (x - center) * (x - center))
                / n_samples)
                .sqrt();
            let magnitude = Xj.fold(F::zero(), |acc, &x| acc.max(x.abs()));
            if spread <= F::cast(16.) * F::epsilon() * magnitude {
                log::debug!(
                    "column {} has no spread and is left out of the fit (scale set to 1)",
                    j
                );
                degenerate[j] = true;
            } else if standardize {
                x_scale[j] = spread;
            }
        }

        Standardizer {
            x_center,
            x_scale,
            degenerate,
            y_center,
            fit_intercept,
        }
    }

    /// Centers and scales a design matrix.
    pub fn transform_design<D: Data<Elem = F>>(&self, X: &ArrayBase<D, Ix2>) -> Array2<F> {
        let mut X_std = X.to_owned();
        for (j, mut Xj) in X_std.columns_mut().into_iter().enumerate() {
            if self.degenerate[j] {
                Xj.fill(F::zero());
            } else {
                let center = self.x_center[j];
                let scale = self.x_scale[j];
                Xj.mapv_inplace(|x| (x - center) / scale);
            }
        }
        X_std
    }

    /// Centers a response vector.
    pub fn transform_targets<T: Data<Elem = F>>(&self, y: &ArrayBase<T, Ix1>) -> Array1<F> {
        y.mapv(|yi| yi - self.y_center)
    }

    /// Maps coefficients fitted on the transformed problem back to the scale
    /// of the original predictors and recovers the intercept so that the fit
    /// passes through the means of the data.
    pub fn unscale_coefficients(&self, w: ArrayView1<F>) -> (Array1<F>, F) {
        let mut coefficients = Array1::<F>::zeros(w.len());
        Zip::from(&mut coefficients)
            .and(&w)
            .and(&self.x_scale)
            .for_each(|c, &wj, &scale| *c = wj / scale);

        let intercept = match self.fit_intercept {
            true => self.y_center - self.x_center.dot(&coefficients),
            false => F::zero(),
        };
        (coefficients, intercept)
    }

    pub fn x_center(&self) -> ArrayView1<'_, F> {
        self.x_center.view()
    }

    pub fn x_scale(&self) -> ArrayView1<'_, F> {
        self.x_scale.view()
    }

    pub fn y_center(&self) -> F {
        self.y_center
    }

    /// Columns without spread, which are excluded from the fit.
    pub fn degenerate(&self) -> &[bool] {
        &self.degenerate
    }
}
