use super::{Dataset, DatasetBase, DatasetView, DesignMatrix, Targets};
use crate::estimators::error::{EstimatorError, Result};
use crate::Float;
use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// This implementation block provides a method for the creation of datasets
/// from dense matrices.
impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>> From<(ArrayBase<D, Ix2>, ArrayBase<T, Ix1>)>
    for DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>
{
    fn from(data: (ArrayBase<D, Ix2>, ArrayBase<T, Ix1>)) -> Self {
        DatasetBase {
            design_matrix: data.0,
            targets: data.1,
        }
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<DM: DesignMatrix, T: Targets> DatasetBase<DM, T> {
    /// This method instantiates a new dataset from a design matrix and targets.
    pub fn new(design_matrix: DM, targets: T) -> DatasetBase<DM, T> {
        DatasetBase {
            design_matrix,
            targets,
        }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> &DM {
        &self.design_matrix
    }

    pub fn n_samples(&self) -> usize {
        self.design_matrix.n_samples()
    }

    pub fn n_features(&self) -> usize {
        self.design_matrix.n_features()
    }
}

impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>
{
    /// Borrows the dataset.
    pub fn view(&self) -> DatasetView<'_, F> {
        DatasetBase::new(self.design_matrix.view(), self.targets.view())
    }

    /// Checks that the dataset can be fitted: at least one sample and one
    /// feature, as many targets as rows and only finite values.
    pub fn validate(&self) -> Result<()> {
        let n_samples = self.design_matrix.nrows();
        let n_targets = self.targets.len();
        if n_samples != n_targets {
            return Err(EstimatorError::DimensionMismatch {
                n_samples,
                n_targets,
            });
        }
        if n_samples == 0 {
            return Err(EstimatorError::NoSamples);
        }
        if self.design_matrix.ncols() == 0 {
            return Err(EstimatorError::NoFeatures);
        }
        let finite = self.design_matrix.iter().all(|x| x.is_finite())
            && self.targets.iter().all(|y| y.is_finite());
        if !finite {
            return Err(EstimatorError::NonFiniteInput);
        }
        Ok(())
    }

    /// Copies the rows at `indices`, in the given order, into a new dataset.
    pub fn select(&self, indices: &[usize]) -> Dataset<F> {
        DatasetBase::new(
            self.design_matrix.select(Axis(0), indices),
            self.targets.select(Axis(0), indices),
        )
    }

    /// Randomly splits the rows into a training and a test dataset.
    ///
    /// `ratio` is the fraction of rows kept for training. The permutation is
    /// drawn from a generator seeded with `seed`, so identical calls yield
    /// identical splits. Within each part the rows keep their original order.
    pub fn split_with_ratio(&self, ratio: f32, seed: u64) -> Result<(Dataset<F>, Dataset<F>)> {
        let n_samples = self.n_samples();
        if !(ratio > 0. && ratio < 1.) {
            return Err(EstimatorError::InvalidSplitRatio(ratio));
        }
        let n_train = (n_samples as f32 * ratio).round() as usize;
        if n_train == 0 || n_train == n_samples {
            return Err(EstimatorError::InvalidSplitRatio(ratio));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (train, test) = indices.split_at_mut(n_train);
        train.sort_unstable();
        test.sort_unstable();

        Ok((self.select(train), self.select(test)))
    }
}
