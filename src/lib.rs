#![allow(non_snake_case)]
//! Elastic-net regularized least squares fitted by cyclic coordinate descent.
//!
//! The crate minimizes
//! ```ignore
//! 1 / (2 * n_samples) * ||y - b0 - Xw||^2_2
//!     + lambda * (alpha * ||w||_1 + (1 - alpha) / 2 * ||w||^2_2)
//! ```
//! along a decreasing path of `lambda` values, warm-starting each solve from
//! the previous one, and selects `lambda` by k-fold cross-validation.
//! `alpha = 0` is ridge, `alpha = 1` is the lasso.

use ndarray::ScalarOperand;

use num_traits::{AsPrimitive, FromPrimitive, NumAssignOps, NumCast, Signed};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
pub trait Float:
    'static
    + FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + num_traits::MulAdd<Output = Self>
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    /// Casts a primitive number into the float type. Only ever called on
    /// constants and sizes, which are always representable.
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod cd;
pub mod cv;
pub mod datafits;
pub mod datasets;
pub mod estimators;
pub mod helpers;
pub mod path;
pub mod penalties;

pub use datasets::{Dataset, DatasetBase, DatasetView};
pub use estimators::error::{EstimatorError, Result};
pub use estimators::estimators::{ElasticNet, ElasticNetCV, ElasticNetPath};
pub use estimators::hyperparams::{
    ElasticNetCVParams, ElasticNetCVValidParams, ElasticNetParams, ElasticNetPathParams,
    ElasticNetPathValidParams, ElasticNetValidParams,
};
pub use estimators::param_guard::ParamGuard;
pub use estimators::traits::{Fit, Predict};
