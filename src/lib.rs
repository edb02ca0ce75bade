//! The nested-interp crate provides piecewise linear interpolation
//! over irregular _1_-, _2_- and _3_-dimensional sample grids.
//!
//! A grid is stored as nested, sorted rows: every outer coordinate owns
//! a row of the next dimension down, and rows do not need to share their
//! coordinates. Queries locate the enclosing cell along each axis and blend
//! the corner values linearly, bilinearly or trilinearly.
//!
//! ```rust
//! # use nested_interp::*;
//! let grid = Grid1D::new(vec![(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
//! let interpolator = Interpolation::new().interpolate(grid);
//!
//! assert_eq!(interpolator.evaluate(1.5).unwrap(), 15.0);
//! assert!(matches!(
//!     interpolator.evaluate(2.5),
//!     Err(InterpolateError::OutOfRange(_))
//! ));
//! ```
//!
//! # Interpolators
//!  - [`Interp1D`] linear interpolation over a [`Grid1D`]
//!  - [`Interp2D`] bilinear interpolation over a [`Grid2D`]
//!  - [`Interp3D`] trilinear interpolation over a [`Grid3D`]
//!
//! [`Interpolation`] wraps any grid into the matching interpolator.

use std::fmt::Debug;

use num_traits::Float;
use thiserror::Error;

pub mod axis_extensions;
mod grid;
mod interp1d;
mod interp2d;
mod interp3d;
mod interpolation;
mod steps;

pub use grid::*;
pub use interp1d::Interp1D;
pub use interp2d::Interp2D;
pub use interp3d::Interp3D;
pub use interpolation::{Interpolation, Interpolator, IntoInterpolator};
pub use steps::Steps;

/// Numeric element of a grid: coordinates and values share this type.
pub trait GridNum: Float + Debug + Send + Sync {}

impl<T> GridNum for T where T: Float + Debug + Send + Sync {}

/// Errors produced while evaluating an interpolator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolateError {
    /// the query lies outside of the sampled domain along some axis
    #[error("{0}")]
    OutOfRange(String),
    /// sibling rows are not positionally aligned at the queried cell
    #[error("{0}")]
    InvalidGrid(String),
    /// the query itself is malformed (bad step, mismatched shapes)
    #[error("{0}")]
    InvalidArguments(String),
}

/// Errors produced by validated grid construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// an axis has no samples at all
    #[error("{0}")]
    NotEnoughData(String),
    /// an axis is not sorted ascending by coordinate
    #[error("{0}")]
    Monotonic(String),
}

/// Linear blend between `f0` at weight `0` and `f1` at weight `1`
#[inline]
pub(crate) fn lerp<T: GridNum>(f0: T, f1: T, weight: T) -> T {
    f0 * (T::one() - weight) + f1 * weight
}
