//! The interpolation factory and the traits shared by all interpolators

use crate::{
    BuilderError, Grid1D, Grid2D, Grid3D, GridNum, Interp1D, Interp2D, Interp3D,
    InterpolateError, Point2, Point3,
};

/// Common interface of [`Interp1D`], [`Interp2D`] and [`Interp3D`]
///
/// Interpolators never mutate their grid, so a shared reference can be
/// queried from several threads at once.
pub trait Interpolator {
    type Elem: GridNum;
    /// `T`, `(T, T)` or `(T, T, T)`
    type Point: Copy;
    /// grid type produced by [`evaluate_range`](Interpolator::evaluate_range)
    type Grid;

    fn evaluate(&self, point: Self::Point) -> Result<Self::Elem, InterpolateError>;

    fn evaluate_range(
        &self,
        from: Self::Point,
        to: Self::Point,
        step: Self::Elem,
    ) -> Result<Self::Grid, InterpolateError>;
}

/// Grid data that can be wrapped into an [`Interpolator`]
pub trait IntoInterpolator: Sized {
    type Interpolator: Interpolator;

    fn into_interpolator(self) -> Self::Interpolator;

    /// see [`Grid1D::validate`]
    fn validate(&self) -> Result<(), BuilderError>;
}

/// Stateless factory choosing the interpolator by the grid dimension.
///
/// ```rust
/// # use nested_interp::*;
/// let grid: Grid2D<f64> = [
///     (0.0, 0.0, 0.0), (0.0, 1.0, 1.0),
///     (1.0, 0.0, 2.0), (1.0, 1.0, 4.0),
/// ].into_iter().collect();
///
/// let interpolator = Interpolation::new().interpolate(grid);
/// assert_eq!(interpolator.evaluate((0.5, 0.5)).unwrap(), 1.75);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpolation;

impl Interpolation {
    pub fn new() -> Self {
        Interpolation
    }

    /// Take ownership of the grid and wrap it.
    ///
    /// Nothing is validated here. Malformed grids surface as
    /// [`InterpolateError::OutOfRange`] or [`InterpolateError::InvalidGrid`]
    /// when queried.
    pub fn interpolate<G: IntoInterpolator>(&self, data: G) -> G::Interpolator {
        data.into_interpolator()
    }

    /// Like [`interpolate`](Interpolation::interpolate) but checks that every
    /// axis is non-empty and sorted first.
    pub fn interpolate_checked<G: IntoInterpolator>(
        &self,
        data: G,
    ) -> Result<G::Interpolator, BuilderError> {
        data.validate()?;
        Ok(data.into_interpolator())
    }
}

impl<T: GridNum> IntoInterpolator for Grid1D<T> {
    type Interpolator = Interp1D<T>;

    fn into_interpolator(self) -> Interp1D<T> {
        Interp1D::new(self)
    }

    fn validate(&self) -> Result<(), BuilderError> {
        Grid1D::validate(self)
    }
}

impl<T: GridNum> IntoInterpolator for Grid2D<T> {
    type Interpolator = Interp2D<T>;

    fn into_interpolator(self) -> Interp2D<T> {
        Interp2D::new(self)
    }

    fn validate(&self) -> Result<(), BuilderError> {
        Grid2D::validate(self)
    }
}

impl<T: GridNum> IntoInterpolator for Grid3D<T> {
    type Interpolator = Interp3D<T>;

    fn into_interpolator(self) -> Interp3D<T> {
        Interp3D::new(self)
    }

    fn validate(&self) -> Result<(), BuilderError> {
        Grid3D::validate(self)
    }
}

impl<T: GridNum> Interpolator for Interp1D<T> {
    type Elem = T;
    type Point = T;
    type Grid = Grid1D<T>;

    fn evaluate(&self, x: T) -> Result<T, InterpolateError> {
        Interp1D::evaluate(self, x)
    }

    fn evaluate_range(&self, from: T, to: T, step: T) -> Result<Grid1D<T>, InterpolateError> {
        Interp1D::evaluate_range(self, from, to, step)
    }
}

impl<T: GridNum> Interpolator for Interp2D<T> {
    type Elem = T;
    type Point = Point2<T>;
    type Grid = Grid2D<T>;

    fn evaluate(&self, point: Point2<T>) -> Result<T, InterpolateError> {
        Interp2D::evaluate(self, point)
    }

    fn evaluate_range(
        &self,
        from: Point2<T>,
        to: Point2<T>,
        step: T,
    ) -> Result<Grid2D<T>, InterpolateError> {
        Interp2D::evaluate_range(self, from, to, step)
    }
}

impl<T: GridNum> Interpolator for Interp3D<T> {
    type Elem = T;
    type Point = Point3<T>;
    type Grid = Grid3D<T>;

    fn evaluate(&self, point: Point3<T>) -> Result<T, InterpolateError> {
        Interp3D::evaluate(self, point)
    }

    fn evaluate_range(
        &self,
        from: Point3<T>,
        to: Point3<T>,
        step: T,
    ) -> Result<Grid3D<T>, InterpolateError> {
        Interp3D::evaluate_range(self, from, to, step)
    }
}
