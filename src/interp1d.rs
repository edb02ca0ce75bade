//! Linear interpolation over a [`Grid1D`]

use ndarray::{Array, ArrayBase, Data, Dimension, FoldWhile, Zip};

use crate::{
    axis_extensions::{AxisExtensions, Bracket},
    lerp, Grid1D, GridNum, InterpolateError, Steps,
};

/// One dimensional linear interpolator
///
/// ```rust
/// # use nested_interp::*;
/// let grid = Grid1D::new(vec![(0.0, 0.0), (2.0, 2.0)]);
/// let interpolator = Interp1D::new(grid);
///
/// let result = interpolator.evaluate_range(0.0, 2.0, 1.0).unwrap();
/// assert_eq!(result.samples(), &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Interp1D<T> {
    grid: Grid1D<T>,
}

impl<T: GridNum> Interp1D<T> {
    /// Wrap the grid without any validation.
    /// Unsorted samples lead to undefined brackets, not to an error.
    pub fn new(grid: Grid1D<T>) -> Self {
        Interp1D { grid }
    }

    pub fn grid(&self) -> &Grid1D<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid1D<T> {
        self.grid
    }

    /// first and last x coordinate
    pub fn range(&self) -> Option<(T, T)> {
        self.grid.samples().bounds()
    }

    /// Interpolated value at `x`.
    /// A query on a sample coordinate returns the stored value.
    pub fn evaluate(&self, x: T) -> Result<T, InterpolateError> {
        linear(self.grid.samples(), "x", x)
    }

    /// Evaluate at `from, from + step, ...` up to `to`, see [`Steps`].
    ///
    /// The first failing point aborts the whole sweep.
    pub fn evaluate_range(&self, from: T, to: T, step: T) -> Result<Grid1D<T>, InterpolateError> {
        Steps::new(from, to, step)?
            .map(|x| self.evaluate(x).map(|f| (x, f)))
            .collect()
    }

    /// Evaluate at every coordinate in `xs`.
    /// The result has the same shape as `xs`.
    ///
    /// ```rust
    /// # use nested_interp::*;
    /// # use ndarray::*;
    /// let interpolator = Interp1D::new(Grid1D::new(vec![(0.0, 0.0), (1.0, 10.0)]));
    /// let query = array![[0.0, 0.25], [0.5, 1.0]];
    /// let result = interpolator.evaluate_array(&query).unwrap();
    /// assert_eq!(result, array![[0.0, 2.5], [5.0, 10.0]]);
    /// ```
    pub fn evaluate_array<S, D>(&self, xs: &ArrayBase<S, D>) -> Result<Array<T, D>, InterpolateError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let mut values: Array<T, D> = Array::zeros(xs.raw_dim());
        let result = Zip::from(&mut values)
            .and(xs)
            .fold_while(Ok(()), |_, value, &x| match self.evaluate(x) {
                Ok(v) => {
                    *value = v;
                    FoldWhile::Continue(Ok(()))
                }
                Err(e) => FoldWhile::Done(Err(e)),
            })
            .into_inner();
        result.map(|_| values)
    }
}

/// Linear interpolation on a single sample array.
/// Also used for the innermost axis of the nested grids.
pub(crate) fn linear<T: GridNum>(
    samples: &[(T, T)],
    axis: &str,
    x: T,
) -> Result<T, InterpolateError> {
    match samples.locate(axis, x)? {
        Bracket::Exact(idx) => Ok(samples[idx].1),
        Bracket::Between(lo, hi) => {
            let (x0, f0) = samples[lo];
            let (x1, f1) = samples[hi];
            let t = (x - x0) / (x1 - x0);
            Ok(lerp(f0, f1, t))
        }
    }
}
