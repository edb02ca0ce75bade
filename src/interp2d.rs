//! Bilinear interpolation over a [`Grid2D`]

use ndarray::{Array, ArrayBase, Data, Dimension, FoldWhile, Zip};

use crate::{
    axis_extensions::AxisExtensions, Grid2D, GridNum, InterpolateError, Point2, Samples, Steps,
};

/// Two dimensional bilinear interpolator
///
/// Queries locate the two bracketing x-rows, then locate y inside the
/// upper row. The lower row is indexed at the same positions, so neighbouring
/// rows need to be aligned in every cell that is queried. A misaligned
/// cell fails with [`InterpolateError::InvalidGrid`].
///
/// ```rust
/// # use nested_interp::*;
/// let grid = Grid2D::new(vec![
///     (0.0, vec![(0.0, 0.0), (1.0, 1.0)]),
///     (1.0, vec![(0.0, 2.0), (1.0, 4.0)]),
/// ]);
/// let interpolator = Interp2D::new(grid);
/// assert_eq!(interpolator.evaluate((0.5, 0.5)).unwrap(), 1.75);
/// ```
#[derive(Debug, Clone)]
pub struct Interp2D<T> {
    grid: Grid2D<T>,
}

impl<T: GridNum> Interp2D<T> {
    /// Wrap the grid without any validation.
    pub fn new(grid: Grid2D<T>) -> Self {
        Interp2D { grid }
    }

    pub fn grid(&self) -> &Grid2D<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid2D<T> {
        self.grid
    }

    /// first and last x coordinate
    pub fn x_range(&self) -> Option<(T, T)> {
        self.grid.rows().bounds()
    }

    pub fn evaluate(&self, (x, y): Point2<T>) -> Result<T, InterpolateError> {
        bilinear(self.grid.rows(), ["x", "y"], x, y)
    }

    /// Evaluate on the dense grid spanned by `from` and `to` with
    /// the same `step` along both axes.
    ///
    /// The result holds one row per x, each with the swept y coordinates.
    /// The first failing point aborts the whole sweep.
    pub fn evaluate_range(
        &self,
        from: Point2<T>,
        to: Point2<T>,
        step: T,
    ) -> Result<Grid2D<T>, InterpolateError> {
        let ys = Steps::new(from.1, to.1, step)?;
        Steps::new(from.0, to.0, step)?
            .map(|x| {
                ys.clone()
                    .map(|y| self.evaluate((x, y)).map(|f| (y, f)))
                    .collect::<Result<Samples<T>, _>>()
                    .map(|row| (x, row))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Grid2D::new)
    }

    /// Evaluate at every point `(xs[i], ys[i])`.
    ///
    /// `xs` and `ys` need to have the same shape, otherwise this fails
    /// with [`InterpolateError::InvalidArguments`].
    pub fn evaluate_array<Sx, Sy, D>(
        &self,
        xs: &ArrayBase<Sx, D>,
        ys: &ArrayBase<Sy, D>,
    ) -> Result<Array<T, D>, InterpolateError>
    where
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
        D: Dimension,
    {
        if xs.shape() != ys.shape() {
            return Err(InterpolateError::InvalidArguments(format!(
                "`xs.shape()` and `ys.shape()` do not match: {:?} != {:?}",
                xs.shape(),
                ys.shape()
            )));
        }
        let mut values: Array<T, D> = Array::zeros(xs.raw_dim());
        let result = Zip::from(&mut values)
            .and(xs)
            .and(ys)
            .fold_while(Ok(()), |_, value, &x, &y| match self.evaluate((x, y)) {
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

/// Bilinear interpolation on a row array.
/// `axes` names the outer and inner axis for error messages.
pub(crate) fn bilinear<T: GridNum>(
    rows: &[(T, Samples<T>)],
    [x_axis, y_axis]: [&str; 2],
    x: T,
    y: T,
) -> Result<T, InterpolateError> {
    let xs = rows.span(x_axis, x, true)?;
    let (row_lo, row_hi) = rows.aligned(x_axis, &xs)?;

    let ys = row_hi.span(y_axis, y, false)?;
    let (&f10, &f11) = row_hi.aligned(y_axis, &ys)?;
    let (&f00, &f01) = row_lo.aligned(y_axis, &ys)?;

    let c0 = xs.blend(f00, f10);
    let c1 = xs.blend(f01, f11);
    Ok(ys.blend(c0, c1))
}
