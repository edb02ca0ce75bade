//! Trilinear interpolation over a [`Grid3D`]

use ndarray::{Array, ArrayBase, Data, Dimension, FoldWhile, Zip};

use crate::{
    axis_extensions::AxisExtensions, Grid3D, GridNum, InterpolateError, Point3, Rows, Samples,
    Steps,
};

/// Three dimensional trilinear interpolator
///
/// x is located on the outer slices, y inside the upper x-slice and z inside
/// the upper-upper `(x, y)` row. All other corners are indexed at the same
/// positions, see [`Interp2D`](crate::Interp2D) for the alignment rules.
#[derive(Debug, Clone)]
pub struct Interp3D<T> {
    grid: Grid3D<T>,
}

impl<T: GridNum> Interp3D<T> {
    /// Wrap the grid without any validation.
    pub fn new(grid: Grid3D<T>) -> Self {
        Interp3D { grid }
    }

    pub fn grid(&self) -> &Grid3D<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid3D<T> {
        self.grid
    }

    /// first and last x coordinate
    pub fn x_range(&self) -> Option<(T, T)> {
        self.grid.cubes().bounds()
    }

    pub fn evaluate(&self, (x, y, z): Point3<T>) -> Result<T, InterpolateError> {
        trilinear(self.grid.cubes(), x, y, z)
    }

    /// Evaluate on the dense cuboid spanned by `from` and `to` with
    /// the same `step` along all axes.
    ///
    /// The first failing point aborts the whole sweep.
    pub fn evaluate_range(
        &self,
        from: Point3<T>,
        to: Point3<T>,
        step: T,
    ) -> Result<Grid3D<T>, InterpolateError> {
        let ys = Steps::new(from.1, to.1, step)?;
        let zs = Steps::new(from.2, to.2, step)?;
        Steps::new(from.0, to.0, step)?
            .map(|x| {
                ys.clone()
                    .map(|y| {
                        zs.clone()
                            .map(|z| self.evaluate((x, y, z)).map(|f| (z, f)))
                            .collect::<Result<Samples<T>, _>>()
                            .map(|row| (y, row))
                    })
                    .collect::<Result<Rows<T>, _>>()
                    .map(|rows| (x, rows))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Grid3D::new)
    }

    /// Evaluate at every point `(xs[i], ys[i], zs[i])`.
    ///
    /// All query arrays need to have the same shape, otherwise this fails
    /// with [`InterpolateError::InvalidArguments`].
    pub fn evaluate_array<Sx, Sy, Sz, D>(
        &self,
        xs: &ArrayBase<Sx, D>,
        ys: &ArrayBase<Sy, D>,
        zs: &ArrayBase<Sz, D>,
    ) -> Result<Array<T, D>, InterpolateError>
    where
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
        Sz: Data<Elem = T>,
        D: Dimension,
    {
        if xs.shape() != ys.shape() || xs.shape() != zs.shape() {
            return Err(InterpolateError::InvalidArguments(format!(
                "query shapes do not match: xs {:?}, ys {:?}, zs {:?}",
                xs.shape(),
                ys.shape(),
                zs.shape()
            )));
        }
        let mut values: Array<T, D> = Array::zeros(xs.raw_dim());
        let result = Zip::from(&mut values)
            .and(xs)
            .and(ys)
            .and(zs)
            .fold_while(Ok(()), |_, value, &x, &y, &z| {
                match self.evaluate((x, y, z)) {
                    Ok(v) => {
                        *value = v;
                        FoldWhile::Continue(Ok(()))
                    }
                    Err(e) => FoldWhile::Done(Err(e)),
                }
            })
            .into_inner();
        result.map(|_| values)
    }
}

fn trilinear<T: GridNum>(
    cubes: &[(T, Rows<T>)],
    x: T,
    y: T,
    z: T,
) -> Result<T, InterpolateError> {
    let xs = cubes.span("x", x, true)?;
    let (rows_0, rows_1) = cubes.aligned("x", &xs)?;

    // corner rows are named by their (x, y) index in the cell
    let ys = rows_1.span("y", y, true)?;
    let (row_10, row_11) = rows_1.aligned("y", &ys)?;
    let (row_00, row_01) = rows_0.aligned("y", &ys)?;

    let zs = row_11.span("z", z, false)?;
    let (&f110, &f111) = row_11.aligned("z", &zs)?;
    let (&f100, &f101) = row_10.aligned("z", &zs)?;
    let (&f010, &f011) = row_01.aligned("z", &zs)?;
    let (&f000, &f001) = row_00.aligned("z", &zs)?;

    let c00 = xs.blend(f000, f100);
    let c10 = xs.blend(f010, f110);
    let c01 = xs.blend(f001, f101);
    let c11 = xs.blend(f011, f111);

    let c0 = ys.blend(c00, c10);
    let c1 = ys.blend(c01, c11);

    Ok(zs.blend(c0, c1))
}
