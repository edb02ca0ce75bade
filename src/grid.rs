use crate::{
    axis_extensions::{AxisExtensions, Monotonic},
    BuilderError, GridNum,
};

/// sorted `(x, f)` pairs
pub type Samples<T> = Vec<(T, T)>;
/// sorted `(x, samples over y)` rows
pub type Rows<T> = Vec<(T, Samples<T>)>;
/// sorted `(x, rows over y and z)` slices
pub type Cubes<T> = Vec<(T, Rows<T>)>;

/// query location `(x, y)`
pub type Point2<T> = (T, T);
/// query location `(x, y, z)`
pub type Point3<T> = (T, T, T);

/// One-dimensional sample grid.
///
/// Samples are expected to be sorted ascending by coordinate, this is not
/// checked on construction. Use [`Grid1D::validate`] to check explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1D<T> {
    samples: Samples<T>,
}

/// Two-dimensional grid of rows.
///
/// Rows may differ in length and in their y coordinates (ragged grid).
/// Interpolation only requires neighbouring rows to be positionally
/// aligned in the cell a query resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    rows: Rows<T>,
}

/// Three-dimensional grid, each x-slice is a [`Rows`] array.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3D<T> {
    cubes: Cubes<T>,
}

impl<T> Grid1D<T> {
    pub fn new(samples: Samples<T>) -> Self {
        Grid1D { samples }
    }

    pub fn samples(&self) -> &[(T, T)] {
        &self.samples
    }

    pub fn into_inner(self) -> Samples<T> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T> Grid2D<T> {
    pub fn new(rows: Rows<T>) -> Self {
        Grid2D { rows }
    }

    pub fn rows(&self) -> &[(T, Samples<T>)] {
        &self.rows
    }

    pub fn into_inner(self) -> Rows<T> {
        self.rows
    }

    /// number of rows along x
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Grid3D<T> {
    pub fn new(cubes: Cubes<T>) -> Self {
        Grid3D { cubes }
    }

    pub fn cubes(&self) -> &[(T, Rows<T>)] {
        &self.cubes
    }

    pub fn into_inner(self) -> Cubes<T> {
        self.cubes
    }

    /// number of slices along x
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

impl<T: GridNum> Grid1D<T> {
    /// Check that the samples are non-empty and sorted ascending
    pub fn validate(&self) -> Result<(), BuilderError> {
        check_axis(&self.samples, "x-axis")
    }
}

impl<T: GridNum> Grid2D<T> {
    /// Check that every axis is non-empty and sorted ascending.
    ///
    /// Rows are not required to be aligned with each other.
    pub fn validate(&self) -> Result<(), BuilderError> {
        check_axis(&self.rows, "x-axis")?;
        for (x, row) in &self.rows {
            check_axis(row, &format!("y-axis at x = {x:?}"))?;
        }
        Ok(())
    }
}

impl<T: GridNum> Grid3D<T> {
    /// Check that every axis is non-empty and sorted ascending.
    pub fn validate(&self) -> Result<(), BuilderError> {
        check_axis(&self.cubes, "x-axis")?;
        for (x, rows) in &self.cubes {
            check_axis(rows, &format!("y-axis at x = {x:?}"))?;
            for (y, row) in rows {
                check_axis(row, &format!("z-axis at x = {x:?}, y = {y:?}"))?;
            }
        }
        Ok(())
    }
}

fn check_axis<T: GridNum, P>(entries: &[(T, P)], axis: &str) -> Result<(), BuilderError> {
    if entries.is_empty() {
        return Err(BuilderError::NotEnoughData(format!(
            "The {axis} needs at least one entry"
        )));
    }
    match entries.monotonic_prop() {
        Monotonic::Rising { .. } => Ok(()),
        Monotonic::Falling { .. } => Err(BuilderError::Monotonic(format!(
            "The {axis} needs to be monotonic rising, found it falling"
        ))),
        Monotonic::NotMonotonic => Err(BuilderError::Monotonic(format!(
            "The {axis} needs to be monotonic rising"
        ))),
    }
}

impl<T> From<Samples<T>> for Grid1D<T> {
    fn from(samples: Samples<T>) -> Self {
        Grid1D::new(samples)
    }
}

impl<T> From<Rows<T>> for Grid2D<T> {
    fn from(rows: Rows<T>) -> Self {
        Grid2D::new(rows)
    }
}

impl<T> From<Cubes<T>> for Grid3D<T> {
    fn from(cubes: Cubes<T>) -> Self {
        Grid3D::new(cubes)
    }
}

impl<T> FromIterator<(T, T)> for Grid1D<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Grid1D::new(iter.into_iter().collect())
    }
}

/// Collect `(x, y, f)` tuples into rows.
/// Consecutive tuples with the same `x` share a row.
impl<T: PartialEq> FromIterator<(T, T, T)> for Grid2D<T> {
    fn from_iter<I: IntoIterator<Item = (T, T, T)>>(iter: I) -> Self {
        let mut rows = Vec::new();
        for (x, y, f) in iter {
            push_sample(&mut rows, x, y, f);
        }
        Grid2D::new(rows)
    }
}

/// Collect `(x, y, z, f)` tuples into slices of rows.
/// Consecutive tuples with the same `x` share a slice,
/// consecutive tuples with the same `x` and `y` share a row.
impl<T: PartialEq> FromIterator<(T, T, T, T)> for Grid3D<T> {
    fn from_iter<I: IntoIterator<Item = (T, T, T, T)>>(iter: I) -> Self {
        let mut cubes: Cubes<T> = Vec::new();
        for (x, y, z, f) in iter {
            match cubes.last_mut() {
                Some((last_x, rows)) if *last_x == x => push_sample(rows, y, z, f),
                _ => cubes.push((x, vec![(y, vec![(z, f)])])),
            }
        }
        Grid3D::new(cubes)
    }
}

fn push_sample<T: PartialEq>(rows: &mut Rows<T>, x: T, y: T, f: T) {
    match rows.last_mut() {
        Some((last_x, row)) if *last_x == x => row.push((y, f)),
        _ => rows.push((x, vec![(y, f)])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_rows_groups_consecutive_x() {
        let grid: Grid2D<f64> = [
            (0.0, 0.0, 1.0),
            (0.0, 1.0, 2.0),
            (1.0, 0.0, 3.0),
            (1.0, 1.0, 4.0),
            (1.0, 2.0, 5.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            grid.into_inner(),
            vec![
                (0.0, vec![(0.0, 1.0), (1.0, 2.0)]),
                (1.0, vec![(0.0, 3.0), (1.0, 4.0), (2.0, 5.0)]),
            ]
        );
    }

    #[test]
    fn collect_rows_reappearing_x_starts_new_row() {
        let grid: Grid2D<f64> = [(0.0, 0.0, 1.0), (1.0, 0.0, 2.0), (0.0, 1.0, 3.0)]
            .into_iter()
            .collect();
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn collect_cubes() {
        let grid: Grid3D<f64> = [
            (0.0, 0.0, 0.0, 1.0),
            (0.0, 0.0, 1.0, 2.0),
            (0.0, 1.0, 0.0, 3.0),
            (1.0, 0.0, 0.0, 4.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            grid.into_inner(),
            vec![
                (
                    0.0,
                    vec![(0.0, vec![(0.0, 1.0), (1.0, 2.0)]), (1.0, vec![(0.0, 3.0)])]
                ),
                (1.0, vec![(0.0, vec![(0.0, 4.0)])]),
            ]
        );
    }

    #[test]
    fn validate() {
        assert!(Grid1D::new(vec![(0.0, 1.0), (0.0, 2.0), (1.0, 0.0)])
            .validate()
            .is_ok());
        assert!(matches!(
            Grid1D::<f64>::new(vec![]).validate(),
            Err(BuilderError::NotEnoughData(_))
        ));
        assert!(matches!(
            Grid1D::new(vec![(1.0, 1.0), (0.0, 2.0)]).validate(),
            Err(BuilderError::Monotonic(_))
        ));

        // ragged rows are fine
        let ragged = Grid2D::new(vec![
            (0.0, vec![(0.0, 0.0)]),
            (1.0, vec![(0.5, 1.0), (2.0, 3.0)]),
        ]);
        assert!(ragged.validate().is_ok());

        let empty_row = Grid2D::new(vec![(0.0, vec![(0.0, 0.0)]), (1.0, vec![])]);
        assert!(matches!(
            empty_row.validate(),
            Err(BuilderError::NotEnoughData(msg)) if msg.contains("x = 1.0")
        ));

        let falling_y = Grid2D::new(vec![(0.0, vec![(1.0, 0.0), (0.0, 0.0)])]);
        assert!(matches!(
            falling_y.validate(),
            Err(BuilderError::Monotonic(msg)) if msg.contains("falling")
        ));
        let zigzag = Grid1D::new(vec![(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]);
        assert!(matches!(
            zigzag.validate(),
            Err(BuilderError::Monotonic(msg)) if !msg.contains("falling")
        ));

        let unsorted_z = Grid3D::new(vec![(0.0, vec![(0.0, vec![(1.0, 0.0), (0.0, 0.0)])])]);
        assert!(matches!(
            unsorted_z.validate(),
            Err(BuilderError::Monotonic(_))
        ));
    }
}
