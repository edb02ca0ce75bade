use ndarray::{parallel::prelude::*, Array};
use nested_interp::{
    BuilderError, Grid1D, Grid2D, Grid3D, InterpolateError, Interpolation, Interpolator,
};

#[test]
fn factory_takes_flat_tuples() {
    let grid: Grid2D<f64> = [
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 1.0),
        (1.0, 0.0, 2.0),
        (1.0, 1.0, 4.0),
    ]
    .into_iter()
    .collect();
    let interp = Interpolation::new().interpolate(grid);
    assert_eq!(interp.evaluate((0.5, 0.5)).unwrap(), 1.75);

    let result = interp.evaluate_range((0.0, 0.0), (1.0, 1.0), 1.0).unwrap();
    assert_eq!(result.into_inner(), interp.into_grid().into_inner());
}

#[test]
fn range_result_can_be_interpolated_again() {
    let factory = Interpolation::new();
    let coarse = factory.interpolate(Grid1D::new(vec![(0.0, 0.0), (4.0, 8.0)]));
    let fine = factory.interpolate(coarse.evaluate_range(0.0, 4.0, 1.0).unwrap());
    assert_eq!(fine.grid().len(), 5);
    assert_eq!(fine.evaluate(2.5).unwrap(), 5.0);
}

#[test]
fn factory_does_not_validate() {
    let interp = Interpolation::new().interpolate(Grid3D::<f64>::new(vec![]));
    assert!(matches!(
        interp.evaluate((0.0, 0.0, 0.0)),
        Err(InterpolateError::OutOfRange(_))
    ));
}

#[test]
fn checked_factory() {
    let factory = Interpolation::new();
    assert!(matches!(
        factory.interpolate_checked(Grid3D::<f64>::new(vec![])),
        Err(BuilderError::NotEnoughData(_))
    ));
    assert!(matches!(
        factory.interpolate_checked(Grid2D::new(vec![
            (1.0, vec![(0.0, 0.0)]),
            (0.0, vec![(0.0, 0.0)])
        ])),
        Err(BuilderError::Monotonic(_))
    ));
}

#[test]
fn concurrent_queries_match_sequential() {
    let interp = Interpolation::new().interpolate(Grid1D::new(
        (0..100).map(|i| (f64::from(i), f64::from(i * i))).collect(),
    ));
    let query = Array::linspace(0.0, 98.0, 10_000);

    let sequential: Vec<f64> = query.iter().map(|&x| interp.evaluate(x).unwrap()).collect();
    let parallel: Result<Vec<f64>, InterpolateError> =
        query.par_iter().map(|&x| interp.evaluate(x)).collect();
    assert_eq!(parallel.unwrap(), sequential);
}

#[test]
fn generic_sweep() {
    fn sweep<I: Interpolator>(
        interp: &I,
        from: I::Point,
        to: I::Point,
        step: I::Elem,
    ) -> Result<I::Grid, InterpolateError> {
        interp.evaluate_range(from, to, step)
    }

    let factory = Interpolation::new();
    let one = factory.interpolate(Grid1D::new(vec![(0.0, 0.0), (1.0, 1.0)]));
    assert!(sweep(&one, 0.0, 1.0, 0.5).is_ok());
    assert!(matches!(
        sweep(&one, 0.0, 1.0, -0.5),
        Err(InterpolateError::InvalidArguments(_))
    ));
}
