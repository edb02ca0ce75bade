use std::iter::FusedIterator;

use num_traits::{cast, ToPrimitive};

use crate::{GridNum, InterpolateError};

/// Equally spaced coordinates `from, from + step, ...` up to and including `to`.
///
/// Coordinates are computed as `from + i * step` so rounding errors do not
/// accumulate. When `(to - from) / step` is within a few ulps of an integer,
/// scaled by the magnitude of the bounds, that integer is used as the number of
/// steps, and a last coordinate overshooting `to` by rounding is clamped to `to`.
///
/// ```rust
/// # use nested_interp::*;
/// let steps: Vec<f64> = Steps::new(0.0, 0.3, 0.1).unwrap().collect();
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[3], 0.3);
/// ```
///
/// The iterator is cheap to clone, a clone taken before iterating restarts the sweep.
#[derive(Debug, Clone)]
pub struct Steps<T> {
    from: T,
    to: T,
    step: T,
    index: usize,
    len: usize,
}

impl<T: GridNum> Steps<T> {
    /// Fails with [`InterpolateError::InvalidArguments`] when `step` is not
    /// a positive finite number or the bounds are not finite.
    /// `from > to` is valid and yields nothing.
    pub fn new(from: T, to: T, step: T) -> Result<Self, InterpolateError> {
        if !(step > T::zero() && step.is_finite()) {
            return Err(InterpolateError::InvalidArguments(format!(
                "step = {step:?} needs to be a positive finite number"
            )));
        }
        if !(from.is_finite() && to.is_finite()) {
            return Err(InterpolateError::InvalidArguments(format!(
                "range {from:?}..={to:?} needs finite bounds"
            )));
        }
        let len = if from > to {
            0
        } else {
            Self::count(from, to, step)?
        };
        Ok(Steps {
            from,
            to,
            step,
            index: 0,
            len,
        })
    }

    fn count(from: T, to: T, step: T) -> Result<usize, InterpolateError> {
        let quotient = (to - from) / step;
        let nearest = quotient.round();
        // rounding error of `to - from` scales with the bounds, the division adds
        // a few ulps of the quotient
        let ulps: T = cast(4).unwrap_or_else(T::one);
        let magnitude = from.abs().max(to.abs()) / step + nearest.max(T::one());
        let tolerance = ulps * T::epsilon() * magnitude;
        let steps = if (quotient - nearest).abs() <= tolerance {
            nearest
        } else {
            quotient.floor()
        };
        steps
            .to_usize()
            .and_then(|steps| steps.checked_add(1))
            .ok_or_else(|| {
                InterpolateError::InvalidArguments(format!(
                    "range {from:?}..={to:?} with step = {step:?} has too many points"
                ))
            })
    }

    fn at(&self, index: usize) -> T {
        let i: T = cast(index).unwrap_or_else(|| unreachable!());
        let x = self.from + i * self.step;
        if x > self.to {
            self.to
        } else {
            x
        }
    }
}

impl<T: GridNum> Iterator for Steps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.len {
            return None;
        }
        let x = self.at(self.index);
        self.index += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: GridNum> ExactSizeIterator for Steps<T> {}

impl<T: GridNum> FusedIterator for Steps<T> {}
