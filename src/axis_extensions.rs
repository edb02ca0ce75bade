//! Ordered search over sorted `(coordinate, payload)` entries.
//!
//! Every axis of every grid is a slice of `(T, P)` pairs sorted ascending by
//! the coordinate `T`. For sample arrays the payload is the value, for
//! nested grids it is the row of the next dimension down.

use crate::{lerp, GridNum, InterpolateError};

/// Describes the monotonic property of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    Rising { strict: bool },
    Falling { strict: bool },
    NotMonotonic,
}

/// Result of locating a query coordinate on an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// the coordinate at this index equals the query
    Exact(usize),
    /// `coordinate[low] < query < coordinate[high]` with `high = low + 1`
    Between(usize, usize),
}

/// A located cell along one axis together with the blend weight
/// of the query between the two bracketing entries.
///
/// An exact hit collapses the span to `lo == hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    pub lo: usize,
    pub hi: usize,
    pub weight: T,
}

impl<T: GridNum> Span<T> {
    fn exact(index: usize) -> Self {
        Span {
            lo: index,
            hi: index,
            weight: T::zero(),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.lo == self.hi
    }

    /// Blend the values found at `lo` and `hi`.
    /// An exact span returns `f_lo` untouched.
    #[inline]
    pub fn blend(&self, f_lo: T, f_hi: T) -> T {
        if self.is_exact() {
            f_lo
        } else {
            lerp(f_lo, f_hi, self.weight)
        }
    }
}

pub trait AxisExtensions<T, P> {
    /// Find the bracket of `q` using a lower bound search.
    ///
    /// Fails with [`InterpolateError::OutOfRange`] when `q` is above the last
    /// coordinate, below the first coordinate, or not comparable at all.
    /// `axis` names the axis in the error message.
    fn locate(&self, axis: &str, q: T) -> Result<Bracket, InterpolateError>;

    /// Locate `q` and compute its blend weight.
    ///
    /// When `descend` is set and `q` hits the very first coordinate exactly,
    /// the span is widened to the entries `0` and `1` so that inner dimensions
    /// still have two rows to blend against.
    fn span(&self, axis: &str, q: T, descend: bool) -> Result<Span<T>, InterpolateError>;

    /// Payloads at both ends of `span`, indexed by position.
    ///
    /// Fails with [`InterpolateError::InvalidGrid`] when this axis is too short
    /// to mirror the sibling row the span was located on.
    fn aligned(&self, axis: &str, span: &Span<T>) -> Result<(&P, &P), InterpolateError>;

    /// first and last coordinate
    fn bounds(&self) -> Option<(T, T)>;

    /// get the monotonic property of the coordinates
    fn monotonic_prop(&self) -> Monotonic;
}

impl<T: GridNum, P> AxisExtensions<T, P> for [(T, P)] {
    fn locate(&self, axis: &str, q: T) -> Result<Bracket, InterpolateError> {
        let idx = self.partition_point(|(coord, _)| *coord < q);
        let Some((coord, _)) = self.get(idx) else {
            return Err(out_of_range(self, axis, q));
        };
        if *coord == q {
            return Ok(Bracket::Exact(idx));
        }
        if idx == 0 {
            return Err(out_of_range(self, axis, q));
        }
        Ok(Bracket::Between(idx - 1, idx))
    }

    fn span(&self, axis: &str, q: T, descend: bool) -> Result<Span<T>, InterpolateError> {
        let span = match self.locate(axis, q)? {
            Bracket::Exact(0) if descend && self.len() > 1 => self.weighted(0, 1, q),
            Bracket::Exact(idx) => Span::exact(idx),
            Bracket::Between(lo, hi) => self.weighted(lo, hi, q),
        };
        Ok(span)
    }

    fn aligned(&self, axis: &str, span: &Span<T>) -> Result<(&P, &P), InterpolateError> {
        match (self.get(span.lo), self.get(span.hi)) {
            (Some((_, lo)), Some((_, hi))) => Ok((lo, hi)),
            _ => Err(InterpolateError::InvalidGrid(format!(
                "{axis}-axis has {} entries but index {} is required to align with its sibling row",
                self.len(),
                span.hi
            ))),
        }
    }

    fn bounds(&self) -> Option<(T, T)> {
        Some((self.first()?.0, self.last()?.0))
    }

    fn monotonic_prop(&self) -> Monotonic {
        let mut rising = true;
        let mut falling = true;
        let mut strict = true;
        for pair in self.windows(2) {
            let (a, b) = (pair[0].0, pair[1].0);
            if a < b {
                falling = false;
            } else if a > b {
                rising = false;
            } else if a == b {
                strict = false;
            } else {
                // NaN
                return Monotonic::NotMonotonic;
            }
        }
        match (rising, falling) {
            (true, _) => Monotonic::Rising { strict },
            (false, true) => Monotonic::Falling { strict },
            (false, false) => Monotonic::NotMonotonic,
        }
    }
}

trait Weighted<T> {
    fn weighted(&self, lo: usize, hi: usize, q: T) -> Span<T>;
}

impl<T: GridNum, P> Weighted<T> for [(T, P)] {
    fn weighted(&self, lo: usize, hi: usize, q: T) -> Span<T> {
        let x0 = self[lo].0;
        let x1 = self[hi].0;
        // duplicated coordinates at the widened first edge
        let weight = if x1 == x0 {
            T::zero()
        } else {
            (q - x0) / (x1 - x0)
        };
        Span { lo, hi, weight }
    }
}

fn out_of_range<T: GridNum, P>(entries: &[(T, P)], axis: &str, q: T) -> InterpolateError {
    match entries.bounds() {
        Some((min, max)) => InterpolateError::OutOfRange(format!(
            "{axis} = {q:?} is not in range of {min:?}..={max:?}"
        )),
        None => InterpolateError::OutOfRange(format!(
            "{axis} = {q:?} is not in range, the {axis}-axis has no entries"
        )),
    }
}
