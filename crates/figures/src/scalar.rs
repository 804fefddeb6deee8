//! Numeric element type shared by points, shapes and collections.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{Num, NumCast};

/// Coordinate element type: any primitive integer or float.
///
/// Centroids come back as `Self`, so integer types truncate. Metric
/// quantities go through [`Coord::as_f64`].
pub trait Coord:
    Copy + Debug + Display + PartialOrd + Num + NumCast + FromStr + 'static
{
    /// Widen to `f64`. Primitive numerics always convert; anything else maps to NaN.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// `n` as a value of `Self`; `None` when it does not fit.
    #[inline]
    fn from_count(n: usize) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// True for integer types, where `1 / 2 == 0`.
    #[inline]
    fn is_integral() -> bool {
        Self::one() / (Self::one() + Self::one()) == Self::zero()
    }
}

impl<T> Coord for T where
    T: Copy + Debug + Display + PartialOrd + Num + NumCast + FromStr + 'static
{
}
