//! 2D point over a generic coordinate type.
//!
//! Invariants:
//! - Immutable value (`Copy`); no in-place setters.
//! - Equality is tolerance-based (`|Δx| < EPS && |Δy| < EPS`), evaluated in
//!   `f64` so unsigned coordinates never underflow.
//! - Ordering is lexicographic (x, then y); points equal within tolerance
//!   order as `Equal`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::cfg::EPS;
use crate::error::{Result, ShapeError};
use crate::reader::{parse_exact, TokenReader};
use crate::scalar::Coord;

#[derive(Clone, Copy, Debug)]
pub struct Point<N> {
    x: N,
    y: N,
}

impl<N: Coord> Point<N> {
    #[inline]
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Coordinates widened to an `f64` vector.
    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x.as_f64(), self.y.as_f64())
    }

    /// Euclidean distance, in `f64`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    /// Read one `x y` pair.
    pub fn read<R: std::io::BufRead>(reader: &mut TokenReader<R>) -> Result<Self> {
        let [p] = reader.read_points::<N, 1>()?;
        Ok(p)
    }
}

impl<N: Coord> Default for Point<N> {
    fn default() -> Self {
        Self::new(N::zero(), N::zero())
    }
}

impl<N: Coord> PartialEq for Point<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.x.as_f64() - other.x.as_f64()).abs() < EPS
            && (self.y.as_f64() - other.y.as_f64()).abs() < EPS
    }
}

impl<N: Coord> PartialOrd for Point<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

/// Writes `(x, y)`. A precision (`{:.2}`) is applied to both coordinates.
impl<N: Coord> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Parses `"x y"` (surrounding whitespace allowed, nothing else).
impl<N: Coord> FromStr for Point<N> {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s, |r| Self::read(r))
    }
}
