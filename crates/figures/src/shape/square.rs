//! Square given by four vertices in caller order.
//!
//! Validity (checked on text input and by `is_valid`, never by `new`):
//! - the four vertices are pairwise distinct;
//! - the four consecutive sides `p1p2, p2p3, p3p4, p4p1` are equal within `EPS`;
//! - the corner at `p1` is right: `|(p2 - p1) · (p4 - p1)| < EPS`.
//!
//! Equal sides plus one right angle between consecutive sides force a square.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::cfg::EPS;
use crate::error::{Result, ShapeError};
use crate::point::Point;
use crate::reader::{parse_exact, TokenReader};
use crate::scalar::Coord;

use super::util::{
    all_distinct, centroid, cyclic_eq, first_corner_dot, near, side_lengths, write_tagged,
};
use super::ShapeKind;

#[derive(Clone, Debug)]
pub struct Square<N> {
    vertices: [Point<N>; 4],
}

impl<N: Coord> Square<N> {
    /// Build from four vertices without validating them.
    pub fn new(a: Point<N>, b: Point<N>, c: Point<N>, d: Point<N>) -> Self {
        Self::from_vertices([a, b, c, d])
    }

    pub fn from_vertices(vertices: [Point<N>; 4]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point<N>; 4] {
        &self.vertices
    }

    /// Replace the whole vertex set (no validation).
    pub fn set_vertices(&mut self, vertices: [Point<N>; 4]) {
        self.vertices = vertices;
    }

    pub fn centroid(&self) -> Point<N> {
        centroid(&self.vertices)
    }

    /// Square of the first side `|p1p2|`.
    pub fn area(&self) -> f64 {
        let side = self.vertices[0].distance(&self.vertices[1]);
        side * side
    }

    pub fn is_valid(&self) -> bool {
        if !all_distinct(&self.vertices) {
            return false;
        }
        let [s1, s2, s3, s4] = side_lengths(&self.vertices);
        if !(near(s1, s2) && near(s2, s3) && near(s3, s4)) {
            return false;
        }
        first_corner_dot(&self.vertices).abs() < EPS
    }

    /// Read 4 `x y` pairs and validate.
    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Self> {
        let mut square = Self::default();
        square.read_into(reader)?;
        Ok(square)
    }

    /// Replace the vertex set from text, then validate.
    ///
    /// On a parse error the old vertices are kept. On `InvalidGeometry` the
    /// new (invalid) vertices have already replaced them.
    pub fn read_into<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        self.vertices = reader.read_points()?;
        if self.is_valid() {
            Ok(())
        } else {
            Err(ShapeError::InvalidGeometry {
                kind: ShapeKind::Square,
            })
        }
    }
}

/// Unit square `(0,0), (1,0), (1,1), (0,1)`.
impl<N: Coord> Default for Square<N> {
    fn default() -> Self {
        let (o, i) = (N::zero(), N::one());
        Self::new(
            Point::new(o, o),
            Point::new(i, o),
            Point::new(i, i),
            Point::new(o, i),
        )
    }
}

impl<N: Coord> PartialEq for Square<N> {
    fn eq(&self, other: &Self) -> bool {
        cyclic_eq(&self.vertices, &other.vertices)
    }
}

impl<N: Coord> fmt::Display for Square<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tagged(f, ShapeKind::Square, &self.vertices)
    }
}

impl<N: Coord> FromStr for Square<N> {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s, |r| Self::read(r))
    }
}
