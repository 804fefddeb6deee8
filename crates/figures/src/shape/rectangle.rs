//! Rectangle given by four vertices in caller order.
//!
//! Valid iff the vertices are pairwise distinct, opposite sides
//! (`p1p2`/`p3p4`, `p2p3`/`p4p1`) match within `EPS`, and the corner at `p1`
//! is right.

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
pub struct Rectangle<N> {
    vertices: [Point<N>; 4],
}

impl<N: Coord> Rectangle<N> {
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

    pub fn set_vertices(&mut self, vertices: [Point<N>; 4]) {
        self.vertices = vertices;
    }

    pub fn centroid(&self) -> Point<N> {
        centroid(&self.vertices)
    }

    /// `|p1p2| * |p1p4|`, the two sides meeting at the first vertex.
    pub fn area(&self) -> f64 {
        let [p1, p2, _, p4] = &self.vertices;
        p1.distance(p2) * p1.distance(p4)
    }

    pub fn is_valid(&self) -> bool {
        if !all_distinct(&self.vertices) {
            return false;
        }
        let [s1, s2, s3, s4] = side_lengths(&self.vertices);
        near(s1, s3) && near(s2, s4) && first_corner_dot(&self.vertices).abs() < EPS
    }

    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Self> {
        let mut rect = Self::default();
        rect.read_into(reader)?;
        Ok(rect)
    }

    /// Same replace-then-validate contract as [`super::Square::read_into`].
    pub fn read_into<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        self.vertices = reader.read_points()?;
        if !self.is_valid() {
            return Err(ShapeError::InvalidGeometry {
                kind: ShapeKind::Rectangle,
            });
        }
        Ok(())
    }
}

/// `(0,0), (2,0), (2,1), (0,1)`.
impl<N: Coord> Default for Rectangle<N> {
    fn default() -> Self {
        let (o, i) = (N::zero(), N::one());
        let two = i + i;
        Self::new(
            Point::new(o, o),
            Point::new(two, o),
            Point::new(two, i),
            Point::new(o, i),
        )
    }
}

impl<N: Coord> PartialEq for Rectangle<N> {
    fn eq(&self, other: &Self) -> bool {
        cyclic_eq(&self.vertices, &other.vertices)
    }
}

impl<N: Coord> fmt::Display for Rectangle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tagged(f, ShapeKind::Rectangle, &self.vertices)
    }
}

impl<N: Coord> FromStr for Rectangle<N> {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s, |r| Self::read(r))
    }
}
