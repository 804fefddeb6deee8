//! Triangle given by three vertices in caller order.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::cfg::EPS;
use crate::error::{Result, ShapeError};
use crate::point::Point;
use crate::reader::{parse_exact, TokenReader};
use crate::scalar::Coord;

use super::util::{all_distinct, centroid, cyclic_eq, heron, side_lengths, write_tagged};
use super::ShapeKind;

#[derive(Clone, Debug)]
pub struct Triangle<N> {
    vertices: [Point<N>; 3],
}

impl<N: Coord> Triangle<N> {
    /// Build from three vertices without validating them.
    pub fn new(a: Point<N>, b: Point<N>, c: Point<N>) -> Self {
        Self::from_vertices([a, b, c])
    }

    pub fn from_vertices(vertices: [Point<N>; 3]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point<N>; 3] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: [Point<N>; 3]) {
        self.vertices = vertices;
    }

    pub fn centroid(&self) -> Point<N> {
        centroid(&self.vertices)
    }

    /// Heron's formula over the three side lengths.
    pub fn area(&self) -> f64 {
        let [a, b, c] = side_lengths(&self.vertices);
        heron(a, b, c)
    }

    /// Distinct vertices and a non-degenerate area (`> EPS`).
    pub fn is_valid(&self) -> bool {
        all_distinct(&self.vertices) && self.area() > EPS
    }

    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Self> {
        let mut tri = Self::default();
        tri.read_into(reader)?;
        Ok(tri)
    }

    pub fn read_into<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        self.vertices = reader.read_points()?;
        if !self.is_valid() {
            return Err(ShapeError::InvalidGeometry {
                kind: ShapeKind::Triangle,
            });
        }
        Ok(())
    }
}

/// `(0,0), (1,0), (0,1)`.
impl<N: Coord> Default for Triangle<N> {
    fn default() -> Self {
        let (o, i) = (N::zero(), N::one());
        Self::new(Point::new(o, o), Point::new(i, o), Point::new(o, i))
    }
}

impl<N: Coord> PartialEq for Triangle<N> {
    fn eq(&self, other: &Self) -> bool {
        cyclic_eq(&self.vertices, &other.vertices)
    }
}

impl<N: Coord> fmt::Display for Triangle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tagged(f, ShapeKind::Triangle, &self.vertices)
    }
}

impl<N: Coord> FromStr for Triangle<N> {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s, |r| Self::read(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_centroid() {
        let c = Triangle::<i32>::default().centroid();
        assert_eq!((c.x(), c.y()), (0, 0));
        let c = Triangle::<f32>::default().centroid();
        assert!((c.x() - 1.0 / 3.0).abs() < 1e-6);
        assert!((c.y() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn heron_area() {
        let t = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 4));
        assert!((t.area() - 6.0).abs() < 1e-9);
        let t = Triangle::new(
            Point::new(0.0f32, 0.0),
            Point::new(3.5, 0.0),
            Point::new(0.0, 4.2),
        );
        assert!((t.area() - 7.35).abs() < 1e-3);
    }

    #[test]
    fn collinear_is_invalid() {
        let t = Triangle::new(Point::new(0, 0), Point::new(1, 1), Point::new(2, 2));
        assert!(!t.is_valid());
        let t = Triangle::new(
            Point::new(0.0f32, 0.0),
            Point::new(1.1, 1.1),
            Point::new(2.2, 2.2),
        );
        assert!(!t.is_valid());
    }

    #[test]
    fn collinear_text_input_fails() {
        let err = "0 0 1 1 2 2".parse::<Triangle<i32>>().unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidGeometry {
                kind: ShapeKind::Triangle
            }
        ));
    }

    #[test]
    fn rotations_compare_equal() {
        let a = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 4));
        let b = Triangle::new(Point::new(0, 4), Point::new(0, 0), Point::new(3, 0));
        let mirrored = Triangle::new(Point::new(0, 0), Point::new(0, 4), Point::new(3, 0));
        assert_eq!(a, b);
        assert_ne!(a, mirrored);
    }
}
