//! Closed family of planar shapes.
//!
//! Purpose
//! - `Shape<N>` is a sum type over the three variants; every operation
//!   (area, centroid, validity, equality, text I/O) dispatches by `match`.
//! - Variants own their vertices inline; no sharing, no back-references.
//!
//! Conventions
//! - Equality first compares the variant tag, then the vertex sequences up
//!   to cyclic rotation (reflections are unequal).
//! - Direct construction never validates; `read`/`FromStr` always do.
//!
//! Code cross-refs: `Square`, `Rectangle`, `Triangle`, `util::cyclic_eq`

mod rectangle;
mod square;
mod triangle;
mod util;

use std::cell::RefCell;
use std::fmt;
use std::io::BufRead;
use std::rc::Rc;

pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

use crate::collection::ShapeHandle;
use crate::error::Result;
use crate::point::Point;
use crate::reader::TokenReader;
use crate::scalar::Coord;

/// Variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
    ];

    #[inline]
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Square | ShapeKind::Rectangle => 4,
            ShapeKind::Triangle => 3,
        }
    }

    /// Tag used in text output.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug)]
pub enum Shape<N> {
    Square(Square<N>),
    Rectangle(Rectangle<N>),
    Triangle(Triangle<N>),
}

impl<N: Coord> Shape<N> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Vertices in caller order (3 or 4 of them).
    pub fn vertices(&self) -> &[Point<N>] {
        match self {
            Shape::Square(s) => s.vertices().as_slice(),
            Shape::Rectangle(r) => r.vertices().as_slice(),
            Shape::Triangle(t) => t.vertices().as_slice(),
        }
    }

    /// Mean of the vertices, computed in `N`.
    pub fn centroid(&self) -> Point<N> {
        match self {
            Shape::Square(s) => s.centroid(),
            Shape::Rectangle(r) => r.centroid(),
            Shape::Triangle(t) => t.centroid(),
        }
    }

    /// Area in `f64`, whatever `N` is.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Square(s) => s.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Triangle(t) => t.area(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Shape::Square(s) => s.is_valid(),
            Shape::Rectangle(r) => r.is_valid(),
            Shape::Triangle(t) => t.is_valid(),
        }
    }

    /// Read a validated shape of the given kind.
    pub fn read<R: BufRead>(kind: ShapeKind, reader: &mut TokenReader<R>) -> Result<Self> {
        Ok(match kind {
            ShapeKind::Square => Shape::Square(Square::read(reader)?),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::read(reader)?),
            ShapeKind::Triangle => Shape::Triangle(Triangle::read(reader)?),
        })
    }

    /// Replace this shape's vertices from text, keeping its variant.
    pub fn read_into<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        match self {
            Shape::Square(s) => s.read_into(reader),
            Shape::Rectangle(r) => r.read_into(reader),
            Shape::Triangle(t) => t.read_into(reader),
        }
    }

    /// Wrap into a shared handle for `ShapeCollection::add`.
    pub fn into_handle(self) -> ShapeHandle<N> {
        Rc::new(RefCell::new(self))
    }
}

impl<N: Coord> PartialEq for Shape<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Square(a), Shape::Square(b)) => a == b,
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a == b,
            (Shape::Triangle(a), Shape::Triangle(b)) => a == b,
            _ => false,
        }
    }
}

impl<N: Coord> fmt::Display for Shape<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Square(s) => fmt::Display::fmt(s, f),
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl<N> From<Square<N>> for Shape<N> {
    fn from(s: Square<N>) -> Self {
        Shape::Square(s)
    }
}
impl<N> From<Rectangle<N>> for Shape<N> {
    fn from(r: Rectangle<N>) -> Self {
        Shape::Rectangle(r)
    }
}
impl<N> From<Triangle<N>> for Shape<N> {
    fn from(t: Triangle<N>) -> Self {
        Shape::Triangle(t)
    }
}

#[cfg(test)]
mod tests;
