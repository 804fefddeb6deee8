//! Planar shapes over a generic coordinate type, and a growable collection of
//! shared shape handles.
//!
//! Layout
//! - `point`: `Point<N>` with tolerance equality.
//! - `shape`: the closed family `Shape<N> = Square | Rectangle | Triangle`.
//! - `collection`: `ShapeCollection<N>`, insertion-ordered, order-preserving erase.
//! - `reader`: whitespace-token input shared by every text-reading path.
//!
//! Conventions
//! - Coordinates live in `N` (any primitive integer or float). Metric
//!   quantities (lengths, areas, dot products) are evaluated in `f64`.
//! - Constructing a shape from points never validates it; reading one from
//!   text always does.

pub mod cfg;
pub mod collection;
pub mod error;
pub mod point;
pub mod reader;
pub mod scalar;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collection::{ShapeCollection, ShapeHandle};
pub use error::{Result, ShapeError};
pub use point::Point;
pub use reader::TokenReader;
pub use scalar::Coord;
pub use shape::{Rectangle, Shape, ShapeKind, Square, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collection::{ShapeCollection, ShapeHandle};
    pub use crate::error::{Result, ShapeError};
    pub use crate::point::Point;
    pub use crate::reader::TokenReader;
    pub use crate::scalar::Coord;
    pub use crate::shape::{Rectangle, Shape, ShapeKind, Square, Triangle};
}
