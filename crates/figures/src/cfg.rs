//! Tolerance and sizing defaults (internal constants).
//!
//! Policy
//! - Fixed constants, no runtime knobs. Every tolerance-based comparison in
//!   the crate (point equality, side equality, right angles, degenerate
//!   triangles) uses the same `EPS`.

/// Absolute tolerance for coordinate and scalar comparisons.
pub const EPS: f64 = 1e-6;

/// Slot count of a freshly constructed `ShapeCollection`.
pub const INITIAL_CAPACITY: usize = 4;

/// Decimal places used by the collection's area/centroid listings.
pub const AREA_PRECISION: usize = 2;
