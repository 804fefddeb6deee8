use std::fmt;

use num_traits::NumCast;

use crate::cfg::EPS;
use crate::point::Point;
use crate::scalar::Coord;

use super::ShapeKind;

/// Pairwise distinct under tolerance equality.
pub(crate) fn all_distinct<N: Coord>(pts: &[Point<N>]) -> bool {
    pts.iter()
        .enumerate()
        .all(|(i, p)| pts[i + 1..].iter().all(|q| p != q))
}

/// Lengths of the closed polygon edges `p[i] → p[(i+1) % K]`.
pub(crate) fn side_lengths<N: Coord, const K: usize>(pts: &[Point<N>; K]) -> [f64; K] {
    std::array::from_fn(|i| pts[i].distance(&pts[(i + 1) % K]))
}

/// `(p2 - p1) · (p4 - p1)`: zero iff the corner at `p1` is a right angle.
pub(crate) fn first_corner_dot<N: Coord>(pts: &[Point<N>; 4]) -> f64 {
    let origin = pts[0].to_vector();
    (pts[1].to_vector() - origin).dot(&(pts[3].to_vector() - origin))
}

#[inline]
pub(crate) fn near(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// Arithmetic mean of the vertices (truncates toward zero for integer types).
pub(crate) fn centroid<N: Coord>(pts: &[Point<N>]) -> Point<N> {
    Point::new(mean(pts, Point::x), mean(pts, Point::y))
}

/// Mean of one coordinate, accumulated wider than `N` so that small integer
/// types cannot overflow. Integers sum in `i128`, floats in `f64`.
fn mean<N: Coord>(pts: &[Point<N>], coord: impl Fn(&Point<N>) -> N) -> N {
    let count = pts.len();
    if count == 0 {
        return N::zero();
    }
    let exact = if N::is_integral() {
        pts.iter()
            .map(|p| coord(p).to_i128())
            .sum::<Option<i128>>()
            .and_then(|sum| <N as NumCast>::from(sum / count as i128))
    } else {
        None
    };
    exact
        .or_else(|| {
            let sum: f64 = pts.iter().map(|p| coord(p).as_f64()).sum();
            <N as NumCast>::from(sum / count as f64)
        })
        .unwrap_or_else(N::zero)
}

/// Heron's formula; the radicand is clamped so collinear input yields 0.
pub(crate) fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

/// True iff some cyclic rotation of `other` matches `this` pointwise.
///
/// Rotation only: a reversed vertex order is a different shape.
pub(crate) fn cyclic_eq<N: Coord>(this: &[Point<N>], other: &[Point<N>]) -> bool {
    let n = this.len();
    if n != other.len() {
        return false;
    }
    (0..n).any(|offset| (0..n).all(|i| this[i] == other[(i + offset) % n]))
}

/// `"<Kind>: (x1, y1), (x2, y2), ..."`, forwarding the formatter precision.
pub(crate) fn write_tagged<N: Coord>(
    f: &mut fmt::Formatter<'_>,
    kind: ShapeKind,
    pts: &[Point<N>],
) -> fmt::Result {
    write!(f, "{kind}: ")?;
    for (i, p) in pts.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(prec) => write!(f, "{p:.prec$}")?,
            None => write!(f, "{p}")?,
        }
    }
    Ok(())
}
