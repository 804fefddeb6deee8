use super::*;
use crate::error::ShapeError;
use proptest::prelude::*;

fn unit_square_f64() -> [Point<f64>; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

#[test]
fn variant_mismatch_is_unequal() {
    let sq: Shape<f64> = Square::from_vertices(unit_square_f64()).into();
    let rect: Shape<f64> = Rectangle::from_vertices(unit_square_f64()).into();
    assert!(sq.is_valid() && rect.is_valid());
    assert_ne!(sq, rect);
    assert_eq!(sq, sq.clone());
}

#[test]
fn dispatch_matches_variant() {
    let t: Shape<i32> =
        Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)).into();
    assert_eq!(t.kind(), ShapeKind::Triangle);
    assert_eq!(t.vertices().len(), t.kind().vertex_count());
    assert!((t.area() - 6.0).abs() < 1e-9);
    let c = t.centroid();
    assert_eq!((c.x(), c.y()), (1, 1));
    assert_eq!(t.to_string(), "Triangle: (0, 0), (3, 0), (0, 4)");
}

#[test]
fn read_by_kind() {
    for kind in ShapeKind::ALL {
        let text = match kind {
            ShapeKind::Square => "1 1 3 1 3 3 1 3",
            ShapeKind::Rectangle => "0 0 4 0 4 1 0 1",
            ShapeKind::Triangle => "1 1 5 1 3 5",
        };
        let mut r = TokenReader::from_text(text);
        let shape = Shape::<f64>::read(kind, &mut r).unwrap();
        assert_eq!(shape.kind(), kind);
        assert!(shape.is_valid());
    }
}

#[test]
fn collinear_triangle_check_and_stream_agree() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let direct: Shape<f64> = Triangle::from_vertices(pts).into();
    assert!(!direct.is_valid());
    let mut r = TokenReader::from_text("0 0 1 1 2 2");
    assert!(matches!(
        Shape::<f64>::read(ShapeKind::Triangle, &mut r),
        Err(ShapeError::InvalidGeometry {
            kind: ShapeKind::Triangle
        })
    ));
}

#[test]
fn read_into_keeps_variant() {
    let mut shape: Shape<i32> = Rectangle::default().into();
    let mut r = TokenReader::from_text("0 0 6 0 6 3 0 3");
    shape.read_into(&mut r).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert!((shape.area() - 18.0).abs() < 1e-9);
}

#[test]
fn small_integer_centroid_does_not_overflow() {
    let sq = Square::new(
        Point::new(10000i16, 10000),
        Point::new(20000, 10000),
        Point::new(20000, 20000),
        Point::new(10000, 20000),
    );
    assert!(sq.is_valid());
    let c = sq.centroid();
    assert_eq!((c.x(), c.y()), (15000, 15000));

    let t = Triangle::new(Point::new(200u8, 0), Point::new(250, 0), Point::new(250, 100));
    let c = t.centroid();
    assert_eq!((c.x(), c.y()), (233, 33));
}

#[test]
fn kind_display() {
    let names: Vec<String> = ShapeKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(names, ["Square", "Rectangle", "Triangle"]);
}

fn rotated_square(side: f64, theta: f64, cx: f64, cy: f64) -> Square<f64> {
    let (s, c) = theta.sin_cos();
    let u = (side * c, side * s);
    let v = (-side * s, side * c);
    Square::new(
        Point::new(cx, cy),
        Point::new(cx + u.0, cy + u.1),
        Point::new(cx + u.0 + v.0, cy + u.1 + v.1),
        Point::new(cx + v.0, cy + v.1),
    )
}

proptest! {
    #[test]
    fn rotated_squares_stay_valid(
        side in 0.1f64..20.0,
        theta in 0.0f64..std::f64::consts::TAU,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0
    ) {
        let sq = rotated_square(side, theta, cx, cy);
        prop_assert!(sq.is_valid());
        prop_assert!((sq.area() - side * side).abs() < 1e-3);
    }

    #[test]
    fn axis_rectangles_area_is_w_times_h(w in 0.1f64..30.0, h in 0.1f64..30.0) {
        let r = Rectangle::new(
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        );
        prop_assert!(r.is_valid());
        prop_assert!((r.area() - w * h).abs() < 1e-3);
    }

    #[test]
    fn every_rotation_is_equal_reversal_is_not(
        side in 0.5f64..10.0,
        theta in 0.0f64..std::f64::consts::TAU,
        k in 0usize..4
    ) {
        let sq = rotated_square(side, theta, 0.0, 0.0);
        let mut v = *sq.vertices();
        v.rotate_left(k);
        prop_assert_eq!(&Square::from_vertices(v), &sq);
        v.reverse();
        prop_assert_ne!(&Square::from_vertices(v), &sq);
    }

    #[test]
    fn centroid_is_vertex_mean(raw in proptest::array::uniform6(-100i64..100)) {
        let t = Triangle::new(
            Point::new(raw[0], raw[1]),
            Point::new(raw[2], raw[3]),
            Point::new(raw[4], raw[5]),
        );
        let c = t.centroid();
        prop_assert_eq!(c.x(), (raw[0] + raw[2] + raw[4]) / 3);
        prop_assert_eq!(c.y(), (raw[1] + raw[3] + raw[5]) / 3);
    }

    #[test]
    fn i16_centroid_matches_wide_mean(raw in proptest::array::uniform8(any::<i16>())) {
        let pts: [Point<i16>; 4] =
            std::array::from_fn(|i| Point::new(raw[2 * i], raw[2 * i + 1]));
        let c = Rectangle::from_vertices(pts).centroid();
        let sum = |k: usize| (0..4).map(|i| i64::from(raw[2 * i + k])).sum::<i64>();
        prop_assert_eq!(i64::from(c.x()), sum(0) / 4);
        prop_assert_eq!(i64::from(c.y()), sum(1) / 4);
    }
}
