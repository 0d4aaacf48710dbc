// Path builder determinism, corner fallback and arc-length sampling.

use beam_core::*;

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn assert_near(a: Point, b: Point, tol: f32) {
    assert!(
        a.abs_diff_eq(b, tol),
        "expected ({}, {}) within {tol} of ({}, {})",
        a.x,
        a.y,
        b.x,
        b.y
    );
}

#[test]
fn build_path_is_deterministic() {
    for policy in [PathPolicy::Linear, PathPolicy::OrthogonalRounded] {
        let a = build_path(p(10.0, 20.0), p(250.0, 180.0), policy);
        let b = build_path(p(10.0, 20.0), p(250.0, 180.0), policy);
        assert_eq!(a, b);
    }
}

#[test]
fn linear_policy_is_a_straight_line() {
    let d = build_path(p(0.0, 0.0), p(120.0, 40.0), PathPolicy::Linear);
    assert!(d.is_straight());
    assert_eq!(d.as_str(), "M 0 0 L 120 40");
}

#[test]
fn orthogonal_policy_falls_back_when_horizontal_span_is_short() {
    let straight = build_path(p(0.0, 0.0), p(30.0, 200.0), PathPolicy::OrthogonalRounded);
    assert!(straight.is_straight());
    assert_eq!(
        straight,
        build_path(p(0.0, 0.0), p(30.0, 200.0), PathPolicy::Linear)
    );
}

#[test]
fn orthogonal_policy_falls_back_when_vertical_span_is_short() {
    let straight = build_path(p(0.0, 0.0), p(-200.0, -30.0), PathPolicy::OrthogonalRounded);
    assert!(straight.is_straight());
}

#[test]
fn orthogonal_policy_rounds_the_corner_when_both_spans_fit() {
    let d = build_path(p(0.0, 0.0), p(31.0, 200.0), PathPolicy::OrthogonalRounded);
    assert!(!d.is_straight());
    let path = MeasuredPath::parse(&d).expect("rounded path parses");
    assert_near(path.point_at_fraction(0.0).unwrap(), p(0.0, 0.0), 1e-3);
    assert_near(path.point_at_fraction(1.0).unwrap(), p(31.0, 200.0), 1e-3);
}

#[test]
fn rounded_path_length_is_shorter_than_the_sharp_corner() {
    let d = build_path(p(0.0, 0.0), p(100.0, 100.0), PathPolicy::OrthogonalRounded);
    let len = MeasuredPath::parse(&d).unwrap().length();
    // Two 85-unit runs plus a corner between the chord (~21.2) and the legs (30).
    assert!(len > 170.0 + 21.0 && len < 200.0, "length {len}");
}

#[test]
fn orthogonal_path_runs_horizontally_first() {
    let d = build_path(p(0.0, 0.0), p(-100.0, 100.0), PathPolicy::OrthogonalRounded);
    let path = MeasuredPath::parse(&d).unwrap();
    // 40 units along, still on the horizontal leg heading left.
    assert_near(path.point_at_length(40.0).unwrap(), p(-40.0, 0.0), 1e-2);
}

#[test]
fn sampling_a_straight_line_interpolates_linearly() {
    let d = build_path(p(0.0, 0.0), p(100.0, 0.0), PathPolicy::Linear);
    let path = MeasuredPath::parse(&d).unwrap();
    assert!((path.length() - 100.0).abs() < 1e-6);
    assert_near(path.point_at_fraction(0.5).unwrap(), p(50.0, 0.0), 1e-3);
    assert_near(path.point_at_length(12.5).unwrap(), p(12.5, 0.0), 1e-3);
}

#[test]
fn sampling_clamps_to_the_path_ends() {
    let d = build_path(p(0.0, 0.0), p(0.0, 80.0), PathPolicy::Linear);
    let path = MeasuredPath::parse(&d).unwrap();
    assert_near(path.point_at_length(-10.0).unwrap(), p(0.0, 0.0), 1e-3);
    assert_near(path.point_at_length(500.0).unwrap(), p(0.0, 80.0), 1e-3);
}

#[test]
fn sampling_rejects_non_finite_arc_length() {
    let d = build_path(p(0.0, 0.0), p(0.0, 80.0), PathPolicy::Linear);
    let path = MeasuredPath::parse(&d).unwrap();
    assert!(matches!(
        path.point_at_length(f64::NAN),
        Err(PathError::OutOfRange(_))
    ));
}

#[test]
fn zero_length_path_is_rejected() {
    let d = build_path(p(5.0, 5.0), p(5.0, 5.0), PathPolicy::Linear);
    assert_eq!(MeasuredPath::parse(&d).unwrap_err(), PathError::ZeroLength);
    let only_move = PathDescription::from_svg("M 5 5");
    assert_eq!(
        MeasuredPath::parse(&only_move).unwrap_err(),
        PathError::ZeroLength
    );
}

#[test]
fn malformed_path_data_is_reported() {
    let bad = PathDescription::from_svg("M 0 0 L ten 10");
    assert!(matches!(
        MeasuredPath::parse(&bad),
        Err(PathError::Malformed(_))
    ));
}
