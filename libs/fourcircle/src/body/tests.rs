use super::*;
use crate::fixtures::violin;
use approx::assert_relative_eq;

const TOL: f64 = 1e-9;

fn body() -> BodyGeometry {
    compute_body(&violin()).unwrap()
}

#[test]
fn test_radii_match_reference_pattern() {
    let body = body();
    assert_relative_eq!(body.lower_radius, 105.010_574, epsilon = 1e-5);
    assert_relative_eq!(body.lower_end.radius, 169.910_678, epsilon = 1e-5);
    assert_relative_eq!(body.upper_end.radius, 138.951_300, epsilon = 1e-5);
    assert_relative_eq!(body.waist_length, 47.138_022, epsilon = 1e-5);
}

#[test]
fn test_end_arcs_span_body_length() {
    let body = body();
    assert_relative_eq!(body.lower_end.center.y - body.lower_end.radius, 0.0, epsilon = TOL);
    assert_relative_eq!(
        body.upper_end.center.y + body.upper_end.radius,
        body.body_length,
        epsilon = TOL
    );
    assert_eq!(body.bottom(), Vec2::new(body.lower_radius, 0.0));
}

#[test]
fn test_consecutive_circles_touch() {
    let body = body();
    assert!(body.lower_end.touches_internally(&body.lower_minor, TOL));
    assert!(body.lower_minor.touches_internally(&body.lower_bout, TOL));
    assert!(body.lower_bout.touches_externally(&body.center_bout, TOL));
    assert!(body.upper_bout.touches_externally(&body.center_bout, TOL));
    assert!(body.upper_bout.touches_internally(&body.upper_minor, TOL));
    assert!(body.upper_minor.touches_internally(&body.upper_end, TOL));
}

#[test]
fn test_handover_points_lie_on_both_circles() {
    let body = body();
    let t1 = body.lower_end_tangency();
    assert!(body.lower_end.contains_on_curve(t1, TOL));
    assert!(body.lower_minor.contains_on_curve(t1, TOL));
    let t2 = body.upper_end_tangency();
    assert!(body.upper_end.contains_on_curve(t2, TOL));
    assert!(body.upper_minor.contains_on_curve(t2, TOL));
    assert!(body.lower_minor.contains_on_curve(body.lower_bout_leftmost(), TOL));
    assert!(body.upper_minor.contains_on_curve(body.upper_bout_leftmost(), TOL));
}

#[test]
fn test_lower_bout_touches_left_edge() {
    let body = body();
    assert_relative_eq!(body.lower_bout_leftmost().x, 0.0, epsilon = TOL);
}

#[test]
fn test_dimensions() {
    let body = body();
    let dims = body.dimensions();
    assert_eq!(dims.length, 356.0);
    assert_relative_eq!(dims.lower_width, 2.0 * body.lower_radius);
    assert_relative_eq!(dims.upper_width, 0.8 * dims.lower_width, epsilon = TOL);
    assert_relative_eq!(dims.center_width, body.lower_radius, epsilon = TOL);
    assert_relative_eq!(body.upper_ratio(), 0.8, epsilon = TOL);
}

#[test]
fn test_mirror_is_centerline() {
    let body = body();
    let right = body.mirror().circle(&body.center_bout);
    assert_relative_eq!(
        right.center.x - body.centerline_x(),
        body.centerline_x() - body.center_bout.center.x,
        epsilon = TOL
    );
}

#[test]
fn test_scales_with_body_length() {
    let small = body();
    let large = compute_body(&violin().with_body_length(712.0).unwrap()).unwrap();
    assert_relative_eq!(large.lower_radius, 2.0 * small.lower_radius, epsilon = TOL);
    assert_relative_eq!(large.waist_height, 2.0 * small.waist_height, epsilon = TOL);
}

#[test]
fn test_wide_waist_is_rejected() {
    let params = ShapeParameters {
        waist_ratio: 1.7,
        ..violin()
    };
    let err = compute_body(&params).unwrap_err();
    assert!(matches!(err, OutlineError::Configuration { .. }));
    assert!(err.to_string().contains("upper bout"));
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let params = ShapeParameters {
        body_length: 0.0,
        ..violin()
    };
    assert!(compute_body(&params).is_err());
}
