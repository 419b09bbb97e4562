use super::*;
use crate::body::compute_body;
use crate::fixtures::{unreachable_corner, violin};
use approx::assert_relative_eq;

const TOL: f64 = 1e-9;

fn corners() -> (BodyGeometry, CornerGeometry) {
    let params = violin();
    let body = compute_body(&params).unwrap();
    let corners = compute_corners(&params, &body).unwrap();
    (body, corners)
}

fn assert_point(actual: Vec2, x: f64, y: f64) {
    assert_relative_eq!(actual.x, x, epsilon = 1e-3);
    assert_relative_eq!(actual.y, y, epsilon = 1e-3);
}

#[test]
fn test_anchor_touches_waist_line() {
    let (body, corners) = corners();
    let outer = corners.anchor.outer;
    let waist_x = body.centerline_x() - body.waist_width / 2.0;
    assert_relative_eq!(outer.center.x + outer.radius, waist_x, epsilon = TOL);
    assert_eq!(outer.center.y, body.waist_height);
    assert_eq!(corners.anchor.inner.center, outer.center);
}

#[test]
fn test_reference_pattern_corner_points() {
    let (_, corners) = corners();
    assert_point(corners.anchor.center(), 21.002, 199.789);
    assert_point(corners.upper.tip, 29.049, 219.188);
    assert_point(corners.lower.tip, 25.779, 179.337);
    assert_point(corners.upper.bout_blend.center, 18.206, 239.077);
    assert_point(corners.lower.bout_blend.center, 4.446, 156.666);
    assert_point(corners.upper.waist_blend.center, 38.355, 209.282);
    assert_point(corners.lower.waist_blend.center, 36.416, 190.700);
    assert_relative_eq!(corners.upper.bout_blend.radius, 22.653, epsilon = 1e-3);
    assert_relative_eq!(corners.lower.bout_blend.radius, 31.129, epsilon = 1e-3);
}

#[test]
fn test_tip_lies_on_inner_anchor_and_both_blends() {
    let (_, corners) = corners();
    for corner in [corners.upper, corners.lower] {
        assert!(corners.anchor.inner.contains_on_curve(corner.tip, 1e-9));
        assert!(corner.bout_blend.contains_on_curve(corner.tip, 1e-9));
        assert!(corner.waist_blend.contains_on_curve(corner.tip, 1e-9));
    }
}

#[test]
fn test_blends_touch_their_parent_circles() {
    let (body, corners) = corners();
    for (corner, bout) in [(corners.upper, body.upper_bout), (corners.lower, body.lower_bout)] {
        assert!(bout.touches_externally(&corner.bout_blend, 1e-9));
        assert!(body.center_bout.touches_internally(&corner.waist_blend, 1e-9));

        assert!(bout.contains_on_curve(corner.bout_tangency, 1e-9));
        assert!(corner.bout_blend.contains_on_curve(corner.bout_tangency, 1e-9));
        assert!(body.center_bout.contains_on_curve(corner.waist_tangency, 1e-9));
        assert!(corner.waist_blend.contains_on_curve(corner.waist_tangency, 1e-9));
    }
}

#[test]
fn test_upper_blend_follows_upper_bout_not_minor_circle() {
    let (body, corners) = corners();
    let blend = corners.upper.bout_blend;
    assert!(body.upper_bout.touches_externally(&blend, 1e-9));
    assert!(!body.upper_minor.touches_externally(&blend, 1e-6));
}

#[test]
fn test_blend_radius_is_vertical_gap_to_bout_reference() {
    let (_, corners) = corners();
    assert_relative_eq!(
        corners.upper.bout_blend.radius,
        corners.upper.bout_ref.y - corners.upper.tip.y,
        epsilon = TOL
    );
    assert_relative_eq!(
        corners.lower.bout_blend.radius,
        corners.lower.tip.y - corners.lower.bout_ref.y,
        epsilon = TOL
    );
    assert_relative_eq!(
        corners.upper.waist_blend.radius,
        0.6 * corners.upper.bout_blend.radius,
        epsilon = TOL
    );
}

#[test]
fn test_mirrored_corners() {
    let (body, corners) = corners();
    let mirror = body.mirror();
    let right = corners.mirrored(&mirror);
    assert_relative_eq!(right.upper.tip.x, 2.0 * body.lower_radius - corners.upper.tip.x, epsilon = TOL);
    assert_eq!(right.upper.tip.y, corners.upper.tip.y);
    assert_eq!(right.lower.waist_blend.radius, corners.lower.waist_blend.radius);
    let back = right.mirrored(&mirror);
    assert_relative_eq!(back.upper.bout_tangency.x, corners.upper.bout_tangency.x, epsilon = TOL);
    assert_eq!(right.corner(Bout::Lower).bout, Bout::Lower);
}

#[test]
fn test_unreachable_bout_is_geometry_error() {
    let params = unreachable_corner();
    let body = compute_body(&params).unwrap();
    let err = compute_corners(&params, &body).unwrap_err();
    assert!(matches!(err, OutlineError::Geometry { .. }));
    assert!(err.to_string().contains("bout blend"));
}

#[test]
fn test_oversized_waist_blend_is_configuration_error() {
    let params = ShapeParameters {
        upper_blend_ratio: 5.0,
        ..violin()
    };
    let body = compute_body(&params).unwrap();
    let err = compute_corners(&params, &body).unwrap_err();
    assert!(matches!(err, OutlineError::Configuration { .. }));
    assert!(err.to_string().contains("upper"));
}
