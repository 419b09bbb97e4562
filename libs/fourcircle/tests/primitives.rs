use fourcircle::primitives::intersect::{
    circle_circle_intersect, line_circle_intersect, Intersections, Pick,
};
use fourcircle::{OutlineError, Vec2};

#[test]
fn equal_circles_meet_above_and_below_center_line() {
    let hits = circle_circle_intersect(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 5.0);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits.select(Pick::MaxY), Some(Vec2::new(4.0, 3.0)));
    assert_eq!(hits.select(Pick::MinY), Some(Vec2::new(4.0, -3.0)));
}

#[test]
fn diameter_meets_circle_at_both_ends() {
    let hits =
        line_circle_intersect(Vec2::ZERO, 5.0, Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)).unwrap();
    let mut points = hits.points();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(points, vec![Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)]);
}

#[test]
fn separate_circles_report_no_points() {
    let hits = circle_circle_intersect(Vec2::ZERO, 1.0, Vec2::new(3.0, 0.0), 1.0);
    assert_eq!(hits, Intersections::Empty);
    let err = hits.require(Pick::MinX, "test blend").unwrap_err();
    assert!(matches!(err, OutlineError::Geometry { .. }));
}
