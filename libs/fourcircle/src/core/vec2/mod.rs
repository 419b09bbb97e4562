//! 2D point/vector definitions for the outline kernel.
//!
//! Provides a type alias for `glam::DVec2` and the few helpers the
//! constructions need on top of it.

pub use glam::DVec2 as Vec2;

/// Moves `from` a distance `distance` toward `toward`.
///
/// Returns `from` unchanged when the two points coincide.
///
/// # Examples
/// ```
/// use fourcircle::core::vec2::{toward, Vec2};
///
/// let p = toward(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0);
/// assert_eq!(p, Vec2::new(3.0, 0.0));
/// ```
pub fn toward(from: Vec2, toward: Vec2, distance: f64) -> Vec2 {
    let delta = toward - from;
    let length = delta.length();
    if length == 0.0 {
        return from;
    }
    from + delta * (distance / length)
}

/// Returns `(min, max)` corners of the box enclosing `points`.
///
/// Returns `None` for an empty iterator.
pub fn bounds(points: impl IntoIterator<Item = Vec2>) -> Option<(Vec2, Vec2)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}
