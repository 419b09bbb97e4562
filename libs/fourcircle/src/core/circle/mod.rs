//! Circle value type used for every bout, end-arc and blend construction.

use serde::Serialize;

use crate::core::vec2::{toward, Vec2};

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    /// Center point.
    pub center: Vec2,
    /// Radius, positive for every circle the kernel produces.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    #[must_use]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point on the circle in the direction of `target` as seen from the
    /// center.
    ///
    /// # Examples
    /// ```
    /// use fourcircle::core::{circle::Circle, vec2::Vec2};
    ///
    /// let c = Circle::new(Vec2::ZERO, 2.0);
    /// assert_eq!(c.point_toward(Vec2::new(0.0, 10.0)), Vec2::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn point_toward(&self, target: Vec2) -> Vec2 {
        toward(self.center, target, self.radius)
    }

    /// Leftmost point of the circle.
    #[must_use]
    pub fn leftmost(&self) -> Vec2 {
        Vec2::new(self.center.x - self.radius, self.center.y)
    }

    /// Signed distance from `point` to the circle (positive outside).
    #[must_use]
    pub fn distance_to(&self, point: Vec2) -> f64 {
        self.center.distance(point) - self.radius
    }

    /// Whether `point` lies on the circle within `tolerance`.
    #[must_use]
    pub fn contains_on_curve(&self, point: Vec2, tolerance: f64) -> bool {
        self.distance_to(point).abs() <= tolerance
    }

    /// Whether `other` touches this circle from outside within `tolerance`.
    #[must_use]
    pub fn touches_externally(&self, other: &Circle, tolerance: f64) -> bool {
        (self.center.distance(other.center) - (self.radius + other.radius)).abs() <= tolerance
    }

    /// Whether `other` touches this circle from inside (or contains it
    /// touching) within `tolerance`.
    #[must_use]
    pub fn touches_internally(&self, other: &Circle, tolerance: f64) -> bool {
        (self.center.distance(other.center) - (self.radius - other.radius).abs()).abs() <= tolerance
    }
}
