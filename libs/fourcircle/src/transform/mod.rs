//! Reflection across the vertical centerline.
//!
//! All right-side geometry is derived from the left side through this one
//! transform, so the left-side constructions stay the single source of truth.

use crate::core::{circle::Circle, vec2::Vec2};

/// Mirror across the vertical line `x = axis_x`.
///
/// # Examples
/// ```
/// use fourcircle::{transform::Mirror, Vec2};
///
/// let mirror = Mirror::about(10.0);
/// assert_eq!(mirror.point(Vec2::new(4.0, 7.0)), Vec2::new(16.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    /// X coordinate of the mirror axis.
    pub axis_x: f64,
}

impl Mirror {
    /// Mirror about the vertical line through `axis_x`.
    #[must_use]
    pub const fn about(axis_x: f64) -> Self {
        Self { axis_x }
    }

    /// Reflects a point.
    #[must_use]
    pub fn point(&self, p: Vec2) -> Vec2 {
        Vec2::new(2.0 * self.axis_x - p.x, p.y)
    }

    /// Reflects a circle (its center; the radius is unchanged).
    #[must_use]
    pub fn circle(&self, c: &Circle) -> Circle {
        Circle::new(self.point(c.center), c.radius)
    }
}

/// Geometry that can be reflected by a [`Mirror`].
pub trait Reflect {
    /// Returns the mirror image of `self`.
    #[must_use]
    fn reflect(&self, mirror: &Mirror) -> Self;
}

impl Reflect for Vec2 {
    fn reflect(&self, mirror: &Mirror) -> Self {
        mirror.point(*self)
    }
}

impl Reflect for Circle {
    fn reflect(&self, mirror: &Mirror) -> Self {
        mirror.circle(self)
    }
}
