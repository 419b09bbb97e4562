//! # Corner Blender
//!
//! Builds the pointed corners between each bout and the waist.
//!
//! Each corner is two blend circles meeting at a corner tip: a bout blend
//! touching the bout circle from outside and a waist blend touching the
//! center-bout circle from inside. Their placement is steered by a shared
//! anchor next to the waist and two reference points on the bout's
//! horizontal axis:
//!
//! 1. the tip sits on the inner anchor circle, in the direction of the
//!    angle reference;
//! 2. the line from the radius reference to the anchor meets the bout at the
//!    bout reference, whose height above (upper) or below (lower) the tip is
//!    the bout-blend radius;
//! 3. the waist-blend radius is that radius times `bu` or `bl`.
//!
//! Only the left corners are constructed. The right side is
//! [`CornerGeometry::mirrored`].

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::body::BodyGeometry;
use crate::core::{
    circle::Circle,
    vec2::{toward, Vec2},
};
use crate::error::{OutlineError, Result};
use crate::params::ShapeParameters;
use crate::primitives::intersect::{circle_circle_intersect, line_circle_intersect, Pick};
use crate::transform::{Mirror, Reflect};

// =============================================================================
// TYPES
// =============================================================================

/// Which bout a corner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bout {
    /// Corner between the upper bout and the waist.
    Upper,
    /// Corner between the lower bout and the waist.
    Lower,
}

impl Bout {
    /// The bout blend sits on the waist side of the bout circle.
    fn blend_pick(self) -> Pick {
        match self {
            Bout::Upper => Pick::MaxY,
            Bout::Lower => Pick::MinY,
        }
    }

    fn waist_pick(self) -> Pick {
        match self {
            Bout::Upper => Pick::MinY,
            Bout::Lower => Pick::MaxY,
        }
    }
}

impl fmt::Display for Bout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bout::Upper => write!(f, "upper"),
            Bout::Lower => write!(f, "lower"),
        }
    }
}

/// Concentric corner circles next to the waist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerAnchor {
    /// Outer circle, radius `rl·b1`, touching the waist line.
    pub outer: Circle,
    /// Inner circle, radius `rl·b2`, carrying both corner tips.
    pub inner: Circle,
}

impl CornerAnchor {
    /// Shared center of both circles.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.outer.center
    }
}

/// Construction of one corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoutCorner {
    /// Which bout this corner belongs to.
    pub bout: Bout,
    /// Point on the bout axis steering the direction of the tip.
    pub angle_ref: Vec2,
    /// Point on the bout axis steering the bout-blend radius.
    pub radius_ref: Vec2,
    /// Pointed end of the corner, shared by both blend circles.
    pub tip: Vec2,
    /// Where the radius reference line meets the bout circle.
    pub bout_ref: Vec2,
    /// Blend between the bout circle and the tip.
    pub bout_blend: Circle,
    /// Blend between the tip and the center-bout circle.
    pub waist_blend: Circle,
    /// Contact point of the bout blend with the bout circle.
    pub bout_tangency: Vec2,
    /// Contact point of the waist blend with the center-bout circle.
    pub waist_tangency: Vec2,
}

/// Both left corners plus their anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerGeometry {
    /// Shared corner anchor.
    pub anchor: CornerAnchor,
    /// Upper corner.
    pub upper: BoutCorner,
    /// Lower corner.
    pub lower: BoutCorner,
}

impl CornerGeometry {
    /// Right-side corners, reflected from the left side.
    #[must_use]
    pub fn mirrored(&self, mirror: &Mirror) -> Self {
        self.reflect(mirror)
    }

    /// Corner for `bout`.
    #[must_use]
    pub fn corner(&self, bout: Bout) -> &BoutCorner {
        match bout {
            Bout::Upper => &self.upper,
            Bout::Lower => &self.lower,
        }
    }
}

impl Reflect for CornerAnchor {
    fn reflect(&self, mirror: &Mirror) -> Self {
        Self {
            outer: self.outer.reflect(mirror),
            inner: self.inner.reflect(mirror),
        }
    }
}

impl Reflect for BoutCorner {
    fn reflect(&self, mirror: &Mirror) -> Self {
        Self {
            bout: self.bout,
            angle_ref: self.angle_ref.reflect(mirror),
            radius_ref: self.radius_ref.reflect(mirror),
            tip: self.tip.reflect(mirror),
            bout_ref: self.bout_ref.reflect(mirror),
            bout_blend: self.bout_blend.reflect(mirror),
            waist_blend: self.waist_blend.reflect(mirror),
            bout_tangency: self.bout_tangency.reflect(mirror),
            waist_tangency: self.waist_tangency.reflect(mirror),
        }
    }
}

impl Reflect for CornerGeometry {
    fn reflect(&self, mirror: &Mirror) -> Self {
        Self {
            anchor: self.anchor.reflect(mirror),
            upper: self.upper.reflect(mirror),
            lower: self.lower.reflect(mirror),
        }
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Computes both left corners.
///
/// # Errors
///
/// - [`OutlineError::Geometry`] when a required intersection does not exist
/// - [`OutlineError::Configuration`] when a blend radius is not positive or
///   a waist blend does not fit inside the center-bout circle
pub fn compute_corners(params: &ShapeParameters, body: &BodyGeometry) -> Result<CornerGeometry> {
    let rl = body.lower_radius;
    let outer_radius = rl * params.outer_corner_ratio;
    let center = Vec2::new(
        body.centerline_x() - body.waist_width / 2.0 - outer_radius,
        body.waist_height,
    );
    let anchor = CornerAnchor {
        outer: Circle::new(center, outer_radius),
        inner: Circle::new(center, rl * params.inner_corner_ratio),
    };

    debug!(center = ?anchor.center(), outer_radius, "Placed corner anchor");

    let upper_radius = body.upper_bout.radius;
    let upper = blend_corner(
        BlendInput {
            bout: Bout::Upper,
            circle: body.upper_bout,
            angle_offset: upper_radius * params.upper_angle_ref,
            radius_offset: upper_radius * params.upper_radius_ref,
            blend_ratio: params.upper_blend_ratio,
        },
        &anchor,
        &body.center_bout,
    )?;
    let lower = blend_corner(
        BlendInput {
            bout: Bout::Lower,
            circle: body.lower_bout,
            angle_offset: rl * params.lower_angle_ref,
            radius_offset: rl * params.lower_radius_ref,
            blend_ratio: params.lower_blend_ratio,
        },
        &anchor,
        &body.center_bout,
    )?;

    info!(
        upper_tip = ?upper.tip,
        lower_tip = ?lower.tip,
        "Corners computed"
    );

    Ok(CornerGeometry {
        anchor,
        upper,
        lower,
    })
}

struct BlendInput {
    bout: Bout,
    circle: Circle,
    angle_offset: f64,
    radius_offset: f64,
    blend_ratio: f64,
}

fn blend_corner(input: BlendInput, anchor: &CornerAnchor, center_bout: &Circle) -> Result<BoutCorner> {
    let BlendInput {
        bout,
        circle,
        angle_offset,
        radius_offset,
        blend_ratio,
    } = input;

    let angle_ref = Vec2::new(circle.center.x - angle_offset, circle.center.y);
    let radius_ref = Vec2::new(circle.center.x - radius_offset, circle.center.y);
    let tip = toward(anchor.center(), angle_ref, anchor.inner.radius);

    let bout_ref = line_circle_intersect(circle.center, circle.radius, radius_ref, anchor.center())?
        .require(Pick::MinX, &format!("{bout} bout reference"))?;

    let blend_radius = match bout {
        Bout::Upper => bout_ref.y - tip.y,
        Bout::Lower => tip.y - bout_ref.y,
    };
    if blend_radius.is_nan() || blend_radius <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "{bout} corner tip lies beyond its bout reference (blend radius {blend_radius})"
        )));
    }
    let waist_radius = blend_ratio * blend_radius;
    let waist_reach = center_bout.radius - waist_radius;
    if waist_reach <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "{bout} waist blend radius {waist_radius} does not fit inside the center bout"
        )));
    }

    let blend_center = circle_circle_intersect(tip, blend_radius, circle.center, circle.radius + blend_radius)
        .require(bout.blend_pick(), &format!("{bout} bout blend"))?;
    let waist_center = circle_circle_intersect(tip, waist_radius, center_bout.center, waist_reach)
        .require(bout.waist_pick(), &format!("{bout} waist blend"))?;

    let bout_tangency = line_circle_intersect(circle.center, circle.radius, blend_center, circle.center)?
        .require(Pick::MinX, &format!("{bout} bout tangency"))?;
    let waist_tangency =
        line_circle_intersect(center_bout.center, center_bout.radius, waist_center, center_bout.center)?
            .require(Pick::MaxX, &format!("{bout} waist tangency"))?;

    debug!(
        corner = %bout,
        blend_radius,
        waist_radius,
        "Blended corner"
    );

    Ok(BoutCorner {
        bout,
        angle_ref,
        radius_ref,
        tip,
        bout_ref,
        bout_blend: Circle::new(blend_center, blend_radius),
        waist_blend: Circle::new(waist_center, waist_radius),
        bout_tangency,
        waist_tangency,
    })
}

#[cfg(test)]
mod tests;
