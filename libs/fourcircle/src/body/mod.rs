//! # Body Outline Builder
//!
//! Derives the main circle set of the four-circle construction from
//! [`ShapeParameters`].
//!
//! ## Frame
//!
//! Model units with y pointing up. The body's bounding box starts at the
//! origin, the centerline is `x = rl` and the outline runs from `(rl, 0)` at
//! the bottom to `(rl, h)` at the top. Only left-side circles are stored;
//! right-side circles are reflections through [`BodyGeometry::mirror`].
//!
//! ## Construction
//!
//! With `w = kc + kw/2`:
//!
//! ```text
//! kA  = √((1+kc)² − w²) − 1          kr1 = kml + √(1 + (1−kml)²)
//! kB  = √((ku+kc)² − w²) − ku        kr2 = kmu + √(ku² + (ku−kmu)²)
//! rl  = h / (kr1 + kr2 + kA + kB)
//! ```
//!
//! Consecutive circles along the outline touch: end-arc / minor circle
//! internally, minor circle / bout internally, bout / center bout externally.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{circle::Circle, vec2::Vec2};
use crate::error::{OutlineError, Result};
use crate::params::ShapeParameters;
use crate::transform::Mirror;

// =============================================================================
// BODY GEOMETRY
// =============================================================================

/// Main circles of the body outline, left side only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyGeometry {
    /// Body length `h`.
    pub body_length: f64,
    /// Lower-bout radius `rl`; also the x coordinate of the centerline.
    pub lower_radius: f64,
    /// Waist length `hc` between the two end-arc centers.
    pub waist_length: f64,
    /// Height `yc` of the narrowest point of the waist.
    pub waist_height: f64,
    /// Width of the body at the waist, `rl·kw`.
    pub waist_width: f64,
    /// End-arc closing the bottom of the body, radius `r1`.
    pub lower_end: Circle,
    /// End-arc closing the top of the body, radius `r2`.
    pub upper_end: Circle,
    /// Lower bout, radius `rl`, centered on the centerline.
    pub lower_bout: Circle,
    /// Upper bout, radius `rl·ku`, centered on the centerline.
    pub upper_bout: Circle,
    /// Left center-bout (waist) circle.
    pub center_bout: Circle,
    /// Left lower minor circle.
    pub lower_minor: Circle,
    /// Left upper minor circle.
    pub upper_minor: Circle,
}

/// Overall body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyDimensions {
    /// Body length.
    pub length: f64,
    /// Width across the lower bout.
    pub lower_width: f64,
    /// Width at the waist.
    pub center_width: f64,
    /// Width across the upper bout.
    pub upper_width: f64,
}

impl BodyGeometry {
    /// Centerline `x = rl`.
    #[must_use]
    pub fn centerline_x(&self) -> f64 {
        self.lower_radius
    }

    /// Reflection across the centerline.
    #[must_use]
    pub fn mirror(&self) -> Mirror {
        Mirror::about(self.centerline_x())
    }

    /// Bottom centerline point `(rl, 0)`, where the outline starts.
    #[must_use]
    pub fn bottom(&self) -> Vec2 {
        Vec2::new(self.centerline_x(), 0.0)
    }

    /// Top centerline point `(rl, h)`.
    #[must_use]
    pub fn top(&self) -> Vec2 {
        Vec2::new(self.centerline_x(), self.body_length)
    }

    /// Where the lower end-arc hands over to the lower minor circle.
    #[must_use]
    pub fn lower_end_tangency(&self) -> Vec2 {
        self.lower_end.point_toward(self.lower_minor.center)
    }

    /// Where the upper minor circle hands over to the upper end-arc.
    #[must_use]
    pub fn upper_end_tangency(&self) -> Vec2 {
        self.upper_end.point_toward(self.upper_minor.center)
    }

    /// Leftmost point of the lower bout, shared with the lower minor circle.
    #[must_use]
    pub fn lower_bout_leftmost(&self) -> Vec2 {
        self.lower_bout.leftmost()
    }

    /// Leftmost point of the upper bout, shared with the upper minor circle.
    #[must_use]
    pub fn upper_bout_leftmost(&self) -> Vec2 {
        self.upper_bout.leftmost()
    }

    /// Upper-bout radius relative to the lower-bout radius.
    #[must_use]
    pub fn upper_ratio(&self) -> f64 {
        self.upper_bout.radius / self.lower_radius
    }

    /// Length and bout widths.
    #[must_use]
    pub fn dimensions(&self) -> BodyDimensions {
        BodyDimensions {
            length: self.body_length,
            lower_width: 2.0 * self.lower_bout.radius,
            center_width: self.waist_width,
            upper_width: 2.0 * self.upper_bout.radius,
        }
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Computes the body circles from validated parameters.
///
/// # Errors
///
/// [`OutlineError::Configuration`] when the parameters are invalid, a
/// square-root argument is negative or the length denominator is not
/// positive.
///
/// # Examples
/// ```
/// use fourcircle::{body::compute_body, params::ShapeParameters};
///
/// let params = ShapeParameters {
///     body_length: 356.0,
///     center_ratio: 0.9, upper_ratio: 0.8, waist_ratio: 1.0,
///     upper_minor_ratio: 0.45, lower_minor_ratio: 0.5,
///     outer_corner_ratio: 0.3, inner_corner_ratio: 0.2,
///     upper_blend_ratio: 0.6, lower_blend_ratio: 0.5,
///     upper_angle_ref: 0.5, upper_radius_ref: 0.3,
///     lower_angle_ref: 0.5, lower_radius_ref: 0.3,
/// };
/// let body = compute_body(&params).unwrap();
/// assert!((body.lower_radius - 105.0106).abs() < 1e-4);
/// assert_eq!(body.top().y, 356.0);
/// ```
pub fn compute_body(params: &ShapeParameters) -> Result<BodyGeometry> {
    params.validate()?;

    let h = params.body_length;
    let kc = params.center_ratio;
    let ku = params.upper_ratio;
    let kw = params.waist_ratio;
    let kmu = params.upper_minor_ratio;
    let kml = params.lower_minor_ratio;

    let reach = kc + kw / 2.0;
    let lower_rise = sqrt_checked("lower bout to waist", (1.0 + kc).powi(2) - reach * reach)?;
    let upper_rise = sqrt_checked("upper bout to waist", (ku + kc).powi(2) - reach * reach)?;

    let k_a = lower_rise - 1.0;
    let k_b = upper_rise - ku;
    let k_r1 = kml + (1.0 + (1.0 - kml).powi(2)).sqrt();
    let k_r2 = kmu + (ku * ku + (ku - kmu).powi(2)).sqrt();

    let denominator = k_r1 + k_r2 + k_a + k_b;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "ratios give a non-positive length denominator ({denominator})"
        )));
    }

    let rl = h / denominator;
    let hc = rl * (k_a + k_b);
    let r1 = rl * k_r1;
    let r2 = rl * k_r2;

    debug!(rl, r1, r2, hc, "Derived body radii");

    let lower_bout = Circle::new(Vec2::new(rl, r1 - rl), rl);
    let upper_bout = Circle::new(Vec2::new(rl, r1 + hc + rl * ku), rl * ku);
    let waist_height = lower_bout.center.y + rl * lower_rise;

    let body = BodyGeometry {
        body_length: h,
        lower_radius: rl,
        waist_length: hc,
        waist_height,
        waist_width: rl * kw,
        lower_end: Circle::new(Vec2::new(rl, r1), r1),
        upper_end: Circle::new(Vec2::new(rl, r1 + hc), r2),
        lower_bout,
        upper_bout,
        center_bout: Circle::new(Vec2::new(rl * (1.0 - reach), waist_height), rl * kc),
        lower_minor: Circle::new(Vec2::new(rl * kml, lower_bout.center.y), rl * kml),
        upper_minor: Circle::new(
            Vec2::new(rl * (1.0 - ku + kmu), upper_bout.center.y),
            rl * kmu,
        ),
    };

    info!(
        length = h,
        width = format!("{:.2}", 2.0 * rl),
        "Body circles computed"
    );

    Ok(body)
}

fn sqrt_checked(what: &str, value: f64) -> Result<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(OutlineError::configuration(format!(
            "waist ratios leave no room between {what} (square root of {value})"
        )));
    }
    Ok(value.sqrt())
}

#[cfg(test)]
mod tests;
