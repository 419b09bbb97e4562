//! # Outline Path Assembly
//!
//! Chains the body and corner circles into one closed outline of circular
//! arcs.
//!
//! The path starts at the bottom centerline point and runs up the left
//! side, across the crown and back down the right side:
//!
//! ```text
//! lower end → lower minor → lower bout → lower bout blend → lower waist blend
//!   → center bout → upper waist blend → upper bout blend → upper bout
//!   → upper minor → crown (upper end) → mirrored left side, reversed
//! ```
//!
//! Every arc on the right is the matching left arc reflected across the
//! centerline and traversed backwards.

mod construction;
mod template;

pub use construction::{
    construction_circles, reference_points, CircleRole, ConstructionCircle, ReferenceMarker,
    ReferenceRole,
};
pub use template::{workshop_template, HoleRole, TemplateEdge, TemplateHole, WorkshopTemplate};

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{HALF_OUTLINE_SEGMENTS, OUTLINE_SEGMENTS};
use serde::Serialize;
use tracing::info;

use crate::body::BodyGeometry;
use crate::core::{
    circle::Circle,
    vec2::{bounds, Vec2},
};
use crate::corner::CornerGeometry;
use crate::transform::{Mirror, Reflect};

// =============================================================================
// ARC SEGMENTS
// =============================================================================

/// Direction an arc is traversed in, in the y-up model frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sweep {
    /// Decreasing polar angle.
    Clockwise,
    /// Increasing polar angle.
    CounterClockwise,
}

impl Sweep {
    /// The opposite direction.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Sweep::Clockwise => Sweep::CounterClockwise,
            Sweep::CounterClockwise => Sweep::Clockwise,
        }
    }
}

/// Which circle of the construction an arc belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    /// Bottom end-arc.
    LowerEnd,
    /// Lower minor circle.
    LowerMinor,
    /// Lower bout.
    LowerBout,
    /// Blend from the lower bout into the lower corner tip.
    LowerBoutBlend,
    /// Blend from the lower corner tip into the waist.
    LowerWaistBlend,
    /// Center bout (waist).
    CenterBout,
    /// Blend from the waist into the upper corner tip.
    UpperWaistBlend,
    /// Blend from the upper corner tip into the upper bout.
    UpperBoutBlend,
    /// Upper bout.
    UpperBout,
    /// Upper minor circle.
    UpperMinor,
    /// Top end-arc, crossing the centerline.
    UpperEnd,
}

/// Side of the centerline a piece of geometry lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Left of the centerline.
    Left,
    /// On or across the centerline.
    Center,
    /// Right of the centerline.
    Right,
}

impl Side {
    fn reflected(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Center => Side::Center,
            Side::Right => Side::Left,
        }
    }
}

/// A circular arc of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSegment {
    /// Construction circle the arc lies on.
    pub role: SegmentRole,
    /// Side of the body.
    pub side: Side,
    /// First point.
    pub start: Vec2,
    /// Last point.
    pub end: Vec2,
    /// Center of the arc's circle.
    pub center: Vec2,
    /// Radius of the arc's circle.
    pub radius: f64,
    /// Traversal direction.
    pub sweep: Sweep,
}

impl ArcSegment {
    fn on(role: SegmentRole, side: Side, circle: &Circle, start: Vec2, end: Vec2, sweep: Sweep) -> Self {
        Self {
            role,
            side,
            start,
            end,
            center: circle.center,
            radius: circle.radius,
            sweep,
        }
    }

    /// The circle the arc lies on.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Same arc traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            sweep: self.sweep.inverted(),
            ..*self
        }
    }

    /// Polar angle of `start` around the center.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        angle_of(self.center, self.start)
    }

    /// Polar angle of `end` around the center.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        angle_of(self.center, self.end)
    }

    /// Swept angle in `[0, 2π)`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.offset_of(self.end_angle())
    }

    /// Whether the arc passes through polar angle `angle`.
    #[must_use]
    pub fn covers_angle(&self, angle: f64) -> bool {
        self.offset_of(angle) <= self.span()
    }

    /// Point at fraction `t` of the sweep, `0` at `start` and `1` at `end`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec2 {
        let delta = match self.sweep {
            Sweep::CounterClockwise => self.span() * t,
            Sweep::Clockwise => -self.span() * t,
        };
        let angle = self.start_angle() + delta;
        self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Bounding box `(min, max)` of the arc, including axis extremes it
    /// passes through.
    #[must_use]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let extremes = [0.0, FRAC_PI_2, PI, -FRAC_PI_2]
            .into_iter()
            .filter(|&angle| self.covers_angle(angle))
            .map(|angle| self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius);
        let points = [self.start, self.end].into_iter().chain(extremes);
        bounds(points).unwrap_or((self.start, self.start))
    }

    /// Angle travelled from `start` to reach `angle`, in the sweep direction.
    fn offset_of(&self, angle: f64) -> f64 {
        let raw = match self.sweep {
            Sweep::CounterClockwise => angle - self.start_angle(),
            Sweep::Clockwise => self.start_angle() - angle,
        };
        raw.rem_euclid(TAU)
    }
}

impl Reflect for ArcSegment {
    fn reflect(&self, mirror: &Mirror) -> Self {
        Self {
            role: self.role,
            side: self.side.reflected(),
            start: self.start.reflect(mirror),
            end: self.end.reflect(mirror),
            center: self.center.reflect(mirror),
            radius: self.radius,
            sweep: self.sweep.inverted(),
        }
    }
}

fn angle_of(center: Vec2, point: Vec2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

// =============================================================================
// OUTLINE PATH
// =============================================================================

/// Closed outline made of arcs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlinePath {
    /// Where the path starts, the bottom centerline point.
    pub start: Vec2,
    /// Arcs in traversal order.
    pub segments: Vec<ArcSegment>,
    /// Whether the path returns to `start`.
    pub closed: bool,
}

impl OutlinePath {
    /// Number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the last arc.
    #[must_use]
    pub fn end(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// Arcs left of the centerline, bottom to top.
    #[must_use]
    pub fn left_side(&self) -> &[ArcSegment] {
        &self.segments[..HALF_OUTLINE_SEGMENTS.min(self.segments.len())]
    }

    /// Largest distance between the end of one arc and the start of the
    /// next, including the closing step back to `start`.
    #[must_use]
    pub fn max_gap(&self) -> f64 {
        let joints = self
            .segments
            .windows(2)
            .map(|pair| pair[0].end.distance(pair[1].start));
        let first = self.segments.first().map_or(0.0, |s| s.start.distance(self.start));
        let closing = if self.closed {
            self.end().distance(self.start)
        } else {
            0.0
        };
        joints.fold(first.max(closing), f64::max)
    }

    /// Bounding box `(min, max)` of the whole outline.
    #[must_use]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let corners = self.segments.iter().flat_map(|s| {
            let (min, max) = s.bounds();
            [min, max]
        });
        bounds(corners).unwrap_or((self.start, self.start))
    }
}

/// Assembles the closed outline from body and corner geometry.
///
/// The result always has [`OUTLINE_SEGMENTS`] arcs: ten on the left, the
/// crown arc and the ten left arcs mirrored.
#[must_use]
pub fn assemble_outline(body: &BodyGeometry, corners: &CornerGeometry) -> OutlinePath {
    let mirror = body.mirror();
    let left = left_arcs(body, corners);
    let upper_end_tangency = body.upper_end_tangency();
    let crown = ArcSegment::on(
        SegmentRole::UpperEnd,
        Side::Center,
        &body.upper_end,
        upper_end_tangency,
        mirror.point(upper_end_tangency),
        Sweep::Clockwise,
    );

    let mut segments = Vec::with_capacity(OUTLINE_SEGMENTS);
    segments.extend(left);
    segments.push(crown);
    segments.extend(left.iter().rev().map(|s| s.reflect(&mirror).reversed()));

    info!(segments = segments.len(), "Outline assembled");

    OutlinePath {
        start: body.bottom(),
        segments,
        closed: true,
    }
}

/// Left arcs from the bottom point up to the upper end-arc tangency.
fn left_arcs(body: &BodyGeometry, corners: &CornerGeometry) -> [ArcSegment; HALF_OUTLINE_SEGMENTS] {
    use SegmentRole::*;
    use Sweep::{Clockwise as Cw, CounterClockwise as Ccw};

    let (upper, lower) = (&corners.upper, &corners.lower);
    let lower_end_tangency = body.lower_end_tangency();
    let upper_end_tangency = body.upper_end_tangency();
    let lower_leftmost = body.lower_bout_leftmost();
    let upper_leftmost = body.upper_bout_leftmost();

    [
        ArcSegment::on(LowerEnd, Side::Left, &body.lower_end, body.bottom(), lower_end_tangency, Cw),
        ArcSegment::on(LowerMinor, Side::Left, &body.lower_minor, lower_end_tangency, lower_leftmost, Cw),
        ArcSegment::on(LowerBout, Side::Left, &body.lower_bout, lower_leftmost, lower.bout_tangency, Cw),
        ArcSegment::on(LowerBoutBlend, Side::Left, &lower.bout_blend, lower.bout_tangency, lower.tip, Ccw),
        ArcSegment::on(LowerWaistBlend, Side::Left, &lower.waist_blend, lower.tip, lower.waist_tangency, Ccw),
        ArcSegment::on(CenterBout, Side::Left, &body.center_bout, lower.waist_tangency, upper.waist_tangency, Ccw),
        ArcSegment::on(UpperWaistBlend, Side::Left, &upper.waist_blend, upper.waist_tangency, upper.tip, Ccw),
        ArcSegment::on(UpperBoutBlend, Side::Left, &upper.bout_blend, upper.tip, upper.bout_tangency, Ccw),
        ArcSegment::on(UpperBout, Side::Left, &body.upper_bout, upper.bout_tangency, upper_leftmost, Cw),
        ArcSegment::on(UpperMinor, Side::Left, &body.upper_minor, upper_leftmost, upper_end_tangency, Cw),
    ]
}
