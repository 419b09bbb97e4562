//! Construction circles and reference markers for drawing overlays.

use serde::Serialize;

use super::Side;
use crate::body::BodyGeometry;
use crate::core::{circle::Circle, vec2::Vec2};
use crate::corner::{BoutCorner, CornerGeometry};
use crate::transform::Reflect;

/// What a construction circle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleRole {
    /// Lower bout.
    LowerBout,
    /// Upper bout.
    UpperBout,
    /// Center bout.
    CenterBout,
    /// Lower minor circle.
    LowerMinor,
    /// Upper minor circle.
    UpperMinor,
    /// Bottom end-arc.
    LowerEnd,
    /// Top end-arc.
    UpperEnd,
    /// Outer corner anchor circle.
    OuterCorner,
    /// Inner corner anchor circle.
    InnerCorner,
    /// Upper waist blend.
    UpperWaistBlend,
    /// Upper bout blend.
    UpperBoutBlend,
    /// Lower waist blend.
    LowerWaistBlend,
    /// Lower bout blend.
    LowerBoutBlend,
}

/// A labelled circle of the construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstructionCircle {
    /// What the circle is.
    pub role: CircleRole,
    /// Side of the body it belongs to.
    pub side: Side,
    /// The circle itself.
    pub circle: Circle,
}

/// What a reference marker marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceRole {
    /// Upper corner tip.
    UpperTip,
    /// Upper bout reference.
    UpperBoutRef,
    /// Upper angle reference.
    UpperAngleRef,
    /// Upper radius reference.
    UpperRadiusRef,
    /// Lower corner tip.
    LowerTip,
    /// Lower bout reference.
    LowerBoutRef,
    /// Lower angle reference.
    LowerAngleRef,
    /// Lower radius reference.
    LowerRadiusRef,
}

/// A labelled construction point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceMarker {
    /// What the point is.
    pub role: ReferenceRole,
    /// Side of the body it belongs to.
    pub side: Side,
    /// The point.
    pub point: Vec2,
}

/// Lists every construction circle, left and right.
///
/// Bouts and end-arcs sit on the centerline and appear once. Corner circles
/// are appended when `corners` is given.
#[must_use]
pub fn construction_circles(
    body: &BodyGeometry,
    corners: Option<&CornerGeometry>,
) -> Vec<ConstructionCircle> {
    let mirror = body.mirror();
    let mut circles = vec![
        centered(CircleRole::LowerBout, body.lower_bout),
        centered(CircleRole::UpperBout, body.upper_bout),
    ];
    for (role, circle) in [
        (CircleRole::CenterBout, body.center_bout),
        (CircleRole::LowerMinor, body.lower_minor),
        (CircleRole::UpperMinor, body.upper_minor),
    ] {
        circles.push(ConstructionCircle { role, side: Side::Left, circle });
        circles.push(ConstructionCircle {
            role,
            side: Side::Right,
            circle: circle.reflect(&mirror),
        });
    }
    circles.push(centered(CircleRole::LowerEnd, body.lower_end));
    circles.push(centered(CircleRole::UpperEnd, body.upper_end));

    if let Some(corners) = corners {
        for (side, geometry) in [(Side::Left, *corners), (Side::Right, corners.mirrored(&mirror))] {
            let blends = [
                (CircleRole::OuterCorner, geometry.anchor.outer),
                (CircleRole::InnerCorner, geometry.anchor.inner),
                (CircleRole::UpperWaistBlend, geometry.upper.waist_blend),
                (CircleRole::UpperBoutBlend, geometry.upper.bout_blend),
                (CircleRole::LowerWaistBlend, geometry.lower.waist_blend),
                (CircleRole::LowerBoutBlend, geometry.lower.bout_blend),
            ];
            circles.extend(
                blends
                    .into_iter()
                    .map(|(role, circle)| ConstructionCircle { role, side, circle }),
            );
        }
    }

    circles
}

/// Lists the corner tips and reference points of both sides.
#[must_use]
pub fn reference_points(body: &BodyGeometry, corners: &CornerGeometry) -> Vec<ReferenceMarker> {
    let mirror = body.mirror();
    let mut markers = Vec::with_capacity(16);
    for (side, geometry) in [(Side::Left, *corners), (Side::Right, corners.mirrored(&mirror))] {
        markers.extend(corner_markers(side, &geometry.upper, UPPER));
        markers.extend(corner_markers(side, &geometry.lower, LOWER));
    }
    markers
}

const UPPER: [ReferenceRole; 4] = [
    ReferenceRole::UpperTip,
    ReferenceRole::UpperBoutRef,
    ReferenceRole::UpperAngleRef,
    ReferenceRole::UpperRadiusRef,
];
const LOWER: [ReferenceRole; 4] = [
    ReferenceRole::LowerTip,
    ReferenceRole::LowerBoutRef,
    ReferenceRole::LowerAngleRef,
    ReferenceRole::LowerRadiusRef,
];

fn corner_markers(
    side: Side,
    corner: &BoutCorner,
    roles: [ReferenceRole; 4],
) -> impl Iterator<Item = ReferenceMarker> {
    let points = [corner.tip, corner.bout_ref, corner.angle_ref, corner.radius_ref];
    roles
        .into_iter()
        .zip(points)
        .map(move |(role, point)| ReferenceMarker { role, side, point })
}

fn centered(role: CircleRole, circle: Circle) -> ConstructionCircle {
    ConstructionCircle {
        role,
        side: Side::Center,
        circle,
    }
}
