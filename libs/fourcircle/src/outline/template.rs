//! Workshop half-template.
//!
//! A half-template is the left half of the outline, from the bottom
//! centerline point up to the top one, closed by a straight spine that
//! stands [`TEMPLATE_SPINE_WIDTH`] past the centerline. The hole layout marks
//! the bout centers and the positions of the end and corner clamps used to
//! hold the template against the mould.

use config::constants::{
    CORNER_CLAMP_SIZE, CORNER_CLAMP_STEP, END_CLAMP_GUIDE_OFFSET, END_CLAMP_SIZE,
    TEMPLATE_HOLE_DIAMETER, TEMPLATE_SPINE_WIDTH,
};
use serde::Serialize;
use tracing::info;

use super::{left_arcs, ArcSegment, SegmentRole, Side, Sweep};
use crate::body::BodyGeometry;
use crate::core::{
    circle::Circle,
    vec2::{toward, Vec2},
};
use crate::corner::{Bout, CornerGeometry};
use crate::error::{OutlineError, Result};

// =============================================================================
// TEMPLATE TYPES
// =============================================================================

/// One edge of the template contour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateEdge {
    /// A piece of the outline.
    Arc(ArcSegment),
    /// A straight piece of the spine.
    Line {
        /// First point.
        start: Vec2,
        /// Last point.
        end: Vec2,
    },
}

impl TemplateEdge {
    /// First point of the edge.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        match self {
            TemplateEdge::Arc(arc) => arc.start,
            TemplateEdge::Line { start, .. } => *start,
        }
    }

    /// Last point of the edge.
    #[must_use]
    pub fn end(&self) -> Vec2 {
        match self {
            TemplateEdge::Arc(arc) => arc.end,
            TemplateEdge::Line { end, .. } => *end,
        }
    }
}

/// What a template hole is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleRole {
    /// Center of a bout circle.
    BoutCenter,
    /// Centerline hole just past an end clamp.
    EndClampGuide,
    /// End clamp position.
    EndClamp,
    /// Corner clamp position.
    CornerClamp,
}

/// A hole to drill through the template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemplateHole {
    /// What the hole is for.
    pub role: HoleRole,
    /// Hole center.
    pub center: Vec2,
    /// Hole diameter.
    pub diameter: f64,
}

/// Closed half-template contour and its holes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkshopTemplate {
    /// Contour edges: the left half-outline, then the spine.
    pub edges: Vec<TemplateEdge>,
    /// Holes in layout order.
    pub holes: Vec<TemplateHole>,
}

impl WorkshopTemplate {
    /// Largest distance between the end of one edge and the start of the
    /// next, including the step from the last edge back to the first.
    #[must_use]
    pub fn max_gap(&self) -> f64 {
        let closing = match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => last.end().distance(first.start()),
            _ => 0.0,
        };
        self.edges
            .windows(2)
            .map(|pair| pair[0].end().distance(pair[1].start()))
            .fold(closing, f64::max)
    }

    /// Holes with the given role.
    pub fn holes_with(&self, role: HoleRole) -> impl Iterator<Item = &TemplateHole> {
        self.holes.iter().filter(move |hole| hole.role == role)
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Builds the workshop half-template for the left side.
///
/// # Errors
///
/// [`OutlineError::Geometry`] when a corner tip coincides with its bout
/// center, leaving the corner clamp without a direction.
pub fn workshop_template(body: &BodyGeometry, corners: &CornerGeometry) -> Result<WorkshopTemplate> {
    let top = body.top();
    let bottom = body.bottom();
    let spine = Vec2::new(TEMPLATE_SPINE_WIDTH, 0.0);

    let mut edges: Vec<TemplateEdge> = left_arcs(body, corners)
        .into_iter()
        .map(TemplateEdge::Arc)
        .collect();
    edges.push(TemplateEdge::Arc(ArcSegment::on(
        SegmentRole::UpperEnd,
        Side::Left,
        &body.upper_end,
        body.upper_end_tangency(),
        top,
        Sweep::Clockwise,
    )));
    for (start, end) in [(top, top + spine), (top + spine, bottom + spine), (bottom + spine, bottom)] {
        edges.push(TemplateEdge::Line { start, end });
    }

    let mut holes = vec![
        hole(HoleRole::BoutCenter, body.lower_bout.center),
        hole(HoleRole::BoutCenter, body.upper_bout.center),
    ];
    holes.extend(end_clamp_holes(body));
    holes.extend(corner_clamp_holes(Bout::Lower, &body.lower_bout, corners.lower.tip)?);
    holes.extend(corner_clamp_holes(Bout::Upper, &body.upper_bout, corners.upper.tip)?);

    info!(edges = edges.len(), holes = holes.len(), "Workshop template built");

    Ok(WorkshopTemplate { edges, holes })
}

fn end_clamp_holes(body: &BodyGeometry) -> Vec<TemplateHole> {
    let x = body.centerline_x();
    let h = body.body_length;
    let [width, depth] = END_CLAMP_SIZE;
    let side = x - width / 2.0;
    let guide = depth + END_CLAMP_GUIDE_OFFSET;

    let mut holes = vec![
        hole(HoleRole::EndClampGuide, Vec2::new(x, h - guide)),
        hole(HoleRole::EndClampGuide, Vec2::new(x, guide)),
    ];
    holes.extend(
        [
            Vec2::new(x, h - depth),
            Vec2::new(side, h - depth),
            Vec2::new(side, h - depth / 2.0),
            Vec2::new(x, depth),
            Vec2::new(side, depth),
            Vec2::new(side, depth / 2.0),
        ]
        .into_iter()
        .map(|center| hole(HoleRole::EndClamp, center)),
    );
    holes
}

/// Clamp center plus two hole pairs straddling the bout-to-tip line.
fn corner_clamp_holes(bout: Bout, circle: &Circle, tip: Vec2) -> Result<[TemplateHole; 5]> {
    let [width, depth] = CORNER_CLAMP_SIZE;
    let unit = (tip - circle.center).try_normalize().ok_or_else(|| {
        OutlineError::geometry(format!("{bout} corner tip lies on the bout center"))
    })?;
    let normal = unit.perp() * (width / 2.0);
    let center = toward(circle.center, tip, circle.radius - depth);
    let back = center + unit * (CORNER_CLAMP_STEP * depth);

    Ok([center, center + normal, center - normal, back + normal, back - normal]
        .map(|point| hole(HoleRole::CornerClamp, point)))
}

fn hole(role: HoleRole, center: Vec2) -> TemplateHole {
    TemplateHole {
        role,
        center,
        diameter: TEMPLATE_HOLE_DIAMETER,
    }
}
