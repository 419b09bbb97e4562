//! # Four-Circle Outline Kernel
//!
//! Parametric outlines and arching profiles for violin-family instrument
//! bodies.
//!
//! The outline follows the classical four-circle construction: two bout
//! circles, two end-arcs, minor circles between them and a center-bout
//! circle for the waist, joined at each corner by a pair of tangent blend
//! circles. Everything is derived from a body length and a handful of
//! dimensionless ratios.
//!
//! ## Pipeline
//!
//! ```text
//! ShapeParameters → compute_body → BodyGeometry
//!                 → compute_corners → CornerGeometry
//!                 → assemble_outline → OutlinePath (21 arcs)
//!                 → workshop_template → WorkshopTemplate (half contour, holes)
//! BodyGeometry (+ CornerGeometry) → arching → ArchProfile / ArchingPlan
//! ```
//!
//! [`Instrument`] wraps the pipeline and enforces the order of the steps.
//!
//! ## Example
//!
//! ```rust
//! use fourcircle::{arching::ArchSpec, Instrument, ShapeParameters};
//!
//! let params = ShapeParameters {
//!     body_length: 356.0,
//!     center_ratio: 0.9, upper_ratio: 0.8, waist_ratio: 1.0,
//!     upper_minor_ratio: 0.45, lower_minor_ratio: 0.5,
//!     outer_corner_ratio: 0.3, inner_corner_ratio: 0.2,
//!     upper_blend_ratio: 0.6, lower_blend_ratio: 0.5,
//!     upper_angle_ref: 0.5, upper_radius_ref: 0.3,
//!     lower_angle_ref: 0.5, lower_radius_ref: 0.3,
//! };
//!
//! let mut violin = Instrument::new(params)?;
//! violin.compute_body()?;
//! violin.compute_corners()?;
//!
//! let outline = violin.outline()?;
//! let (min, max) = outline.bounds();
//! assert!((max.y - min.y - 356.0).abs() < 1e-9);
//!
//! let plan = violin.arching(&ArchSpec::double(15.0, 10.0, 3.0), None)?;
//! assert_eq!(plan.cross.len(), 5);
//! # Ok::<(), fourcircle::OutlineError>(())
//! ```
//!
//! ## Logging
//!
//! Construction steps emit `tracing` events (`debug` per derived element,
//! `info` per completed step). The crate never installs a subscriber.

pub mod arching;
pub mod body;
pub mod config;
pub mod core;
pub mod corner;
pub mod error;
pub mod instrument;
pub mod outline;
pub mod params;
pub mod primitives;
pub mod transform;

#[cfg(test)]
pub(crate) mod fixtures;

pub use crate::core::{circle::Circle, vec2::Vec2};
pub use arching::{ArchProfile, ArchSpec, ArchingPlan};
pub use body::{compute_body, BodyDimensions, BodyGeometry};
pub use corner::{compute_corners, CornerGeometry};
pub use error::{OutlineError, Result};
pub use instrument::{Instrument, Phase};
pub use outline::{
    assemble_outline, workshop_template, ArcSegment, OutlinePath, Sweep, WorkshopTemplate,
};
pub use params::ShapeParameters;
