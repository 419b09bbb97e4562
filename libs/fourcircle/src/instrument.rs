//! # Instrument
//!
//! Phase-checked facade over the construction steps.
//!
//! An [`Instrument`] owns one validated [`ShapeParameters`] value and caches
//! what has been derived from it. Each query states the phase it needs and
//! fails with [`OutlineError::State`] when called too early:
//!
//! | Phase | Reached by | Unlocks |
//! |-------|------------|---------|
//! | `Uninitialized` | [`Instrument::new`] | parameters |
//! | `BodyComputed` | [`Instrument::compute_body`] | body, dimensions, longitudinal arch |
//! | `CornerComputed` | [`Instrument::compute_corners`] | corners, outline, template, arching plan |
//!
//! ```rust
//! use fourcircle::{Instrument, Phase, ShapeParameters};
//!
//! let params: ShapeParameters = serde_json::from_str(r#"{"h": 356, "kc": 0.9,
//!     "ku": 0.8, "kw": 1.0, "kmu": 0.45, "kml": 0.5, "b1": 0.3, "b2": 0.2,
//!     "bu": 0.6, "bl": 0.5, "cu1": 0.5, "cu2": 0.3, "cl1": 0.5, "cl2": 0.3}"#).unwrap();
//! let mut violin = Instrument::new(params).unwrap();
//! assert!(violin.outline().is_err());
//!
//! violin.compute_body().unwrap();
//! violin.compute_corners().unwrap();
//! assert_eq!(violin.phase(), Phase::CornerComputed);
//! assert_eq!(violin.outline().unwrap().len(), 21);
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::arching::{self, ArchProfile, ArchSpec, ArchingPlan};
use crate::body::{BodyDimensions, BodyGeometry};
use crate::config::DraftingConfig;
use crate::corner::CornerGeometry;
use crate::error::{OutlineError, Result};
use crate::outline::{self, ConstructionCircle, OutlinePath, ReferenceMarker, WorkshopTemplate};
use crate::params::ShapeParameters;

/// How far an [`Instrument`] has been constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Phase {
    /// Only parameters are known.
    Uninitialized,
    /// Body circles are cached.
    BodyComputed,
    /// Body and corner circles are cached.
    CornerComputed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::BodyComputed => "body computed",
            Phase::CornerComputed => "corner computed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Uninitialized,
    Body(BodyGeometry),
    Corners(BodyGeometry, CornerGeometry),
}

/// One instrument model and its cached constructions.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    params: ShapeParameters,
    config: DraftingConfig,
    stage: Stage,
}

impl Instrument {
    /// Validates `params` and starts in [`Phase::Uninitialized`].
    pub fn new(params: ShapeParameters) -> Result<Self> {
        Self::with_config(params, DraftingConfig::default())
    }

    /// Like [`new`](Self::new) with explicit tolerance and sampling.
    pub fn with_config(params: ShapeParameters, config: DraftingConfig) -> Result<Self> {
        params.validate()?;
        debug!(length = params.body_length, "Instrument created");
        Ok(Self {
            params,
            config,
            stage: Stage::Uninitialized,
        })
    }

    /// The shape parameters.
    #[must_use]
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// The drafting configuration.
    #[must_use]
    pub fn config(&self) -> &DraftingConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Uninitialized => Phase::Uninitialized,
            Stage::Body(_) => Phase::BodyComputed,
            Stage::Corners(..) => Phase::CornerComputed,
        }
    }

    // =========================================================================
    // PHASE TRANSITIONS
    // =========================================================================

    /// Computes and caches the body circles.
    ///
    /// Calling it again returns the cached body.
    pub fn compute_body(&mut self) -> Result<&BodyGeometry> {
        if self.stage == Stage::Uninitialized {
            self.stage = Stage::Body(crate::body::compute_body(&self.params)?);
        }
        self.body()
    }

    /// Computes and caches the corner constructions.
    ///
    /// # Errors
    ///
    /// [`OutlineError::State`] before [`compute_body`](Self::compute_body);
    /// otherwise any corner construction error, leaving the phase unchanged.
    pub fn compute_corners(&mut self) -> Result<&CornerGeometry> {
        match self.stage {
            Stage::Uninitialized => {
                return Err(OutlineError::state(
                    "compute_corners",
                    Phase::BodyComputed,
                    Phase::Uninitialized,
                ))
            }
            Stage::Body(body) => {
                let corners = crate::corner::compute_corners(&self.params, &body)?;
                self.stage = Stage::Corners(body, corners);
            }
            Stage::Corners(..) => {}
        }
        self.corners()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Cached body circles.
    pub fn body(&self) -> Result<&BodyGeometry> {
        self.require_body("body")
    }

    /// Cached left corners.
    pub fn corners(&self) -> Result<&CornerGeometry> {
        self.require_corners("corners").map(|(_, corners)| corners)
    }

    /// Right corners, mirrored from the cached left ones.
    pub fn right_corners(&self) -> Result<CornerGeometry> {
        let (body, corners) = self.require_corners("right_corners")?;
        Ok(corners.mirrored(&body.mirror()))
    }

    /// Body length and bout widths.
    pub fn dimensions(&self) -> Result<BodyDimensions> {
        self.require_body("dimensions").map(BodyGeometry::dimensions)
    }

    /// The closed outline.
    ///
    /// # Errors
    ///
    /// [`OutlineError::State`] before the corners are computed, or
    /// [`OutlineError::Geometry`] when consecutive arcs are further apart
    /// than the configured tolerance.
    pub fn outline(&self) -> Result<OutlinePath> {
        let (body, corners) = self.require_corners("outline")?;
        let path = outline::assemble_outline(body, corners);
        let gap = path.max_gap();
        if gap > self.config.tolerance {
            return Err(OutlineError::geometry(format!(
                "outline arcs are {gap} apart, tolerance is {}",
                self.config.tolerance
            )));
        }
        Ok(path)
    }

    /// Every construction circle; corner circles once corners are computed.
    pub fn construction_circles(&self) -> Result<Vec<ConstructionCircle>> {
        let body = self.require_body("construction_circles")?;
        let corners = match &self.stage {
            Stage::Corners(_, corners) => Some(corners),
            _ => None,
        };
        Ok(outline::construction_circles(body, corners))
    }

    /// Corner tips and reference points of both sides.
    pub fn reference_points(&self) -> Result<Vec<ReferenceMarker>> {
        let (body, corners) = self.require_corners("reference_points")?;
        Ok(outline::reference_points(body, corners))
    }

    /// Workshop half-template with its hole layout.
    ///
    /// # Errors
    ///
    /// [`OutlineError::State`] before the corners are computed, or
    /// [`OutlineError::Geometry`] when the contour does not close within the
    /// configured tolerance.
    pub fn template(&self) -> Result<WorkshopTemplate> {
        let (body, corners) = self.require_corners("template")?;
        let template = outline::workshop_template(body, corners)?;
        let gap = template.max_gap();
        if gap > self.config.tolerance {
            return Err(OutlineError::geometry(format!(
                "template edges are {gap} apart, tolerance is {}",
                self.config.tolerance
            )));
        }
        Ok(template)
    }

    /// Longitudinal arch over the body length.
    ///
    /// `samples` defaults to the configured arch sample count.
    pub fn longitudinal_arch(&self, spec: &ArchSpec, samples: Option<usize>) -> Result<ArchProfile> {
        let body = self.require_body("longitudinal_arch")?;
        arching::longitudinal_arch(body, spec, samples.unwrap_or(self.config.arch_samples))
    }

    /// Longitudinal arch plus the cross arches at the five stations.
    pub fn arching(&self, spec: &ArchSpec, samples: Option<usize>) -> Result<ArchingPlan> {
        let (body, corners) = self.require_corners("arching")?;
        arching::plan_arching(
            body,
            corners,
            spec,
            samples.unwrap_or(self.config.arch_samples),
        )
    }

    fn require_body(&self, operation: &'static str) -> Result<&BodyGeometry> {
        match &self.stage {
            Stage::Body(body) | Stage::Corners(body, _) => Ok(body),
            Stage::Uninitialized => Err(OutlineError::state(
                operation,
                Phase::BodyComputed,
                Phase::Uninitialized,
            )),
        }
    }

    fn require_corners(&self, operation: &'static str) -> Result<(&BodyGeometry, &CornerGeometry)> {
        match &self.stage {
            Stage::Corners(body, corners) => Ok((body, corners)),
            _ => Err(OutlineError::state(
                operation,
                Phase::CornerComputed,
                self.phase(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{unreachable_corner, violin};

    #[test]
    fn test_phases_advance_in_order() {
        let mut instrument = Instrument::new(violin()).unwrap();
        assert_eq!(instrument.phase(), Phase::Uninitialized);
        instrument.compute_body().unwrap();
        assert_eq!(instrument.phase(), Phase::BodyComputed);
        instrument.compute_corners().unwrap();
        assert_eq!(instrument.phase(), Phase::CornerComputed);
        assert!(Phase::Uninitialized < Phase::CornerComputed);
    }

    #[test]
    fn test_corners_before_body_is_state_error() {
        let mut instrument = Instrument::new(violin()).unwrap();
        let err = instrument.compute_corners().unwrap_err();
        assert_eq!(
            err,
            OutlineError::state("compute_corners", Phase::BodyComputed, Phase::Uninitialized)
        );
        assert_eq!(instrument.phase(), Phase::Uninitialized);
    }

    #[test]
    fn test_queries_report_missing_phase() {
        let mut instrument = Instrument::new(violin()).unwrap();
        assert!(matches!(instrument.body(), Err(OutlineError::State { .. })));
        assert!(matches!(instrument.dimensions(), Err(OutlineError::State { .. })));
        instrument.compute_body().unwrap();
        match instrument.outline() {
            Err(OutlineError::State { required, actual, .. }) => {
                assert_eq!(required, Phase::CornerComputed);
                assert_eq!(actual, Phase::BodyComputed);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(instrument.construction_circles().is_ok());
        assert!(instrument.reference_points().is_err());
        assert!(matches!(
            instrument.template(),
            Err(OutlineError::State { operation: "template", .. })
        ));
    }

    #[test]
    fn test_template_after_corners() {
        let mut instrument = Instrument::new(violin()).unwrap();
        instrument.compute_body().unwrap();
        instrument.compute_corners().unwrap();
        let template = instrument.template().unwrap();
        assert_eq!(template.edges.len(), 14);
        assert_eq!(template.holes.len(), 20);
        assert!(template.max_gap() <= instrument.config().tolerance);
    }

    #[test]
    fn test_recompute_returns_cached_geometry() {
        let mut instrument = Instrument::new(violin()).unwrap();
        let first = *instrument.compute_body().unwrap();
        instrument.compute_corners().unwrap();
        assert_eq!(*instrument.compute_body().unwrap(), first);
        assert_eq!(instrument.phase(), Phase::CornerComputed);
    }

    #[test]
    fn test_failed_corners_keep_body_phase() {
        let mut instrument = Instrument::new(unreachable_corner()).unwrap();
        instrument.compute_body().unwrap();
        assert!(matches!(
            instrument.compute_corners(),
            Err(OutlineError::Geometry { .. })
        ));
        assert_eq!(instrument.phase(), Phase::BodyComputed);
    }

    #[test]
    fn test_invalid_parameters_are_rejected_up_front() {
        let params = ShapeParameters {
            inner_corner_ratio: 0.5,
            ..violin()
        };
        assert!(matches!(
            Instrument::new(params),
            Err(OutlineError::Configuration { .. })
        ));
    }

    #[test]
    fn test_arch_samples_default_to_config() {
        let config = DraftingConfig::new(1.0e-6, 11).unwrap();
        let mut instrument = Instrument::with_config(violin(), config).unwrap();
        instrument.compute_body().unwrap();
        let arch = instrument
            .longitudinal_arch(&ArchSpec::single(15.0), None)
            .unwrap();
        assert_eq!(arch.samples.len(), 11);
        let arch = instrument
            .longitudinal_arch(&ArchSpec::single(15.0), Some(5))
            .unwrap();
        assert_eq!(arch.samples.len(), 5);
    }
}
