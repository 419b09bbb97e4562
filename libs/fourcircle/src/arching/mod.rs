//! # Arching Profiles
//!
//! Height profiles of the plates: cycloid cross arches and single or double
//! circular longitudinal arches, plus the [`ArchingPlan`] tying both to a
//! body outline.
//!
//! Profiles are sampled curves. Positions run from `0` to the profile
//! length; heights are signed, positive for the front plate and negative
//! for the back.

use std::f64::consts::{PI, TAU};
use std::fmt;

use config::constants::{CROSS_ARCH_STATIONS, EPSILON, MIN_ARCH_SAMPLES};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::body::BodyGeometry;
use crate::core::vec2::Vec2;
use crate::corner::{BoutCorner, CornerGeometry};
use crate::error::{OutlineError, Result};
use crate::primitives::intersect::{circle_circle_intersect, Pick};

// =============================================================================
// PROFILE TYPES
// =============================================================================

/// Curve family and parameters a profile was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArchKind {
    /// Curtate cycloid spanning the full length.
    Cycloid {
        /// Signed crown height.
        height: f64,
        /// Span.
        length: f64,
    },
    /// One circular arc through both ends and the crown.
    Circular {
        /// Signed crown height.
        height: f64,
        /// Span.
        length: f64,
        /// Arc radius.
        radius: f64,
    },
    /// Lower envelope of two circular arcs; the second one is flatter and
    /// lifted off the ends by `second_offset`.
    DoubleCircular {
        /// Signed crown height of the first arc.
        height: f64,
        /// Span.
        length: f64,
        /// Radius of the first arc.
        radius: f64,
        /// Signed crown height of the second arc.
        second_height: f64,
        /// Unsigned distance of the second arc's ends from the reference
        /// line.
        second_offset: f64,
        /// Radius of the second arc.
        second_radius: f64,
    },
}

/// One sampled point of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchSample {
    /// Position along the profile.
    pub position: f64,
    /// Signed height at that position.
    pub height: f64,
}

/// A sampled arch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchProfile {
    /// How the samples were produced.
    pub kind: ArchKind,
    /// Samples in generation order.
    pub samples: Vec<ArchSample>,
}

impl ArchProfile {
    /// Heights in sample order.
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.height)
    }

    /// Largest sampled height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.heights().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sampled height.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.heights().fold(f64::INFINITY, f64::min)
    }
}

// =============================================================================
// CYCLOID
// =============================================================================

/// Samples a cycloid arch of the given signed `height` over `length`.
///
/// With `a = length/2π` and `b = |height|/2`, sample `i` of `N` uses
/// `θ = 2π·i/(N−1)`, `x = a·θ − b·sinθ` and `y = a − b·cosθ`. Heights are
/// shifted so the lowest sample is zero, then negated for a negative
/// `height`.
///
/// # Errors
///
/// [`OutlineError::Configuration`] when `sample_count < 2`, `length` is not
/// positive or `|height| > length/π` (the curve would loop back).
///
/// # Examples
/// ```
/// use fourcircle::arching::cycloid;
///
/// let arch = cycloid(10.0, 100.0, 5).unwrap();
/// assert_eq!(arch.samples.len(), 5);
/// assert!((arch.max_height() - 10.0).abs() < 1e-12);
/// ```
pub fn cycloid(height: f64, length: f64, sample_count: usize) -> Result<ArchProfile> {
    check_samples(sample_count)?;
    check_length(length)?;
    if !height.is_finite() {
        return Err(OutlineError::configuration(format!(
            "arch height must be finite, got {height}"
        )));
    }
    if height.abs() > length / PI {
        return Err(OutlineError::configuration(format!(
            "cycloid height {height} exceeds length/π for length {length}"
        )));
    }

    let direction = height.signum();
    let a = length / TAU;
    let b = height.abs() / 2.0;
    let last = (sample_count - 1) as f64;

    let points: Vec<(f64, f64)> = (0..sample_count)
        .map(|i| {
            let theta = TAU * i as f64 / last;
            (a * theta - b * theta.sin(), a - b * theta.cos())
        })
        .collect();
    let floor = points.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);

    Ok(ArchProfile {
        kind: ArchKind::Cycloid { height, length },
        samples: points
            .into_iter()
            .map(|(x, y)| ArchSample {
                position: x,
                height: direction * (y - floor),
            })
            .collect(),
    })
}

// =============================================================================
// CIRCULAR ARCHES
// =============================================================================

/// Evaluates a circular arch of signed `height` over `length` at
/// `positions`.
///
/// The arc passes through `(0, 0)`, `(length, 0)` and reaches `|height|` at
/// mid-length; its radius is `R = h/2 + L²/(8h)`. Passing both
/// `second_height` and `second_offset` adds a second arc through
/// `(0, offset)` and `(length, offset)` rising `second_height − offset`,
/// and each position keeps the smaller signed height of the two.
///
/// # Errors
///
/// [`OutlineError::Configuration`] when
/// - `height` is zero or taller than half the length,
/// - only one of `second_height` and `second_offset` is given,
/// - `second_height` does not share the sign of `height`,
/// - `second_offset` is not positive,
/// - the magnitudes do not satisfy `offset < second < height`,
/// - a position lies outside the arc's horizontal reach.
///
/// # Examples
/// ```
/// use fourcircle::arching::circular_arch;
///
/// let arch = circular_arch(20.0, 260.0, &[0.0, 130.0, 260.0], None, None).unwrap();
/// let crown = arch.samples[1].height;
/// assert!((crown - 20.0).abs() < 1e-9);
/// ```
pub fn circular_arch(
    height: f64,
    length: f64,
    positions: &[f64],
    second_height: Option<f64>,
    second_offset: Option<f64>,
) -> Result<ArchProfile> {
    check_length(length)?;
    if !height.is_finite() || height == 0.0 {
        return Err(OutlineError::configuration(format!(
            "circular arch height must be finite and non-zero, got {height}"
        )));
    }
    let direction = height.signum();
    let rise = height.abs();

    let second = match (second_height, second_offset) {
        (None, None) => None,
        (Some(second), Some(offset)) => Some(check_second_arc(rise, direction, second, offset)?),
        _ => {
            return Err(OutlineError::configuration(
                "either both or none of the second arch height and offset must be given",
            ))
        }
    };

    let first = Arc::through_ends(rise, length, 0.0)?;
    let mut heights = first.heights(positions, direction)?;

    let kind = match second {
        None => ArchKind::Circular {
            height,
            length,
            radius: first.radius,
        },
        Some((second_rise, offset_rise)) => {
            let inner = Arc::through_ends(second_rise - offset_rise, length, offset_rise)?;
            for (h, other) in heights.iter_mut().zip(inner.heights(positions, direction)?) {
                *h = h.min(other);
            }
            ArchKind::DoubleCircular {
                height,
                length,
                radius: first.radius,
                second_height: direction * second_rise,
                second_offset: offset_rise,
                second_radius: inner.radius,
            }
        }
    };

    Ok(ArchProfile {
        kind,
        samples: positions
            .iter()
            .zip(heights)
            .map(|(&position, height)| ArchSample { position, height })
            .collect(),
    })
}

/// Magnitudes of the second arc, checked against the first.
///
/// `second` carries the sign of the arch height; `offset` is an unsigned
/// distance from the ends.
fn check_second_arc(rise: f64, direction: f64, second: f64, offset: f64) -> Result<(f64, f64)> {
    let second_rise = direction * second;
    if !(second_rise.is_finite() && offset.is_finite()) || second_rise <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "second arch height {second} must have the sign of the arch height"
        )));
    }
    if offset <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "second arch offset {offset} must be positive"
        )));
    }
    if offset >= second_rise {
        return Err(OutlineError::configuration(format!(
            "second arch offset {offset} must be lower than its height {second}"
        )));
    }
    if second_rise >= rise {
        return Err(OutlineError::configuration(format!(
            "second arch height {second} must be lower than the arch height"
        )));
    }
    Ok((second_rise, offset))
}

/// Circle through `(0, base)` and `(length, base)` rising `rise` above them.
struct Arc {
    center: Vec2,
    radius: f64,
}

impl Arc {
    fn through_ends(rise: f64, length: f64, base: f64) -> Result<Self> {
        if rise > length / 2.0 {
            return Err(OutlineError::configuration(format!(
                "circular arch rise {rise} exceeds half its length {length}"
            )));
        }
        let radius = rise / 2.0 + length * length / (8.0 * rise);
        let center = circle_circle_intersect(
            Vec2::new(0.0, base),
            radius,
            Vec2::new(length, base),
            radius,
        )
        .require(Pick::MinY, "circular arch center")?;
        Ok(Self { center, radius })
    }

    fn heights(&self, positions: &[f64], direction: f64) -> Result<Vec<f64>> {
        let tolerance = EPSILON * (self.radius * self.radius).max(1.0);
        positions
            .iter()
            .map(|&x| {
                let dx = x - self.center.x;
                let under = self.radius * self.radius - dx * dx;
                if under.is_nan() || under < -tolerance {
                    return Err(OutlineError::configuration(format!(
                        "position {x} lies outside the arch of radius {}",
                        self.radius
                    )));
                }
                Ok(direction * (under.max(0.0).sqrt() + self.center.y))
            })
            .collect()
    }
}

fn check_samples(sample_count: usize) -> Result<()> {
    if sample_count < MIN_ARCH_SAMPLES {
        return Err(OutlineError::configuration(format!(
            "an arch needs at least {MIN_ARCH_SAMPLES} samples, got {sample_count}"
        )));
    }
    Ok(())
}

fn check_length(length: f64) -> Result<()> {
    if !length.is_finite() || length <= 0.0 {
        return Err(OutlineError::configuration(format!(
            "arch length must be finite and positive, got {length}"
        )));
    }
    Ok(())
}

// =============================================================================
// ARCH HEIGHTS
// =============================================================================

/// Longitudinal arch heights of one plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchSpec {
    /// Signed crown height.
    pub height: f64,
    /// Crown height of the optional second arc.
    #[serde(default)]
    pub second_height: Option<f64>,
    /// End height of the optional second arc.
    #[serde(default)]
    pub second_offset: Option<f64>,
}

impl ArchSpec {
    /// A single circular arch.
    #[must_use]
    pub const fn single(height: f64) -> Self {
        Self {
            height,
            second_height: None,
            second_offset: None,
        }
    }

    /// A double circular arch.
    #[must_use]
    pub const fn double(height: f64, second_height: f64, second_offset: f64) -> Self {
        Self {
            height,
            second_height: Some(second_height),
            second_offset: Some(second_offset),
        }
    }

    /// Evaluates the arch over `length` at `positions`.
    pub fn evaluate(&self, length: f64, positions: &[f64]) -> Result<ArchProfile> {
        circular_arch(
            self.height,
            length,
            positions,
            self.second_height,
            self.second_offset,
        )
    }
}

/// Arch heights as stored next to the shape ratios in an instrument record.
///
/// `af`, `afc` and `afd` describe the front plate; `ab` is the back plate
/// height, drawn below the reference line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchingRecord {
    /// Front crown height.
    #[serde(default)]
    pub af: Option<f64>,
    /// Front second-arc height.
    #[serde(default)]
    pub afc: Option<f64>,
    /// Front second-arc offset.
    #[serde(default)]
    pub afd: Option<f64>,
    /// Back crown height.
    #[serde(default)]
    pub ab: Option<f64>,
}

impl ArchingRecord {
    /// Front plate arch, if the record has one.
    #[must_use]
    pub fn front(&self) -> Option<ArchSpec> {
        self.af.map(|height| ArchSpec {
            height,
            second_height: self.afc,
            second_offset: self.afd,
        })
    }

    /// Back plate arch, negated, if the record has one.
    #[must_use]
    pub fn back(&self) -> Option<ArchSpec> {
        self.ab.map(|height| ArchSpec::single(-height))
    }
}

// =============================================================================
// ARCHING PLAN
// =============================================================================

/// Where a cross arch is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    /// Across the lower bout center.
    LowerBout,
    /// Across the lower corner blends.
    LowerCorner,
    /// Across the narrowest point of the waist.
    Waist,
    /// Across the upper corner blends.
    UpperCorner,
    /// Across the upper bout center.
    UpperBout,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Station::LowerBout => "lower bout",
            Station::LowerCorner => "lower corner",
            Station::Waist => "waist",
            Station::UpperCorner => "upper corner",
            Station::UpperBout => "upper bout",
        };
        f.write_str(name)
    }
}

/// One cross arch of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossArch {
    /// Station the arch is taken at.
    pub station: Station,
    /// Height of the station along the body.
    pub position: f64,
    /// Width the arch spans.
    pub width: f64,
    /// Longitudinal arch height at the station.
    pub height: f64,
    /// Cycloid profile across the width.
    pub profile: ArchProfile,
}

/// Longitudinal arch plus the cross arches at the five stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchingPlan {
    /// Arch along the centerline, from the bottom to the top of the body.
    pub longitudinal: ArchProfile,
    /// Cross arches from the lower bout to the upper bout.
    pub cross: Vec<CrossArch>,
}

/// Samples the longitudinal arch at `samples` equally spaced positions over
/// the body length.
///
/// # Errors
///
/// Any [`circular_arch`] error, or too few samples.
pub fn longitudinal_arch(body: &BodyGeometry, spec: &ArchSpec, samples: usize) -> Result<ArchProfile> {
    check_samples(samples)?;
    let length = body.body_length;
    let last = (samples - 1) as f64;
    let positions: Vec<f64> = (0..samples).map(|i| length * i as f64 / last).collect();
    spec.evaluate(length, &positions)
}

/// Builds the longitudinal arch and the five cross arches.
///
/// Each cross arch is a cycloid across the body width at its station whose
/// crown matches the longitudinal arch at that height. Corner stations are
/// taken at the bout-blend centers and span the body between the blend
/// circles.
///
/// # Errors
///
/// Any [`circular_arch`] or [`cycloid`] error.
pub fn plan_arching(
    body: &BodyGeometry,
    corners: &CornerGeometry,
    spec: &ArchSpec,
    samples: usize,
) -> Result<ArchingPlan> {
    let longitudinal = longitudinal_arch(body, spec, samples)?;

    let rl = body.lower_radius;
    let corner_width = |corner: &BoutCorner| 2.0 * (rl - corner.bout_blend.center.x - corner.bout_blend.radius);
    let stations: [(Station, f64, f64); CROSS_ARCH_STATIONS] = [
        (Station::LowerBout, body.lower_bout.center.y, 2.0 * rl),
        (
            Station::LowerCorner,
            corners.lower.bout_blend.center.y,
            corner_width(&corners.lower),
        ),
        (Station::Waist, body.waist_height, body.waist_width),
        (
            Station::UpperCorner,
            corners.upper.bout_blend.center.y,
            corner_width(&corners.upper),
        ),
        (Station::UpperBout, body.upper_bout.center.y, 2.0 * body.upper_bout.radius),
    ];

    let positions: Vec<f64> = stations.iter().map(|&(_, position, _)| position).collect();
    let station_heights = spec.evaluate(body.body_length, &positions)?;

    let cross = stations
        .iter()
        .zip(station_heights.heights())
        .map(|(&(station, position, width), height)| {
            debug!(%station, position, width, height, "Cross arch");
            Ok(CrossArch {
                station,
                position,
                width,
                height,
                profile: cycloid(height, width, samples)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        height = spec.height,
        stations = cross.len(),
        "Arching planned"
    );

    Ok(ArchingPlan { longitudinal, cross })
}
