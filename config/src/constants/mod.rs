//! Centralized configuration values shared across the outline workspace.
//!
//! Each public item documents its purpose so downstream crates can stay
//! declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Intersection routines scale this by the magnitude of their inputs, so it
/// acts as a relative tolerance for tangency decisions.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Looser tolerance used when checking that a derived point lies on a circle.
///
/// Points produced by chained intersections accumulate rounding error, so
/// on-curve checks use this rather than [`EPSILON`].
pub const ON_CURVE_TOLERANCE: f64 = 1e-6;

// =============================================================================
// BODY DEFAULTS
// =============================================================================

/// Body length used when a pattern record does not specify one.
pub const DEFAULT_BODY_LENGTH: f64 = 100.0;

// =============================================================================
// ARCHING DEFAULTS
// =============================================================================

/// Default number of samples for sampled arch profiles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ARCH_SAMPLES;
///
/// let step = 1.0 / (DEFAULT_ARCH_SAMPLES - 1) as f64;
/// assert_eq!(step, 0.01);
/// ```
pub const DEFAULT_ARCH_SAMPLES: usize = 101;

/// Smallest sample count that still spans both ends of a profile.
pub const MIN_ARCH_SAMPLES: usize = 2;

/// Number of cross-arch stations along the body (lower bout, lower corner,
/// waist, upper corner, upper bout).
pub const CROSS_ARCH_STATIONS: usize = 5;

// =============================================================================
// OUTLINE TOPOLOGY
// =============================================================================

/// Arcs on one side of the centerline, from the bottom point to the upper
/// end-arc.
pub const HALF_OUTLINE_SEGMENTS: usize = 10;

/// Arcs in the closed outline: both sides plus the crown arc that crosses the
/// centerline.
pub const OUTLINE_SEGMENTS: usize = 2 * HALF_OUTLINE_SEGMENTS + 1;

// =============================================================================
// WORKSHOP TEMPLATE
// =============================================================================

/// Width of the straight spine that closes a half-template along the
/// centerline, in model units (mm).
pub const TEMPLATE_SPINE_WIDTH: f64 = 10.0;

/// Diameter of every template hole.
pub const TEMPLATE_HOLE_DIAMETER: f64 = 1.0;

/// End clamp footprint `[width, depth]` at the top and bottom of the body.
pub const END_CLAMP_SIZE: [f64; 2] = [100.0, 30.0];

/// Distance past the end clamp depth of the centerline guide holes.
pub const END_CLAMP_GUIDE_OFFSET: f64 = 10.0;

/// Corner clamp footprint `[width, depth]`.
///
/// The clamp is centered `depth` inside the bout circle, on the line from the
/// bout center to the corner tip.
pub const CORNER_CLAMP_SIZE: [f64; 2] = [50.0, 10.0];

/// Fraction of the corner clamp depth between its front and back hole pairs.
pub const CORNER_CLAMP_STEP: f64 = 0.6;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration used by the outline kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry checks.
    pub tolerance: f64,
    /// Default sample count for arch profiles.
    pub arch_samples: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and sample count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 51).expect("valid config");
    /// assert_eq!(cfg.arch_samples, 51);
    /// ```
    pub fn new(tolerance: f64, arch_samples: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if arch_samples < MIN_ARCH_SAMPLES {
            return Err(ConfigError::InvalidSamples(arch_samples));
        }
        Ok(Self {
            tolerance,
            arch_samples,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: ON_CURVE_TOLERANCE,
            arch_samples: DEFAULT_ARCH_SAMPLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the sample count cannot span a profile.
    InvalidSamples(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSamples(value) => {
                write!(f, "arch_samples must be >= {MIN_ARCH_SAMPLES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
