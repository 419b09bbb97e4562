//! Drafting configuration built on the shared `config` crate.
//!
//! Keeps the kernel free of literal tolerances and sample counts.

use config::constants::{GlobalConfig, DEFAULT_ARCH_SAMPLES, ON_CURVE_TOLERANCE};

use crate::error::Result;

/// Tolerance and sampling defaults used by an [`Instrument`](crate::instrument::Instrument).
///
/// # Examples
/// ```
/// use fourcircle::config::DraftingConfig;
/// let cfg = DraftingConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftingConfig {
    /// Largest accepted gap between consecutive outline arcs.
    pub tolerance: f64,
    /// Sample count for arch profiles when none is requested.
    pub arch_samples: usize,
}

impl DraftingConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use fourcircle::config::DraftingConfig;
    /// let cfg = DraftingConfig::new(1.0e-8, 51).unwrap();
    /// assert_eq!(cfg.arch_samples, 51);
    /// ```
    pub fn new(tolerance: f64, arch_samples: usize) -> Result<Self> {
        Ok(GlobalConfig::new(tolerance, arch_samples)?.into())
    }
}

impl From<GlobalConfig> for DraftingConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            arch_samples: cfg.arch_samples,
        }
    }
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            tolerance: ON_CURVE_TOLERANCE,
            arch_samples: DEFAULT_ARCH_SAMPLES,
        }
    }
}

#[cfg(test)]
mod tests;
