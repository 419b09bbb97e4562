//! Tests covering drafting configuration behavior.

use super::*;
use crate::error::OutlineError;

#[test]
fn default_matches_constants() {
    let cfg = DraftingConfig::default();
    assert_eq!(cfg.tolerance, ON_CURVE_TOLERANCE);
    assert_eq!(cfg.arch_samples, DEFAULT_ARCH_SAMPLES);
    assert_eq!(DraftingConfig::from(GlobalConfig::default()), cfg);
}

#[test]
fn builder_validates_input() {
    let err = DraftingConfig::new(0.0, 24).unwrap_err();
    assert!(matches!(err, OutlineError::Configuration { .. }));
    assert!(err.to_string().contains("tolerance"));
    assert!(DraftingConfig::new(1.0e-6, 1).is_err());
}
