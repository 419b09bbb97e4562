//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.arch_samples >= MIN_ARCH_SAMPLES);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 1).unwrap_err(),
        ConfigError::InvalidSamples(1)
    );
    assert!(GlobalConfig::new(f64::NAN, 24).is_err());
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidTolerance(-1.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidSamples(0)
        .to_string()
        .contains("arch_samples"));
}
