//! # Shape Parameters
//!
//! The validated, immutable input of every construction: a body length and
//! thirteen dimensionless ratios, all relative to the lower-bout radius.
//!
//! Parameters are usually read from an instrument record whose short keys
//! (`kc`, `ku`, `kw`, ...) follow the drafting literature. [`ShapeRecord`]
//! is that wire form; [`ShapeParameters`] converts from it with validation.
//!
//! ```rust
//! use fourcircle::params::ShapeParameters;
//!
//! let json = r#"{"h": 356, "kc": 0.9, "ku": 0.8, "kw": 1.0, "km": 0.5,
//!     "b1": 0.3, "b2": 0.2, "bu": 0.6, "bl": 0.5,
//!     "cu1": 0.5, "cu2": 0.3, "cl1": 0.5, "cl2": 0.3}"#;
//! let params: ShapeParameters = serde_json::from_str(json).unwrap();
//! assert_eq!(params.upper_minor_ratio, params.lower_minor_ratio);
//! ```

use config::constants::DEFAULT_BODY_LENGTH;
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

// =============================================================================
// SHAPE PARAMETERS
// =============================================================================

/// Body length and shape ratios of one instrument model.
///
/// Ratios are relative to the lower-bout radius `rl` unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRecord", into = "ShapeRecord")]
pub struct ShapeParameters {
    /// Body length `h`.
    pub body_length: f64,
    /// Center-bout circle radius `kc`.
    pub center_ratio: f64,
    /// Upper-bout radius `ku`.
    pub upper_ratio: f64,
    /// Waist width `kw`.
    pub waist_ratio: f64,
    /// Upper minor circle radius `kmu`.
    pub upper_minor_ratio: f64,
    /// Lower minor circle radius `kml`.
    pub lower_minor_ratio: f64,
    /// Outer corner circle radius `b1`.
    pub outer_corner_ratio: f64,
    /// Inner corner circle radius `b2`.
    pub inner_corner_ratio: f64,
    /// Upper waist-blend radius relative to the upper bout-blend radius `bu`.
    pub upper_blend_ratio: f64,
    /// Lower waist-blend radius relative to the lower bout-blend radius `bl`.
    pub lower_blend_ratio: f64,
    /// Upper corner-angle reference `cu1`, relative to the upper-bout radius.
    pub upper_angle_ref: f64,
    /// Upper corner-radius reference `cu2`, relative to the upper-bout radius.
    pub upper_radius_ref: f64,
    /// Lower corner-angle reference `cl1`.
    pub lower_angle_ref: f64,
    /// Lower corner-radius reference `cl2`.
    pub lower_radius_ref: f64,
}

impl ShapeParameters {
    /// Checks the parameter invariants.
    ///
    /// Every value must be finite and strictly positive, and
    /// `kml < 1`, `kmu < ku`, `b2 < b1`.
    ///
    /// # Errors
    ///
    /// [`OutlineError::Configuration`] naming the first violated rule.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.named_values() {
            if !value.is_finite() || value <= 0.0 {
                return Err(OutlineError::configuration(format!(
                    "{key} must be finite and positive, got {value}"
                )));
            }
        }
        if self.lower_minor_ratio >= 1.0 {
            return Err(OutlineError::configuration(format!(
                "kml must be smaller than 1, got {}",
                self.lower_minor_ratio
            )));
        }
        if self.upper_minor_ratio >= self.upper_ratio {
            return Err(OutlineError::configuration(format!(
                "kmu ({}) must be smaller than ku ({})",
                self.upper_minor_ratio, self.upper_ratio
            )));
        }
        if self.inner_corner_ratio >= self.outer_corner_ratio {
            return Err(OutlineError::configuration(format!(
                "b2 ({}) must be smaller than b1 ({})",
                self.inner_corner_ratio, self.outer_corner_ratio
            )));
        }
        Ok(())
    }

    /// Validates and returns `self`.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Same shape at a different body length.
    pub fn with_body_length(self, body_length: f64) -> Result<Self> {
        Self {
            body_length,
            ..self
        }
        .validated()
    }

    fn named_values(&self) -> [(&'static str, f64); 14] {
        [
            ("h", self.body_length),
            ("kc", self.center_ratio),
            ("ku", self.upper_ratio),
            ("kw", self.waist_ratio),
            ("kmu", self.upper_minor_ratio),
            ("kml", self.lower_minor_ratio),
            ("b1", self.outer_corner_ratio),
            ("b2", self.inner_corner_ratio),
            ("bu", self.upper_blend_ratio),
            ("bl", self.lower_blend_ratio),
            ("cu1", self.upper_angle_ref),
            ("cu2", self.upper_radius_ref),
            ("cl1", self.lower_angle_ref),
            ("cl2", self.lower_radius_ref),
        ]
    }
}

// =============================================================================
// RECORD FORM
// =============================================================================

/// Instrument record as stored in pattern collections.
///
/// `h` falls back to [`DEFAULT_BODY_LENGTH`]. The minor circles are given
/// either by a shared `km` or by both `kmu` and `kml`; `km` wins when both
/// forms are present. Unknown keys (names, years, arch heights) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Body length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    /// Center-bout ratio.
    pub kc: f64,
    /// Upper-bout ratio.
    pub ku: f64,
    /// Waist ratio.
    pub kw: f64,
    /// Shared minor circle ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km: Option<f64>,
    /// Upper minor circle ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kmu: Option<f64>,
    /// Lower minor circle ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kml: Option<f64>,
    /// Outer corner circle ratio.
    pub b1: f64,
    /// Inner corner circle ratio.
    pub b2: f64,
    /// Upper blend ratio.
    pub bu: f64,
    /// Lower blend ratio.
    pub bl: f64,
    /// Upper angle reference.
    pub cu1: f64,
    /// Upper radius reference.
    pub cu2: f64,
    /// Lower angle reference.
    pub cl1: f64,
    /// Lower radius reference.
    pub cl2: f64,
}

impl TryFrom<ShapeRecord> for ShapeParameters {
    type Error = OutlineError;

    fn try_from(record: ShapeRecord) -> Result<Self> {
        let (upper_minor_ratio, lower_minor_ratio) = match (record.km, record.kmu, record.kml) {
            (Some(km), _, _) => (km, km),
            (None, Some(kmu), Some(kml)) => (kmu, kml),
            _ => {
                return Err(OutlineError::configuration(
                    "either km or both kmu and kml must be given",
                ))
            }
        };

        Self {
            body_length: record.h.unwrap_or(DEFAULT_BODY_LENGTH),
            center_ratio: record.kc,
            upper_ratio: record.ku,
            waist_ratio: record.kw,
            upper_minor_ratio,
            lower_minor_ratio,
            outer_corner_ratio: record.b1,
            inner_corner_ratio: record.b2,
            upper_blend_ratio: record.bu,
            lower_blend_ratio: record.bl,
            upper_angle_ref: record.cu1,
            upper_radius_ref: record.cu2,
            lower_angle_ref: record.cl1,
            lower_radius_ref: record.cl2,
        }
        .validated()
    }
}

impl From<ShapeParameters> for ShapeRecord {
    fn from(params: ShapeParameters) -> Self {
        Self {
            h: Some(params.body_length),
            kc: params.center_ratio,
            ku: params.upper_ratio,
            kw: params.waist_ratio,
            km: None,
            kmu: Some(params.upper_minor_ratio),
            kml: Some(params.lower_minor_ratio),
            b1: params.outer_corner_ratio,
            b2: params.inner_corner_ratio,
            bu: params.upper_blend_ratio,
            bl: params.lower_blend_ratio,
            cu1: params.upper_angle_ref,
            cu2: params.upper_radius_ref,
            cl1: params.lower_angle_ref,
            cl2: params.lower_radius_ref,
        }
    }
}

// =============================================================================
// RATIOS FROM MEASUREMENTS
// =============================================================================

/// `ku` and `kw` recovered from measured bout widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidthRatios {
    /// Upper-bout ratio `ku`.
    pub upper_ratio: f64,
    /// Waist ratio `kw`.
    pub waist_ratio: f64,
}

/// Derives `ku = wu / wl` and `kw = 2·wc / wl` from the upper, center and
/// lower bout widths.
///
/// When `overhang` is given (plate edge beyond the ribs) twice its value is
/// removed from each width first, so the ratios describe the rib outline.
///
/// # Errors
///
/// [`OutlineError::Configuration`] when a width is not positive after the
/// overhang is removed.
///
/// # Examples
/// ```
/// use fourcircle::params::ratios_from_widths;
///
/// let ratios = ratios_from_widths(168.0, 112.0, 208.0, Some(4.0)).unwrap();
/// assert_eq!(ratios.upper_ratio, 0.8);
/// assert_eq!(ratios.waist_ratio, 1.04);
/// ```
pub fn ratios_from_widths(
    upper: f64,
    center: f64,
    lower: f64,
    overhang: Option<f64>,
) -> Result<WidthRatios> {
    let trim = 2.0 * overhang.unwrap_or(0.0);
    let (upper, center, lower) = (upper - trim, center - trim, lower - trim);

    for (name, width) in [("upper", upper), ("center", center), ("lower", lower)] {
        if !width.is_finite() || width <= 0.0 {
            return Err(OutlineError::configuration(format!(
                "{name} bout width must be positive after overhang, got {width}"
            )));
        }
    }

    Ok(WidthRatios {
        upper_ratio: upper / lower,
        waist_ratio: 2.0 * center / lower,
    })
}

#[cfg(test)]
mod tests;
