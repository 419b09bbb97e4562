//! Shared parameter sets for unit tests.

use crate::params::ShapeParameters;

/// A full-size violin pattern whose corners construct cleanly.
pub(crate) fn violin() -> ShapeParameters {
    ShapeParameters {
        body_length: 356.0,
        center_ratio: 0.9,
        upper_ratio: 0.8,
        waist_ratio: 1.0,
        upper_minor_ratio: 0.45,
        lower_minor_ratio: 0.5,
        outer_corner_ratio: 0.3,
        inner_corner_ratio: 0.2,
        upper_blend_ratio: 0.6,
        lower_blend_ratio: 0.5,
        upper_angle_ref: 0.5,
        upper_radius_ref: 0.3,
        lower_angle_ref: 0.5,
        lower_radius_ref: 0.3,
    }
}

/// Valid ratios whose bout-blend circles cannot reach their bouts.
pub(crate) fn unreachable_corner() -> ShapeParameters {
    ShapeParameters {
        body_length: 356.0,
        center_ratio: 0.5,
        upper_ratio: 0.8,
        waist_ratio: 1.05,
        upper_minor_ratio: 0.4,
        lower_minor_ratio: 0.45,
        outer_corner_ratio: 0.5,
        inner_corner_ratio: 0.4,
        upper_blend_ratio: 0.5,
        lower_blend_ratio: 0.5,
        upper_angle_ref: 0.55,
        upper_radius_ref: 0.3,
        lower_angle_ref: 0.55,
        lower_radius_ref: 0.3,
    }
}
