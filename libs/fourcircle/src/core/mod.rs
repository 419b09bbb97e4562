//! Core value types shared by every construction step.
//!
//! Includes the point alias (`Vec2`) and the `Circle` value type.

pub mod circle;
pub mod vec2;
