//! # Config Crate
//!
//! Centralized configuration constants for the four-circle outline kernel.
//! Numeric tolerances, sampling defaults and the fixed outline topology are
//! defined here so the geometry crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_ARCH_SAMPLES, DEFAULT_BODY_LENGTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-9)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Sampling and body defaults
//! let samples: Option<usize> = None;
//! assert_eq!(samples.unwrap_or(DEFAULT_ARCH_SAMPLES), 101);
//! assert_eq!(DEFAULT_BODY_LENGTH, 100.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure**: No I/O, no platform-specific values

pub mod constants;
