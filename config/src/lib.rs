//! # Config Crate
//!
//! Centralized configuration constants for the turbulator tube pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency between the mesh kernel, the design library and the CLI.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{compute_arc_segments, DEFAULT_ANGULAR_TOLERANCE, DEFAULT_LINEAR_TOLERANCE};
//!
//! // Segments for one semicircular end cap of radius 4
//! let segments = compute_arc_segments(
//!     4.0,
//!     std::f64::consts::PI,
//!     DEFAULT_LINEAR_TOLERANCE,
//!     DEFAULT_ANGULAR_TOLERANCE,
//! );
//! assert!(segments >= 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Units**: Lengths are millimetres, angles are radians unless suffixed `_DEG`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
