//! # Primitives
//!
//! Closed solids built directly, without extrusion.

pub mod cuboid;

pub use cuboid::create_box;
