//! # Mesh Operations
//!
//! Extrusion, Boolean operations (CSG) and post-Boolean cleanup.

pub mod boolean;
pub mod cleanup;
pub mod extrude;

pub use boolean::{difference, intersection, union, union_all};
pub use cleanup::clean;
pub use extrude::linear_extrude;
