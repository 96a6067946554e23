//! # Obround Mesh
//!
//! Small solid-modelling kernel used by the turbulator tube pipeline.
//! Everything is a closed triangle mesh in f64; exact B-rep surfaces are
//! replaced by facets generated up front from a [`Tessellation`].
//!
//! ## Architecture
//!
//! ```text
//! Profile2D --linear_extrude--> Mesh ┐
//! create_box ---------------> Mesh ┼--union/difference--> Mesh --clean--> write_stl
//!                                    ┘
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm), arena based
//! - **Triangulation**: Fan triangulation of convex faces
//! - **Cleanup**: Grid-quantised vertex welding
//!
//! ## Usage
//!
//! ```rust
//! use obround_mesh::{create_box, difference, linear_extrude, Profile2D, Tessellation};
//! use glam::DVec3;
//!
//! let tess = Tessellation::default();
//! let outer = linear_extrude(&Profile2D::obround(24.0, 8.0, &tess)?, 20.0)?;
//! let slot = create_box(DVec3::new(4.0, 20.0, 4.0), true)?;
//! let cut = difference(&outer, &slot)?;
//! assert!(cut.volume() < outer.volume());
//! # Ok::<(), obround_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;
pub mod tessellation;

pub use error::MeshError;
pub use export::write_stl;
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union, union_all};
pub use ops::cleanup::clean;
pub use ops::extrude::linear_extrude;
pub use primitives::create_box;
pub use profile::Profile2D;
pub use tessellation::Tessellation;
