//! # Turbulator Tube
//!
//! Parametric heat-exchanger tube: an obround shell of constant wall
//! thickness with diagonal groups of square turbulator pads on both flat
//! walls. Produces the printed metal part and the fluid domain as closed
//! meshes and exports them as STL.
//!
//! ## Architecture
//!
//! ```text
//! TubeParams → Layout (geometry + step) → PlacementPlan → TubeAssembly → STL
//!                                                             ↓
//!                                                      AssemblyReport
//! ```
//!
//! Configuration errors surface from [`Layout::new`] before any geometry is
//! built. Kernel failures from `obround-mesh` surface as
//! [`TubeError::Kernel`] and abort the run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use obround_mesh::Tessellation;
//! use turbulator_tube::{export_assembly, ExportOptions, Layout, TubeAssembly, TubeParams};
//!
//! let layout = Layout::new(TubeParams::default())?;
//! let assembly = TubeAssembly::build(&layout, &Tessellation::default())?;
//! let files = export_assembly(&assembly, &ExportOptions::default())?;
//! for path in files.paths() {
//!     println!("Exported: {}", path.display());
//! }
//! # Ok::<(), turbulator_tube::TubeError>(())
//! ```

pub mod assembly;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod params;
pub mod placement;
pub mod report;
pub mod schedule;
pub mod step;

pub use assembly::{TubeAssembly, TubeShell};
pub use error::{ConfigError, Result, TubeError};
pub use export::{export_assembly, ExportOptions, ExportedFiles};
pub use geometry::TubeGeometry;
pub use layout::Layout;
pub use params::TubeParams;
pub use placement::{group_solid, pad_mesh, place_group, PadPlacement, Wall};
pub use report::AssemblyReport;
pub use schedule::{z_positions, GroupPlan, PlacementPlan};
pub use step::StepVector;
