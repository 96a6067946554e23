//! # Assembly Export
//!
//! Writes the metal and fluid solids as binary STL files. Both meshes are
//! validated before the first file is created, so a failed run never
//! leaves one file without the other.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::{DEFAULT_FLUID_FILE_NAME, DEFAULT_TUBE_FILE_NAME};
use obround_mesh::{write_stl, MeshError};
use tracing::info;

use crate::assembly::TubeAssembly;
use crate::error::Result;

/// Target directory and file names of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub tube_file_name: String,
    pub fluid_file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            tube_file_name: DEFAULT_TUBE_FILE_NAME.to_string(),
            fluid_file_name: DEFAULT_FLUID_FILE_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    /// Default file names inside `output_dir`.
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn tube_path(&self) -> PathBuf {
        self.output_dir.join(&self.tube_file_name)
    }

    pub fn fluid_path(&self) -> PathBuf {
        self.output_dir.join(&self.fluid_file_name)
    }
}

/// Paths and facet counts of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub tube_path: PathBuf,
    pub tube_facets: usize,
    pub fluid_path: PathBuf,
    pub fluid_facets: usize,
}

impl ExportedFiles {
    /// Written paths, metal first.
    pub fn paths(&self) -> [&Path; 2] {
        [&self.tube_path, &self.fluid_path]
    }
}

/// Writes the metal and fluid meshes of `assembly`.
///
/// The output directory is created when missing.
///
/// # Errors
///
/// [`TubeError::Kernel`](crate::TubeError::Kernel) when either mesh fails
/// validation or a file cannot be written.
pub fn export_assembly(assembly: &TubeAssembly, options: &ExportOptions) -> Result<ExportedFiles> {
    assembly.metal.validate()?;
    assembly.fluid.validate()?;

    fs::create_dir_all(&options.output_dir).map_err(|e| MeshError::Export {
        path: options.output_dir.clone(),
        message: e.to_string(),
    })?;

    let tube_path = options.tube_path();
    let tube_facets = write_stl(&assembly.metal, &tube_path)?;
    info!(path = %tube_path.display(), facets = tube_facets, "metal exported");

    let fluid_path = options.fluid_path();
    let fluid_facets = write_stl(&assembly.fluid, &fluid_path)?;
    info!(path = %fluid_path.display(), facets = fluid_facets, "fluid exported");

    Ok(ExportedFiles {
        tube_path,
        tube_facets,
        fluid_path,
        fluid_facets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TubeError;
    use crate::layout::Layout;
    use crate::params::TubeParams;
    use obround_mesh::{Mesh, Tessellation};

    fn short_assembly() -> TubeAssembly {
        let layout = Layout::new(TubeParams {
            length: 20.0,
            ..Default::default()
        })
        .unwrap();
        TubeAssembly::build(&layout, &Tessellation::default()).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(
            options.tube_path(),
            Path::new(".").join("radiator_tube_with_turbulators.stl")
        );
        assert_eq!(
            options.fluid_path(),
            Path::new(".").join("radiator_tube_fluid.stl")
        );
    }

    #[test]
    fn test_export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions::in_dir(dir.path().join("out"));
        let assembly = short_assembly();

        let files = export_assembly(&assembly, &options).unwrap();
        assert_eq!(files.tube_facets, assembly.metal.triangle_count());
        assert_eq!(files.fluid_facets, assembly.fluid.triangle_count());
        for path in files.paths() {
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_invalid_mesh_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = ExportOptions::in_dir(dir.path());
        let mut assembly = short_assembly();
        assembly.fluid = Mesh::new();

        let err = export_assembly(&assembly, &options).unwrap_err();
        assert!(matches!(err, TubeError::Kernel(_)));
        assert!(!options.tube_path().exists());
        assert!(!options.fluid_path().exists());
    }
}
