//! # STL Export
//!
//! Writes meshes as binary STL. Coordinates are narrowed to f32 here and
//! nowhere else; facet normals are recomputed from the f64 geometry.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Writes `mesh` to `path` as a binary STL file.
///
/// The mesh is validated before the file is created, so an invalid mesh
/// never leaves a partial file behind.
///
/// # Returns
///
/// The number of facets written.
///
/// # Errors
///
/// [`MeshError::ValidationFailed`] for an invalid mesh, [`MeshError::Export`]
/// when the file cannot be created or written.
pub fn write_stl(mesh: &Mesh, path: impl AsRef<Path>) -> Result<usize, MeshError> {
    let path = path.as_ref();
    mesh.validate()?;

    let triangles: Vec<stl_io::Triangle> = mesh.triangle_iter().map(to_stl_triangle).collect();

    let export_error = |e: std::io::Error| MeshError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, triangles.iter()).map_err(export_error)?;
    writer.flush().map_err(export_error)?;

    debug!(path = %path.display(), facets = triangles.len(), "stl written");
    Ok(triangles.len())
}

fn to_stl_triangle([a, b, c]: [DVec3; 3]) -> stl_io::Triangle {
    let normal = (b - a).cross(c - a).try_normalize().unwrap_or(DVec3::Z);

    stl_io::Triangle {
        normal: stl_io::Normal::new(normal.as_vec3().to_array()),
        vertices: [
            stl_io::Vertex::new(a.as_vec3().to_array()),
            stl_io::Vertex::new(b.as_vec3().to_array()),
            stl_io::Vertex::new(c.as_vec3().to_array()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;

    #[test]
    fn test_write_stl_facet_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.stl");
        let mesh = create_box(DVec3::splat(2.0), true).unwrap();

        let written = write_stl(&mesh, &path).unwrap();
        assert_eq!(written, 12);

        // 80-byte header, u32 count, 50 bytes per facet
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 84 + 50 * 12);
    }

    #[test]
    fn test_write_stl_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.stl");
        write_stl(&create_box(DVec3::new(1.0, 2.0, 3.0), false).unwrap(), &path).unwrap();

        let mut file = File::open(&path).unwrap();
        let indexed = stl_io::read_stl(&mut file).unwrap();
        assert_eq!(indexed.faces.len(), 12);
        assert_eq!(indexed.vertices.len(), 8);
    }

    #[test]
    fn test_write_stl_rejects_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.stl");
        assert!(matches!(
            write_stl(&Mesh::new(), &path),
            Err(MeshError::ValidationFailed { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_stl_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("box.stl");
        let mesh = create_box(DVec3::ONE, true).unwrap();
        assert!(matches!(write_stl(&mesh, &path), Err(MeshError::Export { .. })));
    }

    #[test]
    fn test_normal_points_outward() {
        let tri = to_stl_triangle([DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(tri.normal, stl_io::Normal::new([0.0, 0.0, 1.0]));
    }
}
