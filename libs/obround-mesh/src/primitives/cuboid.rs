//! # Box Primitive
//!
//! Axis-aligned rectangular prisms. Turbulator pads are boxes positioned
//! with [`Mesh::translate`].

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use obround_mesh::create_box;
/// use glam::DVec3;
///
/// let pad = create_box(DVec3::new(1.3, 0.7, 1.3), true)?;
/// assert_eq!(pad.vertex_count(), 8);
/// assert_eq!(pad.triangle_count(), 12);
/// # Ok::<(), obround_mesh::MeshError>(())
/// ```
pub fn create_box(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box size must be positive and finite: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    // Bottom ring (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top ring (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // -Z
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);
    // +Z
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);
    // -Y
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);
    // +Y
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);
    // -X
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);
    // +X
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_not_centered() {
        let mesh = create_box(DVec3::new(10.0, 20.0, 30.0), false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_box_centered() {
        let mesh = create_box(DVec3::splat(10.0), true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn test_box_volume_is_positive() {
        // Outward winding gives a positive signed volume
        let mesh = create_box(DVec3::new(1.3, 0.7, 1.3), true).unwrap();
        assert_relative_eq!(mesh.volume(), 1.3 * 0.7 * 1.3, epsilon = 1e-12);
        assert_relative_eq!(
            mesh.surface_area(),
            2.0 * (1.3 * 0.7 + 1.3 * 1.3 + 0.7 * 1.3),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_box_validates() {
        let mesh = create_box(DVec3::splat(10.0), false).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(create_box(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(create_box(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
        assert!(create_box(DVec3::new(f64::NAN, 1.0, 1.0), true).is_err());
    }
}
