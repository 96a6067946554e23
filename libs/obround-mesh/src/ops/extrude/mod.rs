//! # Linear Extrusion
//!
//! Sweeps a convex [`Profile2D`] along +Z from z = 0 to a given height.
//! Side walls are quads split into two triangles, caps are triangle fans.


use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::profile::Profile2D;
use glam::DVec3;

/// Extrudes a convex profile along the Z axis.
///
/// # Arguments
///
/// * `profile` - Convex, counter-clockwise outline
/// * `height` - Extrusion distance along +Z
///
/// # Returns
///
/// A closed mesh spanning `0 <= z <= height` with outward winding.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] for a non-positive height or a profile
/// that is not convex. Fan caps are only valid for convex outlines.
///
/// # Example
///
/// ```rust
/// use obround_mesh::{linear_extrude, Profile2D, Tessellation};
///
/// let slot = Profile2D::obround(24.0, 8.0, &Tessellation::default())?;
/// let bar = linear_extrude(&slot, 120.0)?;
/// assert!(bar.volume() > 0.0);
/// # Ok::<(), obround_mesh::MeshError>(())
/// ```
pub fn linear_extrude(profile: &Profile2D, height: f64) -> Result<Mesh, MeshError> {
    if !(height.is_finite() && height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "extrusion height must be positive, got {height}"
        )));
    }
    if profile.vertex_count() < 3 {
        return Err(MeshError::degenerate(
            "profile must have at least 3 vertices",
        ));
    }
    if !profile.is_convex() {
        return Err(MeshError::degenerate(
            "profile must be convex and counter-clockwise",
        ));
    }

    let outline = profile.outline();
    let n = outline.len();
    let mut mesh = Mesh::with_capacity(2 * n, 2 * n + 2 * (n - 2));

    for z in [0.0, height] {
        for v in outline {
            mesh.add_vertex(DVec3::new(v.x, v.y, z));
        }
    }

    let bottom = |i: usize| i as u32;
    let top = |i: usize| (n + i) as u32;

    // Side walls
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_triangle(bottom(i), bottom(j), top(j));
        mesh.add_triangle(bottom(i), top(j), top(i));
    }

    // Caps
    for i in 1..n - 1 {
        mesh.add_triangle(bottom(0), bottom(i + 1), bottom(i));
        mesh.add_triangle(top(0), top(i), top(i + 1));
    }

    Ok(mesh)
}
