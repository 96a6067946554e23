//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B)
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B); A.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); A.build(B); A.invert()
//!
//! Operands whose bounding boxes are separated by more than the plane
//! tolerance skip the BSP stage entirely.
//!
//! ## Example
//!
//! ```rust
//! use obround_mesh::{create_box, difference, union};
//! use glam::DVec3;
//!
//! let a = create_box(DVec3::splat(2.0), true)?;
//! let b = create_box(DVec3::splat(1.0), true)?;
//! let hollow = difference(&a, &b)?;
//! assert!((hollow.volume() - 7.0).abs() < 1e-9);
//! assert!((union(&a, &b)?.volume() - 8.0).abs() < 1e-9);
//! # Ok::<(), obround_mesh::MeshError>(())
//! ```

mod bsp;
mod plane;
mod polygon;


use config::constants::PLANE_EPSILON;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspTree;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the union of two closed meshes.
///
/// # Errors
///
/// [`MeshError::BooleanFailed`] when either input or the result holds a
/// non-finite coordinate.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    const OP: &str = "union";
    check_input(OP, a, b)?;

    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }
    if !bounding_boxes_overlap(a, b) {
        let mut result = a.clone();
        result.merge(b);
        return Ok(result);
    }

    let mut bsp_a = BspTree::new(mesh_to_polygons(a));
    let mut bsp_b = BspTree::new(mesh_to_polygons(b));

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.into_polygons());

    finish(OP, a, b, bsp_a.into_polygons())
}

/// Computes the difference `a - b`.
///
/// # Errors
///
/// [`MeshError::BooleanFailed`] when either input or the result holds a
/// non-finite coordinate.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    const OP: &str = "difference";
    check_input(OP, a, b)?;

    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() || !bounding_boxes_overlap(a, b) {
        return Ok(a.clone());
    }

    let mut bsp_a = BspTree::new(mesh_to_polygons(a));
    let mut bsp_b = BspTree::new(mesh_to_polygons(b));

    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.into_polygons());
    bsp_a.invert();

    finish(OP, a, b, bsp_a.into_polygons())
}

/// Computes the intersection of two closed meshes.
///
/// # Errors
///
/// [`MeshError::BooleanFailed`] when either input or the result holds a
/// non-finite coordinate.
pub fn intersection(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    const OP: &str = "intersection";
    check_input(OP, a, b)?;

    if a.is_empty() || b.is_empty() || !bounding_boxes_overlap(a, b) {
        return Ok(Mesh::new());
    }

    let mut bsp_a = BspTree::new(mesh_to_polygons(a));
    let mut bsp_b = BspTree::new(mesh_to_polygons(b));

    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_a.build(bsp_b.into_polygons());
    bsp_a.invert();

    finish(OP, a, b, bsp_a.into_polygons())
}

/// Unions a sequence of meshes as a strict left fold:
/// `((m0 ∪ m1) ∪ m2) ∪ ...`.
///
/// An empty slice yields an empty mesh.
pub fn union_all(meshes: &[Mesh]) -> Result<Mesh, MeshError> {
    let Some((first, rest)) = meshes.split_first() else {
        return Ok(Mesh::new());
    };

    rest.iter()
        .try_fold(first.clone(), |acc, mesh| union(&acc, mesh))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Rejects operands that contain non-finite coordinates.
fn check_input(operation: &'static str, a: &Mesh, b: &Mesh) -> Result<(), MeshError> {
    for (name, mesh) in [("left", a), ("right", b)] {
        if mesh.vertices().iter().any(|v| !v.is_finite()) {
            return Err(MeshError::boolean_failed(
                operation,
                format!("{name} operand has a non-finite vertex"),
            ));
        }
    }
    Ok(())
}

/// Converts result polygons to a mesh and checks it.
fn finish(
    operation: &'static str,
    a: &Mesh,
    b: &Mesh,
    polygons: Vec<Polygon>,
) -> Result<Mesh, MeshError> {
    let result = polygons_to_mesh(&polygons);

    if result.vertices().iter().any(|v| !v.is_finite()) {
        return Err(MeshError::boolean_failed(
            operation,
            "result has a non-finite vertex",
        ));
    }

    debug!(
        operation,
        left_triangles = a.triangle_count(),
        right_triangles = b.triangle_count(),
        polygons = polygons.len(),
        result_triangles = result.triangle_count(),
        "boolean complete"
    );

    Ok(result)
}

/// True unless the boxes are separated by more than the plane tolerance
/// along some axis. Touching boxes count as overlapping.
fn bounding_boxes_overlap(a: &Mesh, b: &Mesh) -> bool {
    let (a_min, a_max) = a.bounding_box();
    let (b_min, b_max) = b.bounding_box();

    (0..3).all(|axis| {
        a_min[axis] <= b_max[axis] + PLANE_EPSILON && b_min[axis] <= a_max[axis] + PLANE_EPSILON
    })
}

/// Each non-degenerate triangle becomes one polygon.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangle_iter()
        .filter_map(|corners| Polygon::new(corners.to_vec()))
        .collect()
}

/// Fan-triangulates convex polygons into a mesh.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let vertex_total: usize = polygons.iter().map(|p| p.vertices().len()).sum();
    let mut mesh = Mesh::with_capacity(vertex_total, vertex_total);

    for poly in polygons {
        let vertices = poly.vertices();
        let base = mesh.vertex_count() as u32;

        for v in vertices {
            mesh.add_vertex(*v);
        }
        for i in 1..vertices.len() as u32 - 1 {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}
