//! # Mesh Cleanup
//!
//! Post-Boolean tidy-up. BSP output is a polygon soup where every fragment
//! owns its vertices; this pass welds coincident vertices, removes
//! triangles that collapsed to a line or point and compacts the vertex
//! buffer.
//!
//! Welding snaps positions to a grid of `VERTEX_MERGE_EPSILON` cells, so two
//! points closer than the cell size but on opposite sides of a cell
//! boundary stay apart. That only leaves a redundant vertex behind.

use std::collections::HashMap;

use config::constants::{DEGENERATE_AREA_EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use tracing::debug;

use crate::mesh::Mesh;

/// Grid cell of a welded vertex.
type WeldKey = [i64; 3];

fn weld_key(v: DVec3) -> WeldKey {
    let q = (v / VERTEX_MERGE_EPSILON).round();
    [q.x as i64, q.y as i64, q.z as i64]
}

/// Welds vertices and drops degenerate triangles.
///
/// The output is deterministic: vertices keep the order of their first
/// occurrence and triangles keep their relative order.
///
/// # Example
///
/// ```rust
/// use obround_mesh::{clean, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1e-9, 0.0, 0.0)],
///     vec![[0, 1, 2], [3, 1, 2]],
/// );
/// let cleaned = clean(&mesh);
/// assert_eq!(cleaned.vertex_count(), 3);
/// assert_eq!(cleaned.triangles(), &[[0, 1, 2], [0, 1, 2]]);
/// ```
pub fn clean(mesh: &Mesh) -> Mesh {
    let mut cells: HashMap<WeldKey, u32> = HashMap::with_capacity(mesh.vertex_count());
    let mut welded: Vec<DVec3> = Vec::with_capacity(mesh.vertex_count());

    let remap: Vec<u32> = mesh
        .vertices()
        .iter()
        .map(|&v| {
            *cells.entry(weld_key(v)).or_insert_with(|| {
                welded.push(v);
                (welded.len() - 1) as u32
            })
        })
        .collect();

    let triangles: Vec<[u32; 3]> = mesh
        .triangles()
        .iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .filter(|&[a, b, c]| {
            if a == b || b == c || a == c {
                return false;
            }
            let (pa, pb, pc) = (welded[a as usize], welded[b as usize], welded[c as usize]);
            0.5 * (pb - pa).cross(pc - pa).length() >= DEGENERATE_AREA_EPSILON
        })
        .collect();

    // Compact: keep only referenced vertices, in first-occurrence order
    let mut used = vec![false; welded.len()];
    for tri in &triangles {
        for &i in tri {
            used[i as usize] = true;
        }
    }
    let mut compact = vec![u32::MAX; welded.len()];
    let mut vertices = Vec::with_capacity(welded.len());
    for (old, v) in welded.iter().enumerate() {
        if used[old] {
            compact[old] = vertices.len() as u32;
            vertices.push(*v);
        }
    }
    let triangles: Vec<[u32; 3]> = triangles
        .into_iter()
        .map(|tri| tri.map(|i| compact[i as usize]))
        .collect();

    debug!(
        vertices_in = mesh.vertex_count(),
        vertices_out = vertices.len(),
        triangles_in = mesh.triangle_count(),
        triangles_out = triangles.len(),
        "mesh cleaned"
    );

    Mesh::from_parts(vertices, triangles)
}
