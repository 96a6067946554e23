//! # Turbulator Group Placement
//!
//! A group is a short diagonal chain of square pads on one flat wall,
//! centred laterally on the tube axis and axially on the group's z-centre:
//!
//! ```text
//!   z ^
//!     |          [3]
//!     |       [2]
//!     |    [1]            pad i at (i - mid) * (dx, dz)
//!     | [0]               mid = (pads_per_group - 1) / 2
//!     +---------------> x
//! ```
//!
//! Pads whose centre falls inside an end margin or outside the usable flat
//! span are dropped, so boundary groups are shorter.

use std::fmt;

use glam::DVec3;
use obround_mesh::{create_box, union_all, Mesh, MeshError};
use tracing::trace;

use crate::geometry::TubeGeometry;
use crate::layout::Layout;

/// One of the two flat walls of the obround.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    /// Y of the wall's inner surface.
    pub fn surface_y(self, geometry: &TubeGeometry) -> f64 {
        match self {
            Wall::Top => geometry.top_wall_y(),
            Wall::Bottom => geometry.bottom_wall_y(),
        }
    }

    /// Sign of the direction pointing from the wall into the channel.
    pub fn inward(self) -> f64 {
        match self {
            Wall::Top => -1.0,
            Wall::Bottom => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Wall::Top => "top",
            Wall::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A surviving pad of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadPlacement {
    /// Box centre
    pub center: DVec3,
    /// Position in the full chain, `0..pads_per_group`
    pub index: usize,
}

/// Computes the surviving pads of the group centred at `z_center`.
///
/// # Example
///
/// ```rust
/// use turbulator_tube::{place_group, Layout, TubeParams, Wall};
///
/// let layout = Layout::new(TubeParams::default())?;
/// let middle = place_group(&layout, Wall::Bottom, 60.0);
/// assert_eq!(middle.len(), 4);
///
/// // Close to the end: the lower half of the chain falls in the margin
/// let first = place_group(&layout, Wall::Bottom, 5.0);
/// assert_eq!(first.iter().map(|p| p.index).collect::<Vec<_>>(), vec![2, 3]);
/// # Ok::<(), turbulator_tube::ConfigError>(())
/// ```
pub fn place_group(layout: &Layout, wall: Wall, z_center: f64) -> Vec<PadPlacement> {
    let params = layout.params();
    let step = layout.step();
    let y = layout.pad_center_y(wall);
    let z_min = params.end_margin;
    let z_max = params.length - params.end_margin;
    let half_span = 0.5 * layout.geometry().usable_flat_span;
    let mid = (params.pads_per_group - 1) as f64 / 2.0;

    (0..params.pads_per_group)
        .filter_map(|index| {
            let t = index as f64 - mid;
            let center = DVec3::new(t * step.dx, y, z_center + t * step.dz);

            if center.z < z_min || center.z > z_max || center.x.abs() > half_span {
                trace!(%wall, z_center, index, x = center.x, z = center.z, "pad clipped");
                return None;
            }
            Some(PadPlacement { center, index })
        })
        .collect()
}

/// Builds the box solid of one pad.
pub fn pad_mesh(layout: &Layout, pad: &PadPlacement) -> Result<Mesh, MeshError> {
    let params = layout.params();
    let mut mesh = create_box(
        DVec3::new(params.pad_size, params.pad_height, params.pad_size),
        true,
    )?;
    mesh.translate(pad.center);
    Ok(mesh)
}

/// Fuses the pads of one group into a single solid.
///
/// Returns `None` for a group without surviving pads.
pub fn group_solid(layout: &Layout, pads: &[PadPlacement]) -> Result<Option<Mesh>, MeshError> {
    if pads.is_empty() {
        return Ok(None);
    }

    let meshes = pads
        .iter()
        .map(|pad| pad_mesh(layout, pad))
        .collect::<Result<Vec<_>, _>>()?;
    union_all(&meshes).map(Some)
}
