//! # Placement Schedule
//!
//! Axial group centres for both walls. The bottom wall starts at the end
//! margin; the top wall is shifted by `top_offset` so that groups on the
//! two walls alternate along the tube.

use std::fmt;

use tracing::debug;

use crate::layout::Layout;
use crate::placement::{place_group, PadPlacement, Wall};

/// Group z-centres for a schedule starting `offset` past the end margin.
///
/// Centres run from `end_margin + offset` in steps of `group_spacing` up to
/// `length - end_margin`; the list is empty when the start is already past
/// the end.
///
/// # Example
///
/// ```rust
/// use turbulator_tube::{z_positions, Layout, TubeParams};
///
/// let layout = Layout::new(TubeParams::default())?;
/// let bottom = z_positions(&layout, 0.0);
/// assert_eq!(bottom.first(), Some(&5.0));
/// assert_eq!(bottom.last(), Some(&115.0));
/// assert_eq!(bottom.len(), 12);
/// # Ok::<(), turbulator_tube::ConfigError>(())
/// ```
pub fn z_positions(layout: &Layout, offset: f64) -> Vec<f64> {
    let params = layout.params();
    let z0 = params.end_margin + offset;
    let z_max = params.length - params.end_margin;
    if z0 > z_max {
        return Vec::new();
    }

    let count = ((z_max - z0) / params.group_spacing).floor() as usize + 1;
    (0..count)
        .map(|i| z0 + i as f64 * params.group_spacing)
        .collect()
}

/// One scheduled group with at least one surviving pad.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub wall: Wall,
    pub z_center: f64,
    pub pads: Vec<PadPlacement>,
}

/// Every non-empty group of the tube, bottom wall first, each wall in
/// increasing z. This is also the order of the union fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPlan {
    groups: Vec<GroupPlan>,
}

impl PlacementPlan {
    /// Schedules both walls and places every group, skipping empty ones.
    pub fn build(layout: &Layout) -> Self {
        let mut groups = Vec::new();

        for (wall, offset) in [(Wall::Bottom, 0.0), (Wall::Top, layout.params().top_offset())] {
            for z_center in z_positions(layout, offset) {
                let pads = place_group(layout, wall, z_center);
                if pads.is_empty() {
                    debug!(%wall, z_center, "group skipped, no pads survive");
                    continue;
                }
                groups.push(GroupPlan {
                    wall,
                    z_center,
                    pads,
                });
            }
        }

        let plan = Self { groups };
        debug!(
            bottom_groups = plan.group_count(Wall::Bottom),
            top_groups = plan.group_count(Wall::Top),
            pads = plan.pad_count(),
            "placement planned"
        );
        plan
    }

    #[inline]
    pub fn groups(&self) -> &[GroupPlan] {
        &self.groups
    }

    /// Number of non-empty groups on `wall`.
    pub fn group_count(&self, wall: Wall) -> usize {
        self.groups.iter().filter(|g| g.wall == wall).count()
    }

    /// Total number of pads.
    pub fn pad_count(&self) -> usize {
        self.groups.iter().map(|g| g.pads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for PlacementPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Placement plan: {} groups ({} bottom, {} top), {} pads",
            self.groups.len(),
            self.group_count(Wall::Bottom),
            self.group_count(Wall::Top),
            self.pad_count()
        )?;
        for group in &self.groups {
            writeln!(
                f,
                "  {:<6} z = {:>8.3}  pads {}",
                group.wall.name(),
                group.z_center,
                group.pads.len()
            )?;
            for pad in &group.pads {
                writeln!(
                    f,
                    "    [{}] ({:>8.3}, {:>7.3}, {:>8.3})",
                    pad.index, pad.center.x, pad.center.y, pad.center.z
                )?;
            }
        }
        Ok(())
    }
}
