//! # Solid Assembly
//!
//! Builds the two exported solids from a [`Layout`]:
//!
//! ```text
//! outer obround ─┐
//!                ├─ difference ─> shell ─┐
//! inner obround ─┤                       ├─ union ──────> metal
//!                │   groups ─ union_all ─┤
//!                └───────────────────────┴─ difference ─ clean ─> fluid
//! ```
//!
//! Every Boolean step runs strictly in sequence. Any kernel failure aborts
//! the build; nothing is written to disk here.

use obround_mesh::{
    clean, difference, linear_extrude, union, union_all, Mesh, Profile2D, Tessellation,
};
use tracing::{debug, info};

use crate::error::Result;
use crate::layout::Layout;
use crate::placement::group_solid;
use crate::schedule::PlacementPlan;

/// Shell and inner void of the tube without turbulators.
#[derive(Debug, Clone)]
pub struct TubeShell {
    /// Metal wall: outer obround minus inner obround
    pub shell: Mesh,
    /// Flow channel before any pad intrudes
    pub inner_void: Mesh,
}

impl TubeShell {
    /// Extrudes both obround profiles along Z and hollows the outer one.
    pub fn build(layout: &Layout, tessellation: &Tessellation) -> Result<Self> {
        let params = layout.params();
        let geometry = layout.geometry();

        let outer_profile =
            Profile2D::obround(params.outer_overall, params.outer_diameter, tessellation)?;
        let inner_profile =
            Profile2D::obround(geometry.inner_overall, geometry.inner_diameter, tessellation)?;

        let outer = linear_extrude(&outer_profile, params.length)?;
        let inner_void = linear_extrude(&inner_profile, params.length)?;
        let shell = difference(&outer, &inner_void)?;

        debug!(
            profile_vertices = outer_profile.vertex_count(),
            shell_triangles = shell.triangle_count(),
            "shell built"
        );

        Ok(Self { shell, inner_void })
    }
}

/// Every solid produced for one tube.
#[derive(Debug, Clone)]
pub struct TubeAssembly {
    /// Tube wall without pads
    pub shell: Mesh,
    /// Flow channel without pads
    pub inner_void: Mesh,
    /// All pads fused; empty when no group survives
    pub turbulators: Mesh,
    /// Shell with pads: the printed part
    pub metal: Mesh,
    /// Channel minus pads: the CFD domain
    pub fluid: Mesh,
    /// Groups that produced the turbulators
    pub plan: PlacementPlan,
}

impl TubeAssembly {
    /// Builds all solids for `layout`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use obround_mesh::Tessellation;
    /// use turbulator_tube::{Layout, TubeAssembly, TubeParams};
    ///
    /// let layout = Layout::new(TubeParams::default())?;
    /// let assembly = TubeAssembly::build(&layout, &Tessellation::default())?;
    /// assert!(assembly.fluid.volume() < assembly.inner_void.volume());
    /// # Ok::<(), turbulator_tube::TubeError>(())
    /// ```
    pub fn build(layout: &Layout, tessellation: &Tessellation) -> Result<Self> {
        let TubeShell { shell, inner_void } = TubeShell::build(layout, tessellation)?;
        info!(triangles = shell.triangle_count(), "tube shell ready");

        let plan = PlacementPlan::build(layout);
        let turbulators = fuse_groups(layout, &plan)?;
        info!(
            groups = plan.groups().len(),
            pads = plan.pad_count(),
            triangles = turbulators.triangle_count(),
            "turbulators fused"
        );

        let metal = union(&shell, &turbulators)?;
        info!(triangles = metal.triangle_count(), "metal solid ready");

        let fluid = clean(&difference(&inner_void, &turbulators)?);
        info!(triangles = fluid.triangle_count(), "fluid solid ready");

        Ok(Self {
            shell,
            inner_void,
            turbulators,
            metal,
            fluid,
            plan,
        })
    }
}

/// Fuses every group of `plan` in plan order.
fn fuse_groups(layout: &Layout, plan: &PlacementPlan) -> Result<Mesh> {
    let mut solids = Vec::with_capacity(plan.groups().len());

    for group in plan.groups() {
        if let Some(solid) = group_solid(layout, &group.pads)? {
            debug!(
                wall = %group.wall,
                z_center = group.z_center,
                pads = group.pads.len(),
                "group fused"
            );
            solids.push(solid);
        }
    }

    Ok(union_all(&solids)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TubeParams;
    use approx::assert_relative_eq;

    fn short_layout() -> Layout {
        Layout::new(TubeParams {
            length: 40.0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_shell_volume() {
        let layout = short_layout();
        let tess = Tessellation::default();
        let tube = TubeShell::build(&layout, &tess).unwrap();

        let outer = Profile2D::obround(24.0, 8.0, &tess).unwrap().area();
        let inner = Profile2D::obround(22.8, 6.8, &tess).unwrap().area();
        assert_relative_eq!(tube.shell.volume(), (outer - inner) * 40.0, epsilon = 1e-6);
        assert_relative_eq!(tube.inner_void.volume(), inner * 40.0, epsilon = 1e-6);
    }

    #[test]
    fn test_assembly_conserves_volume() {
        let layout = short_layout();
        let assembly = TubeAssembly::build(&layout, &Tessellation::default()).unwrap();
        let intrusion = assembly.plan.pad_count() as f64 * layout.pad_intrusion_volume();

        assert!(assembly.plan.pad_count() > 0);
        assert_relative_eq!(
            assembly.fluid.volume() + intrusion,
            assembly.inner_void.volume(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            assembly.metal.volume(),
            assembly.shell.volume() + intrusion,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_turbulator_volume_counts_whole_pads() {
        let layout = short_layout();
        let assembly = TubeAssembly::build(&layout, &Tessellation::default()).unwrap();
        let params = layout.params();
        let pad = params.pad_size * params.pad_size * params.pad_height;
        assert_relative_eq!(
            assembly.turbulators.volume(),
            assembly.plan.pad_count() as f64 * pad,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_no_pads_leaves_plain_tube() {
        let layout = Layout::new(TubeParams {
            length: 12.0,
            end_margin: 5.5,
            angle_deg: 10.0,
            ..Default::default()
        })
        .unwrap();
        let assembly = TubeAssembly::build(&layout, &Tessellation::default()).unwrap();

        assert!(assembly.plan.is_empty());
        assert!(assembly.turbulators.is_empty());
        assert_eq!(assembly.metal, assembly.shell);
        assert_relative_eq!(
            assembly.fluid.volume(),
            assembly.inner_void.volume(),
            epsilon = 1e-9
        );
    }
}
