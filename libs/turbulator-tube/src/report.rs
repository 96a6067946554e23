//! # Assembly Report
//!
//! Volumes and counts of a finished [`TubeAssembly`], plus the
//! volume-conservation residual. Every pad removes exactly its protruding
//! part from the channel, so `inner_void - fluid - intrusion` should vanish
//! up to floating-point noise.
//!
//! The bond volume is the part of every pad sunk into the wall, measured
//! as the intersection of shell and turbulators. It should equal
//! `pads * pad_size² * embed`.

use std::fmt;

use obround_mesh::intersection;

use crate::assembly::TubeAssembly;
use crate::error::Result;
use crate::layout::Layout;
use crate::placement::Wall;

/// Summary of one assembled tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyReport {
    pub bottom_groups: usize,
    pub top_groups: usize,
    pub pads: usize,
    /// Axial extent of a complete chain, first to last pad centre
    pub chain_length: f64,
    pub shell_volume: f64,
    pub inner_void_volume: f64,
    pub metal_volume: f64,
    pub fluid_volume: f64,
    /// `pads * pad_size² * (pad_height - embed)`
    pub intrusion_volume: f64,
    /// `inner_void - fluid - intrusion`
    pub residual: f64,
    /// Measured shell ∩ turbulators
    pub bond_volume: f64,
    /// `pads * pad_size² * embed`
    pub expected_bond_volume: f64,
    pub metal_triangles: usize,
    pub fluid_triangles: usize,
}

impl AssemblyReport {
    /// Measures `assembly`, which must have been built from `layout`.
    ///
    /// # Errors
    ///
    /// [`TubeError::Kernel`](crate::TubeError::Kernel) when the bond
    /// intersection fails.
    pub fn from_assembly(assembly: &TubeAssembly, layout: &Layout) -> Result<Self> {
        let pads = assembly.plan.pad_count();
        let bond = intersection(&assembly.shell, &assembly.turbulators)?;
        let inner_void_volume = assembly.inner_void.volume();
        let fluid_volume = assembly.fluid.volume();
        let intrusion_volume = pads as f64 * layout.pad_intrusion_volume();

        Ok(Self {
            bottom_groups: assembly.plan.group_count(Wall::Bottom),
            top_groups: assembly.plan.group_count(Wall::Top),
            pads,
            chain_length: layout.step().chain_length(layout.params().pads_per_group),
            shell_volume: assembly.shell.volume(),
            inner_void_volume,
            metal_volume: assembly.metal.volume(),
            fluid_volume,
            intrusion_volume,
            residual: inner_void_volume - fluid_volume - intrusion_volume,
            bond_volume: bond.volume(),
            expected_bond_volume: pads as f64 * layout.pad_bond_volume(),
            metal_triangles: assembly.metal.triangle_count(),
            fluid_triangles: assembly.fluid.triangle_count(),
        })
    }

    /// Residual relative to the inner void volume.
    pub fn relative_residual(&self) -> f64 {
        if self.inner_void_volume > 0.0 {
            self.residual.abs() / self.inner_void_volume
        } else {
            0.0
        }
    }
}

impl fmt::Display for AssemblyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assembly report")?;
        writeln!(
            f,
            "  groups            {} ({} bottom, {} top)",
            self.bottom_groups + self.top_groups,
            self.bottom_groups,
            self.top_groups
        )?;
        writeln!(f, "  pads              {}", self.pads)?;
        writeln!(f, "  chain length      {:>12.4} mm", self.chain_length)?;
        writeln!(f, "  shell volume      {:>12.4} mm³", self.shell_volume)?;
        writeln!(f, "  inner void volume {:>12.4} mm³", self.inner_void_volume)?;
        writeln!(
            f,
            "  metal volume      {:>12.4} mm³  ({} triangles)",
            self.metal_volume, self.metal_triangles
        )?;
        writeln!(
            f,
            "  fluid volume      {:>12.4} mm³  ({} triangles)",
            self.fluid_volume, self.fluid_triangles
        )?;
        writeln!(f, "  pad intrusion     {:>12.4} mm³", self.intrusion_volume)?;
        writeln!(
            f,
            "  pad bond          {:>12.4} mm³  (expected {:.4})",
            self.bond_volume, self.expected_bond_volume
        )?;
        write!(
            f,
            "  residual          {:>12.3e} mm³  ({:.2e} relative)",
            self.residual,
            self.relative_residual()
        )
    }
}
