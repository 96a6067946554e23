//! # Layout
//!
//! Validated parameters together with everything derived from them. All
//! placement functions take a `&Layout`, so they can never see an
//! unchecked parameter block.

use tracing::debug;

use crate::error::ConfigError;
use crate::geometry::TubeGeometry;
use crate::params::TubeParams;
use crate::placement::Wall;
use crate::step::StepVector;

/// Immutable, validated input to placement and assembly.
///
/// # Example
///
/// ```rust
/// use turbulator_tube::{Layout, TubeParams};
///
/// let layout = Layout::new(TubeParams::default())?;
/// assert_eq!(layout.params().pads_per_group, 4);
/// assert!(layout.step().dz > 0.0);
/// # Ok::<(), turbulator_tube::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    params: TubeParams,
    geometry: TubeGeometry,
    step: StepVector,
}

impl Layout {
    /// Validates `params` and derives the geometry and step vector.
    pub fn new(params: TubeParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let geometry = TubeGeometry::derive(&params)?;
        let step = StepVector::derive(&params, &geometry)?;

        debug!(
            inner_overall = geometry.inner_overall,
            inner_diameter = geometry.inner_diameter,
            usable_flat_span = geometry.usable_flat_span,
            dx = step.dx,
            dz = step.dz,
            chain_length = step.chain_length(params.pads_per_group),
            "layout derived"
        );

        Ok(Self {
            params,
            geometry,
            step,
        })
    }

    #[inline]
    pub fn params(&self) -> &TubeParams {
        &self.params
    }

    #[inline]
    pub fn geometry(&self) -> &TubeGeometry {
        &self.geometry
    }

    #[inline]
    pub fn step(&self) -> &StepVector {
        &self.step
    }

    /// Y of a pad centre: the pad sinks `embed` into the wall and protrudes
    /// `pad_height - embed` into the channel.
    pub fn pad_center_y(&self, wall: Wall) -> f64 {
        let offset = 0.5 * self.params.pad_height - self.params.embed;
        wall.surface_y(&self.geometry) + wall.inward() * offset
    }

    /// Volume of one pad sunk into the wall.
    pub fn pad_bond_volume(&self) -> f64 {
        self.params.pad_size * self.params.pad_size * self.params.embed
    }

    /// Volume one whole pad adds to the metal and removes from the fluid.
    pub fn pad_intrusion_volume(&self) -> f64 {
        self.params.pad_size * self.params.pad_size * (self.params.pad_height - self.params.embed)
    }
}
