//! # Diagonal Step Vector
//!
//! Offset between consecutive pads of one chain. The chain spans a target
//! width across the flat; the angle fixes how far it advances along Z to
//! get there.

use config::constants::ANGLE_EPSILON;

use crate::error::ConfigError;
use crate::geometry::TubeGeometry;
use crate::params::TubeParams;

/// Per-pad step of a diagonal chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepVector {
    /// Lateral step, signed like `tan(angle)`
    pub dx: f64,
    /// Axial step, always positive
    pub dz: f64,
    /// Lateral extent of the whole chain, first to last pad centre
    pub target_x_span: f64,
}

impl StepVector {
    /// Derives the step vector.
    ///
    /// `target_x_span = max(usable_flat_span * coverage, 2 * pad_size)`, the
    /// chain covers it in `pads_per_group - 1` equal steps.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DegenerateAngle`] when `|tan(angle)|` is below
    /// `ANGLE_EPSILON`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbulator_tube::{StepVector, TubeGeometry, TubeParams};
    ///
    /// let params = TubeParams::default();
    /// let geometry = TubeGeometry::derive(&params)?;
    /// let step = StepVector::derive(&params, &geometry)?;
    /// assert!((3.0 * step.dx - step.target_x_span).abs() < 1e-9);
    /// # Ok::<(), turbulator_tube::ConfigError>(())
    /// ```
    pub fn derive(params: &TubeParams, geometry: &TubeGeometry) -> Result<Self, ConfigError> {
        let tan = params.angle_deg.to_radians().tan();
        if !(tan.abs() >= ANGLE_EPSILON) {
            return Err(ConfigError::DegenerateAngle {
                angle_deg: params.angle_deg,
            });
        }

        let target_x_span =
            (geometry.usable_flat_span * params.flat_width_coverage).max(2.0 * params.pad_size);
        let total_dz = target_x_span / tan.abs();
        let intervals = params.pads_per_group.saturating_sub(1).max(1) as f64;
        let dz = total_dz / intervals;

        Ok(Self {
            dx: tan * dz,
            dz,
            target_x_span,
        })
    }

    /// Axial length of a complete chain, first to last pad centre.
    pub fn chain_length(&self, pads_per_group: usize) -> f64 {
        self.dz * pads_per_group.saturating_sub(1) as f64
    }
}
