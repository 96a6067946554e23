//! # Tessellation Tolerances
//!
//! Facet resolution for curved geometry. Curves are approximated once, when a
//! profile is created, so the same tolerances govern the Boolean stage and
//! the exported files.

use config::constants::{compute_arc_segments, DEFAULT_ANGULAR_TOLERANCE, DEFAULT_LINEAR_TOLERANCE};

use crate::error::MeshError;

/// Linear and angular deflection limits.
///
/// # Example
///
/// ```rust
/// use obround_mesh::Tessellation;
///
/// let tess = Tessellation::new(0.05, 0.1)?;
/// assert_eq!(tess.arc_segments(4.0, std::f64::consts::PI), 32);
/// # Ok::<(), obround_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tessellation {
    /// Maximum distance between a curve and its chord
    linear_tolerance: f64,
    /// Maximum angle subtended by one facet, in radians
    angular_tolerance: f64,
}

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            linear_tolerance: DEFAULT_LINEAR_TOLERANCE,
            angular_tolerance: DEFAULT_ANGULAR_TOLERANCE,
        }
    }
}

impl Tessellation {
    /// Creates tolerances, rejecting non-positive or non-finite values.
    pub fn new(linear_tolerance: f64, angular_tolerance: f64) -> Result<Self, MeshError> {
        if !(linear_tolerance.is_finite() && linear_tolerance > 0.0) {
            return Err(MeshError::degenerate(format!(
                "linear tolerance must be positive, got {linear_tolerance}"
            )));
        }
        if !(angular_tolerance.is_finite() && angular_tolerance > 0.0) {
            return Err(MeshError::degenerate(format!(
                "angular tolerance must be positive, got {angular_tolerance}"
            )));
        }

        Ok(Self {
            linear_tolerance,
            angular_tolerance,
        })
    }

    /// Maximum chord deviation.
    #[inline]
    pub fn linear_tolerance(&self) -> f64 {
        self.linear_tolerance
    }

    /// Maximum angle per facet in radians.
    #[inline]
    pub fn angular_tolerance(&self) -> f64 {
        self.angular_tolerance
    }

    /// Number of segments for an arc of `radius` sweeping `sweep` radians.
    pub fn arc_segments(&self, radius: f64, sweep: f64) -> u32 {
        compute_arc_segments(radius, sweep, self.linear_tolerance, self.angular_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_default_tolerances() {
        let tess = Tessellation::default();
        assert_eq!(tess.linear_tolerance(), 0.05);
        assert_eq!(tess.angular_tolerance(), 0.1);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(Tessellation::new(0.0, 0.1).is_err());
        assert!(Tessellation::new(0.05, -1.0).is_err());
        assert!(Tessellation::new(f64::NAN, 0.1).is_err());
        assert!(Tessellation::new(0.05, f64::INFINITY).is_err());
    }

    #[test]
    fn test_finer_tolerance_means_more_segments() {
        let coarse = Tessellation::new(0.5, 1.0).unwrap();
        let fine = Tessellation::new(0.01, 0.05).unwrap();
        assert!(fine.arc_segments(4.0, PI) > coarse.arc_segments(4.0, PI));
    }
}
