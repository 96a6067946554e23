//! # Derived Cross-Section Geometry
//!
//! Inner dimensions of the obround and the lateral span available to pads.
//!
//! ```text
//!            inner_overall
//!   <------------------------------->
//!    .-----------------------------.      ^
//!   (   |<--- inner_flat_span --->|  )    | inner_diameter
//!    '-----------------------------'      v
//!         |<-- usable_flat_span -->|
//!        x_margin on each side of the usable span
//! ```

use config::constants::{EPSILON, MIN_EDGE_MARGIN};

use crate::error::ConfigError;
use crate::params::TubeParams;

/// Inner cross-section dimensions derived from [`TubeParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    /// Inner obround width, end to end
    pub inner_overall: f64,
    /// Inner obround height (end-cap diameter)
    pub inner_diameter: f64,
    /// Straight span between the inner end caps
    pub inner_flat_span: f64,
    /// Lateral keep-out from each end of the flat
    pub x_margin: f64,
    /// Flat span left for pad centres after both margins
    pub usable_flat_span: f64,
}

impl TubeGeometry {
    /// Derives the inner geometry and checks that the tube is feasible.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotObround`] if `outer_overall <= outer_diameter`
    /// - [`ConfigError::WallTooThick`] if the wall consumes the channel
    /// - [`ConfigError::NoFlatSpan`] if the inner profile has no flats
    /// - [`ConfigError::PadsTooLarge`] if nothing is left after the margins
    /// - [`ConfigError::InvalidParameter`] if a pad spans the whole channel
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbulator_tube::{TubeGeometry, TubeParams};
    ///
    /// let geometry = TubeGeometry::derive(&TubeParams::default())?;
    /// assert!((geometry.inner_flat_span - 16.0).abs() < 1e-12);
    /// assert!((geometry.usable_flat_span - 14.7).abs() < 1e-12);
    /// # Ok::<(), turbulator_tube::ConfigError>(())
    /// ```
    pub fn derive(params: &TubeParams) -> Result<Self, ConfigError> {
        if params.outer_overall - params.outer_diameter <= EPSILON {
            return Err(ConfigError::NotObround {
                outer_overall: params.outer_overall,
                outer_diameter: params.outer_diameter,
            });
        }

        let inner_overall = params.outer_overall - 2.0 * params.wall;
        let inner_diameter = params.outer_diameter - 2.0 * params.wall;
        if inner_diameter <= EPSILON || inner_overall - inner_diameter <= EPSILON {
            return Err(ConfigError::WallTooThick {
                wall: params.wall,
                inner_overall,
                inner_diameter,
            });
        }

        let inner_flat_span = inner_overall - inner_diameter;
        if inner_flat_span <= EPSILON {
            return Err(ConfigError::NoFlatSpan { inner_flat_span });
        }

        let x_margin = (0.5 * params.pad_size).max(MIN_EDGE_MARGIN);
        let usable_flat_span = (inner_flat_span - 2.0 * x_margin).max(0.0);
        if usable_flat_span <= EPSILON {
            return Err(ConfigError::PadsTooLarge {
                pad_size: params.pad_size,
                inner_flat_span,
                x_margin,
            });
        }

        let protrusion = params.pad_height - params.embed;
        if protrusion >= inner_diameter - EPSILON {
            return Err(ConfigError::invalid(
                "pad_height",
                format!(
                    "pads protrude {protrusion} into a channel only {inner_diameter} high"
                ),
            ));
        }

        Ok(Self {
            inner_overall,
            inner_diameter,
            inner_flat_span,
            x_margin,
            usable_flat_span,
        })
    }

    /// Y coordinate of the inner surface of the top flat wall.
    #[inline]
    pub fn top_wall_y(&self) -> f64 {
        0.5 * self.inner_diameter
    }

    /// Y coordinate of the inner surface of the bottom flat wall.
    #[inline]
    pub fn bottom_wall_y(&self) -> f64 {
        -0.5 * self.inner_diameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_geometry() {
        let g = TubeGeometry::derive(&TubeParams::default()).unwrap();
        assert_relative_eq!(g.inner_overall, 22.8, epsilon = 1e-12);
        assert_relative_eq!(g.inner_diameter, 6.8, epsilon = 1e-12);
        assert_relative_eq!(g.inner_flat_span, 16.0, epsilon = 1e-12);
        assert_relative_eq!(g.x_margin, 0.65, epsilon = 1e-12);
        assert_relative_eq!(g.usable_flat_span, 14.7, epsilon = 1e-12);
        assert_relative_eq!(g.top_wall_y(), 3.4, epsilon = 1e-12);
        assert_relative_eq!(g.bottom_wall_y(), -3.4, epsilon = 1e-12);
    }

    #[test]
    fn test_small_pads_use_minimum_margin() {
        let params = TubeParams {
            pad_size: 0.4,
            ..Default::default()
        };
        let g = TubeGeometry::derive(&params).unwrap();
        assert_eq!(g.x_margin, MIN_EDGE_MARGIN);
    }

    #[test]
    fn test_not_obround() {
        for outer_overall in [8.0, 6.0] {
            let params = TubeParams {
                outer_overall,
                ..Default::default()
            };
            assert!(matches!(
                TubeGeometry::derive(&params),
                Err(ConfigError::NotObround { .. })
            ));
        }
    }

    #[test]
    fn test_wall_too_thick() {
        let params = TubeParams {
            wall: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            TubeGeometry::derive(&params),
            Err(ConfigError::WallTooThick { .. })
        ));
    }

    #[test]
    fn test_pads_too_large() {
        // Flat span 2.0, margins 2 x 1.0
        let params = TubeParams {
            outer_overall: 10.0,
            pad_size: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            TubeGeometry::derive(&params),
            Err(ConfigError::PadsTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_usable_span_with_rounding_noise() {
        // The inner flat evaluates to 2.0 plus a few ulps, so the usable
        // span is zero only up to rounding
        let params = TubeParams {
            outer_overall: 10.0,
            pad_size: 2.0,
            ..Default::default()
        };
        let err = Layout::new(params).unwrap_err();
        assert!(matches!(err, ConfigError::PadsTooLarge { .. }));
    }

    #[test]
    fn test_equal_width_and_height_within_rounding() {
        let params = TubeParams {
            outer_overall: 8.0 + 1e-12,
            ..Default::default()
        };
        assert!(matches!(
            TubeGeometry::derive(&params),
            Err(ConfigError::NotObround { .. })
        ));
    }

    #[test]
    fn test_pads_spanning_channel() {
        let params = TubeParams {
            outer_diameter: 2.0,
            wall: 0.6,
            pad_height: 1.0,
            embed: 0.15,
            ..Default::default()
        };
        assert!(matches!(
            TubeGeometry::derive(&params),
            Err(ConfigError::InvalidParameter { name: "pad_height", .. })
        ));
    }
}
