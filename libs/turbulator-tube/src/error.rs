//! # Tube Errors
//!
//! Configuration errors are raised before any geometry exists. Kernel
//! failures cross into this crate as the single [`TubeError::Kernel`]
//! variant.

use std::path::PathBuf;

use obround_mesh::MeshError;
use thiserror::Error;

/// Invalid or infeasible tube parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A single parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Width does not exceed height, so there are no straight flats
    #[error(
        "outer_overall ({outer_overall}) must exceed outer_diameter ({outer_diameter}) for an obround"
    )]
    NotObround {
        outer_overall: f64,
        outer_diameter: f64,
    },

    /// Wall leaves no channel
    #[error(
        "wall {wall} is too thick: inner width {inner_overall}, inner height {inner_diameter}"
    )]
    WallTooThick {
        wall: f64,
        inner_overall: f64,
        inner_diameter: f64,
    },

    /// Inner cross-section has no straight span between the caps
    #[error("inner profile has no flat span ({inner_flat_span})")]
    NoFlatSpan { inner_flat_span: f64 },

    /// Pads plus lateral margins do not fit on the flat
    #[error(
        "pads of size {pad_size} do not fit: flat span {inner_flat_span} minus margins of {x_margin} leaves nothing"
    )]
    PadsTooLarge {
        pad_size: f64,
        inner_flat_span: f64,
        x_margin: f64,
    },

    /// Chain angle too close to zero to step across the flat
    #[error("angle {angle_deg}° is too small to step across the flat")]
    DegenerateAngle { angle_deg: f64 },

    /// Parameter file could not be read
    #[error("cannot read parameter file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file is not valid JSON for [`TubeParams`](crate::TubeParams)
    #[error("cannot parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Any failure while building or exporting a tube.
#[derive(Debug, Error)]
pub enum TubeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Geometry kernel failure; fatal, never retried
    #[error("geometry kernel: {0}")]
    Kernel(#[from] MeshError),
}

/// Result alias for tube operations.
pub type Result<T, E = TubeError> = std::result::Result<T, E>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotObround {
            outer_overall: 8.0,
            outer_diameter: 8.0,
        };
        assert!(err.to_string().contains("outer_overall (8)"));

        let err = ConfigError::invalid("embed", "must be below pad_height");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'embed': must be below pad_height"
        );
    }

    #[test]
    fn test_tube_error_from_conversions() {
        let err: TubeError = ConfigError::DegenerateAngle { angle_deg: 0.0 }.into();
        assert!(matches!(err, TubeError::Config(_)));

        let err: TubeError = MeshError::degenerate("empty").into();
        assert!(matches!(err, TubeError::Kernel(_)));
        assert!(err.to_string().starts_with("geometry kernel:"));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
        assert_send_sync::<TubeError>();
    }
}
