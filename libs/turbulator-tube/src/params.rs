//! # Tube Parameters
//!
//! The parameter block for one tube. Every field has a default, so a JSON
//! parameter file only needs the fields it changes:
//!
//! ```json
//! { "length": 200.0, "angle_deg": 40.0 }
//! ```

use std::fs;
use std::path::Path;

use config::constants::{
    DEFAULT_ANGLE_DEG, DEFAULT_EMBED, DEFAULT_END_MARGIN, DEFAULT_FLAT_WIDTH_COVERAGE,
    DEFAULT_GROUP_SPACING, DEFAULT_LENGTH, DEFAULT_OUTER_DIAMETER, DEFAULT_OUTER_OVERALL,
    DEFAULT_PADS_PER_GROUP, DEFAULT_PAD_HEIGHT, DEFAULT_PAD_SIZE, DEFAULT_WALL,
    MAX_GROUPS_PER_WALL,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Design parameters of a turbulator tube. Lengths in millimetres.
///
/// # Example
///
/// ```rust
/// use turbulator_tube::TubeParams;
///
/// let params = TubeParams::from_json_str(r#"{ "length": 60.0 }"#)?;
/// assert_eq!(params.length, 60.0);
/// assert_eq!(params.pads_per_group, 4);
/// assert_eq!(params.top_offset(), 5.0);
/// # Ok::<(), turbulator_tube::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TubeParams {
    /// Tube length along Z
    pub length: f64,
    /// Outer obround width in X, end to end
    pub outer_overall: f64,
    /// Outer obround height in Y (end-cap diameter)
    pub outer_diameter: f64,
    /// Wall thickness
    pub wall: f64,
    /// Axial distance between consecutive groups on one wall
    pub group_spacing: f64,
    /// Chain angle in degrees; `dx / dz = tan(angle_deg)`
    pub angle_deg: f64,
    /// Phase of the top-wall schedule; half the group spacing when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_offset: Option<f64>,
    /// Pads per diagonal group
    pub pads_per_group: usize,
    /// Square pad footprint in X and Z
    pub pad_size: f64,
    /// Pad extent along Y
    pub pad_height: f64,
    /// Depth a pad sinks into the wall
    pub embed: f64,
    /// Fraction of the usable flat span one chain covers
    pub flat_width_coverage: f64,
    /// Keep-out distance from each tube end
    pub end_margin: f64,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            outer_overall: DEFAULT_OUTER_OVERALL,
            outer_diameter: DEFAULT_OUTER_DIAMETER,
            wall: DEFAULT_WALL,
            group_spacing: DEFAULT_GROUP_SPACING,
            angle_deg: DEFAULT_ANGLE_DEG,
            top_offset: None,
            pads_per_group: DEFAULT_PADS_PER_GROUP,
            pad_size: DEFAULT_PAD_SIZE,
            pad_height: DEFAULT_PAD_HEIGHT,
            embed: DEFAULT_EMBED,
            flat_width_coverage: DEFAULT_FLAT_WIDTH_COVERAGE,
            end_margin: DEFAULT_END_MARGIN,
        }
    }
}

impl TubeParams {
    /// Parses parameters from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads parameters from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialises to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective top-wall phase offset.
    pub fn top_offset(&self) -> f64 {
        self.top_offset.unwrap_or(0.5 * self.group_spacing)
    }

    /// Checks each parameter on its own.
    ///
    /// Cross-parameter feasibility (does the obround have flats, do the pads
    /// fit) is checked by [`TubeGeometry::derive`](crate::TubeGeometry::derive).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("length", self.length),
            ("outer_overall", self.outer_overall),
            ("outer_diameter", self.outer_diameter),
            ("wall", self.wall),
            ("group_spacing", self.group_spacing),
            ("angle_deg", self.angle_deg),
            ("pad_size", self.pad_size),
            ("pad_height", self.pad_height),
            ("embed", self.embed),
            ("flat_width_coverage", self.flat_width_coverage),
            ("end_margin", self.end_margin),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, format!("must be finite, got {value}")));
            }
        }

        let positive = [
            ("length", self.length),
            ("outer_overall", self.outer_overall),
            ("outer_diameter", self.outer_diameter),
            ("wall", self.wall),
            ("group_spacing", self.group_spacing),
            ("pad_size", self.pad_size),
            ("pad_height", self.pad_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::invalid(name, format!("must be positive, got {value}")));
            }
        }

        if !(0.0..self.pad_height).contains(&self.embed) {
            return Err(ConfigError::invalid(
                "embed",
                format!(
                    "must lie in [0, pad_height = {}), got {}",
                    self.pad_height, self.embed
                ),
            ));
        }
        if self.embed >= self.wall {
            return Err(ConfigError::invalid(
                "embed",
                format!(
                    "must stay below wall = {} or pads break through the outer surface, got {}",
                    self.wall, self.embed
                ),
            ));
        }
        if self.end_margin < 0.0 {
            return Err(ConfigError::invalid(
                "end_margin",
                format!("must not be negative, got {}", self.end_margin),
            ));
        }
        if !(self.flat_width_coverage > 0.0 && self.flat_width_coverage <= 1.0) {
            return Err(ConfigError::invalid(
                "flat_width_coverage",
                format!("must lie in (0, 1], got {}", self.flat_width_coverage),
            ));
        }
        if self.pads_per_group < 2 {
            return Err(ConfigError::invalid(
                "pads_per_group",
                format!("a chain needs at least 2 pads, got {}", self.pads_per_group),
            ));
        }
        let groups = ((self.length - 2.0 * self.end_margin) / self.group_spacing).floor();
        if groups >= MAX_GROUPS_PER_WALL as f64 {
            return Err(ConfigError::invalid(
                "group_spacing",
                format!(
                    "{} schedules more than {MAX_GROUPS_PER_WALL} groups per wall",
                    self.group_spacing
                ),
            ));
        }
        if let Some(offset) = self.top_offset {
            if !(offset.is_finite() && offset >= 0.0) {
                return Err(ConfigError::invalid(
                    "top_offset",
                    format!("must be finite and non-negative, got {offset}"),
                ));
            }
        }

        Ok(())
    }
}
