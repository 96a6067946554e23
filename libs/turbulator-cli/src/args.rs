//! Command-line arguments and their translation into library inputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{
    DEFAULT_ANGULAR_TOLERANCE, DEFAULT_FLUID_FILE_NAME, DEFAULT_LINEAR_TOLERANCE,
    DEFAULT_TUBE_FILE_NAME,
};
use obround_mesh::Tessellation;
use turbulator_tube::{ExportOptions, TubeParams};

/// Obround heat-exchanger tube with diagonal turbulator pads
///
/// Builds the metal part and the fluid domain and writes both as binary STL.
#[derive(Debug, Parser)]
#[command(name = "turbulator")]
#[command(about = "Generate an obround tube with diagonal turbulators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON parameter file; any subset of fields, the rest keep their defaults
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Tube length along Z (mm)
    #[arg(long)]
    pub length: Option<f64>,

    /// Diagonal angle of each pad chain in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle_deg: Option<f64>,

    /// Axial spacing between groups on one wall (mm)
    #[arg(long)]
    pub group_spacing: Option<f64>,

    /// Fraction of the usable flat span covered by one chain
    #[arg(long)]
    pub coverage: Option<f64>,

    /// Directory receiving the STL files
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// File name of the metal mesh
    #[arg(long, default_value = DEFAULT_TUBE_FILE_NAME)]
    pub tube_file: String,

    /// File name of the fluid mesh
    #[arg(long, default_value = DEFAULT_FLUID_FILE_NAME)]
    pub fluid_file: String,

    /// Maximum chord deviation of curved facets (mm)
    #[arg(long, default_value_t = DEFAULT_LINEAR_TOLERANCE)]
    pub linear_tolerance: f64,

    /// Maximum angle per curved facet (radians)
    #[arg(long, default_value_t = DEFAULT_ANGULAR_TOLERANCE)]
    pub angular_tolerance: f64,

    /// Print the assembly report after export
    #[arg(long)]
    pub summary: bool,

    /// Print the placement plan and exit without building geometry
    #[arg(long)]
    pub plan_only: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the parameter file, then individual flags.
    pub fn tube_params(&self) -> Result<TubeParams> {
        let mut params = match &self.params {
            Some(path) => TubeParams::from_file(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            None => TubeParams::default(),
        };

        if let Some(length) = self.length {
            params.length = length;
        }
        if let Some(angle_deg) = self.angle_deg {
            params.angle_deg = angle_deg;
        }
        if let Some(group_spacing) = self.group_spacing {
            params.group_spacing = group_spacing;
        }
        if let Some(coverage) = self.coverage {
            params.flat_width_coverage = coverage;
        }

        Ok(params)
    }

    pub fn tessellation(&self) -> Result<Tessellation> {
        Tessellation::new(self.linear_tolerance, self.angular_tolerance)
            .context("invalid tessellation tolerances")
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            tube_file_name: self.tube_file.clone(),
            fluid_file_name: self.fluid_file.clone(),
        }
    }

    /// Directive used when `RUST_LOG` is unset.
    pub fn default_log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("turbulator").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.tube_params().unwrap(), TubeParams::default());
        assert_eq!(cli.export_options(), ExportOptions::default());
        assert_eq!(cli.tessellation().unwrap(), Tessellation::default());
        assert!(!cli.summary && !cli.plan_only && !cli.verbose);
        assert_eq!(cli.default_log_directive(), "info");
    }

    #[test]
    fn test_flag_overrides() {
        let cli = parse(&[
            "--length",
            "60",
            "--angle-deg",
            "-30",
            "--group-spacing",
            "12.5",
            "--coverage",
            "0.7",
            "-v",
        ]);
        let params = cli.tube_params().unwrap();
        assert_eq!(params.length, 60.0);
        assert_eq!(params.angle_deg, -30.0);
        assert_eq!(params.group_spacing, 12.5);
        assert_eq!(params.flat_width_coverage, 0.7);
        assert_eq!(params.pads_per_group, 4);
        assert_eq!(cli.default_log_directive(), "debug");
    }

    #[test]
    fn test_params_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "length": 80.0, "wall": 0.8 }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["--params", path, "--length", "90"]);
        let params = cli.tube_params().unwrap();
        assert_eq!(params.length, 90.0);
        assert_eq!(params.wall, 0.8);
    }

    #[test]
    fn test_missing_params_file() {
        let cli = parse(&["--params", "/nonexistent/tube.json"]);
        let err = cli.tube_params().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tube.json"));
    }

    #[test]
    fn test_output_names() {
        let cli = parse(&["-o", "out", "--tube-file", "metal.stl", "--fluid-file", "cfd.stl"]);
        let options = cli.export_options();
        assert_eq!(options.tube_path(), PathBuf::from("out/metal.stl"));
        assert_eq!(options.fluid_path(), PathBuf::from("out/cfd.stl"));
    }

    #[test]
    fn test_bad_tolerance() {
        let cli = parse(&["--linear-tolerance", "0"]);
        assert!(cli.tessellation().is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["turbulator", "--pads", "5"]);
        assert!(result.is_err());
    }
}
