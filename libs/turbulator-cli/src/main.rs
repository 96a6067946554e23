//! # Turbulator
//!
//! Builds an obround heat-exchanger tube with diagonal turbulator pads and
//! writes two binary STL files: the metal part and the fluid domain.
//!
//! stdout carries only the results (`Exported: <path>`, the plan, the
//! report); logs go to stderr.
//!
//! ```text
//! turbulator                              # default tube into .
//! turbulator --params tube.json -o out    # parameter file, output dir
//! turbulator --plan-only --length 60      # print groups, no geometry
//! turbulator --summary -v                 # volumes and debug logging
//! ```

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use turbulator_tube::{export_assembly, AssemblyReport, Layout, PlacementPlan, TubeAssembly};

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli)
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_directive())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let layout = Layout::new(cli.tube_params()?).context("invalid tube parameters")?;

    if cli.plan_only {
        print!("{}", PlacementPlan::build(&layout));
        return Ok(());
    }

    let tessellation = cli.tessellation()?;
    info!(
        length = layout.params().length,
        angle_deg = layout.params().angle_deg,
        "building tube"
    );
    let assembly =
        TubeAssembly::build(&layout, &tessellation).context("failed to build tube geometry")?;

    let files = export_assembly(&assembly, &cli.export_options())
        .context("failed to export meshes")?;
    for path in files.paths() {
        println!("Exported: {}", path.display());
    }

    if cli.summary {
        let report = AssemblyReport::from_assembly(&assembly, &layout)
            .context("failed to measure the assembly")?;
        println!("{report}");
    }

    Ok(())
}
