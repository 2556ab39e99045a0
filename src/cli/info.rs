//! Info command: report the tiling a configuration produces without
//! rendering anything.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::pattern::CIRCLES_PER_SIDE;
use crate::render::{to_json, TilingReport};

use super::ConfigArgs;

/// Show the tiling a configuration produces
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let resolved = args.config.manifest()?.configuration()?.resolve()?;
    let report = TilingReport::new(&resolved)?;
    let tiling = &report.tiling;

    if args.json {
        println!("{}", to_json(&report)?);
    } else {
        for line in describe(&report) {
            println!("{}", line);
        }
    }

    if !tiling.clean {
        printer.warning(
            "Uneven",
            &format!(
                "{}px board is not a whole number of {}px tile pairs",
                tiling.canvas_size, tiling.partition_size
            ),
        );
    }

    Ok(())
}

/// `key: value` lines describing a tiling report.
fn describe(report: &TilingReport) -> Vec<String> {
    let tiling = &report.tiling;
    let nodes_per_side = tiling.tiles_per_side as usize * CIRCLES_PER_SIDE as usize;
    vec![
        format!("canvas: {0}x{0}", tiling.canvas_size),
        format!("footprint radius: {}", report.footprint_radius),
        format!("spacing factor: {}", report.spacing_factor),
        format!("effective radius: {}", report.effective_radius),
        format!("partition: {}", tiling.partition_size),
        format!(
            "tiles: {} per side, {} across",
            tiling.tiles_per_side,
            plural(nodes_per_side, "node slot", "node slots")
        ),
        format!("remainder: {}", tiling.remainder),
        format!("clean: {}", tiling.clean),
        format!("colours: {} / {}", report.colour_a, report.colour_b),
    ]
}
