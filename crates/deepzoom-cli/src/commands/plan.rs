use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use deepzoom_core::geometry::Viewport;
use deepzoom_core::planner::TilePlanner;

use crate::summary::print_tile_plan;

#[derive(Args)]
pub struct PlanArgs {
    /// Session config file (TOML)
    pub session: PathBuf,

    /// Viewport as x,y,width,height in fitted-box coordinates (repeatable).
    /// Defaults to the whole fitted box.
    #[arg(long = "viewport", value_parser = parse_viewport)]
    pub viewports: Vec<Viewport>,

    /// Print tile URLs for each emitted plan
    #[arg(long)]
    pub urls: bool,
}

fn parse_viewport(s: &str) -> Result<Viewport> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{part}' in viewport"))
        })
        .collect::<Result<Vec<_>>>()?;
    match values.as_slice() {
        &[x, y, width, height] => Ok(Viewport::new(x, y, width, height)),
        _ => bail!("Viewport must be x,y,width,height, got '{s}'"),
    }
}

pub fn run(args: &PlanArgs) -> Result<()> {
    let session = super::load_session(&args.session)?;
    let mut planner = TilePlanner::from_session(session)?;

    let viewports = if args.viewports.is_empty() {
        vec![Viewport::full(planner.fitted())]
    } else {
        args.viewports.clone()
    };
    let total = viewports.len();

    let mut shown = 0;
    let updates = planner.drive(viewports, |plan| {
        shown += 1;
        print_tile_plan(shown, plan, args.urls);
    })?;

    println!();
    println!(
        "{updates} of {total} viewport event(s) produced a new tile set ({} skipped)",
        total - updates
    );
    Ok(())
}
