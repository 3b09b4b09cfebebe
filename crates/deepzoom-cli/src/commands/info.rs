use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use deepzoom_core::planner::TilePlanner;

use crate::summary::print_planner_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Session config file (TOML)
    pub session: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let session = super::load_session(&args.session)?;
    let planner = TilePlanner::from_session(session)?;
    print_planner_summary(&planner);
    Ok(())
}
