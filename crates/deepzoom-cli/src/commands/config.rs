use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use deepzoom_core::config::{PlannerConfig, SessionConfig};
use deepzoom_core::consts::{DEFAULT_TILE_FORMAT, DEFAULT_TILE_SIZE};
use deepzoom_core::descriptor::ImageDescriptor;
use deepzoom_core::geometry::{FittedBox, ImageSize};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default SessionConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = SessionConfig {
        image: ImageDescriptor::new(
            "https://example.com/deepzoom/",
            DEFAULT_TILE_FORMAT,
            DEFAULT_TILE_SIZE,
            ImageSize::new(4000, 3000),
        ),
        fitted: FittedBox::new(375.0, 281.25),
        planner: PlannerConfig::default(),
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
