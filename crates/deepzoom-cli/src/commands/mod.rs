pub mod config;
pub mod info;
pub mod plan;

use std::path::Path;

use anyhow::{Context, Result};
use deepzoom_core::config::SessionConfig;
use tracing::debug;

/// Read a session config (TOML) describing one image in one viewer.
pub fn load_session(path: &Path) -> Result<SessionConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session {}", path.display()))?;
    let session: SessionConfig = toml::from_str(&contents).context("Invalid session config")?;
    debug!(path = %path.display(), url = %session.image.url, "Session loaded");
    Ok(session)
}
