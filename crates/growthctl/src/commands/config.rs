//! `growthctl config`

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::GrowthConfig;

/// Print the effective config, or apply `key=value` and save it to `path`
/// (the user config file when `path` is `None`)
pub fn run(set: Option<String>, config: &GrowthConfig, path: Option<&Path>) -> Result<()> {
    let Some(pair) = set else {
        print!("{}", toml::to_string_pretty(config).context("Failed to serialize configuration")?);
        return Ok(());
    };

    let (key, value) = pair
        .split_once('=')
        .with_context(|| format!("Expected key=value, got '{}'", pair))?;

    let mut updated = config.clone();
    updated.set(key, value)?;
    match path {
        Some(path) => updated.save_to(path)?,
        None => updated.save()?,
    }
    info!(key, value, "Config updated");
    println!("Set {} = {}", key.trim(), value.trim());
    Ok(())
}
