//! Batch build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use stamp_static::{BuildConfig, StoryBuilder};

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building stories...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        stories_dir: PathBuf::from(&file_config.stories.dir),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.stories.output)),
        base_url: file_config.stories.base_url,
        options: file_config.render,
    };

    let result = StoryBuilder::new(config).build()?;

    tracing::info!(
        "Built {} stories in {}ms",
        result.stories,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
