//! Story validation command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::render::render_file;
use crate::config::load_config;

/// Decode and render each file, reporting every failure.
pub fn run(config_path: &Path, files: &[PathBuf]) -> Result<()> {
    let options = load_config(config_path)?.render;

    let mut failed = 0;
    for file in files {
        match render_file(file, &options) {
            Ok(_) => tracing::info!("ok: {}", file.display()),
            Err(e) => {
                tracing::error!("{:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} stories failed", failed, files.len());
    }

    tracing::info!("All {} stories are valid", files.len());
    Ok(())
}
