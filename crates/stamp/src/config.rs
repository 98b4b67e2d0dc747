//! stamp.toml loading.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use stamp_render::RenderOptions;

/// Configuration file structure (stamp.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub stories: StoriesConfig,
    #[serde(default)]
    pub render: RenderOptions,
}

#[derive(Debug, Deserialize)]
pub struct StoriesConfig {
    #[serde(default = "default_stories_dir")]
    pub dir: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for StoriesConfig {
    fn default() -> Self {
        Self {
            dir: default_stories_dir(),
            output: default_output(),
            base_url: default_base_url(),
        }
    }
}

fn default_stories_dir() -> String {
    "stories".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
