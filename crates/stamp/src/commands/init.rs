//! Initialize a stamp project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command in `root`.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing stamp...");

    let stories_dir = root.join("stories");

    if stories_dir.exists() {
        if !yes {
            tracing::warn!("stories/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(&stories_dir).context("Failed to create stories directory")?;
    }

    let config_path = root.join("stamp.toml");
    if !config_path.exists() || yes {
        fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write stamp.toml")?;
        tracing::info!("Created stamp.toml");
    }

    let story_path = stories_dir.join("welcome.yaml");
    if !story_path.exists() || yes {
        fs::write(&story_path, DEFAULT_STORY).context("Failed to write welcome.yaml")?;
        tracing::info!("Created stories/welcome.yaml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'stamp build' to render your stories.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# stamp configuration

[stories]
# Directory containing .json / .yaml story files
dir = "stories"

# Output directory for rendered HTML
output = "dist"

# Used in the sitemap for stories without a canonical URL
base_url = "/"

[render]
pretty = true
minify_css = false
escape_text = false
lang = "en"
"#;

const DEFAULT_STORY: &str = r#"title: Welcome to stamp
canonicalUrl: /welcome.html

defaultStyles:
  amp-story-page:
    backgroundColor: black
  h1:
    color: white
    fontSize: 2.5em
  p:
    color: white
    lineHeight: 1.4

pages:
  - id: cover
    layers:
      - template: fill
        element:
          type: image
          src: https://picsum.photos/720/1280
          width: 720
          height: 1280
          layout: responsive
      - template: vertical
        elements:
          - type: heading
            text: Welcome to stamp
          - type: paragraph
            text: Stories are written as data and rendered to AMP.

  - id: layout
    layers:
      - template: thirds
        elements:
          - type: heading2
            text: Top third
          - type: container
            class: card
            elements:
              - type: paragraph
                text: Containers nest other elements.
          - type: paragraph
            text: Bottom third

  - id: motion
    layers:
      - template: fill
        element:
          type: video
          autoplay: true
          loop: true
          layout: fill
          width: 720
          height: 1280
          sources:
            - source: https://example.com/intro.mp4
              type: mp4
"#;
