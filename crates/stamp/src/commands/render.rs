//! Single-story render command.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use stamp_model::StoryFormat;
use stamp_render::{render_source, RenderOptions};

use crate::config::load_config;

/// Command-line values that take precedence over `[render]` in stamp.toml.
#[derive(Debug, Default)]
pub struct Overrides {
    pub pretty: Option<bool>,
    pub minify_css: Option<bool>,
}

impl Overrides {
    fn apply(self, mut options: RenderOptions) -> RenderOptions {
        if let Some(pretty) = self.pretty {
            options.pretty = pretty;
        }
        if let Some(minify_css) = self.minify_css {
            options.minify_css = minify_css;
        }
        options
    }
}

/// Read, decode and render one story file.
pub fn render_file(file: &Path, options: &RenderOptions) -> Result<String> {
    let Some(format) = StoryFormat::from_path(file) else {
        bail!(
            "Unsupported story file {}: expected .json, .yaml or .yml",
            file.display()
        );
    };

    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let html = render_source(&source, format, options)
        .with_context(|| format!("Failed to render {}", file.display()))?;

    Ok(html)
}

/// Run the render command.
pub fn run(
    config_path: &Path,
    file: &Path,
    output: Option<&Path>,
    overrides: Overrides,
) -> Result<()> {
    let options = overrides.apply(load_config(config_path)?.render);
    let html = render_file(file, &options)?;

    match output {
        Some(output) => {
            fs::write(output, html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::info!("Wrote {}", output.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const STORY: &str = r#"{
        "title": "T",
        "canonicalUrl": "http://x/y",
        "pages": [{
            "id": "p1",
            "layers": [{ "template": "fill", "element": { "type": "paragraph", "text": "hello" } }]
        }]
    }"#;

    #[test]
    fn writes_rendered_story_to_output() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("story.json");
        let output = temp.path().join("story.html");
        fs::write(&story, STORY).unwrap();

        run(
            &temp.path().join("stamp.toml"),
            &story,
            Some(&output),
            Overrides::default(),
        )
        .unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("          <p>hello</p>\n"));
    }

    #[test]
    fn flags_override_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("stamp.toml");
        let story = temp.path().join("story.json");
        let output = temp.path().join("story.html");
        fs::write(&config, "[render]\npretty = true\n").unwrap();
        fs::write(&story, STORY).unwrap();

        let overrides = Overrides {
            pretty: Some(false),
            minify_css: None,
        };
        run(&config, &story, Some(&output), overrides).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"<amp-story-grid-layer template="fill"><p>hello</p>"#));
    }

    #[test]
    fn rejects_unknown_extension() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("story.txt");
        fs::write(&story, STORY).unwrap();

        let err = render_file(&story, &RenderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Unsupported story file"));
    }

    #[test]
    fn reports_unknown_element_type() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("story.json");
        fs::write(&story, STORY.replace("paragraph", "bogus")).unwrap();

        let err = render_file(&story, &RenderOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown element type 'bogus'"));
    }
}
