//! Batch story builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use stamp_model::{parse_story, StoryFormat};
use stamp_render::{render_with, RenderOptions};

/// Configuration for building a directory of stories.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source stories directory
    pub stories_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for pages whose story has no canonical URL
    pub base_url: String,

    /// Options passed to every render
    pub options: RenderOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            stories_dir: PathBuf::from("stories"),
            output_dir: PathBuf::from("dist"),
            base_url: "/".to_string(),
            options: RenderOptions::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of stories rendered
    pub stories: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read stories: {0}")]
    ReadError(String),

    #[error("Failed to parse story: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to render story: {path}: {message}")]
    RenderError { path: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A story file found in the stories directory.
#[derive(Debug)]
struct StorySource {
    /// Source file path
    source_path: PathBuf,

    /// Relative path from the stories dir
    relative_path: PathBuf,

    format: StoryFormat,
}

/// A story written to disk.
#[derive(Debug)]
struct BuiltStory {
    relative_output: PathBuf,
    canonical_url: String,
}

/// Renders every story under a directory to standalone HTML files.
pub struct StoryBuilder {
    config: BuildConfig,
}

impl StoryBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build all stories.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let sources = self.discover_stories()?;
        tracing::info!(
            "Found {} stories in {}",
            sources.len(),
            self.config.stories_dir.display()
        );

        let built = sources
            .par_iter()
            .map(|source| self.build_story(source))
            .collect::<Result<Vec<_>, _>>()?;

        self.generate_sitemap(&built)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            stories: built.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Find all story files, sorted by path.
    fn discover_stories(&self) -> Result<Vec<StorySource>, BuildError> {
        if !self.config.stories_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Stories directory not found: {}",
                self.config.stories_dir.display()
            )));
        }

        let mut stories = Vec::new();

        for entry in WalkDir::new(&self.config.stories_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(format) = StoryFormat::from_path(path) else {
                continue;
            };

            let relative_path = path
                .strip_prefix(&self.config.stories_dir)
                .unwrap_or(path)
                .to_path_buf();

            stories.push(StorySource {
                source_path: path.to_path_buf(),
                relative_path,
                format,
            });
        }

        Ok(stories)
    }

    fn build_story(&self, source: &StorySource) -> Result<BuiltStory, BuildError> {
        let path = source.source_path.display().to_string();

        let content = fs::read_to_string(&source.source_path)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", path, e)))?;

        let story = parse_story(&content, source.format).map_err(|e| BuildError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let html = render_with(&story, &self.config.options).map_err(|e| {
            BuildError::RenderError {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        let relative_output = source.relative_path.with_extension("html");
        let output_path = self.config.output_dir.join(&relative_output);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!("Rendered {} -> {}", path, output_path.display());

        Ok(BuiltStory {
            relative_output,
            canonical_url: story.canonical_url,
        })
    }

    /// URL for a built story: its canonical URL, or the output path under the base URL.
    fn story_url(&self, story: &BuiltStory) -> String {
        if !story.canonical_url.is_empty() {
            return story.canonical_url.clone();
        }

        let relative = story
            .relative_output
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        format!("{}/{}", self.config.base_url.trim_end_matches('/'), relative)
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, stories: &[BuiltStory]) -> Result<(), BuildError> {
        let urls: Vec<String> = stories
            .iter()
            .map(|story| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n  </url>",
                    escape_xml(&self.story_url(story))
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        write(&self.config.output_dir.join("sitemap.xml"), sitemap)
    }
}

fn write(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|e| BuildError::WriteError(e.to_string()))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
