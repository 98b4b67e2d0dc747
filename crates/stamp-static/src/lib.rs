//! Batch builder for stamp stories.
//!
//! Renders every JSON or YAML story under a directory to a standalone AMP
//! HTML file and writes a sitemap of the published URLs.

pub mod builder;

pub use builder::{BuildConfig, BuildError, BuildResult, StoryBuilder};
