//! Renders stories to AMP story HTML documents.
//!
//! The pipeline is a pure function of its input: elements render into tags,
//! layers wrap elements, pages wrap layers and the story wraps pages. The
//! finished story is then embedded in a full document whose head includes
//! a script tag for every AMP extension the story used.
//!
//! ```ignore
//! use stamp_render::render;
//! use stamp_model::Story;
//!
//! let story = Story::from_json(source)?;
//! let html = render(&story)?;
//! ```

pub mod components;
pub mod css;
pub mod document;
mod elements;
pub mod error;
pub mod format;
pub mod options;
pub mod story;
pub mod tag;

pub use components::{Extension, Extensions};
pub use document::{render, render_source, render_with};
pub use error::{RenderError, RenderResult};
pub use options::RenderOptions;
pub use story::{RenderedStory, StoryRenderer};
pub use tag::{escape_html, render_tag};
