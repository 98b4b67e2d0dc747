//! Story data model for stamp.
//!
//! A story is an ordered list of pages, each made of layers that position
//! elements (text, images, video and nested containers). Stories are decoded
//! from JSON or YAML; unknown element types and layer templates are rejected
//! at decoding time, so a constructed [`Story`] always renders.

mod decode;
pub mod element;
pub mod error;
pub mod parser;
pub mod story;
pub mod style;

pub use element::{
    AttrValue, Attributes, ContainerElement, Element, ElementKind, ImageElement, TextElement,
    TextKind, VideoElement, VideoSource,
};
pub use error::{ModelError, ModelResult};
pub use parser::{parse_story, StoryFormat};
pub use story::{Layer, Page, Story, Template};
pub use style::{CssValue, Declarations, StyleRule, StyleSheet};
