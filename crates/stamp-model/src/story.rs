//! Stories, pages and layers.

use std::slice;

use crate::element::Element;
use crate::style::StyleSheet;

/// A complete story document.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Document title
    pub title: String,
    /// Canonical URL of the published story
    pub canonical_url: String,
    /// Stylesheet embedded in the document head
    pub default_styles: StyleSheet,
    /// Pages in reading order
    pub pages: Vec<Page>,
}

/// One screen of a story.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    /// Layers from back to front
    pub layers: Vec<Layer>,
}

impl Page {
    pub fn new(id: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            id: id.into(),
            layers,
        }
    }
}

/// Layer positioning templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Fill,
    Vertical,
    Horizontal,
    Thirds,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Fill,
        Template::Vertical,
        Template::Horizontal,
        Template::Thirds,
    ];

    /// The `template` name used in story files and in the rendered markup.
    pub fn name(self) -> &'static str {
        match self {
            Template::Fill => "fill",
            Template::Vertical => "vertical",
            Template::Horizontal => "horizontal",
            Template::Thirds => "thirds",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// A layer and the elements it positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// A single element filling the page
    Fill(Element),
    Vertical(Vec<Element>),
    Horizontal(Vec<Element>),
    /// Elements placed in the upper, middle and lower thirds
    Thirds(Vec<Element>),
}

impl Layer {
    pub fn template(&self) -> Template {
        match self {
            Layer::Fill(_) => Template::Fill,
            Layer::Vertical(_) => Template::Vertical,
            Layer::Horizontal(_) => Template::Horizontal,
            Layer::Thirds(_) => Template::Thirds,
        }
    }

    /// The layer's elements in order. A fill layer has exactly one.
    pub fn elements(&self) -> &[Element] {
        match self {
            Layer::Fill(element) => slice::from_ref(element),
            Layer::Vertical(elements) | Layer::Horizontal(elements) | Layer::Thirds(elements) => {
                elements
            }
        }
    }
}
