//! Component tables: element kinds to markup tags, and to the AMP
//! extensions they need loaded.

use std::collections::BTreeSet;

use stamp_model::{AttrValue, ElementKind, TextKind};

use crate::tag::render_tag;

/// Story container tag.
pub const STORY_TAG: &str = "amp-story";
/// Page tag; carries the page id.
pub const PAGE_TAG: &str = "amp-story-page";
/// Layer tag; carries the layer template.
pub const LAYER_TAG: &str = "amp-story-grid-layer";

/// The markup tag an element kind renders as.
pub fn tag_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text(TextKind::Heading) | ElementKind::Text(TextKind::Heading1) => "h1",
        ElementKind::Text(TextKind::Heading2) => "h2",
        ElementKind::Text(TextKind::Heading3) => "h3",
        ElementKind::Text(TextKind::Heading4) => "h4",
        ElementKind::Text(TextKind::Heading5) => "h5",
        ElementKind::Text(TextKind::Heading6) => "h6",
        ElementKind::Text(TextKind::Paragraph) => "p",
        ElementKind::Container => "div",
        ElementKind::Image => "amp-img",
        ElementKind::Video => "amp-video",
    }
}

/// An AMP extension that needs its own script tag in the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extension {
    Video,
}

impl Extension {
    /// The custom element name the script registers.
    pub fn custom_element(self) -> &'static str {
        match self {
            Extension::Video => "amp-video",
        }
    }

    pub fn script_src(self) -> &'static str {
        match self {
            Extension::Video => "https://cdn.ampproject.org/v0/amp-video-0.1.js",
        }
    }

    /// `<script async custom-element="..." src="..."></script>`
    pub fn script_tag(self) -> String {
        let is_async = AttrValue::Flag(true);
        let element = AttrValue::from(self.custom_element());
        let src = AttrValue::from(self.script_src());
        render_tag(
            "script",
            [("async", &is_async), ("custom-element", &element), ("src", &src)],
            Some(""),
        )
    }
}

/// The extension an element kind depends on, if any.
pub fn extension_for(kind: ElementKind) -> Option<Extension> {
    match kind {
        ElementKind::Video => Some(Extension::Video),
        ElementKind::Text(_) | ElementKind::Container | ElementKind::Image => None,
    }
}

/// The set of extensions a rendered story requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(BTreeSet<Extension>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `extension` must be loaded. Recording twice has no effect.
    pub fn require(&mut self, extension: Extension) {
        self.0.insert(extension);
    }

    pub fn contains(&self, extension: Extension) -> bool {
        self.0.contains(&extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = Extension> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
