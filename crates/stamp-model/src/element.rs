//! Story elements: the visual units placed inside layers.

use serde::Deserialize;

use crate::style::Declarations;

/// The text element kinds. Each maps to a heading or paragraph tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextKind {
    Heading,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Paragraph,
}

impl TextKind {
    pub const ALL: [TextKind; 8] = [
        TextKind::Heading,
        TextKind::Heading1,
        TextKind::Heading2,
        TextKind::Heading3,
        TextKind::Heading4,
        TextKind::Heading5,
        TextKind::Heading6,
        TextKind::Paragraph,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            TextKind::Heading => "heading",
            TextKind::Heading1 => "heading1",
            TextKind::Heading2 => "heading2",
            TextKind::Heading3 => "heading3",
            TextKind::Heading4 => "heading4",
            TextKind::Heading5 => "heading5",
            TextKind::Heading6 => "heading6",
            TextKind::Paragraph => "paragraph",
        }
    }
}

/// Every element kind a story can contain, keyed by its `type` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Text(TextKind),
    Container,
    Image,
    Video,
}

impl ElementKind {
    /// The `type` name used in story files.
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::Text(kind) => kind.type_name(),
            ElementKind::Container => "container",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
        }
    }

    /// Every kind, text kinds first.
    pub fn all() -> impl Iterator<Item = ElementKind> {
        TextKind::ALL
            .into_iter()
            .map(ElementKind::Text)
            .chain([ElementKind::Container, ElementKind::Image, ElementKind::Video])
    }

    /// Look up a kind by its `type` name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::all().find(|kind| kind.type_name() == name)
    }
}

/// An attribute value as written in a story file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// `true` renders as a bare attribute, `false` is omitted
    Flag(bool),
    Number(f64),
    Text(String),
    /// A nested property mapping, rendered as inline CSS
    Style(Declarations),
    /// `null`, omitted from output
    Absent,
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<Declarations> for AttrValue {
    fn from(value: Declarations) -> Self {
        AttrValue::Style(value)
    }
}

/// Element attributes in the order they were written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder-style [`Attributes::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// One playable source of a video element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoSource {
    /// Media URL
    pub source: String,
    /// Format suffix, e.g. "mp4"
    #[serde(rename = "type")]
    pub format: String,
}

impl VideoSource {
    pub fn new(source: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            format: format.into(),
        }
    }
}

/// A heading or paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub kind: TextKind,
    pub text: String,
    pub attributes: Attributes,
}

/// A block that groups child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerElement {
    pub elements: Vec<Element>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoElement {
    pub sources: Vec<VideoSource>,
    pub attributes: Attributes,
}

/// A visual unit of a story.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Container(ContainerElement),
    Image(ImageElement),
    Video(VideoElement),
}

impl Element {
    pub fn text(kind: TextKind, text: impl Into<String>) -> Self {
        Element::Text(TextElement {
            kind,
            text: text.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::text(TextKind::Paragraph, text)
    }

    pub fn container(elements: Vec<Element>) -> Self {
        Element::Container(ContainerElement {
            elements,
            attributes: Attributes::new(),
        })
    }

    pub fn image(attributes: Attributes) -> Self {
        Element::Image(ImageElement { attributes })
    }

    pub fn video(sources: Vec<VideoSource>) -> Self {
        Element::Video(VideoElement {
            sources,
            attributes: Attributes::new(),
        })
    }

    /// Add an attribute, replacing any existing value with the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes_mut().insert(name, value);
        self
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(text) => ElementKind::Text(text.kind),
            Element::Container(_) => ElementKind::Container,
            Element::Image(_) => ElementKind::Image,
            Element::Video(_) => ElementKind::Video,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Text(e) => &e.attributes,
            Element::Container(e) => &e.attributes,
            Element::Image(e) => &e.attributes,
            Element::Video(e) => &e.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Element::Text(e) => &mut e.attributes,
            Element::Container(e) => &mut e.attributes,
            Element::Image(e) => &mut e.attributes,
            Element::Video(e) => &mut e.attributes,
        }
    }
}
