//! Story file parsing.

use std::path::Path;

use serde_json::Value;

use crate::decode::decode_story;
use crate::error::{ModelError, ModelResult};
use crate::story::Story;

/// Source formats a story can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFormat {
    Json,
    Yaml,
}

impl StoryFormat {
    /// Pick a format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(StoryFormat::Json),
            Some("yaml") | Some("yml") => Some(StoryFormat::Yaml),
            _ => None,
        }
    }
}

/// Parse a story from source text.
pub fn parse_story(source: &str, format: StoryFormat) -> ModelResult<Story> {
    let value: Value = match format {
        StoryFormat::Json => {
            serde_json::from_str(source).map_err(|e| ModelError::Json(e.to_string()))?
        }
        StoryFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| ModelError::Yaml(e.to_string()))?
        }
    };

    decode_story(value)
}

impl Story {
    pub fn from_json(source: &str) -> ModelResult<Self> {
        parse_story(source, StoryFormat::Json)
    }

    pub fn from_yaml(source: &str) -> ModelResult<Self> {
        parse_story(source, StoryFormat::Yaml)
    }

    /// Decode an already-parsed value.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        decode_story(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{AttrValue, Element};
    use crate::story::Layer;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            StoryFormat::from_path(Path::new("stories/launch.json")),
            Some(StoryFormat::Json)
        );
        assert_eq!(
            StoryFormat::from_path(Path::new("launch.yml")),
            Some(StoryFormat::Yaml)
        );
        assert_eq!(
            StoryFormat::from_path(Path::new("launch.yaml")),
            Some(StoryFormat::Yaml)
        );
        assert_eq!(StoryFormat::from_path(Path::new("README.md")), None);
    }

    #[test]
    fn parses_yaml_story_in_order() {
        let source = r#"
title: Launch
canonicalUrl: https://example.com/launch
defaultStyles:
  amp-story-page:
    backgroundColor: black
pages:
  - id: cover
    layers:
      - template: fill
        element:
          type: image
          src: cover.jpg
          layout: fill
  - id: details
    layers:
      - template: vertical
        elements:
          - type: heading1
            text: Launch day
          - type: paragraph
            text: Everything ships.
"#;

        let story = Story::from_yaml(source).unwrap();

        assert_eq!(story.title, "Launch");
        assert_eq!(story.default_styles.rules()[0].selector, "amp-story-page");
        let ids: Vec<_> = story.pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cover", "details"]);

        let Layer::Fill(Element::Image(image)) = &story.pages[0].layers[0] else {
            panic!("expected fill image");
        };
        let names: Vec<_> = image.attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["src", "layout"]);
        assert_eq!(image.attributes.get("layout"), Some(&AttrValue::from("fill")));

        assert_eq!(story.pages[1].layers[0].elements().len(), 2);
    }

    #[test]
    fn surfaces_syntax_errors() {
        assert!(matches!(
            Story::from_json("{ not json"),
            Err(ModelError::Json(_))
        ));
        assert!(matches!(
            Story::from_yaml("title: [unclosed"),
            Err(ModelError::Yaml(_))
        ));
    }

    #[test]
    fn json_and_yaml_agree() {
        let json = r#"{
            "title": "T",
            "canonicalUrl": "http://x/y",
            "pages": [{ "id": "p1", "layers": [
                { "template": "fill", "element": { "type": "paragraph", "text": "hello" } }
            ] }]
        }"#;
        let yaml = "title: T\ncanonicalUrl: http://x/y\npages:\n  - id: p1\n    layers:\n      - template: fill\n        element: { type: paragraph, text: hello }\n";

        assert_eq!(Story::from_json(json).unwrap(), Story::from_yaml(yaml).unwrap());
    }
}
