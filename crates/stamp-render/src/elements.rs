//! Element rendering.

use std::borrow::Cow;

use stamp_model::{AttrValue, Attributes, Element, VideoSource};

use crate::components::{extension_for, tag_name};
use crate::story::StoryRenderer;
use crate::tag::{escape_html, render_tag};

impl StoryRenderer<'_> {
    /// Render an element and, for containers, its children.
    pub fn render_element(&mut self, element: &Element) -> String {
        self.render_element_with(element, &[])
    }

    /// Render an element with extra attributes. Injected attributes replace
    /// any the element already carries under the same name.
    pub fn render_element_with(
        &mut self,
        element: &Element,
        injected: &[(&str, AttrValue)],
    ) -> String {
        let kind = element.kind();
        if let Some(extension) = extension_for(kind) {
            self.extensions.require(extension);
        }

        let tag = tag_name(kind);
        let attributes = merge(element.attributes(), injected);

        match element {
            Element::Text(text) => {
                let content = if self.options.escape_text {
                    Cow::Owned(escape_html(&text.text))
                } else {
                    Cow::Borrowed(text.text.as_str())
                };
                render_tag(tag, attributes, Some(content.as_ref()))
            }
            Element::Container(container) => {
                let children = self.render_elements(&container.elements);
                render_tag(tag, attributes, Some(&children))
            }
            Element::Image(_) => render_tag(tag, attributes, None),
            Element::Video(video) => {
                let sources: String = video.sources.iter().map(render_source).collect();
                render_tag(tag, attributes, Some(&sources))
            }
        }
    }

    pub(crate) fn render_elements(&mut self, elements: &[Element]) -> String {
        elements
            .iter()
            .map(|element| self.render_element(element))
            .collect()
    }
}

fn merge<'a>(
    attributes: &'a Attributes,
    injected: &'a [(&'a str, AttrValue)],
) -> impl Iterator<Item = (&'a str, &'a AttrValue)> + 'a {
    attributes
        .iter()
        .filter(move |(name, _)| !injected.iter().any(|(injected, _)| injected == name))
        .chain(injected.iter().map(|(name, value)| (*name, value)))
}

fn render_source(source: &VideoSource) -> String {
    let url = AttrValue::from(source.source.as_str());
    let mime = AttrValue::from(format!("video/{}", source.format));
    render_tag("source", [("source", &url), ("type", &mime)], None)
}
