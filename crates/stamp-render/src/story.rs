//! Layer, page and story assembly.

use stamp_model::{AttrValue, Layer, Page};

use crate::components::{Extensions, LAYER_TAG, PAGE_TAG, STORY_TAG};
use crate::options::RenderOptions;
use crate::tag::render_tag;

/// The attribute injected into each element of a thirds layer.
pub const THIRD_INDEX: &str = "thirdIndex";

/// A rendered `<amp-story>` fragment and the extensions it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStory {
    pub html: String,
    pub extensions: Extensions,
}

/// Renders one story.
///
/// A renderer lives for a single call: it collects the extensions required
/// by the elements it visits and hands them back in [`RenderedStory`].
pub struct StoryRenderer<'a> {
    pub(crate) options: &'a RenderOptions,
    pub(crate) extensions: Extensions,
}

impl<'a> StoryRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            extensions: Extensions::new(),
        }
    }

    /// Render all pages inside `<amp-story>`.
    pub fn render_story(mut self, pages: &[Page]) -> RenderedStory {
        let body: String = pages.iter().map(|page| self.render_page(page)).collect();
        let html = render_tag(STORY_TAG, std::iter::empty(), Some(&body));

        tracing::debug!(
            pages = pages.len(),
            extensions = self.extensions.len(),
            "Rendered story"
        );

        RenderedStory {
            html,
            extensions: self.extensions,
        }
    }

    /// Render a page and its layers, tagged with the page id.
    pub fn render_page(&mut self, page: &Page) -> String {
        let layers: String = page
            .layers
            .iter()
            .map(|layer| self.render_layer(layer))
            .collect();
        let id = AttrValue::from(page.id.as_str());

        render_tag(PAGE_TAG, [("id", &id)], Some(&layers))
    }

    /// Render a layer. Elements of a thirds layer receive their position as
    /// `thirdIndex`.
    pub fn render_layer(&mut self, layer: &Layer) -> String {
        let children = match layer {
            Layer::Fill(element) => self.render_element(element),
            Layer::Vertical(elements) | Layer::Horizontal(elements) => {
                self.render_elements(elements)
            }
            Layer::Thirds(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    self.render_element_with(element, &[(THIRD_INDEX, AttrValue::from(index))])
                })
                .collect(),
        };
        let template = AttrValue::from(layer.template().name());

        render_tag(LAYER_TAG, [("template", &template)], Some(&children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Extension;
    use pretty_assertions::assert_eq;
    use stamp_model::{Element, VideoSource};

    fn render(pages: &[Page]) -> RenderedStory {
        StoryRenderer::new(&RenderOptions::default()).render_story(pages)
    }

    #[test]
    fn renders_pages_in_order() {
        let pages: Vec<_> = ["intro", "middle", "end"]
            .iter()
            .map(|id| Page::new(*id, vec![Layer::Fill(Element::paragraph(*id))]))
            .collect();

        let html = render(&pages).html;

        assert_eq!(html.matches("<amp-story-page ").count(), 3);
        let intro = html.find(r#"id="intro""#).unwrap();
        let middle = html.find(r#"id="middle""#).unwrap();
        let end = html.find(r#"id="end""#).unwrap();
        assert!(intro < middle && middle < end);
    }

    #[test]
    fn renders_fill_layer_structure() {
        let pages = vec![Page::new("p1", vec![Layer::Fill(Element::paragraph("hello"))])];

        assert_eq!(
            render(&pages).html,
            concat!(
                "<amp-story>",
                r#"<amp-story-page id="p1">"#,
                r#"<amp-story-grid-layer template="fill"><p>hello</p></amp-story-grid-layer>"#,
                "</amp-story-page>",
                "</amp-story>"
            )
        );
    }

    #[test]
    fn renders_story_without_pages() {
        assert_eq!(render(&[]).html, "<amp-story></amp-story>");
    }

    #[test]
    fn vertical_and_horizontal_keep_element_order() {
        let elements = vec![Element::paragraph("a"), Element::paragraph("b")];
        let pages = vec![Page::new(
            "p",
            vec![
                Layer::Vertical(elements.clone()),
                Layer::Horizontal(elements),
            ],
        )];

        let html = render(&pages).html;

        assert!(html.contains(
            r#"<amp-story-grid-layer template="vertical"><p>a</p><p>b</p></amp-story-grid-layer>"#
        ));
        assert!(html.contains(
            r#"<amp-story-grid-layer template="horizontal"><p>a</p><p>b</p></amp-story-grid-layer>"#
        ));
    }

    #[test]
    fn thirds_inject_position_index() {
        let pages = vec![Page::new(
            "p",
            vec![Layer::Thirds(vec![
                Element::paragraph("top"),
                Element::paragraph("middle"),
                Element::paragraph("bottom"),
            ])],
        )];

        let html = render(&pages).html;

        assert!(html.contains(concat!(
            r#"<p third-index="0">top</p>"#,
            r#"<p third-index="1">middle</p>"#,
            r#"<p third-index="2">bottom</p>"#
        )));
    }

    #[test]
    fn thirds_index_follows_reordering() {
        let pages = vec![Page::new(
            "p",
            vec![Layer::Thirds(vec![
                Element::paragraph("bottom"),
                Element::paragraph("top"),
            ])],
        )];

        let html = render(&pages).html;

        assert!(html.contains(r#"<p third-index="0">bottom</p>"#));
        assert!(html.contains(r#"<p third-index="1">top</p>"#));
    }

    #[test]
    fn injected_index_overrides_caller_value() {
        let pages = vec![Page::new(
            "p",
            vec![Layer::Thirds(vec![
                Element::paragraph("x").with_attribute("thirdIndex", 9usize)
            ])],
        )];

        let html = render(&pages).html;

        assert!(html.contains(r#"<p third-index="0">x</p>"#));
        assert!(!html.contains("9"));
    }

    #[test]
    fn collects_extensions_across_pages() {
        let video = Element::video(vec![VideoSource::new("a.mp4", "mp4")]);
        let pages = vec![
            Page::new("one", vec![Layer::Fill(video.clone())]),
            Page::new(
                "two",
                vec![Layer::Vertical(vec![Element::container(vec![video])])],
            ),
        ];

        let rendered = render(&pages);

        assert_eq!(rendered.extensions.len(), 1);
        assert!(rendered.extensions.contains(Extension::Video));
    }

    #[test]
    fn no_extensions_without_video() {
        let pages = vec![Page::new("p", vec![Layer::Fill(Element::paragraph("x"))])];
        assert!(render(&pages).extensions.is_empty());
    }
}
