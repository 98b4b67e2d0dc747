//! HTML tag serialization.

use std::borrow::Cow;

use stamp_model::AttrValue;

use crate::css::{kebab_case, render_declarations};
use crate::story::THIRD_INDEX;

/// Prefixes whose camelCase spellings (`ariaLabel`, `dataSlot`) stand for
/// dashed HTML attributes.
const DASHED_PREFIXES: &[&str] = &["aria", "data"];

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `name` is an HTML void element.
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Render a tag with its attributes and optional inner HTML.
///
/// Attribute names are written as given, so `viewBox` stays `viewBox`.
/// `thirdIndex` and camelCase `aria*` / `data*` names become kebab-case
/// (`third-index`, `aria-label`). `true` renders as a bare attribute; `false` and `null` are skipped. Without
/// content, void elements render as a lone opening tag and everything else
/// gets an empty closing tag.
pub fn render_tag<'a, I>(name: &str, attributes: I, content: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a AttrValue)>,
{
    let mut html = format!("<{name}");

    for (key, value) in attributes {
        push_attribute(&mut html, key, value);
    }
    html.push('>');

    match content {
        Some(content) => {
            html.push_str(content);
            html.push_str(&format!("</{name}>"));
        }
        None if is_void(name) => {}
        None => html.push_str(&format!("</{name}>")),
    }

    html
}

/// The HTML spelling of an attribute key.
pub fn attribute_name(key: &str) -> Cow<'_, str> {
    let dashed = key == THIRD_INDEX
        || DASHED_PREFIXES.iter().any(|prefix| {
            key.strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
        });

    if dashed {
        Cow::Owned(kebab_case(key))
    } else {
        Cow::Borrowed(key)
    }
}

fn push_attribute(html: &mut String, key: &str, value: &AttrValue) {
    let value = match value {
        AttrValue::Flag(false) | AttrValue::Absent => return,
        AttrValue::Flag(true) => {
            html.push(' ');
            html.push_str(&attribute_name(key));
            return;
        }
        AttrValue::Number(n) => n.to_string(),
        AttrValue::Text(s) => escape_html(s),
        AttrValue::Style(declarations) => escape_html(&render_declarations(declarations)),
    };

    html.push_str(&format!(r#" {}="{}""#, attribute_name(key), value));
}

/// Escape HTML special characters, including quotes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stamp_model::{Attributes, Declarations};

    #[test]
    fn renders_content_between_tags() {
        let attrs = Attributes::new().with("class", "lead");
        assert_eq!(
            render_tag("p", attrs.iter(), Some("hello")),
            r#"<p class="lead">hello</p>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let attrs = Attributes::new().with("src", "a.jpg");
        assert_eq!(render_tag("img", attrs.iter(), None), r#"<img src="a.jpg">"#);
    }

    #[test]
    fn non_void_elements_close_when_empty() {
        let attrs = Attributes::new().with("src", "a.jpg").with("layout", "fill");
        assert_eq!(
            render_tag("amp-img", attrs.iter(), None),
            r#"<amp-img src="a.jpg" layout="fill"></amp-img>"#
        );
        assert_eq!(render_tag("amp-story", std::iter::empty(), None), "<amp-story></amp-story>");
    }

    #[test]
    fn renders_flags_and_skips_absent_values() {
        let attrs = Attributes::new()
            .with("autoplay", true)
            .with("loop", false)
            .with("poster", AttrValue::Absent)
            .with("width", 720.0);
        assert_eq!(
            render_tag("amp-video", attrs.iter(), Some("")),
            r#"<amp-video autoplay width="720"></amp-video>"#
        );
    }

    #[test]
    fn converts_camel_case_names() {
        let attrs = Attributes::new()
            .with("thirdIndex", 2usize)
            .with("ariaLabel", "Cover")
            .with("data-slot", "a");
        assert_eq!(
            render_tag("div", attrs.iter(), Some("")),
            r#"<div third-index="2" aria-label="Cover" data-slot="a"></div>"#
        );
    }

    #[test]
    fn keeps_other_camel_case_names() {
        let attrs = Attributes::new()
            .with("viewBox", "0 0 10 10")
            .with("preserveAspectRatio", "none")
            .with("dataset", "x")
            .with("dataSlot", "a")
            .with("ariaHidden", true);
        assert_eq!(
            render_tag("svg", attrs.iter(), Some("")),
            r#"<svg viewBox="0 0 10 10" preserveAspectRatio="none" dataset="x" data-slot="a" aria-hidden></svg>"#
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let attrs = Attributes::new().with("alt", r#"Tom & "Jerry" <3"#);
        assert_eq!(
            render_tag("img", attrs.iter(), None),
            r#"<img alt="Tom &amp; &quot;Jerry&quot; &lt;3">"#
        );
    }

    #[test]
    fn renders_style_mappings_inline() {
        let style = Declarations::new()
            .with("backgroundColor", "red")
            .with("zIndex", 2.0);
        let attrs = Attributes::new().with("style", style);
        assert_eq!(
            render_tag("div", attrs.iter(), Some("")),
            r#"<div style="background-color: red; z-index: 2"></div>"#
        );
    }
}
