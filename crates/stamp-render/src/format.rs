//! Pretty-printer for rendered documents.
//!
//! Re-indents markup two spaces per nesting level without changing the
//! document structure. Elements holding text stay on one line with their
//! children written verbatim, and `<style>` / `<script>` bodies are indented
//! by brace depth.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::is_void;

const INDENT: &str = "  ";

/// Elements whose bodies are not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<![^>]*>|</?[a-zA-Z][^>]*>|[^<]+|<").expect("Invalid token regex")
});

static TAG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?([a-zA-Z][a-zA-Z0-9-]*)").expect("Invalid tag name regex"));

#[derive(Debug)]
enum Node<'a> {
    Element {
        open: &'a str,
        name: String,
        children: Vec<Node<'a>>,
    },
    Raw {
        open: &'a str,
        name: String,
        body: &'a str,
    },
    /// Void and self-closing tags, comments, the doctype
    Leaf(&'a str),
    Text(&'a str),
}

impl Node<'_> {
    fn is_blank(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

/// An element whose closing tag has not been seen yet.
struct Open<'a> {
    open: &'a str,
    name: String,
    children: Vec<Node<'a>>,
}

impl<'a> Open<'a> {
    fn into_node(self) -> Node<'a> {
        Node::Element {
            open: self.open,
            name: self.name,
            children: self.children,
        }
    }
}

/// Pretty-print an HTML document.
pub fn pretty(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 4);
    for node in parse(html) {
        write_node(&mut out, &node, 0);
    }
    out
}

fn tag_name(tag: &str) -> Option<String> {
    TAG_NAME_RE
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

fn attach<'a>(stack: &mut [Open<'a>], root: &mut Vec<Node<'a>>, node: Node<'a>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.push(node),
    }
}

fn parse(html: &str) -> Vec<Node<'_>> {
    let mut root = Vec::new();
    let mut stack: Vec<Open<'_>> = Vec::new();
    let mut pos = 0;

    while let Some(m) = TOKEN_RE.find_at(html, pos) {
        let token = m.as_str();
        pos = m.end();

        if token.starts_with("<!") {
            attach(&mut stack, &mut root, Node::Leaf(token));
            continue;
        }

        let Some(name) = tag_name(token) else {
            attach(&mut stack, &mut root, Node::Text(token));
            continue;
        };

        if token.starts_with("</") {
            // Stray closing tags are dropped; unclosed children close implicitly.
            if let Some(depth) = stack.iter().rposition(|open| open.name == name) {
                while stack.len() > depth {
                    if let Some(open) = stack.pop() {
                        let node = open.into_node();
                        attach(&mut stack, &mut root, node);
                    }
                }
            }
        } else if token.ends_with("/>") || is_void(&name) {
            attach(&mut stack, &mut root, Node::Leaf(token));
        } else if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            let rest = &html[pos..];
            let closing = format!("</{name}");
            let (body, consumed) = match rest.to_ascii_lowercase().find(&closing) {
                Some(end) => {
                    let close_len = rest[end..].find('>').map_or(rest.len() - end, |gt| gt + 1);
                    (&rest[..end], end + close_len)
                }
                None => (rest, rest.len()),
            };
            pos += consumed;
            attach(
                &mut stack,
                &mut root,
                Node::Raw {
                    open: token,
                    name,
                    body,
                },
            );
        } else {
            stack.push(Open {
                open: token,
                name,
                children: Vec::new(),
            });
        }
    }

    while let Some(open) = stack.pop() {
        let node = open.into_node();
        attach(&mut stack, &mut root, node);
    }

    root
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn write_node(out: &mut String, node: &Node<'_>, depth: usize) {
    match node {
        Node::Text(text) => {
            for text_line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                line(out, depth, text_line);
            }
        }
        Node::Leaf(tag) => line(out, depth, tag),
        Node::Raw { open, name, body } => {
            if body.trim().is_empty() {
                line(out, depth, &format!("{open}</{name}>"));
            } else {
                line(out, depth, open);
                write_raw_body(out, body, depth + 1);
                line(out, depth, &format!("</{name}>"));
            }
        }
        Node::Element {
            open,
            name,
            children,
        } => write_element(out, open, name, children, depth),
    }
}

fn write_element(out: &mut String, open: &str, name: &str, children: &[Node<'_>], depth: usize) {
    if children.iter().all(Node::is_blank) {
        line(out, depth, &format!("{open}</{name}>"));
        return;
    }

    // Text next to markup is inline content; breaking lines would change it.
    let has_text = children
        .iter()
        .any(|child| matches!(child, Node::Text(_)) && !child.is_blank());

    if has_text {
        let mut inline = open.to_string();
        for child in children {
            write_inline(&mut inline, child);
        }
        inline.push_str(&format!("</{name}>"));
        line(out, depth, &inline);
        return;
    }

    line(out, depth, open);
    for child in children {
        write_node(out, child, depth + 1);
    }
    line(out, depth, &format!("</{name}>"));
}

/// Write a node back exactly as it appeared.
fn write_inline(out: &mut String, node: &Node<'_>) {
    match node {
        Node::Text(text) | Node::Leaf(text) => out.push_str(text),
        Node::Raw { open, name, body } => out.push_str(&format!("{open}{body}</{name}>")),
        Node::Element {
            open,
            name,
            children,
        } => {
            out.push_str(open);
            for child in children {
                write_inline(out, child);
            }
            out.push_str(&format!("</{name}>"));
        }
    }
}

/// Indent a style or script body by its brace nesting.
fn write_raw_body(out: &mut String, body: &str, depth: usize) {
    let mut level = 0usize;

    for body_line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let leading_close = body_line.starts_with('}');
        if leading_close {
            level = level.saturating_sub(1);
        }
        line(out, depth + level, body_line);

        let opens = body_line.matches('{').count();
        let closes = body_line.matches('}').count() - usize::from(leading_close);
        level = (level + opens).saturating_sub(closes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indents_nested_elements() {
        let html = r#"<amp-story><amp-story-page id="p1"><amp-story-grid-layer template="fill"><p>hello</p></amp-story-grid-layer></amp-story-page></amp-story>"#;

        assert_eq!(
            pretty(html),
            concat!(
                "<amp-story>\n",
                "  <amp-story-page id=\"p1\">\n",
                "    <amp-story-grid-layer template=\"fill\">\n",
                "      <p>hello</p>\n",
                "    </amp-story-grid-layer>\n",
                "  </amp-story-page>\n",
                "</amp-story>\n",
            )
        );
    }

    #[test]
    fn keeps_void_and_empty_elements_on_one_line() {
        let html = r#"<amp-video autoplay><source source="a.mp4" type="video/mp4"></amp-video><amp-img src="x.jpg"></amp-img>"#;

        assert_eq!(
            pretty(html),
            concat!(
                "<amp-video autoplay>\n",
                "  <source source=\"a.mp4\" type=\"video/mp4\">\n",
                "</amp-video>\n",
                "<amp-img src=\"x.jpg\"></amp-img>\n",
            )
        );
    }

    #[test]
    fn preserves_inline_text_exactly() {
        assert_eq!(pretty("<div><p> spaced  text </p></div>"), "<div>\n  <p> spaced  text </p>\n</div>\n");
    }

    #[test]
    fn keeps_mixed_text_and_markup_on_one_line() {
        let html = "<div><p>foo<b>bar</b>baz<br>end</p></div>";

        assert_eq!(
            pretty(html),
            "<div>\n  <p>foo<b>bar</b>baz<br>end</p>\n</div>\n"
        );
        assert_eq!(pretty(&pretty(html)), pretty(html));
    }

    #[test]
    fn reindents_style_bodies_by_brace_depth() {
        let html = "<head><style amp-boilerplate>\n      body {\n  animation: none;\n    }\n   @keyframes x {\nfrom {\nopacity: 0;\n}\n}\n</style></head>";

        assert_eq!(
            pretty(html),
            concat!(
                "<head>\n",
                "  <style amp-boilerplate>\n",
                "    body {\n",
                "      animation: none;\n",
                "    }\n",
                "    @keyframes x {\n",
                "      from {\n",
                "        opacity: 0;\n",
                "      }\n",
                "    }\n",
                "  </style>\n",
                "</head>\n",
            )
        );
    }

    #[test]
    fn leaves_doctype_and_empty_scripts_alone() {
        let html = "<!doctype html>\n<html>\n<head>\n<script async src=\"v0.js\"></script>\n</head>\n</html>";

        assert_eq!(
            pretty(html),
            concat!(
                "<!doctype html>\n",
                "<html>\n",
                "  <head>\n",
                "    <script async src=\"v0.js\"></script>\n",
                "  </head>\n",
                "</html>\n",
            )
        );
    }

    #[test]
    fn closes_unterminated_elements() {
        assert_eq!(pretty("<div><span>x"), "<div>\n  <span>x</span>\n</div>\n");
    }

    #[test]
    fn is_idempotent() {
        let html = "<!doctype html><html><head><title>T</title><style>a {\ncolor: red;\n}</style></head><body><amp-story><amp-story-page id=\"p\"><div>lead<p>x</p></div></amp-story-page></amp-story></body></html>";

        let once = pretty(html);
        assert_eq!(pretty(&once), once);
        assert!(once.contains("<div>lead<p>x</p></div>"));
    }
}
