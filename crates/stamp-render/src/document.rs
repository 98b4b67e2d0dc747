//! Full document assembly.

use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use stamp_model::{parse_story, Story, StoryFormat};

use crate::components::Extension;
use crate::css::{minify, render_stylesheet};
use crate::error::{RenderError, RenderResult};
use crate::format::pretty;
use crate::options::RenderOptions;
use crate::story::StoryRenderer;
use crate::tag::escape_html;

/// AMP runtime script.
pub const AMP_RUNTIME_SRC: &str = "https://stamp-prototype.appspot.com/v0.js";
/// `amp-story` extension script.
pub const AMP_STORY_SRC: &str = "https://stamp-prototype.appspot.com/v0/amp-story-0.1.js";

const DOCUMENT: &str = "story.html";

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();

    // Values are escaped explicitly with `attr`; the story body is markup.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("attr", |value: String| escape_html(&value));

    env.add_template(DOCUMENT, DOCUMENT_TEMPLATE)
        .expect("Failed to add document template");

    env
});

/// Context for the document template.
#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    lang: &'a str,
    title: &'a str,
    canonical_url: &'a str,
    runtime_src: &'static str,
    story_src: &'static str,
    extension_scripts: Vec<String>,
    styles: String,
    story: String,
}

/// Render a story with default options.
pub fn render(story: &Story) -> RenderResult<String> {
    render_with(story, &RenderOptions::default())
}

/// Render a story to a complete AMP document.
pub fn render_with(story: &Story, options: &RenderOptions) -> RenderResult<String> {
    // The body goes first: it decides which extension scripts the head needs.
    let rendered = StoryRenderer::new(options).render_story(&story.pages);

    let context = DocumentContext {
        lang: &options.lang,
        title: &story.title,
        canonical_url: &story.canonical_url,
        runtime_src: AMP_RUNTIME_SRC,
        story_src: AMP_STORY_SRC,
        extension_scripts: rendered.extensions.iter().map(Extension::script_tag).collect(),
        styles: stylesheet(story, options),
        story: rendered.html,
    };

    let html = TEMPLATES
        .get_template(DOCUMENT)
        .and_then(|template| template.render(&context))
        .map_err(|e| RenderError::Template(e.to_string()))?;

    if options.pretty {
        Ok(pretty(&html))
    } else {
        Ok(html)
    }
}

/// Decode a story from source text and render it.
pub fn render_source(
    source: &str,
    format: StoryFormat,
    options: &RenderOptions,
) -> RenderResult<String> {
    let story = parse_story(source, format)?;
    render_with(&story, options)
}

fn stylesheet(story: &Story, options: &RenderOptions) -> String {
    let css = render_stylesheet(&story.default_styles);
    if !options.minify_css || css.is_empty() {
        return css;
    }

    match minify(&css) {
        Ok(minified) => minified,
        Err(e) => {
            tracing::warn!("Using unminified default styles: {}", e);
            css
        }
    }
}

const DOCUMENT_TEMPLATE: &str = r#"<!doctype html>
<html amp amp-story lang="{{ lang|attr }}">
<head>
<meta charset="utf-8">
<script async src="{{ runtime_src }}"></script>
<script async custom-element="amp-story" src="{{ story_src }}"></script>
{% for script in extension_scripts %}
{{ script }}
{% endfor %}
<title>{{ title|attr }}</title>
<link rel="canonical" href="{{ canonical_url|attr }}" />
<meta name="viewport" content="width=device-width,minimum-scale=1,initial-scale=1">
<style amp-boilerplate>
body {
-webkit-animation: -amp-start 8s steps(1, end) 0s 1 normal both;
-moz-animation: -amp-start 8s steps(1, end) 0s 1 normal both;
-ms-animation: -amp-start 8s steps(1, end) 0s 1 normal both;
animation: -amp-start 8s steps(1, end) 0s 1 normal both;
}
@-webkit-keyframes -amp-start {
from {
visibility: hidden;
}
to {
visibility: visible;
}
}
@-moz-keyframes -amp-start {
from {
visibility: hidden;
}
to {
visibility: visible;
}
}
@-ms-keyframes -amp-start {
from {
visibility: hidden;
}
to {
visibility: visible;
}
}
@-o-keyframes -amp-start {
from {
visibility: hidden;
}
to {
visibility: visible;
}
}
@keyframes -amp-start {
from {
visibility: hidden;
}
to {
visibility: visible;
}
}
</style>
<noscript>
<style amp-boilerplate>
body {
-webkit-animation: none;
-moz-animation: none;
-ms-animation: none;
animation: none;
}
</style>
</noscript>
<style>
{{ styles }}
</style>
</head>
<body>
{{ story }}
</body>
</html>
"#;
