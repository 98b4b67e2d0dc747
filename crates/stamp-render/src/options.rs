//! Rendering options.

use serde::Deserialize;

/// Options controlling document output.
///
/// Deserializable so it can sit directly under `[render]` in `stamp.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Re-indent the finished document
    pub pretty: bool,

    /// Minify the default stylesheet with lightningcss
    pub minify_css: bool,

    /// HTML-escape heading and paragraph text
    pub escape_text: bool,

    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            minify_css: false,
            escape_text: false,
            lang: "en".to_string(),
        }
    }
}
