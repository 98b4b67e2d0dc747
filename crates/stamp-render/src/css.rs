//! CSS rendering for default stylesheets and inline style attributes.

use stamp_model::{Declarations, StyleSheet};

use crate::error::{RenderError, RenderResult};

/// Convert a camelCase name to kebab-case. Names without capitals are
/// returned unchanged.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize a CSS property name.
///
/// `backgroundColor` becomes `background-color`; vendor-prefixed names gain
/// their leading dash (`WebkitAnimation`, `msTransform`); custom properties
/// pass through untouched.
pub fn property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let vendor = name.starts_with(|c: char| c.is_ascii_uppercase())
        || (name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()));

    if vendor {
        format!("-{}", kebab_case(name))
    } else {
        kebab_case(name)
    }
}

/// Render declarations for a `style` attribute: `a: b; c: d`.
pub fn render_declarations(declarations: &Declarations) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", property_name(property), value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render a stylesheet as CSS text, one rule per block.
pub fn render_stylesheet(sheet: &StyleSheet) -> String {
    let mut css = String::new();

    for rule in sheet.rules() {
        css.push_str(&rule.selector);
        css.push_str(" {\n");
        for (property, value) in rule.declarations.iter() {
            css.push_str(&format!("  {}: {};\n", property_name(property), value));
        }
        css.push_str("}\n");
    }

    css
}

/// Minify CSS using lightningcss.
pub fn minify(css: &str) -> RenderResult<String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| RenderError::Css(format!("parse error: {}", e)))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| RenderError::Css(e.to_string()))?;

    Ok(minified.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_property_names() {
        assert_eq!(property_name("backgroundColor"), "background-color");
        assert_eq!(property_name("color"), "color");
        assert_eq!(property_name("font-size"), "font-size");
        assert_eq!(property_name("WebkitAnimation"), "-webkit-animation");
        assert_eq!(property_name("msTransform"), "-ms-transform");
        assert_eq!(property_name("--brandColor"), "--brandColor");
    }

    #[test]
    fn renders_rules_in_order() {
        let sheet = StyleSheet::new()
            .rule(
                "amp-story-page",
                Declarations::new()
                    .with("backgroundColor", "black")
                    .with("color", "white"),
            )
            .rule("h1", Declarations::new().with("fontWeight", 700.0));

        assert_eq!(
            render_stylesheet(&sheet),
            "amp-story-page {\n  background-color: black;\n  color: white;\n}\nh1 {\n  font-weight: 700;\n}\n"
        );
    }

    #[test]
    fn renders_empty_sheet_as_empty_string() {
        assert_eq!(render_stylesheet(&StyleSheet::new()), "");
    }

    #[test]
    fn renders_inline_declarations() {
        let declarations = Declarations::new()
            .with("gridArea", "upper-third")
            .with("opacity", 0.5);
        assert_eq!(
            render_declarations(&declarations),
            "grid-area: upper-third; opacity: 0.5"
        );
    }

    #[test]
    fn minifies_css() {
        let css = "h1 {\n  color: white;\n  margin: 0;\n}\n";
        let minified = minify(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains("h1"));
        assert!(minified.contains("margin:0"));
    }
}
