//! Style mappings: stylesheet rules and inline declaration lists.
//!
//! Both keep the order they were written in, since CSS cascade depends on it.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single CSS property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// Unitless number, written as-is
    Number(f64),
    /// Any other value, written verbatim
    Text(String),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{n}"),
            CssValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Text(value)
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

/// An ordered list of `property: value` pairs.
///
/// Property names are kept as written (camelCase or kebab-case); the CSS
/// renderer normalizes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(Vec<(String, CssValue)>);

impl Declarations {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<CssValue>) {
        self.0.push((property.into(), value.into()));
    }

    /// Builder-style [`Declarations::push`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.push(property, value);
        self
    }

    /// Iterate declarations in the order they were written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Declarations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = Declarations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of CSS properties to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut declarations = Declarations::new();
                while let Some((property, value)) = map.next_entry::<String, CssValue>()? {
                    declarations.push(property, value);
                }
                Ok(declarations)
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Declarations,
}

/// The story's default stylesheet: an ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet(Vec<StyleRule>);

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn rule(mut self, selector: impl Into<String>, declarations: Declarations) -> Self {
        self.0.push(StyleRule {
            selector: selector.into(),
            declarations,
        });
        self
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for StyleSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleSheetVisitor;

        impl<'de> Visitor<'de> for StyleSheetVisitor {
            type Value = StyleSheet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of selectors to CSS declarations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut sheet = StyleSheet::new();
                while let Some((selector, declarations)) =
                    map.next_entry::<String, Declarations>()?
                {
                    sheet = sheet.rule(selector, declarations);
                }
                Ok(sheet)
            }
        }

        deserializer.deserialize_map(StyleSheetVisitor)
    }
}
