//! Conversion from loosely-typed values into the story model.
//!
//! Decoding walks the value tree by hand rather than deriving `Deserialize`
//! so that an unknown `type` or `template` surfaces as its own error variant,
//! carrying the location of the offending element.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::element::{
    AttrValue, Attributes, ContainerElement, Element, ElementKind, ImageElement, TextElement,
    VideoElement, VideoSource,
};
use crate::error::{ModelError, ModelResult};
use crate::story::{Layer, Page, Story, Template};
use crate::style::StyleSheet;

pub(crate) fn decode_story(value: Value) -> ModelResult<Story> {
    let mut fields = Fields::new(value, "story")?;

    let title = fields.string("title")?;
    let canonical_url = fields.string("canonicalUrl")?;
    let default_styles = match fields.take("defaultStyles") {
        None | Some(Value::Null) => StyleSheet::default(),
        Some(value) => typed(value, "defaultStyles")?,
    };
    let pages = fields
        .array("pages")?
        .into_iter()
        .enumerate()
        .map(|(i, value)| decode_page(value, &format!("pages[{i}]")))
        .collect::<ModelResult<Vec<_>>>()?;

    Ok(Story {
        title,
        canonical_url,
        default_styles,
        pages,
    })
}

fn decode_page(value: Value, path: &str) -> ModelResult<Page> {
    let mut fields = Fields::new(value, path)?;

    let id = fields.string("id")?;
    let layers = fields
        .array("layers")?
        .into_iter()
        .enumerate()
        .map(|(i, value)| decode_layer(value, &format!("{path}.layers[{i}]")))
        .collect::<ModelResult<Vec<_>>>()?;

    Ok(Page { id, layers })
}

fn decode_layer(value: Value, path: &str) -> ModelResult<Layer> {
    let mut fields = Fields::new(value, path)?;

    let name = fields.string("template")?;
    let template = Template::from_name(&name).ok_or_else(|| ModelError::UnknownTemplate {
        template: name,
        path: path.to_string(),
    })?;

    let elements_path = format!("{path}.elements");
    let layer = match template {
        Template::Fill => {
            let element = fields.require("element")?;
            Layer::Fill(decode_element(element, &format!("{path}.element"))?)
        }
        Template::Vertical => {
            Layer::Vertical(decode_elements(fields.array("elements")?, &elements_path)?)
        }
        Template::Horizontal => {
            Layer::Horizontal(decode_elements(fields.array("elements")?, &elements_path)?)
        }
        Template::Thirds => {
            Layer::Thirds(decode_elements(fields.array("elements")?, &elements_path)?)
        }
    };

    Ok(layer)
}

fn decode_elements(values: Vec<Value>, path: &str) -> ModelResult<Vec<Element>> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| decode_element(value, &format!("{path}[{i}]")))
        .collect()
}

fn decode_element(value: Value, path: &str) -> ModelResult<Element> {
    let mut fields = Fields::new(value, path)?;

    let type_name = fields.string("type")?;
    let kind =
        ElementKind::from_type_name(&type_name).ok_or_else(|| ModelError::UnknownElementType {
            type_name,
            path: path.to_string(),
        })?;

    let element = match kind {
        ElementKind::Text(kind) => {
            let text = fields.string("text")?;
            Element::Text(TextElement {
                kind,
                text,
                attributes: fields.into_attributes()?,
            })
        }
        ElementKind::Container => {
            let elements =
                decode_elements(fields.array("elements")?, &format!("{path}.elements"))?;
            Element::Container(ContainerElement {
                elements,
                attributes: fields.into_attributes()?,
            })
        }
        ElementKind::Image => Element::Image(ImageElement {
            attributes: fields.into_attributes()?,
        }),
        ElementKind::Video => {
            let sources: Vec<VideoSource> =
                typed(fields.require("sources")?, &format!("{path}.sources"))?;
            Element::Video(VideoElement {
                sources,
                attributes: fields.into_attributes()?,
            })
        }
    };

    Ok(element)
}

fn typed<T: DeserializeOwned>(value: Value, path: &str) -> ModelResult<T> {
    serde_json::from_value(value).map_err(|e| ModelError::InvalidField {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// The fields of one mapping, consumed as they are decoded. Whatever is left
/// over becomes the element's attributes, in their original order.
struct Fields {
    path: String,
    entries: Vec<(String, Value)>,
}

impl Fields {
    fn new(value: Value, path: &str) -> ModelResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                path: path.to_string(),
                entries: map.into_iter().collect(),
            }),
            other => Err(ModelError::InvalidField {
                path: path.to_string(),
                message: format!("expected a mapping, found {}", describe(&other)),
            }),
        }
    }

    fn take(&mut self, field: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| name == field)?;
        Some(self.entries.remove(index).1)
    }

    fn require(&mut self, field: &'static str) -> ModelResult<Value> {
        self.take(field).ok_or_else(|| ModelError::MissingField {
            field,
            path: self.path.clone(),
        })
    }

    fn string(&mut self, field: &'static str) -> ModelResult<String> {
        match self.require(field)? {
            Value::String(s) => Ok(s),
            other => Err(self.invalid(field, "a string", &other)),
        }
    }

    fn array(&mut self, field: &'static str) -> ModelResult<Vec<Value>> {
        match self.require(field)? {
            Value::Array(values) => Ok(values),
            other => Err(self.invalid(field, "a list", &other)),
        }
    }

    fn invalid(&self, field: &str, expected: &str, found: &Value) -> ModelError {
        ModelError::InvalidField {
            path: format!("{}.{}", self.path, field),
            message: format!("expected {expected}, found {}", describe(found)),
        }
    }

    fn into_attributes(self) -> ModelResult<Attributes> {
        let mut attributes = Attributes::new();
        for (name, value) in self.entries {
            let value: AttrValue = typed(value, &format!("{}.{}", self.path, name))?;
            attributes.insert(name, value);
        }
        Ok(attributes)
    }
}
