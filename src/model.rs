//! Page description data model
//!
//! These types mirror the declarative input: a page with a title, header,
//! optional sidebar, a list of content elements, an optional color theme and
//! optional scripts. They are deliberately loose (type-specific fields are all
//! optional) so that an absent field is reported as a render error naming the
//! element, instead of an opaque deserialization failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level page description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDescription {
    /// Document `<title>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw header markup, emitted as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Vec<SidebarItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ElementDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PageStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Script lines copied verbatim into a trailing `<script>` block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<String>>,
}

impl PageDescription {
    /// Parse a page description from JSON text
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a page description from YAML text
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Color overrides supplied under `style.colors`, if any
    pub fn color_overrides(&self) -> Option<&BTreeMap<String, String>> {
        self.style.as_ref().and_then(|s| s.colors.as_ref())
    }
}

/// Theme section of the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    /// Partial color map; unknown keys are kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, String>>,
}

/// Region visibility switches. Unset means visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_sidebar: Option<bool>,
}

impl Layout {
    pub fn header_visible(&self) -> bool {
        self.show_header.unwrap_or(true)
    }

    pub fn sidebar_visible(&self) -> bool {
        self.show_sidebar.unwrap_or(true)
    }
}

/// One sidebar menu entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One node of the content tree.
///
/// `kind` selects the emitter; which of the remaining fields are required
/// depends on it (see [`crate::rendering::Element`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementDescription {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Scalar>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<Scalar>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescription>>,
    /// Inline code payload for buttons, passed through the script translator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ElementDescription>>,
}

impl ElementDescription {
    /// Shorthand for a description with only `type` and `prefix` set
    pub fn new(kind: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ElementDescription>) -> Self {
        self.children = Some(children);
        self
    }
}

/// A form input description.
///
/// `label`, `type` and `name` are interpreted; every other key is passed
/// through to the `<input>` as an attribute, in the order written. Radio
/// fields read their choices from the `options` key instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl FieldDescription {
    /// Radio choices under `options`, if present and a list of scalars
    pub fn options(&self) -> Option<Vec<Scalar>> {
        let value = self.attributes.get("options")?;
        serde_json::from_value(value.clone()).ok()
    }
}

/// A leaf value that is rendered through its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}
