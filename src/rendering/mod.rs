//! Element rendering
//!
//! [`HtmlRenderer`] turns one [`ElementDescription`] into markup. Each
//! description is first checked for a prefix and converted into a typed
//! [`Element`] holding exactly the fields its kind needs; the per-kind emitters
//! live in the submodules. Children are rendered recursively and either
//! substituted at the `{children}` marker or appended after the parent.

pub mod button;
pub mod form;
pub mod inline;
pub mod list;
pub mod table;

use log::{debug, warn};

use crate::model::{ElementDescription, FieldDescription, PageDescription, Scalar};
use crate::style::StyleResolver;
use crate::theme::ColorMap;
use crate::{Error, RenderConfig, Result};

/// Placeholder in a parent's `text` that receives the children's markup
pub const CHILDREN_MARKER: &str = "{children}";

/// A validated element: the kind plus exactly the fields it requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<'a> {
    List {
        items: &'a [Scalar],
        editable: bool,
    },
    Table {
        headers: &'a [String],
        rows: &'a [Vec<Scalar>],
        editable: bool,
    },
    Form {
        action: &'a str,
        fields: &'a [FieldDescription],
    },
    Button {
        label: &'a str,
        action: Option<&'a str>,
        code: Option<&'a str>,
    },
    Paragraph {
        text: &'a str,
    },
    Image {
        src: &'a str,
        alt: &'a str,
    },
    Link {
        href: &'a str,
        text: &'a str,
    },
    Rule,
    /// `h` followed by digits; `level` is the digit string
    Heading {
        level: &'a str,
        text: &'a str,
    },
    Blockquote {
        text: &'a str,
    },
    Code {
        text: &'a str,
    },
    /// Unrecognized kind: no markup of its own, children still render
    Unknown,
}

impl<'a> Element<'a> {
    /// Check the fields `kind` requires and borrow them out of `desc`
    pub fn from_description(kind: &'a str, prefix: &str, desc: &'a ElementDescription) -> Result<Self> {
        let required = |value: Option<&'a str>, field: &str| {
            value.ok_or_else(|| Error::missing_field(kind, prefix, field))
        };
        let text = || required(desc.text.as_deref(), "text");

        let element = match kind {
            "list" => Element::List {
                items: desc
                    .items
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, prefix, "items"))?,
                editable: desc.editable,
            },
            "table" => Element::Table {
                headers: desc
                    .headers
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, prefix, "headers"))?,
                rows: desc
                    .data
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, prefix, "data"))?,
                editable: desc.editable,
            },
            "form" => Element::Form {
                action: required(desc.action.as_deref(), "action")?,
                fields: desc
                    .fields
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, prefix, "fields"))?,
            },
            "button" => Element::Button {
                label: text()?,
                action: desc.action.as_deref(),
                code: desc.code.as_deref(),
            },
            "paragraph" => Element::Paragraph { text: text()? },
            "image" => Element::Image {
                src: required(desc.src.as_deref(), "src")?,
                alt: desc.alt.as_deref().unwrap_or("image"),
            },
            "link" => Element::Link {
                href: required(desc.href.as_deref(), "href")?,
                text: text()?,
            },
            "hr" => Element::Rule,
            "blockquote" => Element::Blockquote { text: text()? },
            "code" => Element::Code { text: text()? },
            _ => match heading_level(kind) {
                Some(level) => Element::Heading { level, text: text()? },
                None => Element::Unknown,
            },
        };
        Ok(element)
    }
}

/// Renders elements and whole pages with one immutable palette.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    styles: StyleResolver,
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(colors: ColorMap, config: RenderConfig) -> Self {
        Self {
            styles: StyleResolver::new(colors),
            config,
        }
    }

    /// Renderer whose palette is the page's `style.colors` merged over defaults
    pub fn for_page(page: &PageDescription, config: RenderConfig) -> Self {
        Self::new(ColorMap::resolve(page.color_overrides()), config)
    }

    pub fn colors(&self) -> &ColorMap {
        self.styles.colors()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Inline style for `prefix`
    pub fn style(&self, prefix: &str) -> String {
        self.styles.resolve(prefix)
    }

    /// Render one element and, recursively, its children
    pub fn render_element(&self, desc: &ElementDescription) -> Result<String> {
        let kind = desc
            .kind
            .as_deref()
            .ok_or_else(|| Error::missing_field("element", desc.prefix.as_deref().unwrap_or(""), "type"))?;
        let prefix = match desc.prefix.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(Error::MissingPrefix {
                    element_type: kind.to_string(),
                })
            }
        };

        debug!("rendering {} '{}'", kind, prefix);
        let mut html = self.render_own(kind, prefix, desc)?;

        if let Some(children) = &desc.children {
            let mut children_html = String::new();
            for child in children {
                children_html.push_str(&self.render_element(child)?);
            }
            html = attach_children(html, desc.text.as_deref(), &children_html);
        }

        Ok(html)
    }

    fn render_own(&self, kind: &str, prefix: &str, desc: &ElementDescription) -> Result<String> {
        let styles = &self.styles;
        let html = match Element::from_description(kind, prefix, desc)? {
            Element::List { items, editable } => list::render(styles, prefix, items, editable),
            Element::Table {
                headers,
                rows,
                editable,
            } => table::render(styles, prefix, headers, rows, editable),
            Element::Form { action, fields } => {
                form::render(styles, prefix, action, fields, &self.config.save_label)?
            }
            Element::Button { label, action, code } => button::render(
                styles,
                self.config.translator.as_ref(),
                prefix,
                label,
                action,
                code,
            ),
            Element::Paragraph { text } => inline::paragraph(styles, prefix, text),
            Element::Image { src, alt } => inline::image(styles, prefix, src, alt),
            Element::Link { href, text } => inline::link(styles, prefix, href, text),
            Element::Rule => inline::rule(styles, prefix),
            Element::Heading { level, text } => inline::heading(styles, prefix, level, text),
            Element::Blockquote { text } => inline::blockquote(styles, prefix, text),
            Element::Code { text } => inline::code(styles, prefix, text),
            Element::Unknown => {
                warn!("unrecognized element type '{}' (prefix '{}'), emitting no markup", kind, prefix);
                String::new()
            }
        };
        Ok(html)
    }
}

/// Substitute children at the marker, or append them after the parent markup
fn attach_children(html: String, text: Option<&str>, children_html: &str) -> String {
    let wants_marker = text.is_some_and(|t| t.contains(CHILDREN_MARKER));
    if wants_marker && html.contains(CHILDREN_MARKER) {
        return html.replace(CHILDREN_MARKER, children_html);
    }
    let mut out = String::with_capacity(html.len() + children_html.len() + 1);
    out.push_str(html.trim_end_matches('\n'));
    out.push_str(children_html);
    out.push('\n');
    out
}

/// Digits after a leading `h`, e.g. `"h2"` -> `"2"`
fn heading_level(kind: &str) -> Option<&str> {
    let digits = kind.strip_prefix('h')?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

/// Lowercase and replace spaces with hyphens, for id fragments
pub fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// First character uppercased, the rest lowercased
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
