//! Prefix-driven inline style resolution
//!
//! A prefix such as `"sidebar-item"` or `"todo-btn"` is mapped to a CSS
//! declaration block by an ordered rule table. Rules are tried top to bottom
//! and the first match wins, so `"x-table-item"` resolves as an item, not a
//! table. Only colors from the [`ColorMap`] are interpolated.

use log::trace;

use crate::theme::ColorMap;

/// How a rule recognizes a prefix
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Literal trailing substring, any of
    Suffix(&'static [&'static str]),
    /// Whole prefix equals
    Exact(&'static str),
}

impl Matcher {
    fn matches(&self, prefix: &str) -> bool {
        match self {
            Matcher::Suffix(suffixes) => suffixes.iter().any(|s| prefix.ends_with(s)),
            Matcher::Exact(name) => prefix == *name,
        }
    }
}

struct StyleRule {
    name: &'static str,
    matcher: Matcher,
    template: fn(&ColorMap) -> String,
}

const RULES: &[StyleRule] = &[
    StyleRule { name: "button", matcher: Matcher::Suffix(&["-btn"]), template: button },
    StyleRule { name: "table", matcher: Matcher::Suffix(&["-table"]), template: table },
    StyleRule { name: "list", matcher: Matcher::Suffix(&["-list", "-menu"]), template: list },
    StyleRule { name: "item", matcher: Matcher::Suffix(&["-item"]), template: item },
    StyleRule { name: "cell", matcher: Matcher::Suffix(&["-th", "-td"]), template: cell },
    StyleRule { name: "form", matcher: Matcher::Suffix(&["-form"]), template: form },
    StyleRule { name: "label", matcher: Matcher::Suffix(&["-label"]), template: label },
    StyleRule { name: "input", matcher: Matcher::Suffix(&["-input"]), template: input },
    StyleRule { name: "paragraph", matcher: Matcher::Suffix(&["-p"]), template: paragraph },
    StyleRule { name: "header", matcher: Matcher::Exact("header"), template: header },
    StyleRule { name: "sidebar", matcher: Matcher::Exact("sidebar"), template: sidebar },
    StyleRule { name: "content", matcher: Matcher::Exact("content"), template: content },
];

/// Maps element prefixes to inline CSS using a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    colors: ColorMap,
}

impl StyleResolver {
    pub fn new(colors: ColorMap) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Declaration block for `prefix`, falling back to the generic card style
    pub fn resolve(&self, prefix: &str) -> String {
        match RULES.iter().find(|rule| rule.matcher.matches(prefix)) {
            Some(rule) => {
                trace!("style rule '{}' matched prefix '{}'", rule.name, prefix);
                (rule.template)(&self.colors)
            }
            None => {
                trace!("no style rule for prefix '{}', using card style", prefix);
                card(&self.colors)
            }
        }
    }
}

fn card(c: &ColorMap) -> String {
    format!(
        "background-color: {}; color: {}; border: 1px solid {}; box-shadow: 0 4px 15px {}; \
         border-radius: 8px; padding: 15px; margin-bottom: 20px; max-width: 800px;",
        c.background, c.text, c.border, c.shadow
    )
}

fn button(c: &ColorMap) -> String {
    format!(
        "background-color: {}; color: white; border: none; padding: 10px 20px; border-radius: 5px; \
         cursor: pointer; box-shadow: 0 2px 6px {}; transition: background-color 0.3s;",
        c.primary, c.shadow
    )
}

fn table(c: &ColorMap) -> String {
    format!(
        "width: 100%; border-collapse: collapse; background-color: white; border: 1px solid {}; \
         box-shadow: 0 4px 15px {};",
        c.border, c.shadow
    )
}

fn list(c: &ColorMap) -> String {
    format!(
        "list-style: none; padding: 0; background-color: white; border-radius: 8px; \
         box-shadow: 0 4px 15px {}; padding: 15px;",
        c.shadow
    )
}

fn item(_: &ColorMap) -> String {
    "margin: 10px 0;".to_string()
}

fn cell(c: &ColorMap) -> String {
    format!("padding: 12px; text-align: left; border-bottom: 1px solid {};", c.border)
}

fn form(c: &ColorMap) -> String {
    format!(
        "background-color: white; border-radius: 8px; box-shadow: 0 4px 15px {}; padding: 15px;",
        c.shadow
    )
}

fn label(c: &ColorMap) -> String {
    format!("color: {};", c.text)
}

fn input(c: &ColorMap) -> String {
    format!("padding: 5px; border: 1px solid {}; border-radius: 4px;", c.border)
}

fn paragraph(c: &ColorMap) -> String {
    format!(
        "color: {}; background-color: white; padding: 10px; border-radius: 5px; \
         box-shadow: 0 2px 5px {};",
        c.text, c.shadow
    )
}

fn header(c: &ColorMap) -> String {
    format!(
        "background-color: {}; color: white; padding: 10px; text-align: center; \
         box-shadow: 0 2px 10px {};",
        c.primary, c.shadow
    )
}

fn sidebar(c: &ColorMap) -> String {
    format!(
        "width: 200px; background-color: {}; padding: 10px; float: left; height: 100vh; \
         border-right: 1px solid {}; box-shadow: 0 2px 10px {};",
        c.background, c.border, c.shadow
    )
}

fn content(_: &ColorMap) -> String {
    "margin-left: 220px; padding: 20px;".to_string()
}
