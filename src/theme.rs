use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY: &str = "#3498db";
pub const DEFAULT_SECONDARY: &str = "#2980b9";
pub const DEFAULT_BACKGROUND: &str = "#f5f6f5";
pub const DEFAULT_TEXT: &str = "#333333";
pub const DEFAULT_BORDER: &str = "#ddd";
pub const DEFAULT_SHADOW: &str = "rgba(0,0,0,0.2)";

/// Resolved theme palette used by every style template.
///
/// Built once per renderer by shallow-merging page overrides over the
/// defaults and never mutated afterwards. Override keys outside the six known
/// ones are kept in `extra` so that newer themes round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub border: String,
    pub shadow: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
            border: DEFAULT_BORDER.to_string(),
            shadow: DEFAULT_SHADOW.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl ColorMap {
    /// Merge optional overrides over the default palette
    pub fn resolve(overrides: Option<&BTreeMap<String, String>>) -> Self {
        let mut colors = Self::default();
        for (key, value) in overrides.into_iter().flatten() {
            colors.set(key, value.clone());
        }
        colors
    }

    /// Look up a color by key, including unknown keys
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "background" => Some(&self.background),
            "text" => Some(&self.text),
            "border" => Some(&self.border),
            "shadow" => Some(&self.shadow),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "primary" => self.primary = value,
            "secondary" => self.secondary = value,
            "background" => self.background = value,
            "text" => self.text = value,
            "border" => self.border = value,
            "shadow" => self.shadow = value,
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}
