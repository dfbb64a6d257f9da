//! dicthtml
//!
//! Renders a declarative page description (title, header, sidebar, content
//! elements, color theme, scripts) into a complete HTML document with inline
//! styles derived from a six-color palette.
//!
//! Rendering is a pure function of the description: no I/O, no shared state,
//! identical input gives byte-identical output.
//!
//! # Example
//!
//! ```
//! use dicthtml::PageDescription;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = PageDescription::from_json_str(r#"{
//!     "title": "Demo",
//!     "header": "Welcome",
//!     "content": [
//!         { "type": "paragraph", "prefix": "intro", "text": "Hello" }
//!     ]
//! }"#)?;
//!
//! let html = dicthtml::render_page(&page)?;
//! assert!(html.contains("<p id=\"intro-p\""));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use sha2::{Digest, Sha256};

pub mod document;
pub mod error;
pub mod model;
pub mod rendering;
pub mod script;
pub mod style;
pub mod theme;

pub use error::{Error, Result};
pub use model::{ElementDescription, FieldDescription, Layout, PageDescription, PageStyle, Scalar, SidebarItem};
pub use rendering::{Element, HtmlRenderer};
pub use script::{PassthroughTranslator, ScriptTranslator};
pub use style::StyleResolver;
pub use theme::ColorMap;

/// Renderer configuration
///
/// The defaults reproduce the stock output: an English "Save" label on form
/// buttons and button code payloads copied into `onclick` unchanged.
///
/// # Examples
///
/// ```
/// let cfg = dicthtml::RenderConfig::default();
/// assert_eq!(cfg.save_label, "Save");
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Text of the save button appended to every form
    pub save_label: String,
    /// Strategy applied to button `code` payloads
    pub translator: Arc<dyn ScriptTranslator>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            save_label: "Save".to_string(),
            translator: Arc::new(PassthroughTranslator),
        }
    }
}

/// Render `page` with its own theme and the default configuration
pub fn render_page(page: &PageDescription) -> Result<String> {
    render_page_with(page, RenderConfig::default())
}

/// Render `page` with its own theme and the given configuration
pub fn render_page_with(page: &PageDescription, config: RenderConfig) -> Result<String> {
    HtmlRenderer::for_page(page, config).render_page(page)
}

/// Hex-encoded SHA-256 of a rendered document, used for golden comparisons
pub fn document_digest(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}
