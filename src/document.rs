//! Document assembly: head, header, sidebar menu, content and scripts

use log::debug;

use crate::model::{Layout, PageDescription, SidebarItem};
use crate::rendering::{slug, HtmlRenderer};
use crate::{Error, Result};

impl HtmlRenderer {
    /// Render a complete HTML document for `page`.
    ///
    /// The palette is the renderer's; use [`HtmlRenderer::for_page`] to pick
    /// up the page's own `style.colors`.
    pub fn render_page(&self, page: &PageDescription) -> Result<String> {
        let title = page
            .title
            .as_deref()
            .ok_or_else(|| Error::missing_field("page", "", "title"))?;
        let layout = page.layout.unwrap_or_default();

        let mut html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n  <title>{}</title>\n</head>\n<body>\n",
            title
        );

        if layout.header_visible() {
            let header = page
                .header
                .as_deref()
                .ok_or_else(|| Error::missing_field("page", "", "header"))?;
            debug!("rendering header");
            html.push_str(&format!(
                "  <div id=\"header\" class=\"header\" style=\"{}\">{}</div>\n",
                self.style("header"),
                header
            ));
        }

        if let Some(items) = sidebar_items(page, &layout) {
            debug!("rendering sidebar with {} items", items.len());
            html.push_str(&format!(
                "  <div id=\"sidebar\" class=\"sidebar\" style=\"{}\">\n",
                self.style("sidebar")
            ));
            html.push_str(&self.render_sidebar(items, "sidebar")?);
            html.push_str("  </div>\n");
        }

        let content = page
            .content
            .as_deref()
            .ok_or_else(|| Error::missing_field("page", "", "content"))?;
        debug!("rendering {} content elements", content.len());
        html.push_str(&format!(
            "  <div id=\"content\" class=\"content\" style=\"{}\">\n",
            self.style("content")
        ));
        for element in content {
            html.push_str(&self.render_element(element)?);
        }
        html.push_str("  </div>\n");

        if let Some(scripts) = &page.scripts {
            html.push_str("  <script>\n");
            for script in scripts {
                html.push_str(&format!("    {}\n", script));
            }
            html.push_str("  </script>\n");
        }

        html.push_str("</body>\n</html>");
        Ok(html)
    }

    /// Sidebar menu: one linked `<li>` per entry, ids slugged from the text
    pub fn render_sidebar(&self, items: &[SidebarItem], prefix: &str) -> Result<String> {
        if prefix.is_empty() {
            return Err(Error::MissingPrefix {
                element_type: "sidebar".to_string(),
            });
        }

        let item_style = self.style(&format!("{}-item", prefix));
        let mut html = format!(
            "<ul id=\"{p}-menu\" class=\"{p}-menu\" style=\"{s}\">\n",
            p = prefix,
            s = self.style(&format!("{}-menu", prefix))
        );
        for item in items {
            let text = item
                .text
                .as_deref()
                .ok_or_else(|| Error::missing_field("sidebar", prefix, "text"))?;
            html.push_str(&format!(
                "    <li id=\"{p}-item-{id}\" class=\"{p}-item\" style=\"{s}\"><a href=\"{h}\">{t}</a></li>\n",
                p = prefix,
                id = slug(text),
                s = item_style,
                h = item.href.as_deref().unwrap_or("#"),
                t = text
            ));
        }
        html.push_str("</ul>\n");
        Ok(html)
    }
}

fn sidebar_items<'a>(page: &'a PageDescription, layout: &Layout) -> Option<&'a [SidebarItem]> {
    if layout.sidebar_visible() {
        page.sidebar.as_deref()
    } else {
        None
    }
}
