//! Integration tests for page rendering

use dicthtml::{render_page, ElementDescription, Error, HtmlRenderer, PageDescription, RenderConfig};
use scraper::{Html, Selector};
use serde_json::json;

fn page(value: serde_json::Value) -> PageDescription {
    serde_json::from_value(value).expect("valid page description")
}

fn element(value: serde_json::Value) -> ElementDescription {
    serde_json::from_value(value).expect("valid element description")
}

fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel).collect()
}

fn ids(elements: &[scraper::ElementRef<'_>]) -> Vec<String> {
    elements
        .iter()
        .map(|e| e.value().attr("id").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_full_page_structure() {
    let p = page(json!({
        "title": "Test Page",
        "header": "Hello from Test",
        "sidebar": [{ "text": "Home", "href": "/" }, { "text": "Contact Us" }],
        "content": [{ "type": "paragraph", "prefix": "intro", "text": "This is a test page." }],
        "scripts": ["console.log('ready');"]
    }));
    let html = render_page(&p).expect("render");
    assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n  <title>Test Page</title>"));
    assert!(html.ends_with("</body>\n</html>"));

    let doc = Html::parse_document(&html);
    let title = select(&doc, "title");
    assert_eq!(title[0].text().collect::<String>(), "Test Page");

    let header = select(&doc, "#header");
    assert_eq!(header[0].text().collect::<String>(), "Hello from Test");

    let items = select(&doc, "#sidebar #sidebar-menu li");
    assert_eq!(ids(&items), vec!["sidebar-item-home", "sidebar-item-contact-us"]);
    let links = select(&doc, "#sidebar-menu a");
    assert_eq!(links[0].value().attr("href"), Some("/"));
    assert_eq!(links[1].value().attr("href"), Some("#"));
    assert_eq!(links[1].text().collect::<String>(), "Contact Us");

    let para = select(&doc, "#content #intro-p");
    assert_eq!(para[0].text().collect::<String>(), "This is a test page.");

    let script = select(&doc, "script");
    assert!(script[0].text().collect::<String>().contains("console.log('ready');"));
}

#[test]
fn test_editable_list_items() {
    let r = HtmlRenderer::default();
    let html = r
        .render_element(&element(json!({
            "type": "list", "prefix": "todo", "editable": true, "items": ["one", "two", "three"]
        })))
        .unwrap();
    let doc = Html::parse_fragment(&html);
    let items = select(&doc, "#todo-list li");
    assert_eq!(ids(&items), vec!["todo-item-0", "todo-item-1", "todo-item-2"]);
    for item in &items {
        let frag = Html::parse_fragment(&item.html());
        assert_eq!(select(&frag, "input[type=checkbox]").len(), 1);
        assert_eq!(select(&frag, "span[contenteditable=true]").len(), 1);
    }
}

#[test]
fn test_table_header_and_row() {
    let r = HtmlRenderer::default();
    let html = r
        .render_element(&element(json!({
            "type": "table", "prefix": "people", "headers": ["Name", "Age"], "data": [["Alice", "30"]]
        })))
        .unwrap();
    let doc = Html::parse_fragment(&html);
    assert_eq!(select(&doc, "thead tr th").len(), 3);
    let cells = select(&doc, "tbody tr td");
    assert_eq!(ids(&cells), vec!["people-td-0-select", "people-td-0-alice", "people-td-0-30"]);
    assert_eq!(select(&doc, "#people-select-all").len(), 1);
}

#[test]
fn test_radio_field_options() {
    let r = HtmlRenderer::default();
    let html = r
        .render_element(&element(json!({
            "type": "form",
            "prefix": "survey",
            "action": "/submit",
            "fields": [{ "label": "Pick one", "type": "radio", "name": "pick", "options": ["A", "B"] }]
        })))
        .unwrap();
    let doc = Html::parse_fragment(&html);
    let radios = select(&doc, "input[type=radio]");
    assert_eq!(radios.len(), 2);
    assert!(radios.iter().all(|r| r.value().attr("name") == Some("pick")));
    assert_eq!(ids(&radios), vec!["survey-radio-pick-a", "survey-radio-pick-b"]);

    let form = select(&doc, "#survey-form");
    assert!(form[0].value().attr("style").unwrap().ends_with("display:none;"));
    let save = select(&doc, "#survey-save-btn");
    assert_eq!(save[0].value().attr("onclick"), Some("saveSurvey()"));
}

#[test]
fn test_custom_save_label() {
    let r = HtmlRenderer::new(
        Default::default(),
        RenderConfig {
            save_label: "保存".to_string(),
            ..Default::default()
        },
    );
    let html = r
        .render_element(&element(json!({ "type": "form", "prefix": "f", "action": "/a", "fields": [] })))
        .unwrap();
    assert!(html.contains(">保存</button>"));
}

#[test]
fn test_missing_prefix_aborts_page() {
    let p = page(json!({
        "title": "T",
        "header": "H",
        "content": [
            { "type": "paragraph", "prefix": "ok", "text": "fine" },
            { "type": "h1", "text": "no prefix" }
        ]
    }));
    let err = render_page(&p).unwrap_err();
    assert_eq!(err, Error::MissingPrefix { element_type: "h1".to_string() });
    assert_eq!(err.to_string(), "Prefix is required for element type: h1");
}

#[test]
fn test_children_marker_position() {
    let r = HtmlRenderer::default();
    let html = r
        .render_element(&element(json!({
            "type": "paragraph",
            "prefix": "wrap",
            "text": "[{children}]",
            "children": [
                { "type": "link", "prefix": "a", "href": "/a", "text": "A" },
                { "type": "link", "prefix": "b", "href": "/b", "text": "B" }
            ]
        })))
        .unwrap();
    let open = html.find('[').unwrap();
    let close = html.find(']').unwrap();
    let a = html.find("id=\"a-a\"").unwrap();
    let b = html.find("id=\"b-a\"").unwrap();
    assert!(open < a && a < b && b < close);
    assert!(html.ends_with("]</p>\n"));
}

#[test]
fn test_hidden_sidebar() {
    let p = page(json!({
        "title": "T",
        "header": "H",
        "sidebar": [{ "text": "Home" }],
        "layout": { "show_sidebar": false },
        "content": []
    }));
    let html = render_page(&p).unwrap();
    assert!(!html.contains("id=\"sidebar\""));
    assert!(!html.contains("sidebar-menu"));
}

#[test]
fn test_every_kind_renders_deterministically() {
    let kinds = vec![
        json!({ "type": "list", "prefix": "p", "items": ["a"] }),
        json!({ "type": "table", "prefix": "p", "headers": ["H"], "data": [["c"]] }),
        json!({ "type": "form", "prefix": "p", "action": "/", "fields": [{ "name": "n" }] }),
        json!({ "type": "button", "prefix": "p", "text": "B", "code": "go()" }),
        json!({ "type": "paragraph", "prefix": "p", "text": "t" }),
        json!({ "type": "image", "prefix": "p", "src": "/i.png" }),
        json!({ "type": "link", "prefix": "p", "href": "/", "text": "t" }),
        json!({ "type": "hr", "prefix": "p" }),
        json!({ "type": "blockquote", "prefix": "p", "text": "t" }),
        json!({ "type": "code", "prefix": "p", "text": "t" }),
        json!({ "type": "h1", "prefix": "p", "text": "t" }),
        json!({ "type": "h9", "prefix": "p", "text": "t" }),
    ];
    for kind in kinds {
        let desc = element(kind.clone());
        let first = HtmlRenderer::default().render_element(&desc).unwrap();
        let second = HtmlRenderer::default().render_element(&desc).unwrap();
        assert!(!first.is_empty(), "no markup for {}", kind);
        assert_eq!(first, second, "non-deterministic output for {}", kind);
    }
}

#[test]
fn test_image_alt_default() {
    let html = HtmlRenderer::default()
        .render_element(&element(json!({ "type": "image", "prefix": "logo", "src": "/l.png" })))
        .unwrap();
    let doc = Html::parse_fragment(&html);
    let img = select(&doc, "#logo-img");
    assert_eq!(img[0].value().attr("alt"), Some("image"));
}

#[test]
fn test_builder_descriptions() {
    let desc = ElementDescription::new("h2", "intro")
        .with_text("Intro {children}")
        .with_children(vec![ElementDescription::new("hr", "split")]);
    let html = HtmlRenderer::default().render_element(&desc).unwrap();
    assert!(html.starts_with("<h2 id=\"intro-h2\" class=\"intro-h2\""));
    assert!(html.contains("Intro <hr id=\"split-hr\""));
    assert!(html.ends_with("</h2>\n"));
}
