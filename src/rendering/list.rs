use crate::model::Scalar;
use crate::style::StyleResolver;

/// Unordered list; editable items get a checkbox and a content-editable span.
pub fn render(styles: &StyleResolver, prefix: &str, items: &[Scalar], editable: bool) -> String {
    let style = styles.resolve(&format!("{}-list", prefix));
    let item_style = styles.resolve(&format!("{}-item", prefix));

    let mut html = format!(
        "<ul id=\"{p}-list\" class=\"{p}-list\" style=\"{s}\">\n",
        p = prefix,
        s = style
    );
    for (i, item) in items.iter().enumerate() {
        if editable {
            html.push_str(&format!(
                "    <li id=\"{p}-item-{i}\" class=\"{p}-item\" style=\"{s}\"><input type=\"checkbox\" name=\"{p}-item-{i}\"> <span contenteditable=\"true\">{item}</span></li>\n",
                p = prefix,
                i = i,
                s = item_style,
                item = item
            ));
        } else {
            html.push_str(&format!(
                "    <li id=\"{p}-item-{i}\" class=\"{p}-item\" style=\"{s}\">{item}</li>\n",
                p = prefix,
                i = i,
                s = item_style,
                item = item
            ));
        }
    }
    html.push_str("</ul>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    #[test]
    fn plain_items_are_text() {
        let styles = StyleResolver::default();
        let html = render(&styles, "todo", &items(&["Milk", "Eggs"]), false);
        assert!(html.starts_with("<ul id=\"todo-list\" class=\"todo-list\" style=\"list-style: none;"));
        assert!(html.contains("<li id=\"todo-item-0\" class=\"todo-item\" style=\"margin: 10px 0;\">Milk</li>"));
        assert!(html.contains("<li id=\"todo-item-1\" class=\"todo-item\" style=\"margin: 10px 0;\">Eggs</li>"));
        assert!(!html.contains("checkbox"));
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn editable_items_get_checkbox_and_span() {
        let styles = StyleResolver::default();
        let html = render(&styles, "todo", &items(&["a", "b", "c"]), true);
        assert_eq!(html.matches("<li ").count(), 3);
        assert_eq!(html.matches("type=\"checkbox\"").count(), 3);
        assert_eq!(html.matches("contenteditable=\"true\"").count(), 3);
        for i in 0..3 {
            assert!(html.contains(&format!("id=\"todo-item-{}\"", i)));
            assert!(html.contains(&format!("name=\"todo-item-{}\"", i)));
        }
    }

    #[test]
    fn empty_list_is_just_the_container() {
        let styles = StyleResolver::default();
        let html = render(&styles, "e", &[], true);
        assert_eq!(html.lines().count(), 2);
    }
}
