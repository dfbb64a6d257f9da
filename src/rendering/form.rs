use serde_json::Value;

use super::{capitalize, slug};
use crate::model::FieldDescription;
use crate::style::StyleResolver;
use crate::{Error, Result};

/// Hidden-by-default form: one labeled input per field plus a save button
/// wired to `save{Prefix}()`.
pub fn render(
    styles: &StyleResolver,
    prefix: &str,
    action: &str,
    fields: &[FieldDescription],
    save_label: &str,
) -> Result<String> {
    let form_style = styles.resolve(&format!("{}-form", prefix));
    let label_style = styles.resolve(&format!("{}-label", prefix));

    let mut html = format!(
        "<form id=\"{p}-form\" class=\"{p}-form\" action=\"{a}\" method=\"post\" style=\"{s} display:none;\">\n",
        p = prefix,
        a = action,
        s = form_style
    );

    for field in fields {
        let name = field
            .name
            .as_deref()
            .ok_or_else(|| Error::missing_field("form", prefix, "name"))?;
        let name_id = slug(name);
        let label = field.label.as_deref().unwrap_or("");
        let kind = field.kind.as_deref().unwrap_or("text");

        html.push_str(&format!(
            "  <label id=\"{p}-label-{n}\" class=\"{p}-label\" style=\"{s}\">{l}</label><br>\n",
            p = prefix,
            n = name_id,
            s = label_style,
            l = label
        ));

        if kind == "radio" {
            let options = field
                .options()
                .ok_or_else(|| Error::missing_field("form", prefix, "options"))?;
            let radio_style = styles.resolve(&format!("{}-radio", prefix));
            for option in options {
                let option = option.to_string();
                html.push_str(&format!(
                    "  <input id=\"{p}-radio-{n}-{o}\" class=\"{p}-radio\" type=\"radio\" name=\"{name}\" value=\"{v}\" style=\"{s}\">{v}<br>\n",
                    p = prefix,
                    n = name_id,
                    o = slug(&option),
                    name = name,
                    v = option,
                    s = radio_style
                ));
            }
        } else {
            let input_style = styles.resolve(&format!("{}-input", prefix));
            html.push_str(&format!(
                "  <input id=\"{p}-input-{n}\" class=\"{p}-input\" type=\"{k}\" name=\"{name}\"{attrs} style=\"{s}\"><br>\n",
                p = prefix,
                n = name_id,
                k = kind,
                name = name,
                attrs = extra_attributes(field),
                s = input_style
            ));
        }
    }

    html.push_str(&format!(
        "  <button id=\"{p}-save-btn\" class=\"{p}-btn\" type=\"button\" onclick=\"save{c}()\" style=\"{s}\">{l}</button>\n",
        p = prefix,
        c = capitalize(prefix),
        s = styles.resolve(&format!("{}-btn", prefix)),
        l = save_label
    ));
    html.push_str("</form>\n");
    Ok(html)
}

/// Pass-through attributes, each preceded by a space
fn extra_attributes(field: &FieldDescription) -> String {
    field
        .attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, attribute_text(value)))
        .collect()
}

/// Strings verbatim, lists comma-joined, anything else as JSON text
fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(attribute_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
