use std::collections::HashSet;

use super::slug;
use crate::model::Scalar;
use crate::style::StyleResolver;

/// Table with a select-all header checkbox and a select checkbox per row.
///
/// Body cell ids are `{prefix}-td-{row}-{slug(cell)}`. When that id is already
/// taken in the row (by an earlier cell or the `select` checkbox cell), the
/// cell gets `-{column}` appended, then a counter until the id is free.
pub fn render(
    styles: &StyleResolver,
    prefix: &str,
    headers: &[String],
    rows: &[Vec<Scalar>],
    editable: bool,
) -> String {
    let table_style = styles.resolve(&format!("{}-table", prefix));
    let th_style = styles.resolve(&format!("{}-th", prefix));
    let td_style = styles.resolve(&format!("{}-td", prefix));

    let mut html = format!(
        "<table id=\"{p}-table\" class=\"{p}-table\" style=\"{s}\">\n",
        p = prefix,
        s = table_style
    );

    html.push_str(&format!(
        "  <thead>\n    <tr id=\"{p}-header\" class=\"{p}-header\">\n",
        p = prefix
    ));
    html.push_str(&format!(
        "      <th id=\"{p}-select-all-th\" class=\"{p}-th\" style=\"{s}\"><input type=\"checkbox\" id=\"{p}-select-all\"></th>\n",
        p = prefix,
        s = th_style
    ));
    for header in headers {
        html.push_str(&format!(
            "      <th id=\"{p}-th-{id}\" class=\"{p}-th\" style=\"{s}\">{h}</th>\n",
            p = prefix,
            id = slug(header),
            s = th_style,
            h = header
        ));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str(&format!(
        "  <tbody id=\"{p}-body\" class=\"{p}-body\">\n",
        p = prefix
    ));
    let editable_attr = if editable { " contenteditable=\"true\"" } else { "" };
    for (i, row) in rows.iter().enumerate() {
        html.push_str(&format!(
            "    <tr id=\"{p}-row-{i}\" class=\"{p}-row\">\n",
            p = prefix,
            i = i
        ));
        html.push_str(&format!(
            "      <td id=\"{p}-td-{i}-select\" class=\"{p}-td\" style=\"{s}\"><input type=\"checkbox\" name=\"{p}-row-{i}\"></td>\n",
            p = prefix,
            i = i,
            s = td_style
        ));
        let mut seen = HashSet::from(["select".to_string()]);
        for (col, cell) in row.iter().enumerate() {
            let text = cell.to_string();
            let cell_id = unique_cell_id(&mut seen, slug(&text), col);
            html.push_str(&format!(
                "      <td id=\"{p}-td-{i}-{id}\" class=\"{p}-td\" style=\"{s}\"{e}>{t}</td>\n",
                p = prefix,
                i = i,
                id = cell_id,
                s = td_style,
                e = editable_attr,
                t = text
            ));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

fn unique_cell_id(seen: &mut HashSet<String>, base: String, col: usize) -> String {
    let mut candidate = base.clone();
    let mut attempt = 0;
    while !seen.insert(candidate.clone()) {
        candidate = match attempt {
            0 => format!("{}-{}", base, col),
            n => format!("{}-{}-{}", base, col, n),
        };
        attempt += 1;
    }
    candidate
}
