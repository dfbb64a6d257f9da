//! Single-tag emitters: paragraph, image, link, rule, heading, quote, code

use crate::style::StyleResolver;

fn style(styles: &StyleResolver, prefix: &str, role: &str) -> String {
    styles.resolve(&format!("{}-{}", prefix, role))
}

pub fn paragraph(styles: &StyleResolver, prefix: &str, text: &str) -> String {
    format!(
        "<p id=\"{p}-p\" class=\"{p}-p\" style=\"{s}\">{t}</p>\n",
        p = prefix,
        s = style(styles, prefix, "p"),
        t = text
    )
}

pub fn image(styles: &StyleResolver, prefix: &str, src: &str, alt: &str) -> String {
    format!(
        "<img id=\"{p}-img\" class=\"{p}-img\" src=\"{src}\" alt=\"{alt}\" style=\"{s}\">\n",
        p = prefix,
        src = src,
        alt = alt,
        s = style(styles, prefix, "img")
    )
}

pub fn link(styles: &StyleResolver, prefix: &str, href: &str, text: &str) -> String {
    format!(
        "<a id=\"{p}-a\" class=\"{p}-a\" href=\"{h}\" style=\"{s}\">{t}</a>\n",
        p = prefix,
        h = href,
        s = style(styles, prefix, "a"),
        t = text
    )
}

pub fn rule(styles: &StyleResolver, prefix: &str) -> String {
    format!(
        "<hr id=\"{p}-hr\" class=\"{p}-hr\" style=\"{s}\">\n",
        p = prefix,
        s = style(styles, prefix, "hr")
    )
}

pub fn heading(styles: &StyleResolver, prefix: &str, level: &str, text: &str) -> String {
    let role = format!("h{}", level);
    format!(
        "<{r} id=\"{p}-{r}\" class=\"{p}-{r}\" style=\"{s}\">{t}</{r}>\n",
        r = role,
        p = prefix,
        s = style(styles, prefix, &role),
        t = text
    )
}

pub fn blockquote(styles: &StyleResolver, prefix: &str, text: &str) -> String {
    format!(
        "<blockquote id=\"{p}-quote\" class=\"{p}-quote\" style=\"{s}\">{t}</blockquote>\n",
        p = prefix,
        s = style(styles, prefix, "quote"),
        t = text
    )
}

pub fn code(styles: &StyleResolver, prefix: &str, text: &str) -> String {
    format!(
        "<pre id=\"{p}-pre\" class=\"{p}-pre\" style=\"{s}\"><code>{t}</code></pre>\n",
        p = prefix,
        s = style(styles, prefix, "pre"),
        t = text
    )
}
