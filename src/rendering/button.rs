use log::warn;

use super::slug;
use crate::script::ScriptTranslator;
use crate::style::StyleResolver;

/// Button whose id is `{prefix}-{slug(label)}`.
///
/// `action` wires `onclick="{action}()"`; a `code` payload is run through the
/// translator and wired as `onclick` instead. When both are given the code
/// payload wins.
pub fn render(
    styles: &StyleResolver,
    translator: &dyn ScriptTranslator,
    prefix: &str,
    label: &str,
    action: Option<&str>,
    code: Option<&str>,
) -> String {
    let onclick = match (code, action) {
        (Some(code), action) => {
            if let Some(action) = action {
                warn!(
                    "button '{}-{}' has both action '{}' and code; code takes precedence",
                    prefix,
                    slug(label),
                    action
                );
            }
            format!(" onclick=\"{}\"", translator.translate(code))
        }
        (None, Some(action)) => format!(" onclick=\"{}()\"", action),
        (None, None) => String::new(),
    };

    format!(
        "<button id=\"{p}-{id}\" class=\"{p}-btn\" style=\"{s}\"{o}>{l}</button>\n",
        p = prefix,
        id = slug(label),
        s = styles.resolve(&format!("{}-btn", prefix)),
        o = onclick,
        l = label
    )
}
