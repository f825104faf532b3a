//! Entity escaping for text that ends up inside the output markup

use std::borrow::Cow;

/// Replace `&`, `<` and `>` with their entities.
///
/// Text free of those characters is returned borrowed and untouched, so
/// callers can escape a run exactly once without copying clean input.
pub fn escape_entities(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
