use crate::error::{CoreError, Result};
use std::borrow::Cow;

/// A fixed page template with `{UPPER_SNAKE}` placeholders.
///
/// Rendering is a single literal-substitution pass: placeholders are
/// disjoint tokens, substituted values are never rescanned (no recursive
/// substitution), and every bound value is HTML-escaped before insertion.
/// A placeholder with no bound value is an error so that no token can leak
/// into a published page.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    source: &'static str,
}

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Renders the template with the given placeholder bindings.
    ///
    /// Braces that do not open a well-formed `{UPPER_SNAKE}` token (CSS
    /// blocks, script bodies) are copied through verbatim.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 1..];
            let name_len = tail
                .bytes()
                .take_while(|b| b.is_ascii_uppercase() || *b == b'_')
                .count();

            if name_len > 0 && tail.as_bytes().get(name_len) == Some(&b'}') {
                let name = &tail[..name_len];
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| CoreError::UnboundPlaceholder(name.to_string()))?;
                out.push_str(&escape_html(value));
                rest = &tail[name_len + 1..];
            } else {
                out.push('{');
                rest = tail;
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Escapes the five HTML-significant characters.
///
/// Applied to every interpolated value: filenames and object keys are
/// operator-controlled strings and must not be able to inject markup into
/// the published page.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
