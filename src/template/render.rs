//! Layout loading and placeholder substitution.

use super::substitution::SubstitutionMap;
use crate::error::{CgiError, Result};
use std::path::{Path, PathBuf};

/// Opening delimiter of a placeholder token.
pub const TOKEN_OPEN: &str = "{{";

/// Closing delimiter of a placeholder token.
pub const TOKEN_CLOSE: &str = "}}";

/// A layout document read fully into memory.
///
/// Templates are immutable once loaded and are re-read on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: Option<PathBuf>,
    text: String,
}

impl Template {
    /// Read the layout at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(Template)` - The file contents
    /// * `Err(CgiError::LayoutNotFound)` - The file does not exist
    /// * `Err(CgiError::LayoutPermissionDenied)` - The file is not readable
    /// * `Err(CgiError::LayoutRead)` - Any other I/O failure or invalid UTF-8
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| CgiError::from_layout_io(path, e))?;

        log::debug!("loaded layout {} ({} bytes)", path.display(), text.len());

        Ok(Self {
            source: Some(path.to_path_buf()),
            text,
        })
    }

    /// Build a template from in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: None,
            text: text.into(),
        }
    }

    /// Path the template was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace every `{{name}}` token that has an entry in `substitutions`.
    ///
    /// See [`render_str`].
    pub fn render(&self, substitutions: &SubstitutionMap) -> String {
        render_str(&self.text, substitutions)
    }
}

/// Substitute placeholder tokens in `text`.
///
/// Performs exactly one left-to-right pass. Values are copied as plain text:
/// a value that itself contains `{{...}}` is never scanned again. Tokens with
/// no entry in `substitutions`, and a `{{` with no closing `}}`, are kept
/// verbatim. Names are matched exactly, without trimming. When several names
/// fit at the same `{{`, the longest one is used.
///
/// # Examples
///
/// ```
/// use layout_cgi::template::{render_str, vars};
///
/// let subs = vars([("a", "X"), ("b", "Y")]);
/// assert_eq!(render_str("<p>{{a}} and {{b}}</p>", &subs), "<p>X and Y</p>");
/// ```
pub fn render_str(text: &str, substitutions: &SubstitutionMap) -> String {
    if substitutions.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(TOKEN_OPEN) {
        result.push_str(&rest[..open]);
        let inner = &rest[open + TOKEN_OPEN.len()..];

        match match_token(inner, substitutions) {
            Some((name_len, value)) => {
                result.push_str(value);
                rest = &inner[name_len + TOKEN_CLOSE.len()..];
            }
            None => {
                // Not a known token here; emit one brace and rescan so that
                // `{{{name}}}` still resolves the inner token.
                result.push('{');
                rest = &rest[open + 1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Find the longest name in `substitutions` that `inner` starts with and that
/// is directly followed by `}}`. Names may themselves contain braces.
fn match_token<'s>(
    inner: &str,
    substitutions: &'s SubstitutionMap,
) -> Option<(usize, &'s str)> {
    substitutions
        .iter()
        .filter(|(name, _)| {
            inner.starts_with(*name) && inner[name.len()..].starts_with(TOKEN_CLOSE)
        })
        .max_by_key(|(name, _)| name.len())
        .map(|(name, value)| (name.len(), value))
}
