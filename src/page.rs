//! Substitutions for the success page.
//!
//! Builds the per-request values for the stock layout: the static labels from
//! [`PageConfig`], one randomly chosen message and the current local time.

use crate::config::PageConfig;
use crate::error::{CgiError, Result};
use crate::template::{SubstitutionMap, ValueSelector};
use chrono::NaiveDateTime;

/// Format of the `{{time}}` placeholder.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(now: &NaiveDateTime) -> String {
    now.format(TIME_FORMAT).to_string()
}

/// Build the substitution map for the success page.
///
/// Entries are inserted as `extra...`, `title`, `icon`, `heading`, `message`,
/// `time`. Pass `chrono::Local::now().naive_local()` as `now` for the real page.
pub fn success_substitutions(
    page: &PageConfig,
    selector: &mut dyn ValueSelector,
    now: NaiveDateTime,
) -> Result<SubstitutionMap> {
    let message = selector.pick(&page.messages).ok_or_else(|| {
        CgiError::ConfigError("no page messages configured to choose from".to_string())
    })?;

    let mut subs: SubstitutionMap = page
        .extra
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    subs.insert("title", page.title.as_str());
    subs.insert("icon", page.icon.as_str());
    subs.insert("heading", page.heading.as_str());
    subs.insert("message", message);
    subs.insert("time", format_timestamp(&now));

    Ok(subs)
}
