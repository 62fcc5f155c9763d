//! Configuration types and defaults for layout-cgi.
//!
//! This module defines the page content settings and the default value
//! functions used by the Config struct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder names filled by the success page itself.
///
/// `extra` entries may not reuse these.
pub const BUILTIN_PLACEHOLDERS: [&str; 5] = ["title", "icon", "heading", "message", "time"];

/// Content of the success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Value for `{{title}}`.
    #[serde(default = "default_title")]
    pub title: String,

    /// Value for `{{icon}}`.
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Value for `{{heading}}`.
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Candidates for `{{message}}`; one is drawn per request.
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,

    /// Additional placeholders and their literal values (e.g. `body`).
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            heading: default_heading(),
            messages: default_messages(),
            extra: BTreeMap::new(),
        }
    }
}

/// Default quotes for `{{message}}`, in their canonical order.
pub fn default_messages() -> Vec<String> {
    vec![
        "PHP is running through CGI! 🐘".to_string(),
        "CGI + PHP = retro and cool 😎".to_string(),
        "Your Webserv just executed real PHP code ✨".to_string(),
        "Did someone say PHP-Fu? 👊".to_string(),
        "The elephant approves this message 🐘💙".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_title() -> String {
    "PHP Test".to_string()
}
pub(crate) fn default_icon() -> String {
    "🐘".to_string()
}
pub(crate) fn default_heading() -> String {
    "PHP CGI Executed Successfully".to_string()
}
pub(crate) fn default_layout() -> String {
    "pages/success_layout.html".to_string()
}
pub(crate) fn default_content_type() -> String {
    "text/html".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
