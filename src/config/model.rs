//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for one layout-cgi invocation.
///
/// This struct represents the optional `layout-cgi.yaml` file.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Layout settings
    // =========================================================================
    /// Layout path, relative to the server root unless absolute.
    #[serde(default = "default_layout")]
    pub layout: String,

    // =========================================================================
    // Header settings
    // =========================================================================
    /// Media type written in the `Content-Type` header.
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Whether to write a header block at all.
    ///
    /// Some hosts add their own `Content-Type`; disable to leave it to them.
    #[serde(default = "default_true")]
    pub emit_header: bool,

    /// Whether to append `; charset=utf-8` to the content type.
    ///
    /// Off unless requested, so the header reads a bare `text/html`.
    #[serde(default)]
    pub charset: bool,

    // =========================================================================
    // Page content
    // =========================================================================
    #[serde(default)]
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            content_type: default_content_type(),
            emit_header: default_true(),
            charset: false,
            page: PageConfig::default(),
        }
    }
}
