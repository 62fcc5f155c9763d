//! Server context resolution for layout-cgi.
//!
//! The hosting server passes its document root in `SERVER_ROOT`. That value is
//! read once by the argument parser and handed to [`ServerContext::resolve`];
//! nothing below this layer looks at the process environment.

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Server root used when the host does not provide one.
pub const DEFAULT_SERVER_ROOT: &str = ".";

/// Resolved paths for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerContext {
    /// Base directory supplied by the host.
    pub server_root: PathBuf,

    /// Layout file to render (default: `{server_root}/pages/success_layout.html`).
    pub layout_path: PathBuf,
}

impl ServerContext {
    /// Resolve paths from the server root and config.
    ///
    /// `layout_override` takes precedence over `config.layout`. Relative layout
    /// paths are joined to the server root; absolute ones are used as-is.
    pub fn resolve<P: AsRef<Path>>(
        server_root: P,
        config: &Config,
        layout_override: Option<&Path>,
    ) -> Self {
        let server_root = server_root.as_ref().to_path_buf();
        let layout = layout_override.unwrap_or_else(|| Path::new(&config.layout));

        Self {
            layout_path: server_root.join(layout),
            server_root,
        }
    }
}
