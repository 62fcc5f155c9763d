//! Error types for layout-cgi.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so
//! the CGI host sees a non-zero status whenever no valid page was produced.

use crate::exit_codes;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for layout-cgi operations.
#[derive(Error, Debug)]
pub enum CgiError {
    /// The layout file does not exist.
    #[error("layout file not found: {}", .path.display())]
    LayoutNotFound { path: PathBuf },

    /// The layout file exists but the process may not read it.
    #[error("permission denied reading layout file: {}", .path.display())]
    LayoutPermissionDenied { path: PathBuf },

    /// Any other failure reading the layout (I/O error, invalid UTF-8).
    #[error("failed to read layout file '{}': {source}", .path.display())]
    LayoutRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file missing, unparsable, or holding invalid values.
    #[error("{0}")]
    ConfigError(String),

    /// Writing the response stream failed.
    #[error("failed to write response: {0}")]
    OutputError(#[from] io::Error),
}

impl CgiError {
    /// Classify an I/O error raised while reading the layout at `path`.
    pub fn from_layout_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => CgiError::LayoutNotFound { path },
            io::ErrorKind::PermissionDenied => CgiError::LayoutPermissionDenied { path },
            _ => CgiError::LayoutRead { path, source: err },
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CgiError::LayoutNotFound { .. }
            | CgiError::LayoutPermissionDenied { .. }
            | CgiError::LayoutRead { .. } => exit_codes::LAYOUT_FAILURE,
            CgiError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            CgiError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for layout-cgi operations.
pub type Result<T> = std::result::Result<T, CgiError>;
