//! Exit code constants for the layout-cgi binary.
//!
//! The CGI host only distinguishes zero from non-zero, but the codes are kept
//! distinct so server logs tell the failure classes apart:
//! - 0: Success
//! - 1: Configuration or usage error
//! - 2: Layout file could not be loaded
//! - 3: Response could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Invalid configuration file, config values, or arguments.
pub const CONFIG_ERROR: i32 = 1;

/// Layout file missing, unreadable, or not valid UTF-8.
pub const LAYOUT_FAILURE: i32 = 2;

/// Writing the response to stdout failed.
pub const OUTPUT_FAILURE: i32 = 3;
