//! CGI response output.
//!
//! - **Emitter**: writes the header block and body to the response stream
//! - **Diagnostics**: renders the request snapshot as an HTML page

mod diagnostics;
mod emitter;

pub use diagnostics::{
    CONFIRMATION, DIAGNOSTICS_HEADING, DIAGNOSTICS_TITLE, ENV_SECTION, GET_SECTION, POST_SECTION,
    dump_diagnostics,
};
pub use emitter::{CRLF, FAILURE_STATUS, HeaderOptions, ResponseEmitter};
