//! Implementation of the `dump` command.

use crate::error::Result;
use crate::request::RequestSnapshot;
use crate::response::{ResponseEmitter, dump_diagnostics};
use std::io::{Read, Write};

/// Media type of the diagnostic page.
const DUMP_CONTENT_TYPE: &str = "text/html";

/// Execute the `dump` command.
///
/// Echoes the environment, query parameters and form fields back as HTML.
pub fn cmd_dump<W: Write>(
    env: Vec<(String, String)>,
    stdin: &mut dyn Read,
    emitter: &mut ResponseEmitter<W>,
) -> Result<()> {
    let snapshot = RequestSnapshot::capture(env, stdin);
    log::info!(
        "dumping request: {} env vars, {} GET params, {} POST params",
        snapshot.env.len(),
        snapshot.get.len(),
        snapshot.post.len()
    );

    let html = dump_diagnostics(&snapshot.env, &snapshot.get, &snapshot.post);

    emitter.write_header(DUMP_CONTENT_TYPE)?;
    emitter.write_body(&html)?;
    Ok(())
}
