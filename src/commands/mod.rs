//! Command implementations for layout-cgi.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations and guarantees the failure contract: if a command fails
//! before any header was sent, the response is a bare `Status: 500` block
//! with no body.

mod dump;
mod page;


use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::Config;
use crate::context::{DEFAULT_SERVER_ROOT, ServerContext};
use crate::error::Result;
use crate::exit_codes;
use crate::response::{HeaderOptions, ResponseEmitter};
use std::io::{Read, Write};
use std::path::Path;

pub use page::render_page;

/// Process-level inputs and outputs of one CGI invocation.
pub struct Invocation<'a> {
    /// Environment variables as supplied by the host.
    pub env: Vec<(String, String)>,
    /// Request body stream.
    pub stdin: &'a mut dyn Read,
    /// Response stream.
    pub stdout: &'a mut dyn Write,
}

/// Settings resolved from arguments and config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub context: ServerContext,
    pub config: Config,
    pub header: HeaderOptions,
}

impl Settings {
    /// Load config for the server root and apply command line overrides.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let server_root = if args.server_root.as_os_str().is_empty() {
            Path::new(DEFAULT_SERVER_ROOT)
        } else {
            args.server_root.as_path()
        };

        let config = Config::resolve(server_root, args.config.as_deref())?;
        let context = ServerContext::resolve(server_root, &config, args.layout.as_deref());
        let header = HeaderOptions {
            emit: args.emit_header.unwrap_or(config.emit_header),
            charset: args.charset.unwrap_or(config.charset),
        };

        Ok(Self {
            context,
            config,
            header,
        })
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Nothing is written to
/// the response stream until the command has produced its full body.
pub fn dispatch(cli: &Cli, invocation: Invocation<'_>) -> Result<()> {
    let Invocation { env, stdin, stdout } = invocation;

    let settings = match Settings::resolve(&cli.global) {
        Ok(settings) => settings,
        Err(err) => {
            fail(ResponseEmitter::new(stdout, HeaderOptions::default()));
            return Err(err);
        }
    };
    log::debug!(
        "server root {}, layout {}",
        settings.context.server_root.display(),
        settings.context.layout_path.display()
    );

    let mut emitter = ResponseEmitter::new(stdout, settings.header);

    let result = match cli.selected_command() {
        Command::Page => page::cmd_page(&settings, &mut emitter),
        Command::Dump => dump::cmd_dump(env, stdin, &mut emitter),
    };

    match result {
        Ok(()) => {
            emitter.finish()?;
            Ok(())
        }
        Err(err) => {
            fail(emitter);
            Err(err)
        }
    }
}

/// Answer a request whose arguments could not be parsed.
///
/// Writes the failure status block to `stdout` and returns the exit code for
/// configuration errors.
pub fn usage_failure(stdout: &mut dyn Write) -> i32 {
    fail(ResponseEmitter::new(stdout, HeaderOptions::default()));
    exit_codes::CONFIG_ERROR
}

/// Send the failure status, if still possible, and flush.
fn fail<W: Write>(mut emitter: ResponseEmitter<W>) {
    if let Err(e) = emitter.write_failure() {
        log::warn!("failed to write error status: {}", e);
    }
    if let Err(e) = emitter.finish() {
        log::warn!("failed to flush response: {}", e);
    }
}
