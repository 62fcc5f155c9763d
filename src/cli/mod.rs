//! CLI argument parsing for layout-cgi.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.
//!
//! CGI hosts usually run the program without arguments, so every option has
//! an environment variable or a default and the subcommand defaults to `page`.

use crate::context::DEFAULT_SERVER_ROOT;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// layout-cgi: CGI program that renders the server's success layout.
///
/// Reads `<SERVER_ROOT>/pages/success_layout.html`, fills in its `{{...}}`
/// placeholders and writes the page to stdout with a CGI header block.
#[derive(Parser, Debug)]
#[command(name = "layout-cgi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base directory supplied by the hosting server.
    #[arg(long, env = "SERVER_ROOT", default_value = DEFAULT_SERVER_ROOT, global = true)]
    pub server_root: PathBuf,

    /// YAML config file (default: `<server-root>/layout-cgi.yaml` if present).
    #[arg(long, env = "LAYOUT_CGI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Layout file, relative to the server root unless absolute.
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    /// Write the Content-Type header block (overrides config).
    #[arg(long, action = ArgAction::Set, global = true)]
    pub emit_header: Option<bool>,

    /// Append `; charset=utf-8` to the Content-Type (overrides config).
    #[arg(long, action = ArgAction::Set, global = true)]
    pub charset: Option<bool>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available commands for layout-cgi.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Render the success layout (default).
    ///
    /// Substitutes title, icon, heading, a random message and the current
    /// time into the layout.
    Page,

    /// Dump the request for debugging.
    ///
    /// Lists environment variables, GET parameters and POST form fields.
    Dump,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// Errors are returned instead of exiting, so the caller can still answer
    /// the CGI host with a status block.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }

    /// The selected command, defaulting to `page`.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Page)
    }
}
