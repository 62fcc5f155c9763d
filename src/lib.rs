//! layout-cgi: CGI program that renders a success layout for a web server.
//!
//! Each invocation reads the layout from the server root, substitutes its
//! `{{name}}` placeholders and writes a CGI response to stdout. A `dump`
//! mode echoes the request environment and parameters instead.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod page;
pub mod request;
pub mod response;
pub mod template;

#[cfg(test)]
mod test_support;
