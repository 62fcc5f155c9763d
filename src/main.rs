//! layout-cgi: CGI program that renders the server's success layout.
//!
//! This is the main entry point. It parses arguments, sets up stderr logging,
//! hands the process environment and standard streams to the dispatcher, and
//! maps errors to exit codes. A usage error is answered with a 500 status
//! block like any other failure.

use layout_cgi::cli::Cli;
use layout_cgi::commands::{self, Invocation};
use layout_cgi::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(e) = err.print() {
                eprintln!("layout-cgi: {}", e);
            }
            // --help and --version
            if !err.use_stderr() {
                return ExitCode::from(exit_codes::SUCCESS as u8);
            }
            let mut stdout = std::io::stdout().lock();
            return ExitCode::from(commands::usage_failure(&mut stdout) as u8);
        }
    };
    logging::init(cli.global.verbose);

    let env = std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    let invocation = Invocation {
        env,
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    match commands::dispatch(&cli, invocation) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // stderr ends up in the server's error log
            log::error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
