//! srclint binary: parse arguments, run the analysis, map the outcome onto
//! the exit code (0 no violations, 1 error, 2 violations found).

use clap::Parser;
use clap::error::ErrorKind;
use srclint_core::Cli;
use srclint_core::reporter::Reporter;
use srclint_core::run::{EXIT_ERROR, exit_code, run};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap's own error exit code is 2, which this tool reserves for
    // violations; argument errors must exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_ERROR,
            };
            let _ = err.print();
            exit(code);
        }
    };

    let mut reporter = Reporter::new(std::io::stdout().lock());
    match run(&cli, &mut reporter) {
        Ok(violations) => exit(exit_code(violations)),
        Err(err) => {
            eprintln!("Error: {err}");
            exit(EXIT_ERROR);
        }
    }
}
