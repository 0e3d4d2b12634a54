//! Entry point for the `saferoute` command-line interface.
#![forbid(unsafe_code)]

use std::io::Write;

use saferoute_cli::CliError;

fn main() {
    pretty_env_logger::init_custom_env("SAFEROUTE_LOG");
    match saferoute_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            writeln!(std::io::stderr().lock(), "saferoute: {err}").unwrap_or_default();
            std::process::exit(1);
        }
    }
}
