use std::process::ExitCode;

use clap::Parser;
use jsgettext::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    jsgettext::cli::init_logging(args.verbose());

    match jsgettext::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
