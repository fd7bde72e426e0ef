use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

fn verbose_directive() -> String {
    format!("{}=debug", env!("CARGO_CRATE_NAME"))
}

/// Install the stderr log subscriber.
///
/// `--verbose` enables debug output for this crate; otherwise `RUST_LOG` applies,
/// defaulting to warnings.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(verbose_directive())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_directive_is_scoped_to_crate() {
        assert_eq!(verbose_directive(), "jsgettext=debug");
    }
}
