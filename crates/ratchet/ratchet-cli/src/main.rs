//! `ratchet`: fails when forbidden patterns grow relative to a reference
//! branch.
//!
//! Takes no arguments. Configuration comes from `ratchet.toml` in the
//! current directory and `RATCHET_*` environment variables.
//!
//! Exit status: 0 all rules passed, 1 at least one rule violated,
//! 2 configuration or tooling failure.

use std::process::ExitCode;

use ratchet_check::reporters::create_reporter;
use ratchet_core::constants::{EXIT_TOOL_FAILURE, VERSION};
use ratchet_core::{RatchetConfig, RatchetErrorCode, RunError};

fn main() -> ExitCode {
    ratchet_core::tracing::init_tracing();

    if std::env::args_os().len() > 1 {
        eprintln!(
            "ratchet {VERSION}\nusage: ratchet\n\nTakes no arguments. Configure with ratchet.toml or RATCHET_* environment variables."
        );
        return ExitCode::from(EXIT_TOOL_FAILURE);
    }

    match run() {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            tracing::error!(code = err.error_code(), "{err}");
            eprintln!("{}", err.coded_string());
            ExitCode::from(EXIT_TOOL_FAILURE)
        }
    }
}

fn run() -> Result<u8, RunError> {
    let root = std::env::current_dir().map_err(RunError::RepositoryRoot)?;
    let config = RatchetConfig::load(&root)?;

    let reporter = create_reporter(&config.report);

    // Nothing is printed until every rule has been evaluated, so an aborted
    // run shows no verdicts.
    let outcome = ratchet_check::check_repository(&config, &root)?;
    let report = reporter.generate(&outcome).map_err(RunError::Report)?;
    print!("{report}");

    Ok(outcome.exit_status())
}
