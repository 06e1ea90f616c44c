use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use cli::Options;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode
{
    setup_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            emit(format_args!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()>
{
    let options = Options::try_parse()?;
    debug!(?options);

    let table = nines::render_table(options.uptime)?;
    emit(table);
    Ok(())
}

/// Write a line to stdout. Write failures (e.g. a closed pipe) are logged and otherwise ignored.
fn emit(msg: impl Display)
{
    if let Err(e) = writeln!(std::io::stdout().lock(), "{}", msg) {
        debug!("unable to write to stdout: {}", e);
    }
}

fn setup_tracing()
{
    let default_filter_str =
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "warn"
        };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_str));
    // stdout is reserved for the table and error messages
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
