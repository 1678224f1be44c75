mod app;
mod calculation;
mod cli;
mod config;
mod error;
mod io;
mod prelude;
mod router;
mod service;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::Cli;
use crate::prelude::*;

fn main() -> AppResult<ExitCode> {
    let ctx = App::new(Cli::new());

    init_logging(&ctx.cli.log_level)?;

    let outcome = router::dispatch(&ctx)?;

    let rendered = outcome
        .report
        .render(&ctx.cli.format, ctx.cli.unformatted)?;

    // The csv writer already ends every row with a newline.
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(outcome.exit_code)
}

// private

/// Logs go to stderr. Stdout only ever carries the report.
fn init_logging(filter: &str) -> AppResult {
    let filter = EnvFilter::try_new(filter)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid log filter: '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
