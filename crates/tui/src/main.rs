//! Terminal client entry point.
mod app;
mod cli;
mod input;
mod state;
mod terminal;
mod theme;
mod ui;
mod widgets;

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = setup_logging()?;
    kniffel_core::validate_scoring_table()?;

    // Opening the save location can fail; do it before the alternate
    // screen so the error lands on a usable terminal.
    let mut app = App::new(&cli)?;

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let result = app.run(&mut terminal);

    terminal::restore()?;
    result
}

/// Route tracing output to `kniffel.log` in the working directory.
///
/// The alternate screen owns stdout while the UI runs, so logs cannot go
/// to the terminal. `RUST_LOG` refines the filter; the baseline is INFO.
/// The returned guard flushes buffered lines on drop.
fn setup_logging() -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", "kniffel.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
