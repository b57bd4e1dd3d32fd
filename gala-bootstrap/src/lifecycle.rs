use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use gala_infrastructure::AppConfig;
use gala_interfaces_console::{run_console, Prompter};

use crate::context::AppContext;

pub fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = init_tracing(&config.log_dir);

    let context = AppContext::new(config)?;
    let state = context.state;

    println!("Gala Event Management");

    let mut prompter = Prompter::new(&state.config.history_file)?;
    let result = run_console(&state, &mut prompter);
    prompter.save_history();
    result
}

/// Logs go to stderr so menu output on stdout stays clean; a non-empty
/// log_dir switches them to a daily-rolling file instead.
fn init_tracing(log_dir: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_dir.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        None
    } else {
        let appender = tracing_appender::rolling::daily(log_dir, "gala.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    }
}
