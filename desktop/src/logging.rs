//! Logging initialization.
//!
//! Sets up `tracing` with a stdout layer plus a daily-rotated file log under
//! `logs/`. File writes go through a non-blocking worker so logging never
//! stalls the UI thread.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "minitweet.log";

/// Initialize the logging system.
///
/// The filter comes from `RUST_LOG` when set, otherwise defaults to info
/// level for our own crates and warn for everything else.
///
/// Returns the file writer guard. It must stay alive in `main` for the
/// lifetime of the program, or buffered log lines are lost on exit. `None`
/// means the log directory could not be created and only stdout logging is
/// active.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minitweet=info,desktop=info,shared=info,warn"));

    let stdout_layer = fmt::layer().with_target(true);

    let guard = match fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_ansi(false); // No ANSI codes in log files

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .init();
            tracing::warn!(error = %e, "Failed to create log directory, file logging disabled");
            None
        }
    };

    setup_panic_hook();

    tracing::info!(log_file = %format!("{LOG_DIR}/{LOG_FILE}"), "Logging initialized");
    guard
}

/// Route panics through `tracing` before the default handler runs.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
