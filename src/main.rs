use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod exits;
mod export;
mod terminal;
mod tui;

/// Diagnostics go to stderr; stdout carries the wordlist.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("profilelist={level}")));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        init_tracing(0);
        tui::run();
    } else {
        cli::run(args);
    }
}
