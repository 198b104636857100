mod controller;
mod ledger;
mod models;
mod run;
mod ui;

use anyhow::Result;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(),
        2.. => {
            init_tracing();
            run::as_cli(&args)
        }
        _ => {
            eprintln!("Usage: budgetracker [command]");
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`. Only the command-line mode logs:
/// output on stderr would tear the TUI's alternate screen.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budgetracker=warn"));

        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        tracing::info!("tracing initialized");
    });
}
