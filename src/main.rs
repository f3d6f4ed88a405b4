//! Gantry - deployment configuration and database secrets for services.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gantry::cli::output;
use gantry::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GANTRY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gantry=debug")
        } else {
            EnvFilter::new("gantry=warn")
        }
    });

    // Logs go to stderr so `gantry db get-password` stdout stays pipeable.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            gantry::error::Error::Config(gantry::error::ConfigError::NotInitialized) => {
                Some("run: gantry init")
            }
            gantry::error::Error::Context(gantry::error::ContextError::ServiceRequired) => {
                Some("pass --service, or set default_service in .gantry.toml")
            }
            gantry::error::Error::Store(gantry::error::StoreError::NotFound(_)) => {
                Some("store one first: gantry db set-password")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint_err(hint);
        }
        std::process::exit(1);
    }
}
