//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot commands: stderr, so stdout stays clean for output
    Stderr,
    /// The dashboard owns the terminal: append to the configured file
    File,
}

/// Initialize logging. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let json = config.format.as_str() == "json";

    match target {
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)
                .with_context(|| format!("cannot open log file {}", config.file.display()))?;
            let writer = Mutex::new(file);
            if json {
                subscriber
                    .with(fmt::layer().json().with_target(true).with_writer(writer))
                    .init();
            } else {
                subscriber
                    .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
                    .init();
            }
        }
        LogTarget::Stderr => {
            if json {
                subscriber
                    .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                    .init();
            } else {
                subscriber
                    .with(fmt::layer().pretty().with_target(true).with_writer(std::io::stderr))
                    .init();
            }
        }
    }

    Ok(())
}
