//! Tracing subscriber setup for the CLI
//!
//! The library only emits events; the binary installs the subscriber.
//! Events go to stderr so command output on stdout stays parseable.
//!
//! Priority order (highest to lowest):
//! 1. `ARVO_LOG` filter directives
//! 2. `-v` count from the command line
//! 3. Default (`warn`)

use anyhow::Context;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "ARVO_LOG";
pub const LOG_FORMAT_ENV: &str = "ARVO_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Level directive for a `-v` count
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbosity)))
}

pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = build_env_filter(verbosity);
    let base_subscriber = Registry::default().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install tracing subscriber")?,
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install tracing subscriber")?,
    }

    Ok(())
}
