//! tracing-subscriber setup for the kubegen binary
//!
//! `RUST_LOG` takes precedence; otherwise only `kubegen*` targets are enabled at
//! the requested level. Logs go to stderr so stdout carries just the rendered
//! image configurations.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const CRATE_TARGETS: [&str; 3] = ["kubegen", "kubegen_core", "kubegen_generator"];

/// Picks the level from `--log-level`, then `-v`/`-q`, then `KUBEGEN_LOG_LEVEL`
pub fn select_level(log_level: Option<&str>, verbose: bool, quiet: bool) -> Level {
    if let Some(level_str) = log_level {
        parse_level(level_str)
    } else if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        let level_str = env::var("KUBEGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    }
}

pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    CRATE_TARGETS
        .iter()
        .fold(EnvFilter::new("warn"), |filter, target| {
            match format!("{}={}", target, level).parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}

/// Installs the global subscriber; later calls are no-ops
pub fn init_logging(level: Level, json: bool) {
    INIT.call_once(|| {
        let filter = build_filter(level);
        let registry = tracing_subscriber::registry().with(filter);

        if json {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
    });
}
