//! Logger setup.
//!
//! Records go through the `log` facade to a `fern` dispatch that timestamps them and writes to
//! stdout.

use std::{str::FromStr, sync::Once};

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset or not a plain level name.
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Calls after the first are ignored.
pub fn init(config: LoggingConfig) {
    INIT.call_once(|| {
        let level = resolve_level(std::env::var("RUST_LOG").ok().as_deref(), config.level);

        let result = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply();

        match result {
            Ok(()) => log::debug!("logging initialized at {level}"),
            Err(err) => eprintln!("failed to install logger: {err}"),
        }
    });
}

/// Picks the level named by `env`, falling back to `default` when it is missing or unparseable.
fn resolve_level(env: Option<&str>, default: LevelFilter) -> LevelFilter {
    env.and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(default)
}
