//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter level
///
/// `RUST_LOG` still takes precedence for per-module filters. Returns `false`
/// when a logger was already installed, in which case this call is ignored.
pub fn init_with_level(level: &str) -> bool {
    match env_logger::Builder::from_default_env()
        .filter_level(parse_level(level))
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            log::debug!("Logger already initialized, keeping it: {}", err);
            false
        }
    }
}

/// Parse a textual log level, falling back to `Info` for unknown names
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Whether a textual log level names a known filter
pub fn is_known_level(level: &str) -> bool {
    level.trim().parse::<LevelFilter>().is_ok()
}
