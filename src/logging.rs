//! Tracing subscriber setup for the command-line entry points.
//!
//! The filter sits behind a reload layer so logging can start before the
//! server config is read, then switch to the config's `log_filter`.

use crate::config::ConfigError;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for swapping the active filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter used before any configuration has been read.
pub const DEFAULT_FILTER: &str = "info,aigames=debug,aigames_tictactoe=info";

/// Builds a reloadable filter layer.
///
/// `RUST_LOG` wins over `default` when it is set and parses.
pub fn filter_layer(default: &str) -> (reload::Layer<EnvFilter, Registry>, FilterHandle) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    reload::Layer::new(filter)
}

/// Installs the global subscriber writing to stderr.
pub fn init(default: &str) -> FilterHandle {
    let (filter, handle) = filter_layer(default);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Replaces the active filter with `directives`.
///
/// Does nothing when `RUST_LOG` is set, so the environment keeps
/// precedence over configuration.
pub fn apply_config_filter(handle: &FilterHandle, directives: &str) -> Result<(), ConfigError> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(());
    }
    reload_filter(handle, directives)
}

fn reload_filter(handle: &FilterHandle, directives: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| ConfigError::new(format!("Invalid log filter {:?}: {}", directives, e)))?;
    handle
        .reload(filter)
        .map_err(|e| ConfigError::new(format!("Failed to apply log filter: {}", e)))
}
