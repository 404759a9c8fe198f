//! Logging initialization for the callbox server.
//!
//! RUST_LOG wins when set; otherwise the -v count escalates over the
//! configured default level.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let default_directive = match verbose {
        0 => cfg.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
