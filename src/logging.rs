//! Log setup for the CLI binary.

/// Maps `-v` occurrences to a default filter.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs env_logger. `RUST_LOG` overrides the verbosity-derived default.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbosity));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
