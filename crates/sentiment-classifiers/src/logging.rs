use env_logger::Env;
use log::LevelFilter;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "SENTIMENT_LOG";

/// Install an `env_logger` backend with `default_filter` unless
/// `SENTIMENT_LOG` is set. Calling it again is a no-op.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(Env::default().filter_or(LOG_ENV, default_filter))
        .try_init();
}
