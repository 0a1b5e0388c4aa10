//! Logger setup for the `log` facade.

use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `bmp_ascii=trace`.
pub const LOG_ENV: &str = "BMP_ASCII_LOG";

/// Level used for a given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Build the stderr logger.
///
/// `--verbose` sets the base level; filters in [`LOG_ENV`] are applied on top.
pub fn builder(verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr);
    if let Ok(filters) = std::env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }
    builder
}

/// Install the stderr logger. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let _ = builder(verbose).try_init();
}
