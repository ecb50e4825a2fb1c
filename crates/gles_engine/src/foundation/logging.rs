//! Logging setup for the demo binaries

use log::LevelFilter;

/// Level used when `RUST_LOG` is unset
///
/// Stderr also carries the single fatal bootstrap line, so routine progress
/// records stay below the default.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Logger builder with the demo defaults and an optional `RUST_LOG`-style spec
pub fn builder(filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(DEFAULT_LEVEL);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Initialize the logging system
///
/// Honors `RUST_LOG`. Calling it twice is harmless.
pub fn init() {
    let filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let _ = builder(filters.as_deref()).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, level: Level) -> bool {
        logger.enabled(&Metadata::builder().level(level).target("extensions_demo").build())
    }

    #[test]
    fn test_default_filter_drops_info_records() {
        let logger = builder(None).build();

        assert_eq!(logger.filter(), LevelFilter::Warn);
        assert!(!enabled(&logger, Level::Info));
        assert!(!enabled(&logger, Level::Debug));
        assert!(enabled(&logger, Level::Warn));
        assert!(enabled(&logger, Level::Error));
    }

    #[test]
    fn test_filter_spec_overrides_default() {
        let logger = builder(Some("debug")).build();

        assert!(enabled(&logger, Level::Info));
        assert!(enabled(&logger, Level::Debug));
    }
}
