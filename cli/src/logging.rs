use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "ARGTOK_LOG";

/// Level selected by `-v` repetitions, if any.
fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Picks the filter: `ARGTOK_LOG`, then `-v`, then the config, then `warn`.
fn build_filter(env: Option<&str>, verbose: u8, configured: Option<LevelFilter>) -> EnvFilter {
    if let Some(directives) = env {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }
    let level = verbosity_level(verbose)
        .or(configured)
        .unwrap_or(LevelFilter::WARN);
    EnvFilter::default().add_directive(level.into())
}

/// Installs a stderr `fmt` subscriber. Stdout is reserved for reports.
pub fn init_tracing(verbose: u8, configured: Option<LevelFilter>) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env.as_deref(), verbose, configured);

    // Fails only if a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(LevelFilter::DEBUG));
        assert_eq!(verbosity_level(3), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_filter_precedence() {
        let filter = build_filter(None, 0, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = build_filter(None, 0, Some(LevelFilter::INFO));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = build_filter(None, 2, Some(LevelFilter::INFO));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = build_filter(Some("error"), 2, Some(LevelFilter::INFO));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
