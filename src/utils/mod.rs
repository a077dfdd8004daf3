pub mod build_info;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "cash_run=info";

/// Installs the global tracing subscriber. A valid `RUST_LOG` replaces the
/// default `cash_run=info` filter entirely.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = filter_for(std::env::var(EnvFilter::DEFAULT_ENV).ok());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

fn filter_for(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_overrides_default_level() {
        let filter = filter_for(Some("cash_run=debug".into()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_blank_rust_log_uses_default() {
        assert_eq!(filter_for(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            filter_for(Some("  ".into())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
