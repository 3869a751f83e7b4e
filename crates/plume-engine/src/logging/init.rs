use std::sync::Once;

use log::LevelFilter;

/// Logger settings for binaries that embed plume.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter in `env_logger` syntax, e.g. "warn,plume_markup=debug".
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Print timestamps. Off by default: dialog previews are short-lived.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: false,
        }
    }
}

/// Filter string actually installed for `config`, given the value of `RUST_LOG`.
fn effective_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .filter(|f| !f.trim().is_empty())
        .or(rust_log.filter(|f| !f.trim().is_empty()))
        .unwrap_or_else(|| config.default_level.to_string().to_lowercase())
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = effective_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig { env_filter: Some("plume_ui=debug".into()), ..Default::default() };
        assert_eq!(effective_filter(&config, Some("warn".into())), "plume_ui=debug");
    }

    #[test]
    fn rust_log_used_when_no_explicit_filter() {
        assert_eq!(effective_filter(&LoggingConfig::default(), Some("warn".into())), "warn");
    }

    #[test]
    fn falls_back_to_default_level() {
        let config = LoggingConfig { default_level: LevelFilter::Debug, ..Default::default() };
        assert_eq!(effective_filter(&config, None), "debug");
        assert_eq!(effective_filter(&config, Some("  ".into())), "debug");
    }
}
