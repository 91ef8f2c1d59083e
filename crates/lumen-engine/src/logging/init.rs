use std::sync::Once;

/// Logger setup for binaries and tests that embed the engine.
///
/// `env_filter` takes `env_logger` directives. The engine logs per-pass
/// dispatch counts at `trace` and arena growth at `debug`, so
/// `"lumen_engine=trace"` shows every render pass of a frame.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Filters come from `config.env_filter`, else `RUST_LOG`, else `info`.
/// Only the first call does anything. If the host already installed a
/// logger, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("lumen logging initialized"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("lumen_engine=trace".into()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());
        log::trace!("still alive");
    }
}
