//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Install the global `fmt` subscriber
///
/// The filter comes from `service.log_level` and falls back to `info` when the
/// directive does not parse. Returns `false` if a subscriber was already set,
/// which leaves the existing one in place.
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_new(&config.service.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match config.service.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(
            service = %config.service.name,
            environment = %config.service.environment,
            "Tracing initialized"
        );
    }

    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        let mut config = Config::default();
        config.service.log_level = "not a [valid directive".to_string();
        init_tracing(&config);

        // A second call never replaces the installed subscriber
        assert!(!init_tracing(&config));
    }
}
