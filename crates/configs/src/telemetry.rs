use tracing_subscriber::EnvFilter;

use crate::{LogSettings, SettingsError};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `log.filter`. Fails if a subscriber is
/// already installed or the filter does not parse.
pub fn init_tracing(settings: &LogSettings) -> Result<(), SettingsError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.filter)
            .map_err(|err| SettingsError::Tracing(Box::new(err)))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(SettingsError::Tracing)
}

