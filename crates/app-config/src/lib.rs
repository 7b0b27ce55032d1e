use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, DataSettings, ForecastSettings, Settings, SweepRange, SweepSettings};

/// Loads the application settings from layered sources.
///
/// 1. Reads the default `config/base.toml`.
/// 2. Merges an environment-specific file (e.g. `config/development.toml`).
/// 3. Merges `APP`-prefixed environment variables with `__` separators
///    (e.g. `APP_SWEEP__SHORT__END=40`).
///
/// The result is an explicit value handed into the optimizer and windower;
/// nothing here installs process-wide state, so concurrent sweeps with
/// different parameters cannot interfere.
pub fn load_settings() -> Result<Settings> {
    // Default to "development" when no environment is set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/base"))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}
