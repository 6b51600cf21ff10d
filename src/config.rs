use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Endpoints for the remote prediction service
///
/// The original deployment split traffic across two hosts: predictions and
/// the catalog on one, analytics and form submissions on the other. Both
/// stay configurable; point them at the same host for a single-server setup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_predictor_url")]
    pub predictor_url: String,
    #[serde(default = "default_analytics_url")]
    pub analytics_url: String,
    pub timeout_secs: Option<u64>,
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            predictor_url: default_predictor_url(),
            analytics_url: default_analytics_url(),
            timeout_secs: None,
        }
    }
}

fn default_predictor_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_analytics_url() -> String {
    "https://demo-house.onrender.com".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with HOUSEBOARD__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables
            // e.g., HOUSEBOARD__SERVICE__TIMEOUT_SECS -> service.timeout_secs
            .add_source(
                Environment::with_prefix("HOUSEBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOUSEBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Direct URL overrides for deployments that only set plain variables
///
/// PREDICTOR_URL and ANALYTICS_URL are checked first, then the prefixed
/// forms.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let predictor_url = env::var("PREDICTOR_URL")
        .or_else(|_| env::var("HOUSEBOARD__SERVICE__PREDICTOR_URL"))
        .ok();
    let analytics_url = env::var("ANALYTICS_URL")
        .or_else(|_| env::var("HOUSEBOARD__SERVICE__ANALYTICS_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = predictor_url {
        builder = builder.set_override("service.predictor_url", url)?;
    }
    if let Some(url) = analytics_url {
        builder = builder.set_override("service.analytics_url", url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_urls() {
        let service = ServiceSettings::default();
        assert_eq!(service.predictor_url, "http://localhost:5000");
        assert_eq!(service.analytics_url, "https://demo-house.onrender.com");
    }

    #[test]
    fn test_default_timeout() {
        let service = ServiceSettings::default();
        assert_eq!(service.timeout(), Duration::from_secs(30));

        let custom = ServiceSettings {
            timeout_secs: Some(5),
            ..ServiceSettings::default()
        };
        assert_eq!(custom.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
    }
}
