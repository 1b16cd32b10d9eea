use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub sharing: SharingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("JOBCOMPARE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let store_path =
            env::var("JOBCOMPARE_STORE_PATH").unwrap_or_else(|_| ".jobcompare/store.json".to_string());
        if store_path.trim().is_empty() {
            return Err(ConfigError::EmptyStorePath);
        }

        let results_url =
            env::var("JOBCOMPARE_RESULTS_URL").unwrap_or_else(|_| "results.html".to_string());
        if results_url.trim().is_empty() {
            return Err(ConfigError::EmptyResultsUrl);
        }

        let log_level = env::var("JOBCOMPARE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                path: PathBuf::from(store_path.trim()),
            },
            sharing: SharingConfig {
                results_url: results_url.trim().to_string(),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the local key/value store backing saved comparisons.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

/// Base address that share links point at.
#[derive(Debug, Clone)]
pub struct SharingConfig {
    pub results_url: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyStorePath,
    EmptyResultsUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyStorePath => write!(f, "JOBCOMPARE_STORE_PATH must not be empty"),
            ConfigError::EmptyResultsUrl => {
                write!(f, "JOBCOMPARE_RESULTS_URL must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("JOBCOMPARE_ENV");
        env::remove_var("JOBCOMPARE_STORE_PATH");
        env::remove_var("JOBCOMPARE_RESULTS_URL");
        env::remove_var("JOBCOMPARE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage.path, PathBuf::from(".jobcompare/store.json"));
        assert_eq!(config.sharing.results_url, "results.html");
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn recognizes_production_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("JOBCOMPARE_ENV", " PROD ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_blank_results_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("JOBCOMPARE_RESULTS_URL", "   ");
        let err = AppConfig::load().expect_err("blank url rejected");
        assert!(matches!(err, ConfigError::EmptyResultsUrl));
        reset_env();
    }
}
