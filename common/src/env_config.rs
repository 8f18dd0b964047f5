use std::{env, sync::Arc};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to start the API: database connection, bind
/// address, worker count, CORS origin and logging preferences.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Maximum level written by the logger.
    pub log_level: log::LevelFilter,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// `ENVIRONMENT` (default "development") selects an optional
    /// `.env.<ENVIRONMENT>.local` file which is loaded before `.env`. Variables
    /// already present in the process environment always win.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `DATABASE_URL`: Connection string for the database
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 5500)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_LEVEL`: One of off, error, warn, info, debug, trace (default: info)
    pub fn from_env() -> Result<Arc<Self>, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        dotenvy::from_filename(format!(".env.{environment}.local")).ok();
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok()).map(Arc::new)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let server_port = var_or("PORT", "5500");
        let num_workers = var_or("WORKERS", "4");
        let log_level = var_or("LOG_LEVEL", "info");

        Ok(Config {
            environment: var_or("ENVIRONMENT", "development"),
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            server_host: var_or("IP", "127.0.0.1"),
            server_port: server_port.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "port number",
                value: server_port.clone(),
            })?,
            num_workers: num_workers.parse().map_err(|_| ConfigError::Invalid {
                name: "WORKERS",
                expected: "number",
                value: num_workers.clone(),
            })?,
            cors_allowed_origin: var_or("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            console_logging_enabled: var_or("ENABLE_CONSOLE_LOGGING", "true").to_lowercase()
                == "true",
            log_level: log_level.parse().map_err(|_| ConfigError::Invalid {
                name: "LOG_LEVEL",
                expected: "log level",
                value: log_level.clone(),
            })?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/subs")]))
            .expect("config");

        assert_eq!(config.environment, "development");
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 5500);
        assert_eq!(config.num_workers, 4);
        assert!(config.console_logging_enabled);
        assert_eq!(config.log_level, log::LevelFilter::Info);
        assert!(!config.is_production());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/subs"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/subs"),
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("ENABLE_CONSOLE_LOGGING", "FALSE"),
            ("LOG_LEVEL", "debug"),
        ]))
        .expect("config");

        assert!(config.is_production());
        assert_eq!(config.server_port, 8080);
        assert!(!config.console_logging_enabled);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }
}
