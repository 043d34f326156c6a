//! Configuration - database credentials from a JSON file, server knobs from the environment

use super::error::ConfigError;
use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "conf.json";

/// Credentials and location of the MySQL database, as read from `conf.json`.
#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default = "default_require_ssl")]
    pub require_ssl: bool,
}

fn default_db_port() -> u16 {
    3306
}

fn default_require_ssl() -> bool {
    true
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"***")
            .field("port", &self.port)
            .field("require_ssl", &self.require_ssl)
            .finish()
    }
}

/// Pool sizing and the bound applied to every database call.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub pool: PoolSettings,
    pub server_host: String,
    pub server_port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Carica la configurazione: database dal file `path`, il resto dalle
    /// variabili d'ambiente. Chiama dotenv() automaticamente.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::load_with(path, |name| env::var(name).ok())
    }

    /// Same as `load`, with the variable lookup supplied by the caller.
    pub fn load_with<F>(path: impl AsRef<Path>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig::from_file(path.as_ref())?;

        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = parse_var_from("SERVER_PORT", var("SERVER_PORT"), "8000")?;
        let static_dir = var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("html"));
        let max_connections: u32 =
            parse_var_from("MAX_DB_CONNECTIONS", var("MAX_DB_CONNECTIONS"), "10")?;
        let timeout_secs: u64 = parse_var_from("DB_TIMEOUT_SECS", var("DB_TIMEOUT_SECS"), "5")?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidVar {
                name: "MAX_DB_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidVar {
                name: "DB_TIMEOUT_SECS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Config {
            database,
            pool: PoolSettings {
                max_connections,
                timeout: Duration::from_secs(timeout_secs),
            },
            server_host,
            server_port,
            static_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logs the effective configuration, masking the password
    pub fn log_summary(&self) {
        info!(
            address = %self.bind_address(),
            static_dir = %self.static_dir.display(),
            "Server configuration"
        );
        info!(
            host = %self.database.host,
            port = self.database.port,
            database = %self.database.database,
            username = %self.database.username,
            password = "***",
            max_connections = self.pool.max_connections,
            timeout = ?self.pool.timeout,
            "Database configuration"
        );
        if !self.database.require_ssl {
            warn!("TLS is not required for the database connection");
        }
    }
}

impl DatabaseConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn parse_var_from<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.parse::<T>().map_err(|_| ConfigError::InvalidVar {
        name,
        reason: format!("{raw:?} is not a valid number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_required_fields() {
        let config = DatabaseConfig::from_json(
            r#"{"host":"db.local","database":"talks","username":"svc","password":"hunter2"}"#,
        )
        .unwrap();
        assert_eq!(config.host, "db.local");
        assert_eq!(config.database, "talks");
        assert_eq!(config.username, "svc");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.port, 3306);
        assert!(config.require_ssl);
    }

    #[test]
    fn optional_fields_override_defaults() {
        let config = DatabaseConfig::from_json(
            r#"{"host":"h","database":"d","username":"u","password":"p","port":3307,"require_ssl":false}"#,
        )
        .unwrap();
        assert_eq!(config.port, 3307);
        assert!(!config.require_ssl);
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = DatabaseConfig::from_json(r#"{"host":"h","database":"d","username":"u"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = DatabaseConfig::from_file(Path::new("/definitely/not/here/conf.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn debug_output_masks_the_password() {
        let config = DatabaseConfig::from_json(
            r#"{"host":"h","database":"d","username":"u","password":"hunter2"}"#,
        )
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    const VALID_CONF: &str = r#"{"host":"h","database":"d","username":"u","password":"p"}"#;

    fn conf_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "submission-server-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn load(name: &str, contents: &str, vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let path = conf_file(name, contents);
        let vars: std::collections::HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let result = Config::load_with(&path, |name| vars.get(name).cloned());
        std::fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn defaults_apply_when_variables_are_unset() {
        let config = load("defaults", VALID_CONF, &[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.static_dir, PathBuf::from("html"));
        assert_eq!(config.pool.max_connections, 10);
        assert_eq!(config.pool.timeout, Duration::from_secs(5));
    }

    #[test]
    fn variables_override_defaults() {
        let config = load(
            "overrides",
            VALID_CONF,
            &[
                ("SERVER_HOST", "127.0.0.1"),
                ("SERVER_PORT", "9000"),
                ("STATIC_DIR", "public"),
                ("MAX_DB_CONNECTIONS", "3"),
                ("DB_TIMEOUT_SECS", "2"),
            ],
        )
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.pool.max_connections, 3);
        assert_eq!(config.pool.timeout, Duration::from_secs(2));
    }

    #[test]
    fn unparseable_port_is_rejected() {
        let err = load("bad-port", VALID_CONF, &[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "SERVER_PORT", .. }));
    }

    #[test]
    fn zero_connections_is_rejected() {
        let err = load("zero-conn", VALID_CONF, &[("MAX_DB_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "MAX_DB_CONNECTIONS", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = load("zero-timeout", VALID_CONF, &[("DB_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "DB_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn malformed_conf_file_is_a_parse_error() {
        let err = load("malformed", r#"{"host": "h", "#, &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
