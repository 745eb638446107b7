//! Application constants and runtime configuration.
//!
//! Resolution order, later wins: built-in defaults, the TOML file, then
//! `PATIENT_DASHBOARD_*` environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Patient Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_CONFIG_PATH: &str = "PATIENT_DASHBOARD_CONFIG";
pub const ENV_DATABASE_PATH: &str = "PATIENT_DASHBOARD_DB";
pub const ENV_HOST: &str = "PATIENT_DASHBOARD_HOST";
pub const ENV_PORT: &str = "PATIENT_DASHBOARD_PORT";
pub const ENV_PATIENT_ID: &str = "PATIENT_DASHBOARD_PATIENT_ID";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PATIENT_ID: i64 = 1;
const DATABASE_FILE_NAME: &str = "patient_dashboard.db";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "patient_dashboard=info,tower_http=warn"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// SQLite file holding the patient record.
    pub database_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    /// Whose records every page shows.
    pub patient_id: i64,
    /// Create the database file and schema at startup when missing.
    pub create_if_missing: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            patient_id: DEFAULT_PATIENT_ID,
            create_if_missing: true,
        }
    }
}

impl DashboardConfig {
    /// Load from the process environment and the config file it points at.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|var| std::env::var(var).ok())
    }

    /// Load using `env` as the environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let file = match env(ENV_CONFIG_PATH) {
            Some(path) => Some(PathBuf::from(path)),
            None => default_config_file().filter(|p| p.exists()),
        };

        let mut config = match file {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(path) = env(ENV_DATABASE_PATH) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(value) = env(ENV_HOST) {
            self.host = parse_env(ENV_HOST, value)?;
        }
        if let Some(value) = env(ENV_PORT) {
            self.port = parse_env(ENV_PORT, value)?;
        }
        if let Some(value) = env(ENV_PATIENT_ID) {
            self.patient_id = parse_env(ENV_PATIENT_ID, value)?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

/// `<data dir>/patient-dashboard/patient_dashboard.db`, or the working directory.
pub fn default_database_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("patient-dashboard").join(DATABASE_FILE_NAME),
        None => PathBuf::from(DATABASE_FILE_NAME),
    }
}

/// `<config dir>/patient-dashboard/config.toml`
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("patient-dashboard").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_target_patient_one_on_localhost() {
        let config = DashboardConfig::default();
        assert_eq!(config.patient_id, 1);
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5000");
        assert!(config.database_path.ends_with("patient_dashboard.db"));
        assert!(config.create_if_missing);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            &tmp,
            r#"
database_path = "/srv/dashboard/records.db"
port = 8080
"#,
        );

        let config = DashboardConfig::load_with(env_from(&[(ENV_CONFIG_PATH, &path)])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/dashboard/records.db"));
        assert_eq!(config.port, 8080);
        // Unset keys keep their defaults
        assert_eq!(config.patient_id, 1);
    }

    #[test]
    fn env_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "port = 8080\npatient_id = 3\n");

        let config = DashboardConfig::load_with(env_from(&[
            (ENV_CONFIG_PATH, &path),
            (ENV_PORT, "9090"),
            (ENV_HOST, "0.0.0.0"),
            (ENV_DATABASE_PATH, "/tmp/other.db"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.patient_id, 3);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn explicit_missing_config_file_is_read_error() {
        let err = DashboardConfig::load_with(env_from(&[(
            ENV_CONFIG_PATH,
            "/nonexistent/patient-dashboard.toml",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn invalid_env_value_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "");
        let err = DashboardConfig::load_with(env_from(&[
            (ENV_CONFIG_PATH, &path),
            (ENV_PATIENT_ID, "one"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_PATIENT_ID, .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "port = \"not a number\"");
        let err = DashboardConfig::load_with(env_from(&[(ENV_CONFIG_PATH, &path)])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
