use crate::error::{CarParkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".carpark.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarParkConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Include the `errors` array in HTTP responses.
    #[serde(default = "default_true")]
    pub expose_errors: bool,

    /// Serve GraphiQL on `GET /graphql`.
    #[serde(default = "default_true")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            expose_errors: default_true(),
            graphiql: default_true(),
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How the store assigns identifiers to newly bought cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// `current count + 1`. Can reuse an identifier after a sale.
    #[default]
    Count,
    /// A counter that never goes backwards.
    Monotonic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub id_mode: IdMode,

    /// Start with the three stock cars.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            id_mode: IdMode::default(),
            seed: default_true(),
        }
    }
}

impl CarParkConfig {
    /// Load from an explicit path, or search upward from `start_path` for
    /// `.carpark.toml`. Falls back to defaults when nothing is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CarParkError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::find_config_file(start_path) {
                Some(path) => path,
                None => {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "Loading config");
        Self::from_file(&config_path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CarParkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CarParkConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.server.expose_errors);
        assert!(config.server.graphiql);
        assert_eq!(config.store.id_mode, IdMode::Count);
        assert!(config.store.seed);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CarParkConfig = toml::from_str(
            r#"
[server]
port = 8080

[store]
id_mode = "monotonic"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.expose_errors);
        assert_eq!(config.store.id_mode, IdMode::Monotonic);
        assert!(config.store.seed);
    }

    #[test]
    fn test_unknown_id_mode_is_rejected() {
        let result: std::result::Result<CarParkConfig, _> =
            toml::from_str("[store]\nid_mode = \"uuid\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_file_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 5000\n",
        )
        .unwrap();

        let found = CarParkConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(CONFIG_FILE_NAME));

        let config = CarParkConfig::load(None, &nested).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        // A stray .carpark.toml higher up the real filesystem would be picked
        // up here, so only assert when none exists.
        if CarParkConfig::find_config_file(temp_dir.path()).is_none() {
            let config = CarParkConfig::load(None, temp_dir.path()).unwrap();
            assert_eq!(config.server.port, 4000);
        }
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let result = CarParkConfig::load(Some(&missing), temp_dir.path());
        assert!(matches!(result, Err(CarParkError::Config(_))));
    }

    #[test]
    fn test_address() {
        let settings = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(settings.address(), "0.0.0.0:9000");
    }
}
