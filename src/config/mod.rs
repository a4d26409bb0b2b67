//! Configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn, Level};

/// Configuration for the task list service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Path of the JSON data file
    pub data_file: String,

    /// Storage backend type
    pub storage_backend: StorageBackend,

    /// How new task ids are chosen
    pub id_strategy: IdStrategy,

    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Storage backend types supported by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory storage (lost on restart)
    Memory,
    /// Single JSON file on disk
    File,
}

/// Id assignment scheme for newly created tasks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// One more than the largest id in the collection; ids never collide
    #[default]
    MaxPlusOne,
    /// One more than the number of tasks. Legacy scheme: after deletions a
    /// new task can reuse the id of a surviving one.
    CollectionLength,
}

impl IdStrategy {
    /// Pick the id for a task appended to `tasks`.
    ///
    /// Fails once the id space is exhausted, e.g. when a stored task already
    /// holds `u64::MAX`.
    pub fn next_id(self, tasks: &[crate::task::Task]) -> crate::Result<u64> {
        let base = match self {
            IdStrategy::MaxPlusOne => tasks.iter().map(|t| t.id).max().unwrap_or(0),
            IdStrategy::CollectionLength => tasks.len() as u64,
        };
        base.checked_add(1).ok_or_else(|| {
            crate::TaskListError::StorageError(format!("no task id available after {}", base))
        })
    }
}

impl FromStr for IdStrategy {
    type Err = crate::TaskListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max_plus_one" => Ok(IdStrategy::MaxPlusOne),
            "collection_length" | "length" => Ok(IdStrategy::CollectionLength),
            _ => Err(crate::TaskListError::ConfigError(format!(
                "Invalid ID_STRATEGY: {}",
                s
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_file: "todos.json".to_string(),
            storage_backend: StorageBackend::File,
            id_strategy: IdStrategy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration using the given data file
    pub fn new(data_file: impl Into<String>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Default::default()
        }
    }

    /// Load configuration from file, environment variables, or defaults
    pub fn load() -> crate::Result<Self> {
        if let Ok(config_path) = env::var("TASK_LIST_CONFIG") {
            info!("Loading config from TASK_LIST_CONFIG: {}", config_path);
            return Self::from_file(&config_path);
        }

        let default_paths = vec![
            "config.yaml",
            "config.toml",
            "config/config.yaml",
            "config/config.toml",
        ];

        for path in default_paths {
            if Path::new(path).exists() {
                info!("Loading config from: {}", path);
                return Self::from_file(path);
            }
        }

        if let Ok(config) = Self::from_env() {
            info!("Loaded config from environment variables");
            return Ok(config);
        }

        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                crate::TaskListError::ConfigError(format!("Failed to load config file: {}", e))
            })?;

        let config: Config = settings.try_deserialize().map_err(|e| {
            crate::TaskListError::ConfigError(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();
        let mut found_any = false;

        if let Ok(val) = env::var("TASK_LIST_HOST") {
            config.host = val;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_PORT") {
            config.port = val.parse().map_err(|e| {
                crate::TaskListError::ConfigError(format!("Invalid PORT: {}", e))
            })?;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_DATA_FILE") {
            config.data_file = val;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_STORAGE_BACKEND") {
            config.storage_backend = match val.to_lowercase().as_str() {
                "memory" => StorageBackend::Memory,
                "file" => StorageBackend::File,
                _ => {
                    return Err(crate::TaskListError::ConfigError(format!(
                        "Invalid STORAGE_BACKEND: {}",
                        val
                    )))
                }
            };
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_ID_STRATEGY") {
            config.id_strategy = val.parse()?;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_LOG_LEVEL") {
            config.log_level = val;
            found_any = true;
        }

        if !found_any {
            return Err(crate::TaskListError::ConfigError(
                "No environment variables found".to_string(),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.port == 0 {
            return Err(crate::TaskListError::ConfigError(
                "Port must be greater than 0".to_string(),
            ));
        }

        if self.storage_backend == StorageBackend::File && self.data_file.trim().is_empty() {
            return Err(crate::TaskListError::ConfigError(
                "Data file must not be empty".to_string(),
            ));
        }

        self.max_level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn max_level(&self) -> crate::Result<Level> {
        Level::from_str(&self.log_level).map_err(|_| {
            crate::TaskListError::ConfigError(format!("Invalid log level: {}", self.log_level))
        })
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
