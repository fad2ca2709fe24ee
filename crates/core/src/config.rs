//! Environment-driven configuration for kubegen
//!
//! # Environment Variables
//!
//! - `KUBEGEN_NAMESPACE`: property namespace, keys look like `<ns>.generator.<name>.from` - default: "kubegen"
//! - `KUBEGEN_TARGET`: deployment target (openshift|kubernetes) - default: "kubernetes"
//! - `KUBEGEN_STRATEGY`: build strategy hint (s2i|docker|jib) - default: "docker"
//! - `KUBEGEN_LOG_LEVEL`: logging level - default: "info"
//! - `KUBEGEN_DEFAULT_IMAGES`: extra properties file merged over the built-in default image table

use crate::platform::{BuildStrategy, DeploymentTarget};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_NAMESPACE: &str = "kubegen";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TARGET: DeploymentTarget = DeploymentTarget::Kubernetes;
const DEFAULT_STRATEGY: BuildStrategy = BuildStrategy::Docker;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone)]
pub struct KubegenConfig {
    pub namespace: String,
    pub target: DeploymentTarget,
    pub strategy: BuildStrategy,
    pub log_level: String,
    pub default_images: Option<PathBuf>,
}

impl Default for KubegenConfig {
    /// Reads `KUBEGEN_*` variables, silently falling back to defaults for
    /// anything missing or unparseable. Use [`KubegenConfig::from_env`] to
    /// reject bad values instead.
    fn default() -> Self {
        let namespace =
            env::var("KUBEGEN_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());

        let target = env::var("KUBEGEN_TARGET")
            .ok()
            .and_then(|v| v.parse::<DeploymentTarget>().ok())
            .unwrap_or(DEFAULT_TARGET);

        let strategy = env::var("KUBEGEN_STRATEGY")
            .ok()
            .and_then(|v| v.parse::<BuildStrategy>().ok())
            .unwrap_or(DEFAULT_STRATEGY);

        let log_level = env::var("KUBEGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let default_images = env::var("KUBEGEN_DEFAULT_IMAGES").ok().map(PathBuf::from);

        Self {
            namespace,
            target,
            strategy,
            log_level,
            default_images,
        }
    }
}

impl KubegenConfig {
    /// Strict variant of `Default`: malformed target or strategy values are errors
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("KUBEGEN_TARGET") {
            config.target = raw.parse().map_err(|error| ConfigError::ParseError {
                field: "KUBEGEN_TARGET".to_string(),
                error,
            })?;
        }
        if let Ok(raw) = env::var("KUBEGEN_STRATEGY") {
            config.strategy = raw.parse().map_err(|error| ConfigError::ParseError {
                field: "KUBEGEN_STRATEGY".to_string(),
                error,
            })?;
        }

        config.validate()?;
        debug!(
            namespace = %config.namespace,
            target = %config.target,
            strategy = %config.strategy,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Property namespace must not be empty".to_string(),
            ));
        }
        if self.namespace.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed(format!(
                "Property namespace must not contain whitespace: '{}'",
                self.namespace
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if let Some(ref path) = self.default_images {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "KUBEGEN_DEFAULT_IMAGES is set but empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("namespace".to_string(), self.namespace.clone());
        map.insert("target".to_string(), self.target.to_string());
        map.insert("strategy".to_string(), self.strategy.to_string());
        map.insert("log_level".to_string(), self.log_level.clone());
        if let Some(ref path) = self.default_images {
            map.insert("default_images".to_string(), path.display().to_string());
        }

        map
    }
}

impl fmt::Display for KubegenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kubegen Configuration:")?;
        writeln!(f, "  Namespace: {}", self.namespace)?;
        writeln!(f, "  Target: {}", self.target)?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        if let Some(ref path) = self.default_images {
            writeln!(f, "  Default Images: {}", path.display())?;
        }
        Ok(())
    }
}
