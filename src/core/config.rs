//! Configuration management for .gantry.toml.
//!
//! The config file names the deployment namespace, the known
//! environments, and the services gantry may act on. It is also the
//! service context resolver: workflows ask it to turn a requested
//! service/environment into a validated handle before touching the
//! parameter store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::{CONFIG_FILE, STORE_LOCAL};
use crate::core::validation::validate_component;
use crate::error::{ConfigError, ContextError, Result};

/// Parsed .gantry.toml.
#[derive(Debug, Serialize, Deserialize)]
pub struct GantryConfig {
    /// Service used when an operation is not given one explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_service: Option<String>,

    /// Known environments. When non-empty, operations must name one of
    /// these; when empty, any validated environment name is accepted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<String>,

    pub gantry: GantryMeta,

    #[serde(default)]
    pub services: BTreeMap<String, ServiceConfig>,
}

/// The `[gantry]` table.
#[derive(Debug, Serialize, Deserialize)]
pub struct GantryMeta {
    pub version: String,

    /// Namespace prefixed to every derived stack name.
    pub namespace: String,

    /// Parameter store backend ("local" or "ssm"). Defaults to local.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// One `[services.<name>]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

/// A service's database declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub engine: String,
}

/// A service resolved and validated against the configuration.
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    name: String,
    database: DatabaseConfig,
}

impl ServiceHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> &str {
        &self.database.engine
    }
}

impl GantryConfig {
    /// Create a fresh configuration with no services or environments.
    pub fn new(namespace: &str) -> Self {
        Self {
            default_service: None,
            environments: Vec::new(),
            gantry: GantryMeta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                namespace: namespace.to_string(),
                store: None,
            },
            services: BTreeMap::new(),
        }
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load and validate .gantry.toml from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or a parse/validation error if it is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        debug!(
            namespace = %config.gantry.namespace,
            services = config.services.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Write the configuration to the current directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Namespace prefixed to derived stack names.
    pub fn namespace(&self) -> &str {
        &self.gantry.namespace
    }

    /// Configured store backend token, defaulting to local.
    pub fn store_backend(&self) -> &str {
        self.gantry.store.as_deref().unwrap_or(STORE_LOCAL)
    }

    /// Resolve a service request to a validated handle.
    ///
    /// The explicit argument wins; otherwise `default_service` is used.
    /// The resolved name must exist in the `[services]` table and must
    /// declare a database.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ServiceRequired` if neither an argument
    /// nor a default is available, `ContextError::UnknownService` if the
    /// name is not configured, and `ContextError::NoDatabase` if the
    /// service has no database declaration.
    pub fn resolve_service(&self, requested: Option<&str>) -> Result<ServiceHandle> {
        let name = match requested {
            Some(name) => name,
            None => self
                .default_service
                .as_deref()
                .ok_or(ContextError::ServiceRequired)?,
        };
        validate_component("service", name)?;

        let service = self.services.get(name).ok_or_else(|| {
            let known: Vec<String> = self.services.keys().cloned().collect();
            ContextError::unknown_service(name, &known)
        })?;

        let database = service
            .database
            .clone()
            .ok_or_else(|| ContextError::NoDatabase(name.to_string()))?;

        Ok(ServiceHandle {
            name: name.to_string(),
            database,
        })
    }

    /// Resolve an environment request to a validated environment name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an illegal name, or
    /// `ContextError::UnknownEnvironment` when the config lists
    /// environments and the requested one is not among them.
    pub fn resolve_environment(&self, name: &str) -> Result<String> {
        validate_component("environment", name)?;

        if !self.environments.is_empty() && !self.environments.iter().any(|e| e == name) {
            return Err(ContextError::unknown_environment(name, &self.environments).into());
        }

        Ok(name.to_string())
    }

    fn validate(&self) -> Result<()> {
        validate_component("namespace", &self.gantry.namespace)?;
        for env in &self.environments {
            validate_component("environment", env)?;
        }
        for name in self.services.keys() {
            validate_component("service", name)?;
        }
        if let Some(name) = &self.default_service {
            validate_component("service", name)?;
        }
        Ok(())
    }
}
