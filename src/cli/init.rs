//! Init command - create the gantry project file.

use tracing::info;

use crate::cli::output;
use crate::core::config::{DatabaseConfig, GantryConfig, ServiceConfig};
use crate::core::constants::{
    CONFIG_FILE, DEFAULT_ENGINE, DEFAULT_ENVIRONMENTS, DEFAULT_NAMESPACE,
};
use crate::core::validation::validate_component;
use crate::error::{ConfigError, Result};

/// Initialize gantry in the current directory.
pub fn execute(
    namespace: Option<String>,
    service: Option<String>,
    environments: Option<String>,
    engine: Option<String>,
) -> Result<()> {
    if GantryConfig::exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let namespace = namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    validate_component("namespace", &namespace)?;

    let environments: Vec<String> = match environments {
        Some(list) => list
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect(),
        None => DEFAULT_ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
    };
    for env in &environments {
        validate_component("environment", env)?;
    }

    let service = match service {
        Some(name) => {
            validate_component("service", &name)?;
            Some(name)
        }
        None => detected_service(),
    };

    let mut config = GantryConfig::new(&namespace);
    config.environments = environments;

    if let Some(name) = service {
        info!(service = %name, "registering initial service");
        config.services.insert(
            name.clone(),
            ServiceConfig {
                database: Some(DatabaseConfig {
                    engine: engine.unwrap_or_else(|| DEFAULT_ENGINE.to_string()),
                }),
            },
        );
        config.default_service = Some(name);
    }

    config.save()?;

    output::success(&format!("initialized {CONFIG_FILE}"));
    output::kv("namespace", config.namespace());
    if let Some(name) = &config.default_service {
        output::kv("service", name);
    }
    output::kv("environments", config.environments.join(", "));
    println!();
    output::hint(&format!(
        "set a database password with {}",
        output::cmd("gantry db set-password -e <env>")
    ));

    info!("initialized successfully");
    Ok(())
}

// Directory names that don't survive validation (uppercase, dots,
// dashes) just mean no service is registered up front.
fn detected_service() -> Option<String> {
    let dir = std::env::current_dir().ok()?;
    let name = dir.file_name()?.to_str()?.to_lowercase();
    validate_component("service", &name).ok()?;
    Some(name)
}
