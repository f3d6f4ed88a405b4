//! Quick status overview command.
//!
//! Shows the project configuration and, per database service and
//! environment, whether a master password is stored. Passwords are
//! shown only as a short SHA-256 fingerprint so two environments can
//! be compared without revealing either value.

use console::style;
use sha2::{Digest, Sha256};

use crate::cli::output;
use crate::core::config::GantryConfig;
use crate::core::naming::{self, ParameterName, StackType};
use crate::core::store::{self, ParameterStore};
use crate::core::workflow::database::MASTER_PASSWORD_ATTRIBUTE;
use crate::error::{Error, Result, StoreError};

/// Show quick status overview.
pub fn execute(json: bool) -> Result<()> {
    let config = GantryConfig::load()?;
    let store = store::open_default(&config)?;

    if json {
        return print_json(&config, store.as_ref());
    }

    output::section("Gantry Status");
    output::kv("namespace", config.namespace());
    output::kv("store", config.store_backend());
    if let Some(service) = &config.default_service {
        output::kv("default service", service);
    }

    output::section("Databases");
    let mut any = false;
    for (name, service) in &config.services {
        let Some(db) = &service.database else {
            continue;
        };
        any = true;

        output::header(&format!("{} ({})", name, db.engine));
        if config.environments.is_empty() {
            output::dimmed("  no environments configured");
            continue;
        }
        for environment in &config.environments {
            let parameter = master_password_parameter(&config, name, environment);
            let state = match store.get(&parameter) {
                Ok(value) => format!("sha256:{}", fingerprint(&value)),
                Err(Error::Store(StoreError::NotFound(_))) => {
                    style("not set").dim().to_string()
                }
                Err(e) => return Err(e),
            };
            output::kv(environment, state);
        }
    }
    if !any {
        output::dimmed("no services with a database configured");
        println!();
        output::hint(&format!(
            "register one in {} under [services.<name>.database]",
            output::cmd(".gantry.toml")
        ));
    }

    Ok(())
}

fn print_json(config: &GantryConfig, store: &dyn ParameterStore) -> Result<()> {
    let mut services = serde_json::Map::new();
    for (name, service) in &config.services {
        let Some(db) = &service.database else {
            services.insert(name.clone(), serde_json::json!({ "database": null }));
            continue;
        };

        let mut environments = serde_json::Map::new();
        for environment in &config.environments {
            let parameter = master_password_parameter(config, name, environment);
            let state = match store.get(&parameter) {
                Ok(value) => {
                    serde_json::json!({ "set": true, "fingerprint": fingerprint(&value) })
                }
                Err(Error::Store(StoreError::NotFound(_))) => {
                    serde_json::json!({ "set": false })
                }
                Err(e) => return Err(e),
            };
            environments.insert(environment.clone(), state);
        }

        services.insert(
            name.clone(),
            serde_json::json!({
                "database": { "engine": db.engine, "environments": environments }
            }),
        );
    }

    let doc = serde_json::json!({
        "namespace": config.namespace(),
        "store": config.store_backend(),
        "default_service": config.default_service,
        "environments": config.environments,
        "services": services,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn master_password_parameter(
    config: &GantryConfig,
    service: &str,
    environment: &str,
) -> ParameterName {
    let stack = naming::stack_name(
        config.namespace(),
        StackType::Database,
        service,
        environment,
    );
    naming::parameter_name(&stack, MASTER_PASSWORD_ATTRIBUTE)
}

/// First four bytes of the SHA-256 digest, hex-encoded.
fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    digest
        .iter()
        .take(4)
        .map(|b| format!("{b:02x}"))
        .collect()
}
