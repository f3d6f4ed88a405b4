//! Database master password workflows.
//!
//! Sets and fetches the master password for a service's database, one
//! password per service and environment. The parameter name is derived
//! from the database stack name, so every deployment tool in the
//! namespace agrees on where the password lives.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::{GantryConfig, ServiceHandle};
use crate::core::naming::{self, ParameterName, StackType};
use crate::core::pipeline::{Pipeline, Step};
use crate::core::store::ParameterStore;
use crate::core::validation::validate_password;
use crate::error::{ContextError, Result, StoreError};

/// Attribute appended to the database stack name to form the master
/// password parameter name.
pub const MASTER_PASSWORD_ATTRIBUTE: &str = "DatabaseMasterPassword";

/// Shared state for database workflow steps.
///
/// Created once per operation. `ResolveService` fills the service
/// handle; the store steps derive the parameter name from it.
struct DatabaseContext<'a> {
    config: &'a GantryConfig,
    store: &'a dyn ParameterStore,
    environment: String,
    service: Option<ServiceHandle>,
    password: Option<Zeroizing<String>>,
}

impl<'a> DatabaseContext<'a> {
    fn new(config: &'a GantryConfig, store: &'a dyn ParameterStore, environment: &str) -> Self {
        Self {
            config,
            store,
            environment: environment.to_string(),
            service: None,
            password: None,
        }
    }

    /// Parameter name for the resolved service's master password.
    fn master_password_parameter(&self) -> Result<ParameterName> {
        // Filled by ResolveService; absent only if the pipeline was miswired.
        let service = self
            .service
            .as_ref()
            .ok_or(ContextError::ServiceRequired)?;

        let stack = naming::stack_name(
            self.config.namespace(),
            StackType::Database,
            service.name(),
            &self.environment,
        );
        Ok(naming::parameter_name(&stack, MASTER_PASSWORD_ATTRIBUTE))
    }
}

/// Validates the requested environment and service against the
/// configuration and records the resolved service handle.
struct ResolveService {
    requested: Option<String>,
}

impl<'a> Step<DatabaseContext<'a>> for ResolveService {
    fn name(&self) -> &'static str {
        "resolve-service"
    }

    fn run(&self, ctx: &mut DatabaseContext<'a>) -> Result<()> {
        ctx.environment = ctx.config.resolve_environment(&ctx.environment)?;
        let service = ctx.config.resolve_service(self.requested.as_deref())?;
        debug!(
            service = service.name(),
            environment = %ctx.environment,
            "resolved database context"
        );
        ctx.service = Some(service);
        Ok(())
    }
}

/// Writes the new master password under the derived parameter name.
struct PutMasterPassword {
    value: Zeroizing<String>,
}

impl<'a> Step<DatabaseContext<'a>> for PutMasterPassword {
    fn name(&self) -> &'static str {
        "put-master-password"
    }

    fn run(&self, ctx: &mut DatabaseContext<'a>) -> Result<()> {
        let name = ctx.master_password_parameter()?;
        debug!(parameter = %name, "storing master password");
        ctx.store.set(&name, &self.value)
    }
}

/// Reads the master password under the derived parameter name into the
/// context.
struct FetchMasterPassword;

impl<'a> Step<DatabaseContext<'a>> for FetchMasterPassword {
    fn name(&self) -> &'static str {
        "fetch-master-password"
    }

    fn run(&self, ctx: &mut DatabaseContext<'a>) -> Result<()> {
        let name = ctx.master_password_parameter()?;
        ctx.password = Some(ctx.store.get(&name)?);
        Ok(())
    }
}

/// Store a database master password for a service and environment.
///
/// Resolves the service context first; the store is not touched unless
/// resolution succeeds.
///
/// # Errors
///
/// Returns `ValidationError::EmptyPassword` for an empty value, a
/// `ContextError` if the service or environment cannot be resolved,
/// and a `StoreError` if the write fails.
pub fn set_password(
    config: &GantryConfig,
    store: &dyn ParameterStore,
    environment: &str,
    service: Option<&str>,
    password: Zeroizing<String>,
) -> Result<()> {
    validate_password(&password)?;

    let mut ctx = DatabaseContext::new(config, store, environment);
    Pipeline::new()
        .then(ResolveService {
            requested: service.map(str::to_string),
        })
        .then(PutMasterPassword { value: password })
        .run(&mut ctx)
}

/// Fetch the database master password for a service and environment.
///
/// # Errors
///
/// Returns a `ContextError` if the service or environment cannot be
/// resolved, `StoreError::NotFound` if no password has been stored,
/// and another `StoreError` if the read fails. A read failure is never
/// turned into an empty or placeholder value.
pub fn get_password(
    config: &GantryConfig,
    store: &dyn ParameterStore,
    environment: &str,
    service: Option<&str>,
) -> Result<Zeroizing<String>> {
    let mut ctx = DatabaseContext::new(config, store, environment);
    Pipeline::new()
        .then(ResolveService {
            requested: service.map(str::to_string),
        })
        .then(FetchMasterPassword)
        .run(&mut ctx)?;

    let name = ctx.master_password_parameter()?;
    match ctx.password {
        Some(value) => Ok(value),
        None => Err(StoreError::NoValue(name.to_string()).into()),
    }
}
