//! Error types for gantry operations.
//!
//! Errors are grouped by the stage that produced them: configuration,
//! context resolution, or the parameter store. The variant a caller
//! receives identifies which stage of a workflow failed.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: .gantry.toml not found")]
    NotInitialized,

    #[error("already initialized: .gantry.toml exists")]
    AlreadyInitialized,

    #[error("unsupported store backend: {0} (supported: local, ssm)")]
    UnsupportedStore(String),

    #[error("{0} store support not compiled. Rebuild with: cargo install gantry --features aws")]
    StoreNotCompiled(&'static str),
}

/// Service or environment context could not be resolved.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("no service specified: pass --service or set default_service in .gantry.toml")]
    ServiceRequired,

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("service has no database configured: {0}")]
    NoDatabase(String),

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

impl ContextError {
    /// Unknown-service error listing the services the config does know.
    pub fn unknown_service(name: &str, known: &[String]) -> Self {
        if known.is_empty() {
            Self::UnknownService(format!("{} (no services configured)", name))
        } else {
            Self::UnknownService(format!("{} (known: {})", name, known.join(", ")))
        }
    }

    /// Unknown-environment error listing the configured environments.
    pub fn unknown_environment(name: &str, known: &[String]) -> Self {
        if known.is_empty() {
            Self::UnknownEnvironment(format!("{} (no environments configured)", name))
        } else {
            Self::UnknownEnvironment(format!("{} (known: {})", name, known.join(", ")))
        }
    }
}

/// Parameter store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("parameter store read failed: {0}")]
    ReadFailed(String),

    #[error("parameter store write failed: {0}")]
    WriteFailed(String),

    #[error("parameter store corrupted: {0}")]
    Corrupted(String),

    #[error("parameter store unavailable: {0}")]
    Unavailable(String),

    #[error("parameter read produced no value: {0}")]
    NoValue(String),
}

/// Input legality problems.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} name cannot be empty")]
    EmptyName { field: &'static str },

    #[error("invalid {field} name: {name} ({reason})")]
    InvalidName {
        field: &'static str,
        name: String,
        reason: String,
    },

    #[error("password cannot be empty")]
    EmptyPassword,
}

pub type Result<T> = std::result::Result<T, Error>;
