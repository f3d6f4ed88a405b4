//! Constants used throughout gantry.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.gantry.toml).
pub const CONFIG_FILE: &str = ".gantry.toml";

/// Store directory relative to HOME (~/.gantry).
pub const STORE_DIR: &str = ".gantry";

/// Local parameter store document inside the store directory.
pub const PARAMETERS_FILE: &str = "parameters.toml";

/// Namespace used when `gantry init` is not given one.
pub const DEFAULT_NAMESPACE: &str = "gantry";

/// Environments written by `gantry init` when none are given.
pub const DEFAULT_ENVIRONMENTS: &[&str] = &["dev", "prod"];

/// Database engine written by `gantry init` when none is given.
pub const DEFAULT_ENGINE: &str = "aurora";

/// Store backend tokens accepted in configuration.
pub const STORE_LOCAL: &str = "local";
pub const STORE_SSM: &str = "ssm";
