//! Gantry - deployment configuration and database secrets for services.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize a project
//! │   ├── db            # Database master password commands
//! │   ├── status        # Project overview
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .gantry.toml management and context resolution
//!     ├── naming        # Stack and parameter name derivation
//!     ├── pipeline      # Sequential fail-fast step execution
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── local     # File-backed store
//!     │   └── ssm       # AWS SSM store (feature "aws")
//!     ├── validation    # Name and password legality checks
//!     └── workflow/     # Operations composed from pipeline steps
//!         └── database  # Master password set/get
//! ```
//!
//! # Features
//!
//! - Deterministic stack-derived parameter names
//! - Fail-fast pipelines with explicit step structs
//! - Local file and AWS SSM parameter store backends
//! - Per-service, per-environment database master passwords

pub mod cli;
pub mod core;
pub mod error;
