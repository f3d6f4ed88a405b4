//! Command-line interface.

pub mod completions;
pub mod db;
pub mod init;
pub mod output;
pub mod status;

use clap::{Parser, Subcommand};

/// Gantry - deployment configuration and database secrets for services.
#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Deployment configuration and database secrets for services",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a gantry project in the current directory
    Init {
        /// Deployment namespace prefixed to every stack name
        #[arg(short, long)]
        namespace: Option<String>,

        /// First service to register (defaults to the directory name)
        #[arg(short, long)]
        service: Option<String>,

        /// Comma-separated environments (e.g. dev,staging,prod)
        #[arg(short, long)]
        environments: Option<String>,

        /// Database engine for the first service
        #[arg(long)]
        engine: Option<String>,
    },

    /// Manage database master passwords
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show quick status overview
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
pub enum DbAction {
    /// Set the database master password for an environment
    SetPassword {
        /// Target environment
        #[arg(short, long, env = "GANTRY_ENVIRONMENT")]
        environment: String,

        /// Service to act on (defaults to the configured default service)
        #[arg(short, long)]
        service: Option<String>,

        /// Password value; prompted for when omitted
        value: Option<String>,
    },

    /// Print the database master password for an environment
    GetPassword {
        /// Target environment
        #[arg(short, long, env = "GANTRY_ENVIRONMENT")]
        environment: String,

        /// Service to act on (defaults to the configured default service)
        #[arg(short, long)]
        service: Option<String>,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            namespace,
            service,
            environments,
            engine,
        } => init::execute(namespace, service, environments, engine),
        Db { action } => match action {
            DbAction::SetPassword {
                environment,
                service,
                value,
            } => db::set_password(&environment, service.as_deref(), value),
            DbAction::GetPassword {
                environment,
                service,
            } => db::get_password(&environment, service.as_deref()),
        },
        Status { json } => status::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
