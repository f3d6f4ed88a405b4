//! Database secret commands.
//!
//! `set-password` and `get-password` wrap the database workflows. The
//! password value itself never goes through the logger; `get-password`
//! prints it bare on stdout so it can be piped, while status output
//! stays on stderr.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::GantryConfig;
use crate::core::store;
use crate::core::workflow::database;
use crate::error::Result;

/// Set the master password for a service database.
pub fn set_password(environment: &str, service: Option<&str>, value: Option<String>) -> Result<()> {
    let config = GantryConfig::load()?;
    let store = store::open_default(&config)?;

    let password = match value {
        Some(v) => Zeroizing::new(v),
        None => read_password()?,
    };

    info!(environment, "setting database master password");
    database::set_password(&config, store.as_ref(), environment, service, password)?;

    let resolved = config.resolve_service(service)?;
    output::success(&format!(
        "stored master password for {} in {}",
        resolved.name(),
        environment
    ));
    Ok(())
}

/// Print the master password for a service database.
pub fn get_password(environment: &str, service: Option<&str>) -> Result<()> {
    let config = GantryConfig::load()?;
    let store = store::open_default(&config)?;

    let password = database::get_password(&config, store.as_ref(), environment, service)?;

    // Bare value on stdout so `gantry db get-password | psql` works.
    println!("{}", password.as_str());
    Ok(())
}

fn read_password() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        let value = dialoguer::Password::new()
            .with_prompt("Master password")
            .with_confirmation("Confirm password", "passwords do not match")
            .interact()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        Ok(Zeroizing::new(value))
    } else {
        // Piped input: first line is the password.
        let mut value = String::new();
        std::io::stdin().read_line(&mut value)?;
        while value.ends_with('\n') || value.ends_with('\r') {
            value.pop();
        }
        Ok(Zeroizing::new(value))
    }
}
