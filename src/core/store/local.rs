//! Local file-backed parameter store.
//!
//! Stores parameters in a TOML document under the user's home
//! directory (`~/.gantry/parameters.toml`). Suited to development
//! setups that have no AWS account wired up; the document keeps a
//! version counter and modification trail per parameter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use zeroize::Zeroizing;

use crate::core::constants::{PARAMETERS_FILE, STORE_DIR};
use crate::core::naming::ParameterName;
use crate::core::store::ParameterStore;
use crate::error::{Result, StoreError};

/// Parameter store backed by a TOML file.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    parameters: BTreeMap<String, ParameterRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ParameterRecord {
    value: String,
    version: u64,
    modified_at: String,
    modified_by: String,
}

impl LocalStore {
    /// Open the store at its default location under the home directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the home directory cannot
    /// be determined.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            StoreError::Unavailable("cannot determine home directory".to_string())
        })?;
        Ok(Self::at(home.join(STORE_DIR).join(PARAMETERS_FILE)))
    }

    /// Open a store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_document(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        toml::from_str(&contents).map_err(|e| {
            StoreError::Corrupted(format!("{}: {e}", self.path.display())).into()
        })
    }

    fn store_document(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(document)?;
        std::fs::write(&self.path, contents)?;

        // Parameter values are secrets; keep the file owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

impl ParameterStore for LocalStore {
    fn get(&self, name: &ParameterName) -> Result<Zeroizing<String>> {
        let document = self.load_document()?;
        document
            .parameters
            .get(name.as_str())
            .map(|record| Zeroizing::new(record.value.clone()))
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn set(&self, name: &ParameterName, value: &str) -> Result<()> {
        let mut document = self.load_document()?;
        let version = document
            .parameters
            .get(name.as_str())
            .map(|record| record.version + 1)
            .unwrap_or(1);

        document.parameters.insert(
            name.to_string(),
            ParameterRecord {
                value: value.to_string(),
                version,
                modified_at: chrono::Utc::now().to_rfc3339(),
                modified_by: whoami::username(),
            },
        );
        self.store_document(&document)
    }
}
