//! Parameter store operations.
//!
//! Provides the storage abstraction workflows write secrets through,
//! with implementations for different backends.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module and wire it into `open_default`
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl ParameterStore for Vault {
//!     fn get(&self, name: &ParameterName) -> Result<Zeroizing<String>> {
//!         // Read from vault
//!     }
//!     fn set(&self, name: &ParameterName, value: &str) -> Result<()> {
//!         // Write to vault
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::core::naming::ParameterName;
use crate::error::Result;

mod backend;
mod local;
mod memory;

#[cfg(feature = "aws")]
pub mod ssm;

pub use backend::open_default;
pub use local::LocalStore;
pub use memory::MemoryStore;

#[cfg(feature = "aws")]
pub use ssm::SsmStore;

/// Parameter storage trait.
///
/// Abstracts reading and writing named string parameters to support
/// multiple backends (local file, AWS SSM, vault, etc.).
pub trait ParameterStore {
    /// Read the value stored under a parameter name.
    ///
    /// # Arguments
    ///
    /// * `name` - Fully derived parameter name
    ///
    /// # Returns
    ///
    /// The stored value. Secrets stay wrapped in `Zeroizing` so they
    /// are wiped when the caller drops them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing is stored under the
    /// name, or another `StoreError` if the backend cannot be read.
    fn get(&self, name: &ParameterName) -> Result<Zeroizing<String>>;

    /// Write a value under a parameter name, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `name` - Fully derived parameter name
    /// * `value` - Value to store
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, name: &ParameterName, value: &str) -> Result<()>;
}
