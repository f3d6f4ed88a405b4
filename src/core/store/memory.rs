//! In-memory parameter store.
//!
//! Backs tests that need to observe store traffic without touching the
//! filesystem. Counts get/set calls so callers can assert how often a
//! workflow reached the store.

use std::collections::BTreeMap;
use std::sync::Mutex;
use zeroize::Zeroizing;

use crate::core::naming::ParameterName;
use crate::core::store::ParameterStore;
use crate::error::{Result, StoreError};

/// Parameter store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    values: BTreeMap<String, String>,
    gets: usize,
    sets: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls made so far, including misses.
    pub fn get_calls(&self) -> usize {
        self.lock().gets
    }

    /// Number of `set` calls made so far.
    pub fn set_calls(&self) -> usize {
        self.lock().sets
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ParameterStore for MemoryStore {
    fn get(&self, name: &ParameterName) -> Result<Zeroizing<String>> {
        let mut inner = self.lock();
        inner.gets += 1;
        inner
            .values
            .get(name.as_str())
            .map(|value| Zeroizing::new(value.clone()))
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn set(&self, name: &ParameterName, value: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.sets += 1;
        inner.values.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
