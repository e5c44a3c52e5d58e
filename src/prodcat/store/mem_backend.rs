use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded,
/// which lets the `StorageBackend` trait take `&self` for writes.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `key` slot already holds `value`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}
