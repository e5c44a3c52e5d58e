//! # Storage Layer
//!
//! Products are persisted in a key-value slot store. The whole product list lives in a
//! single slot and is rewritten on every change; there is no partial update.
//!
//! Two pieces cooperate here:
//!
//! - [`backend::StorageBackend`] is the raw slot I/O ("how"): read a slot, replace a slot.
//! - [`record_store::RecordStore`] owns the in-memory list ("what"): it loads the slot
//!   once, falls back to seed data when the slot is missing or unreadable, and writes
//!   the full list back through the backend on every [`RecordStore::replace_all`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per slot inside a data directory, written
//!   atomically (temp file, then rename).
//! - [`mem_backend::MemBackend`]: in-memory slots for tests, with write-failure
//!   simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── products.json       # The product slot (JSON array, camelCase fields)
//! └── config.json         # Configuration
//! ```
//!
//! ## Failure Model
//!
//! A slot that is absent or does not parse is not an error: the store starts from the
//! seed products and the next write replaces the bad slot. Failing to *write* is an
//! error and is returned to the caller untouched. Nothing is retried.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::RecordStore;

/// Slot holding the product list unless configured otherwise.
pub const DEFAULT_SLOT: &str = "products";
