use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (seed fallback, ordering, id invariants).
pub trait StorageBackend {
    /// Read the raw value of a slot.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot.
    /// MUST be atomic: readers see either the old or the new value, never a mix.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Where the slot lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}
