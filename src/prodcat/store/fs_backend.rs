use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn slot_filename(key: &str) -> Result<String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CatalogError::Store(format!("Invalid slot name: {:?}", key)));
        }
        Ok(format!("{}{}", key, SLOT_EXT))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.root.join(Self::slot_filename(key)?);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read slot");
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let target_path = self.root.join(Self::slot_filename(key)?);
        self.ensure_dir(&self.root)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(CatalogError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::Io(e));
        }

        tracing::debug!(path = %target_path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(Self::slot_filename(key)?))
    }
}
