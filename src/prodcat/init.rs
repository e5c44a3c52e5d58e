use crate::api::{CatalogApi, CatalogPaths};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory (useful for tests and portable setups).
pub const HOME_ENV: &str = "PRODCAT_HOME";

pub struct CatalogContext {
    pub api: CatalogApi<FsBackend>,
    pub config: CatalogConfig,
}

/// Picks the data directory: `$PRODCAT_HOME` if set and non-empty, otherwise the
/// platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "prodcat", "prodcat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Store("Could not determine data directory".to_string()))
}

/// Loads config and the product list from `data_dir`.
pub fn initialize(data_dir: PathBuf) -> Result<CatalogContext> {
    let config = CatalogConfig::load(&data_dir)?;
    tracing::debug!(
        data_dir = %data_dir.display(),
        slot = %config.storage_key,
        "initializing catalog"
    );

    let backend = FsBackend::new(data_dir.clone());
    let store = RecordStore::open(backend, config.storage_key.clone())?;
    let api = CatalogApi::new(store, CatalogPaths { data_dir });

    Ok(CatalogContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_starts_from_seed() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().to_path_buf()).unwrap();
        assert_eq!(ctx.api.products().len(), 2);
        assert_eq!(ctx.config, CatalogConfig::default());
        assert!(!temp.path().join("products.json").exists());
    }

    #[test]
    fn configured_slot_is_used() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"storage_key": "shop"}"#,
        )
        .unwrap();
        fs::write(temp.path().join("shop.json"), "[]").unwrap();

        let ctx = initialize(temp.path().to_path_buf()).unwrap();
        assert!(ctx.api.products().is_empty());
        assert_eq!(
            ctx.api.storage_path().unwrap(),
            temp.path().join("shop.json")
        );
    }

    #[test]
    fn broken_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{").unwrap();
        assert!(matches!(
            initialize(temp.path().to_path_buf()),
            Err(CatalogError::Serialization(_))
        ));
    }
}
