use crate::error::{CatalogError, Result};
use crate::store::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_CHARS: usize = 40;

/// Configuration for prodcat, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name of the storage slot holding the product list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How many characters of the description `list` shows
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_storage_key() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "storage-key" => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                if !valid {
                    return Err(format!(
                        "Invalid storage-key {:?}: use letters, digits, '-' or '_'",
                        value
                    ));
                }
                self.storage_key = value.to_string();
            }
            "preview-chars" => {
                self.preview_chars = value
                    .parse()
                    .map_err(|_| format!("Invalid preview-chars {:?}: expected a number", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.storage_key, "products");
        assert_eq!(config.preview_chars, 40);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = CatalogConfig::load(temp.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = CatalogConfig::default();
        config.set("preview-chars", "12").unwrap();
        config.save(&dir).unwrap();

        let loaded = CatalogConfig::load(&dir).unwrap();
        assert_eq!(loaded.preview_chars, 12);
        assert_eq!(loaded.storage_key, "products");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"preview_chars": 5}"#).unwrap();

        let loaded = CatalogConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.preview_chars, 5);
        assert_eq!(loaded.storage_key, "products");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = CatalogConfig::default();
        config.set("storage-key", "shop_items").unwrap();
        assert_eq!(config.get("storage-key").as_deref(), Some("shop_items"));
        assert!(config.set("storage-key", "../escape").is_err());
        assert!(config.set("preview-chars", "many").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.get("colour"), None);
    }
}
