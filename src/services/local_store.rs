// HomeGrid local store
// Persists the authoritative collection as a JSON document at the
// platform-specific config path. This is the durable copy every mutation is
// written to; the remote snapshot store only mirrors it.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::services::migrator;
use crate::types::errors::StorageError;
use crate::types::page::Page;

/// File name of the persisted collection under the config directory.
pub const PAGED_DATA_FILE: &str = "paged_data.json";

/// Trait defining the local durable store interface.
pub trait LocalStoreTrait {
    /// Loads the stored collection. `Ok(None)` means absent: no file yet,
    /// unparseable content, or a file holding no pages — all of which let
    /// the caller fall through to the next data source.
    fn load(&self) -> Result<Option<Vec<Page>>, StorageError>;
    fn save(&self, pages: &[Page]) -> Result<(), StorageError>;
    fn data_path(&self) -> &str;
}

/// Local store backed by a JSON file on disk.
pub struct LocalStore {
    data_path: String,
}

impl LocalStore {
    /// Creates a new `LocalStore`.
    ///
    /// If `path_override` is `Some`, uses that path for the data file.
    /// Otherwise, uses the platform-specific config directory with
    /// `paged_data.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let data_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join(PAGED_DATA_FILE)
                .to_string_lossy()
                .to_string(),
        };
        Self { data_path }
    }
}

impl LocalStoreTrait for LocalStore {
    fn load(&self) -> Result<Option<Vec<Page>>, StorageError> {
        let path = Path::new(&self.data_path);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::IoError(format!("Failed to read data file: {}", e)))?;

        // Unparseable content degrades to absent rather than failing the
        // load chain; the migrator then absorbs any legacy shape.
        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(_) => return Ok(None),
        };

        let pages = migrator::migrate(&value);
        if pages.is_empty() {
            return Ok(None);
        }
        Ok(Some(pages))
    }

    /// Writes the collection as pretty-printed JSON, creating parent
    /// directories if they don't exist.
    fn save(&self, pages: &[Page]) -> Result<(), StorageError> {
        let path = Path::new(&self.data_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create data directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(pages).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize pages: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| StorageError::IoError(format!("Failed to write data file: {}", e)))?;

        Ok(())
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }
}
