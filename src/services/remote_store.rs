//! Remote snapshot store for HomeGrid.
//!
//! While a session is active, the collection is mirrored to a per-user
//! snapshot document; an anonymous public default snapshot seeds first-run
//! setups. Access goes through `RemoteSnapshotStore` so the gateway and the
//! tests never depend on the network.

use crate::services::migrator;
use crate::types::errors::SyncError;
use crate::types::page::Page;

/// Trait defining the remote snapshot store operations.
pub trait RemoteSnapshotStore {
    /// Fetches the snapshot stored for the given user. `Ok(None)` means no
    /// snapshot exists yet.
    fn fetch_snapshot(&self, user_id: &str) -> Result<Option<Vec<Page>>, SyncError>;
    /// Overwrites the user's snapshot with the given collection
    /// (last-writer-wins, no versioning).
    fn push_snapshot(&self, user_id: &str, pages: &[Page]) -> Result<(), SyncError>;
    /// Fetches the public default snapshot, available without a session.
    fn fetch_default(&self) -> Result<Option<Vec<Page>>, SyncError>;
}

/// Snapshot store client over HTTP.
///
/// Endpoints: `GET`/`PUT {base}/snapshots/{user_id}` and `GET {base}/default`.
/// A 404 means absent. Response bodies are run through the schema migrator,
/// so the remote may hold legacy shapes too.
pub struct HttpSnapshotStore {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSnapshotStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get_pages(&self, url: &str) -> Result<Option<Vec<Page>>, SyncError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SyncError::ApiError(format!(
                "Snapshot fetch failed with status {}",
                response.status()
            )));
        }

        let value: serde_json::Value = response
            .json()
            .map_err(|e| SyncError::ApiError(e.to_string()))?;

        let pages = migrator::migrate(&value);
        if pages.is_empty() {
            return Ok(None);
        }
        Ok(Some(pages))
    }
}

impl RemoteSnapshotStore for HttpSnapshotStore {
    fn fetch_snapshot(&self, user_id: &str) -> Result<Option<Vec<Page>>, SyncError> {
        self.get_pages(&self.endpoint(&format!("snapshots/{}", user_id)))
    }

    fn push_snapshot(&self, user_id: &str, pages: &[Page]) -> Result<(), SyncError> {
        let response = self
            .client
            .put(self.endpoint(&format!("snapshots/{}", user_id)))
            .json(pages)
            .send()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SyncError::ApiError(format!(
                "Snapshot push failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn fetch_default(&self) -> Result<Option<Vec<Page>>, SyncError> {
        self.get_pages(&self.endpoint("default"))
    }
}
