//! Persistence gateway for HomeGrid.
//!
//! Front door between the core and its data sources. Loading walks an
//! explicit ordered chain — authenticated remote snapshot, local file,
//! anonymous remote default — and falls back to the built-in starter
//! collection, so a load can never fail. Saving writes the local store and
//! best-effort mirrors to the remote while a session is active; a remote
//! failure is reported, never fatal (last-writer-wins).

use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::services::migrator;
use crate::services::remote_store::RemoteSnapshotStore;
use crate::types::errors::{StorageError, SyncError};
use crate::types::page::{Bookmark, Page};

/// Suggested file name for exported snapshots.
pub const EXPORT_FILE_NAME: &str = "homepage_config.json";

/// One step of the load chain, tried in order; each either yields a
/// collection or reports absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    RemoteUser,
    LocalFile,
    RemoteDefault,
}

const LOAD_CHAIN: [Source; 3] = [Source::RemoteUser, Source::LocalFile, Source::RemoteDefault];

/// Outcome of a save: the local write succeeded (or the call returned an
/// error); the remote mirror either happened, failed non-fatally, or was
/// skipped for lack of a session.
#[derive(Debug)]
pub struct SaveReport {
    /// Whether the collection was mirrored to the remote store.
    pub synced: bool,
    /// The remote error when mirroring was attempted and failed.
    pub sync_error: Option<SyncError>,
}

/// Gateway over the local durable store and the optional remote mirror.
pub struct PersistenceGateway {
    local: LocalStore,
    remote: Option<Box<dyn RemoteSnapshotStore>>,
    session: Option<String>,
}

impl PersistenceGateway {
    pub fn new(local: LocalStore, remote: Option<Box<dyn RemoteSnapshotStore>>) -> Self {
        Self {
            local,
            remote,
            session: None,
        }
    }

    /// Activates a session; subsequent loads prefer the user's remote
    /// snapshot and saves mirror to it.
    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        self.session = Some(user_id.into());
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Loads the collection from the first source that has one, falling
    /// back to the built-in starter. The result always holds at least one
    /// page and every bookmark carries an ID.
    pub fn load(&self) -> Vec<Page> {
        for source in &LOAD_CHAIN {
            if let Some(pages) = self.try_source(*source) {
                return pages;
            }
        }
        Self::default_pages()
    }

    /// Tries a single source. Errors count as absence: a failed source
    /// never aborts the chain.
    fn try_source(&self, source: Source) -> Option<Vec<Page>> {
        match source {
            Source::RemoteUser => {
                let user = self.session.as_deref()?;
                let remote = self.remote.as_deref()?;
                remote.fetch_snapshot(user).ok().flatten()
            }
            Source::LocalFile => self.local.load().ok().flatten(),
            Source::RemoteDefault => {
                let remote = self.remote.as_deref()?;
                remote.fetch_default().ok().flatten()
            }
        }
    }

    /// Writes the collection to the local store, then mirrors it to the
    /// remote when a session is active. The local write error is the only
    /// fatal one; the mirror result is carried in the report.
    pub fn save(&self, pages: &[Page]) -> Result<SaveReport, StorageError> {
        self.local.save(pages)?;

        let mirror = self
            .session
            .as_deref()
            .zip(self.remote.as_deref())
            .map(|(user, remote)| remote.push_snapshot(user, pages));

        Ok(match mirror {
            Some(Ok(())) => SaveReport {
                synced: true,
                sync_error: None,
            },
            Some(Err(e)) => SaveReport {
                synced: false,
                sync_error: Some(e),
            },
            None => SaveReport {
                synced: false,
                sync_error: None,
            },
        })
    }

    /// Parses raw JSON text, migrates it to the current model and backfills
    /// IDs. A parse error is returned without touching anything, so the
    /// caller's collection stays as it was. The result always holds at
    /// least one page.
    pub fn import_snapshot(&self, raw: &str) -> Result<Vec<Page>, StorageError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse import: {}", e))
        })?;

        let mut pages = migrator::migrate(&value);
        if pages.is_empty() {
            pages.push(Page::new(migrator::DEFAULT_PAGE_TITLE));
        }
        Ok(pages)
    }

    /// Serializes the collection verbatim, pretty-printed, for download as
    /// `EXPORT_FILE_NAME`.
    pub fn export_snapshot(&self, pages: &[Page]) -> Result<String, StorageError> {
        serde_json::to_string_pretty(pages).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize export: {}", e))
        })
    }

    /// Built-in two-page starter collection used when every source is
    /// absent (first run, offline, nothing imported yet).
    pub fn default_pages() -> Vec<Page> {
        let starter = |title: &str, url: &str| Bookmark {
            title: title.to_string(),
            url: url.to_string(),
            ..Bookmark::default()
        };

        let mut pages = vec![
            Page {
                title: "Home".to_string(),
                bookmarks: vec![
                    starter("Search", "https://www.google.com"),
                    starter("Mail", "https://mail.google.com"),
                    starter("Video", "https://www.youtube.com"),
                    starter("Wiki", "https://www.wikipedia.org"),
                ],
            },
            Page {
                title: "Work".to_string(),
                bookmarks: vec![
                    starter("Code", "https://github.com"),
                    starter("Docs", "https://docs.google.com"),
                ],
            },
        ];
        migrator::backfill_ids(&mut pages);
        pages
    }
}
