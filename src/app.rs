//! App core for HomeGrid.
//!
//! Central struct owning the authoritative page store and the persistence
//! gateway, plus the two view knobs the paginator needs: the active chunk
//! size and whether edit mode is on. Every mutation flows through here so
//! that the persist step is never forgotten; the embedding shell re-derives
//! the visual pages afterwards via `visual_pages()`.

use crate::managers::page_store::{PageStore, PageStoreTrait};
use crate::managers::reorder;
use crate::services::gateway::PersistenceGateway;
use crate::services::paginator;
use crate::types::errors::{BookmarkError, PageError, StorageError};
use crate::types::page::{BookmarkDraft, EditTarget, Page, VisualGroup, VisualPage};

/// Central application struct for the start-page core.
pub struct App {
    store: PageStore,
    gateway: PersistenceGateway,
    chunk_size: usize,
    editing: bool,
    last_persist_error: Option<String>,
}

impl App {
    /// Creates a new App with a single empty page. Call `startup()` to run
    /// the load chain.
    pub fn new(gateway: PersistenceGateway) -> Self {
        Self {
            store: PageStore::new(),
            gateway,
            chunk_size: paginator::WIDE_CHUNK_SIZE,
            editing: false,
            last_persist_error: None,
        }
    }

    /// Startup sequence: walk the gateway load chain and adopt the result
    /// as the authoritative collection.
    pub fn startup(&mut self) {
        let pages = self.gateway.load();
        self.store.replace(pages);
    }

    /// Derives the visual pages for the current collection, chunk size and
    /// edit mode. Safe to call on every render.
    pub fn visual_pages(&self) -> Vec<VisualPage> {
        paginator::visual_pages(self.store.pages(), self.chunk_size, self.editing)
    }

    pub fn pages(&self) -> &[Page] {
        self.store.pages()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Re-keys the chunk size from the viewport width in pixels.
    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.chunk_size = paginator::chunk_size_for_width(width_px);
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Toggles edit mode. Leaving edit mode closes any open edit form.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        if !editing {
            self.store.close_editor();
        }
    }

    pub fn edit_target(&self) -> Option<EditTarget> {
        self.store.edit_target()
    }

    pub fn open_editor(&mut self, target: EditTarget) {
        self.store.open_editor(target);
    }

    pub fn close_editor(&mut self) {
        self.store.close_editor();
    }

    pub fn current_page(&self) -> usize {
        self.store.current_page()
    }

    pub fn set_current_page(&mut self, index: usize) {
        self.store.set_current_page(index);
    }

    /// The error message of the most recent failed persist, if any. Persist
    /// failures never abort a mutation; the shell surfaces them as a toast.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Saves the collection through the gateway, recording any failure
    /// without propagating it.
    fn persist(&mut self) {
        self.last_persist_error = match self.gateway.save(self.store.pages()) {
            Ok(report) => report.sync_error.map(|e| e.to_string()),
            Err(e) => Some(e.to_string()),
        };
    }

    // --- Mutation operations (mutate, then persist) ---

    pub fn add_bookmark(
        &mut self,
        page_index: usize,
        draft: BookmarkDraft,
    ) -> Result<String, BookmarkError> {
        let id = self.store.add_bookmark(page_index, draft)?;
        self.persist();
        Ok(id)
    }

    pub fn update_bookmark(
        &mut self,
        page_index: usize,
        bookmark_index: usize,
        draft: BookmarkDraft,
        target_page: Option<usize>,
    ) -> Result<(), BookmarkError> {
        self.store
            .update_bookmark(page_index, bookmark_index, draft, target_page)?;
        self.persist();
        Ok(())
    }

    pub fn delete_bookmark(&mut self, id: &str) -> bool {
        let removed = self.store.delete_bookmark(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn add_page(&mut self) -> usize {
        let index = self.store.add_page();
        self.persist();
        index
    }

    pub fn delete_page(&mut self, page_index: usize) -> Result<(), PageError> {
        self.store.delete_page(page_index)?;
        self.persist();
        Ok(())
    }

    pub fn rename_page(&mut self, page_index: usize, title: &str) -> Result<(), PageError> {
        self.store.rename_page(page_index, title)?;
        self.persist();
        Ok(())
    }

    pub fn reorder_pages(&mut self, from_index: usize, to_index: usize) -> Result<(), PageError> {
        self.store.reorder_pages(from_index, to_index)?;
        self.persist();
        Ok(())
    }

    /// Rebuilds the authoritative collection from the renderer-emitted
    /// post-drag visual order, then persists it.
    pub fn apply_visual_order(&mut self, arrangement: &[VisualGroup]) {
        let rebuilt = reorder::reconcile(self.store.pages(), arrangement);
        self.store.replace(rebuilt);
        self.persist();
    }

    // --- Sync session ---

    /// Activates a session and re-runs the load chain, which now prefers
    /// the user's remote snapshot.
    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        self.gateway.sign_in(user_id);
        let pages = self.gateway.load();
        self.store.replace(pages);
    }

    pub fn sign_out(&mut self) {
        self.gateway.sign_out();
    }

    pub fn is_authenticated(&self) -> bool {
        self.gateway.is_authenticated()
    }

    // --- Import / export ---

    /// Replaces the collection with an imported snapshot. On parse failure
    /// the existing collection is left untouched.
    pub fn import_snapshot(&mut self, raw: &str) -> Result<(), StorageError> {
        let pages = self.gateway.import_snapshot(raw)?;
        self.store.replace(pages);
        self.persist();
        Ok(())
    }

    /// Serializes the current collection for file download.
    pub fn export_snapshot(&self) -> Result<String, StorageError> {
        self.gateway.export_snapshot(self.store.pages())
    }
}
