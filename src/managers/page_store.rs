//! Page store for HomeGrid.
//!
//! Owns the authoritative collection — the single source-of-truth ordered
//! list of pages and their bookmarks — plus the current display page index
//! and the transient edit cursor. All mutation goes through this API; the
//! caller persists and re-derives the visual pages after every change.

use crate::services::ids;
use crate::services::migrator::DEFAULT_PAGE_TITLE;
use crate::types::errors::{BookmarkError, PageError};
use crate::types::page::{Bookmark, BookmarkDraft, EditTarget, Page};

/// Trait defining the mutation interface over the authoritative collection.
pub trait PageStoreTrait {
    fn add_bookmark(
        &mut self,
        page_index: usize,
        draft: BookmarkDraft,
    ) -> Result<String, BookmarkError>;
    /// Updates the bookmark at the given position, preserving its ID. When
    /// `target_page` names a different page, the bookmark is removed from
    /// its source page and appended to the destination page.
    fn update_bookmark(
        &mut self,
        page_index: usize,
        bookmark_index: usize,
        draft: BookmarkDraft,
        target_page: Option<usize>,
    ) -> Result<(), BookmarkError>;
    /// Removes the bookmark with the given ID wherever it lives. Returns
    /// whether a bookmark was removed; an unknown ID is a silent no-op.
    fn delete_bookmark(&mut self, id: &str) -> bool;
    /// Appends a new empty page with a placeholder title. Returns its index.
    fn add_page(&mut self) -> usize;
    fn delete_page(&mut self, page_index: usize) -> Result<(), PageError>;
    fn rename_page(&mut self, page_index: usize, title: &str) -> Result<(), PageError>;
    fn reorder_pages(&mut self, from_index: usize, to_index: usize) -> Result<(), PageError>;
    fn pages(&self) -> &[Page];
    /// Replaces the whole collection (load, import, drag reconciliation).
    fn replace(&mut self, pages: Vec<Page>);
    fn current_page(&self) -> usize;
    fn set_current_page(&mut self, index: usize);
    fn edit_target(&self) -> Option<EditTarget>;
    fn open_editor(&mut self, target: EditTarget);
    fn close_editor(&mut self);
}

/// In-memory authoritative collection for the start-page grid.
pub struct PageStore {
    pages: Vec<Page>,
    current_page: usize,
    edit_target: Option<EditTarget>,
}

impl PageStore {
    /// Creates a store holding a single empty placeholder page.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new(DEFAULT_PAGE_TITLE)],
            current_page: 0,
            edit_target: None,
        }
    }

    /// Validates a draft and produces the normalized (title, url) pair.
    fn validate_draft(draft: &BookmarkDraft) -> Result<(String, String), BookmarkError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BookmarkError::EmptyTitle);
        }
        let url = draft.url.trim();
        if url.is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }
        Ok((title.to_string(), normalize_url(url)))
    }

    /// Keeps `current_page` within the collection bounds.
    fn clamp_current_page(&mut self) {
        let last = self.pages.len().saturating_sub(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepends `https://` when the URL carries no scheme.
pub fn normalize_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

impl PageStoreTrait for PageStore {
    /// Validates and appends a new bookmark to the target page, creating
    /// placeholder pages up to `page_index` when it refers to a slot that
    /// does not exist yet. Returns the assigned bookmark ID.
    fn add_bookmark(
        &mut self,
        page_index: usize,
        draft: BookmarkDraft,
    ) -> Result<String, BookmarkError> {
        let (title, url) = Self::validate_draft(&draft)?;

        while self.pages.len() <= page_index {
            self.pages.push(Page::new(DEFAULT_PAGE_TITLE));
        }

        let id = ids::new_id();
        self.pages[page_index].bookmarks.push(Bookmark {
            id: id.clone(),
            title,
            url,
            icon: draft.icon,
            icon_type: draft.icon_type,
            style: draft.style,
        });
        Ok(id)
    }

    fn update_bookmark(
        &mut self,
        page_index: usize,
        bookmark_index: usize,
        draft: BookmarkDraft,
        target_page: Option<usize>,
    ) -> Result<(), BookmarkError> {
        let (title, url) = Self::validate_draft(&draft)?;

        let exists = self
            .pages
            .get(page_index)
            .is_some_and(|p| bookmark_index < p.bookmarks.len());
        if !exists {
            return Err(BookmarkError::InvalidPosition {
                page_index,
                bookmark_index,
            });
        }

        let destination = target_page.unwrap_or(page_index);
        if destination != page_index && destination >= self.pages.len() {
            return Err(BookmarkError::InvalidPosition {
                page_index: destination,
                bookmark_index: 0,
            });
        }

        {
            let bookmark = &mut self.pages[page_index].bookmarks[bookmark_index];
            bookmark.title = title;
            bookmark.url = url;
            bookmark.icon = draft.icon;
            bookmark.icon_type = draft.icon_type;
            bookmark.style = draft.style;
        }

        // Moving across pages appends at the end of the destination;
        // relative order is not preserved across pages.
        if destination != page_index {
            let moved = self.pages[page_index].bookmarks.remove(bookmark_index);
            self.pages[destination].bookmarks.push(moved);
        }

        Ok(())
    }

    fn delete_bookmark(&mut self, id: &str) -> bool {
        for page in self.pages.iter_mut() {
            if let Some(index) = page.bookmarks.iter().position(|b| b.id == id) {
                page.bookmarks.remove(index);
                return true;
            }
        }
        false
    }

    fn add_page(&mut self) -> usize {
        self.pages.push(Page::new(DEFAULT_PAGE_TITLE));
        self.pages.len() - 1
    }

    /// Removes an empty page. Refused while the page still holds bookmarks
    /// or when it is the only page left.
    fn delete_page(&mut self, page_index: usize) -> Result<(), PageError> {
        let page = self
            .pages
            .get(page_index)
            .ok_or(PageError::InvalidIndex(page_index))?;
        if !page.bookmarks.is_empty() {
            return Err(PageError::NotEmpty(page_index));
        }
        if self.pages.len() == 1 {
            return Err(PageError::LastPage);
        }

        self.pages.remove(page_index);
        self.clamp_current_page();
        Ok(())
    }

    fn rename_page(&mut self, page_index: usize, title: &str) -> Result<(), PageError> {
        let page = self
            .pages
            .get_mut(page_index)
            .ok_or(PageError::InvalidIndex(page_index))?;
        page.title = title.to_string();
        Ok(())
    }

    /// Moves a page within the collection with remove-then-insert
    /// semantics, preserving the relative order of all other pages.
    fn reorder_pages(&mut self, from_index: usize, to_index: usize) -> Result<(), PageError> {
        if from_index >= self.pages.len() {
            return Err(PageError::InvalidIndex(from_index));
        }
        if to_index >= self.pages.len() {
            return Err(PageError::InvalidIndex(to_index));
        }

        let page = self.pages.remove(from_index);
        self.pages.insert(to_index, page);
        Ok(())
    }

    fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn replace(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        if self.pages.is_empty() {
            self.pages.push(Page::new(DEFAULT_PAGE_TITLE));
        }
        self.clamp_current_page();
        self.edit_target = None;
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    fn set_current_page(&mut self, index: usize) {
        self.current_page = index;
        self.clamp_current_page();
    }

    fn edit_target(&self) -> Option<EditTarget> {
        self.edit_target
    }

    fn open_editor(&mut self, target: EditTarget) {
        self.edit_target = Some(target);
    }

    fn close_editor(&mut self) {
        self.edit_target = None;
    }
}
