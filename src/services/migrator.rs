//! Schema migrator for HomeGrid.
//!
//! Normalizes arbitrary parsed JSON (loaded, imported, or legacy) into the
//! current `Page` model. Two shapes are recognized: the current one — an
//! array of objects each carrying a `bookmarks` field — which passes through
//! unchanged, and the legacy one — a flat bookmark list, optionally wrapped
//! under a `bookmarks` key with an optional `pageTitles` list — which is
//! partitioned into fixed-capacity pages. Malformed input degrades to an
//! empty result; this module never returns an error.

use serde_json::Value;

use crate::services::ids;
use crate::types::page::{Bookmark, Page};

/// Maximum bookmarks per page when partitioning a legacy flat list.
pub const LEGACY_PAGE_CAPACITY: usize = 32;

/// Title given to pages that have no user-provided one.
pub const DEFAULT_PAGE_TITLE: &str = "New Page";

/// Normalizes `value` into the current page model and backfills missing
/// bookmark IDs. May return zero pages (empty legacy input); callers that
/// own an authoritative collection restore the at-least-one-page invariant
/// themselves.
pub fn migrate(value: &Value) -> Vec<Page> {
    let mut pages = match value {
        Value::Array(items) if is_paged_shape(items) => {
            items.iter().filter_map(page_from_value).collect()
        }
        Value::Array(items) => {
            let bookmarks = bookmarks_from_array(items);
            partition_legacy(bookmarks, &[])
        }
        Value::Object(map) => {
            let bookmarks = map
                .get("bookmarks")
                .and_then(Value::as_array)
                .map(|items| bookmarks_from_array(items))
                .unwrap_or_default();
            let titles = map
                .get("pageTitles")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            partition_legacy(bookmarks, &titles)
        }
        _ => Vec::new(),
    };

    backfill_ids(&mut pages);
    pages
}

/// Assigns a fresh ID to every bookmark missing one. Returns the number of
/// IDs assigned; a second run on the same data assigns zero.
pub fn backfill_ids(pages: &mut [Page]) -> usize {
    let mut assigned = 0;
    for page in pages.iter_mut() {
        for bookmark in page.bookmarks.iter_mut() {
            if bookmark.id.is_empty() {
                bookmark.id = ids::new_id();
                assigned += 1;
            }
        }
    }
    assigned
}

/// An array is already in the current shape when it is empty or every
/// element is an object exposing a `bookmarks` field.
fn is_paged_shape(items: &[Value]) -> bool {
    items
        .iter()
        .all(|item| item.as_object().is_some_and(|obj| obj.contains_key("bookmarks")))
}

/// Lenient page parse: a non-object or a missing/invalid `bookmarks` array
/// drops the page rather than failing the whole migration.
fn page_from_value(value: &Value) -> Option<Page> {
    let obj = value.as_object()?;
    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PAGE_TITLE)
        .to_string();
    let bookmarks = obj
        .get("bookmarks")
        .and_then(Value::as_array)
        .map(|items| bookmarks_from_array(items))
        .unwrap_or_default();
    Some(Page { title, bookmarks })
}

/// Lenient bookmark parse over an array; elements that are not bookmark
/// objects are skipped.
fn bookmarks_from_array(items: &[Value]) -> Vec<Bookmark> {
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

/// Partitions a flat bookmark list into pages of at most
/// `LEGACY_PAGE_CAPACITY`, assigning titles positionally and falling back to
/// the default when titles run out. The page count is
/// `max(titles.len(), ceil(bookmarks.len() / capacity))`.
fn partition_legacy(bookmarks: Vec<Bookmark>, titles: &[String]) -> Vec<Page> {
    let chunk_count = bookmarks.len().div_ceil(LEGACY_PAGE_CAPACITY);
    let page_count = titles.len().max(chunk_count);

    let mut remaining = bookmarks.into_iter();
    let mut pages = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let title = titles
            .get(index)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());
        let chunk: Vec<Bookmark> = remaining.by_ref().take(LEGACY_PAGE_CAPACITY).collect();
        pages.push(Page {
            title,
            bookmarks: chunk,
        });
    }
    pages
}
