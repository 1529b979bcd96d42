//! Reorder reconciler for HomeGrid.
//!
//! After a drag between or within displayed chunks, the renderer emits the
//! resulting visual order as a sequence of bookmark IDs per visual page
//! (`VisualGroup`). This module rebuilds the authoritative collection from
//! that arrangement: object fields are taken from the pre-drag collection,
//! only positions change.

use std::collections::{HashMap, HashSet};

use crate::types::page::{Bookmark, Page, VisualGroup};

/// Rebuilds the authoritative pages from the post-drag visual arrangement.
///
/// Walks `arrangement` in display order, resolving each ID through the
/// pre-drag collection and appending the bookmark to the new sequence of
/// the chunk's owning page. Stale input cannot corrupt the collection:
/// unknown IDs, repeated IDs and out-of-range `source_page` values are
/// ignored, and a bookmark absent from the walk is kept on its original
/// page (after the walked ones, in its original relative order) rather
/// than dropped.
pub fn reconcile(pages: &[Page], arrangement: &[VisualGroup]) -> Vec<Page> {
    let lookup: HashMap<&str, &Bookmark> = pages
        .iter()
        .flat_map(|page| page.bookmarks.iter())
        .map(|bookmark| (bookmark.id.as_str(), bookmark))
        .collect();

    let mut rebuilt: Vec<Page> = pages
        .iter()
        .map(|page| Page::new(page.title.clone()))
        .collect();
    let mut placed: HashSet<&str> = HashSet::new();

    for group in arrangement {
        let Some(target) = rebuilt.get_mut(group.source_page) else {
            continue;
        };
        for id in &group.bookmark_ids {
            if placed.contains(id.as_str()) {
                continue;
            }
            if let Some((key, bookmark)) = lookup.get_key_value(id.as_str()) {
                target.bookmarks.push((*bookmark).clone());
                placed.insert(key);
            }
        }
    }

    // Anything the walk never visited stays on its original page.
    for (page_index, page) in pages.iter().enumerate() {
        for bookmark in &page.bookmarks {
            if !placed.contains(bookmark.id.as_str()) {
                rebuilt[page_index].bookmarks.push(bookmark.clone());
            }
        }
    }

    rebuilt
}
