//! Visual paginator for HomeGrid.
//!
//! Derives the display-chunked visual pages from the authoritative
//! collection. This is a pure function of its inputs: it never mutates the
//! collection and is cheap enough to re-run on every render.

use crate::services::migrator::DEFAULT_PAGE_TITLE;
use crate::types::page::{Page, VisualPage};

/// Bookmarks per visual page on narrow viewports.
pub const NARROW_CHUNK_SIZE: usize = 16;

/// Bookmarks per visual page on regular viewports.
pub const WIDE_CHUNK_SIZE: usize = 32;

/// Viewport width below which the narrow chunk size applies.
const NARROW_VIEWPORT_PX: u32 = 600;

/// Returns the chunk size for a viewport of the given width in pixels.
pub fn chunk_size_for_width(width_px: u32) -> usize {
    if width_px < NARROW_VIEWPORT_PX {
        NARROW_CHUNK_SIZE
    } else {
        WIDE_CHUNK_SIZE
    }
}

/// Splits every authoritative page into consecutive chunks of at most
/// `chunk_size` bookmarks, order-preserving.
///
/// An empty authoritative page contributes one empty visual page while
/// `editing` is true (so it stays visible and selectable) and nothing
/// otherwise. If the whole result would be empty, a single placeholder
/// visual page is emitted so a display surface always has a page to show.
pub fn visual_pages(pages: &[Page], chunk_size: usize, editing: bool) -> Vec<VisualPage> {
    let chunk_size = chunk_size.max(1);

    let mut visual = Vec::new();
    for (source_page, page) in pages.iter().enumerate() {
        if page.bookmarks.is_empty() {
            if editing {
                visual.push(VisualPage {
                    title: page.title.clone(),
                    bookmarks: Vec::new(),
                    source_page,
                    chunk_index: 0,
                });
            }
            continue;
        }

        for (chunk_index, chunk) in page.bookmarks.chunks(chunk_size).enumerate() {
            visual.push(VisualPage {
                title: page.title.clone(),
                bookmarks: chunk.to_vec(),
                source_page,
                chunk_index,
            });
        }
    }

    if visual.is_empty() {
        visual.push(VisualPage {
            title: DEFAULT_PAGE_TITLE.to_string(),
            bookmarks: Vec::new(),
            source_page: 0,
            chunk_index: 0,
        });
    }

    visual
}
