//! Unit tests for the visual paginator.

use homegrid::services::paginator::{
    chunk_size_for_width, visual_pages, NARROW_CHUNK_SIZE, WIDE_CHUNK_SIZE,
};
use homegrid::types::page::{Bookmark, Page};

fn page_with(title: &str, count: usize) -> Page {
    Page {
        title: title.to_string(),
        bookmarks: (0..count)
            .map(|i| Bookmark {
                id: format!("{}-{}", title, i),
                title: format!("Bookmark {}", i),
                url: format!("https://{}.example/{}", title.to_lowercase(), i),
                ..Bookmark::default()
            })
            .collect(),
    }
}

/// 35 bookmarks at chunk size 32 yield two chunks of 32 and 3 with chunk
/// indices 0 and 1.
#[test]
fn test_chunking_scenario() {
    let pages = vec![page_with("Home", 35)];
    let visual = visual_pages(&pages, 32, false);

    assert_eq!(visual.len(), 2);
    assert_eq!(visual[0].bookmarks.len(), 32);
    assert_eq!(visual[0].chunk_index, 0);
    assert_eq!(visual[1].bookmarks.len(), 3);
    assert_eq!(visual[1].chunk_index, 1);
    assert_eq!(visual[0].source_page, 0);
    assert_eq!(visual[1].source_page, 0);
    assert_eq!(visual[1].title, "Home");
}

/// An exact multiple of the chunk size produces no trailing empty chunk.
#[test]
fn test_exact_multiple_has_no_empty_chunk() {
    let pages = vec![page_with("Home", 32)];
    let visual = visual_pages(&pages, 16, false);
    assert_eq!(visual.len(), 2);
    assert!(visual.iter().all(|v| v.bookmarks.len() == 16));
}

/// An empty authoritative page is shown while editing and hidden otherwise.
#[test]
fn test_empty_page_visible_only_in_edit_mode() {
    let pages = vec![page_with("Home", 2), Page::new("Spare")];

    let viewing = visual_pages(&pages, 32, false);
    assert_eq!(viewing.len(), 1);
    assert_eq!(viewing[0].source_page, 0);

    let editing = visual_pages(&pages, 32, true);
    assert_eq!(editing.len(), 2);
    assert_eq!(editing[1].source_page, 1);
    assert!(editing[1].bookmarks.is_empty());
    assert_eq!(editing[1].title, "Spare");
}

/// All pages empty and not editing yields exactly one placeholder.
#[test]
fn test_placeholder_when_nothing_to_show() {
    let pages = vec![Page::new("Only")];
    let visual = visual_pages(&pages, 32, false);

    assert_eq!(visual.len(), 1);
    assert!(visual[0].bookmarks.is_empty());
    assert_eq!(visual[0].source_page, 0);
    assert_eq!(visual[0].chunk_index, 0);
}

/// Chunks from consecutive pages keep collection order and per-page
/// back-references.
#[test]
fn test_multiple_pages_keep_order() {
    let pages = vec![page_with("A", 5), page_with("B", 3)];
    let visual = visual_pages(&pages, 4, false);

    assert_eq!(visual.len(), 3);
    assert_eq!(
        visual
            .iter()
            .map(|v| (v.source_page, v.chunk_index, v.bookmarks.len()))
            .collect::<Vec<_>>(),
        vec![(0, 0, 4), (0, 1, 1), (1, 0, 3)]
    );
    assert_eq!(visual[2].bookmarks[0].id, "B-0");
}

/// A zero chunk size is treated as one bookmark per chunk.
#[test]
fn test_zero_chunk_size_is_clamped() {
    let pages = vec![page_with("Home", 3)];
    let visual = visual_pages(&pages, 0, false);
    assert_eq!(visual.len(), 3);
}

/// The paginator never mutates its input.
#[test]
fn test_input_is_untouched() {
    let pages = vec![page_with("Home", 10)];
    let before = pages.clone();
    let _ = visual_pages(&pages, 3, true);
    assert_eq!(pages, before);
}

#[test]
fn test_chunk_size_for_width_thresholds() {
    assert_eq!(chunk_size_for_width(0), NARROW_CHUNK_SIZE);
    assert_eq!(chunk_size_for_width(599), NARROW_CHUNK_SIZE);
    assert_eq!(chunk_size_for_width(600), WIDE_CHUNK_SIZE);
    assert_eq!(chunk_size_for_width(1920), WIDE_CHUNK_SIZE);
}
