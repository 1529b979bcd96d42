//! Property-based tests for the visual paginator.
//!
//! Pagination completeness: concatenating all visual chunks in order
//! reproduces the authoritative bookmarks exactly. Empty-page visibility:
//! an empty page is shown iff edit mode is active.

use homegrid::services::paginator::visual_pages;
use homegrid::types::page::{Bookmark, Page};
use proptest::prelude::*;

fn build_pages(sizes: &[usize]) -> Vec<Page> {
    sizes
        .iter()
        .enumerate()
        .map(|(p, &n)| Page {
            title: format!("Page {}", p),
            bookmarks: (0..n)
                .map(|i| Bookmark {
                    id: format!("p{}-b{}", p, i),
                    title: format!("Bookmark {}", i),
                    url: "https://example.com".to_string(),
                    ..Bookmark::default()
                })
                .collect(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// No loss, no duplication, no reordering across the chunk split.
    #[test]
    fn pagination_is_complete(
        sizes in proptest::collection::vec(0usize..70, 1..6),
        chunk_size in 1usize..40,
        editing in any::<bool>(),
    ) {
        let pages = build_pages(&sizes);
        let visual = visual_pages(&pages, chunk_size, editing);

        let authoritative: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.bookmarks.iter())
            .map(|b| b.id.as_str())
            .collect();
        let displayed: Vec<&str> = visual
            .iter()
            .flat_map(|v| v.bookmarks.iter())
            .map(|b| b.id.as_str())
            .collect();

        prop_assert_eq!(displayed, authoritative);
    }

    /// Chunk geometry: every chunk respects the size bound, chunk indices
    /// are consecutive per page, and back-references are valid.
    #[test]
    fn chunk_geometry_holds(
        sizes in proptest::collection::vec(0usize..70, 1..6),
        chunk_size in 1usize..40,
    ) {
        let pages = build_pages(&sizes);
        let visual = visual_pages(&pages, chunk_size, false);

        for v in &visual {
            prop_assert!(v.bookmarks.len() <= chunk_size);
            prop_assert!(v.source_page < pages.len());
            prop_assert_eq!(&v.title, &pages[v.source_page].title);
        }

        for (page_index, page) in pages.iter().enumerate() {
            let expected_chunks = page.bookmarks.len().div_ceil(chunk_size);
            let indices: Vec<usize> = visual
                .iter()
                .filter(|v| v.source_page == page_index && !v.bookmarks.is_empty())
                .map(|v| v.chunk_index)
                .collect();
            prop_assert_eq!(indices, (0..expected_chunks).collect::<Vec<_>>());
        }
    }

    /// An empty authoritative page appears iff edit mode is active; with
    /// every page empty and edit mode off, exactly one placeholder remains.
    #[test]
    fn empty_page_visibility(
        sizes in proptest::collection::vec(0usize..10, 1..6),
        editing in any::<bool>(),
    ) {
        let pages = build_pages(&sizes);
        let visual = visual_pages(&pages, 8, editing);

        for (page_index, page) in pages.iter().enumerate() {
            let shown = visual
                .iter()
                .any(|v| v.source_page == page_index && v.bookmarks.is_empty());
            if page.bookmarks.is_empty() {
                if editing {
                    prop_assert!(shown, "empty page {} hidden while editing", page_index);
                }
            }
        }

        if !editing && pages.iter().all(|p| p.bookmarks.is_empty()) {
            prop_assert_eq!(visual.len(), 1);
            prop_assert!(visual[0].bookmarks.is_empty());
        } else if !editing {
            // Outside edit mode no empty chunk is ever shown
            prop_assert!(visual.iter().all(|v| !v.bookmarks.is_empty()));
        }

        // Never an empty output
        prop_assert!(!visual.is_empty());
    }
}
