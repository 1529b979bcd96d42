//! Property-based tests for the schema migrator.
//!
//! For arbitrary legacy inputs: no two bookmarks in the migrated output
//! share an ID, and re-running the migrator on an already-migrated
//! collection changes nothing.

use std::collections::HashSet;

use homegrid::services::migrator::{migrate, LEGACY_PAGE_CAPACITY};
use proptest::prelude::*;
use serde_json::json;

fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,20}"
}

fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,12}",
        prop_oneof![Just(".com"), Just(".org"), Just(".io")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

/// A legacy wrapped input: flat bookmark list (some entries carrying a
/// unique preset ID, some missing one) plus an optional title list.
fn arb_legacy_input() -> impl Strategy<Value = serde_json::Value> {
    (
        proptest::collection::vec((arb_title(), arb_url(), any::<bool>()), 0..80),
        proptest::collection::vec(arb_title(), 0..5),
    )
        .prop_map(|(bookmarks, titles)| {
            let bookmarks: Vec<serde_json::Value> = bookmarks
                .into_iter()
                .enumerate()
                .map(|(i, (title, url, has_id))| {
                    if has_id {
                        json!({"id": format!("preset-{}", i), "title": title, "url": url})
                    } else {
                        json!({"title": title, "url": url})
                    }
                })
                .collect();
            json!({"pageTitles": titles, "bookmarks": bookmarks})
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// ID uniqueness: no two bookmarks in a migrated collection share an ID,
    /// and every bookmark has one.
    #[test]
    fn migrated_ids_are_unique_and_present(input in arb_legacy_input()) {
        let pages = migrate(&input);

        let ids: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.bookmarks.iter())
            .map(|b| b.id.as_str())
            .collect();

        prop_assert!(ids.iter().all(|id| !id.is_empty()));
        let unique: HashSet<&&str> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len(), "duplicate bookmark IDs after migration");
    }

    /// Migration idempotence: feeding the migrated output back through the
    /// migrator reproduces it exactly (shape detection passes it through,
    /// the ID backfill assigns nothing).
    #[test]
    fn migration_is_idempotent(input in arb_legacy_input()) {
        let once = migrate(&input);
        let serialized = serde_json::to_value(&once).expect("pages serialize");
        let twice = migrate(&serialized);
        prop_assert_eq!(twice, once);
    }

    /// Partitioning loses no bookmarks and keeps their relative order.
    #[test]
    fn migration_preserves_bookmark_order(input in arb_legacy_input()) {
        let original_titles: Vec<String> = input["bookmarks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap().to_string())
            .collect();

        let pages = migrate(&input);
        let migrated_titles: Vec<String> = pages
            .iter()
            .flat_map(|p| p.bookmarks.iter())
            .map(|b| b.title.clone())
            .collect();

        prop_assert_eq!(migrated_titles, original_titles);

        // Every page respects the legacy capacity
        prop_assert!(pages.iter().all(|p| p.bookmarks.len() <= LEGACY_PAGE_CAPACITY));
    }
}
