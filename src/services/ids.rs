//! Identifier generation for HomeGrid.
//!
//! Bookmark IDs are opaque strings, assigned once at creation and unique
//! within a collection's lifetime. A millisecond timestamp plus a random
//! UUID suffix is collision-resistant without any global registry.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Length of the random suffix taken from a v4 UUID's simple form.
const SUFFIX_LEN: usize = 8;

/// Returns a new collision-resistant bookmark ID. Always succeeds.
pub fn new_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_LEN)
        .collect();
    format!("{}-{}", millis, suffix)
}
