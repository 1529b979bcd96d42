use serde::{Deserialize, Serialize};

/// How a bookmark's icon is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Favicon resolved from the bookmark URL.
    #[default]
    Auto,
    /// A short text glyph stored in `icon`.
    Text,
    /// A user-supplied image URL stored in `icon`.
    Custom,
}

/// Visual card style of a bookmark tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    /// Icon fills the whole tile.
    #[default]
    Full,
    /// Icon on a white backing plate.
    White,
    /// Icon scaled to fit with padding.
    Fit,
}

/// A single bookmark tile on the grid.
///
/// `id` is assigned once at creation and never changes; it is unique across
/// all pages of a collection. Every field tolerates being absent on import
/// so that arbitrary legacy shapes deserialize leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "iconType")]
    pub icon_type: IconMode,
    pub style: CardStyle,
}

/// One page of the authoritative collection: a titled, ordered run of
/// bookmarks. Order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Page {
    pub title: String,
    pub bookmarks: Vec<Bookmark>,
}

impl Page {
    /// Creates an empty page with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bookmarks: Vec::new(),
        }
    }
}

/// A display-only chunk of one authoritative page's bookmarks.
///
/// Rebuilt wholesale from the authoritative collection on every structural
/// change; never persisted and never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualPage {
    pub title: String,
    pub bookmarks: Vec<Bookmark>,
    /// Index of the source page in the authoritative collection.
    pub source_page: usize,
    /// Ordinal of this chunk within its source page.
    pub chunk_index: usize,
}

/// User-entered bookmark fields, pre-validation. The mutation API turns a
/// draft into a `Bookmark` (assigning an ID) or merges it into an existing
/// one (preserving the ID).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub icon_type: IconMode,
    pub style: CardStyle,
}

/// Which bookmark an open edit form targets.
///
/// The store holds `Option<EditTarget>`; `None` means no form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// The form is creating a new bookmark.
    NewBookmark,
    /// The form is editing the bookmark at this authoritative position.
    Existing {
        page_index: usize,
        bookmark_index: usize,
    },
}

/// The post-drag visual order of one displayed chunk, as emitted by the
/// renderer: which authoritative page the chunk belongs to and the bookmark
/// IDs it now shows, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualGroup {
    pub source_page: usize,
    pub bookmark_ids: Vec<String>,
}
