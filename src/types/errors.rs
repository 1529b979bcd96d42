use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark mutation operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BookmarkError {
    /// The bookmark title was empty at save time.
    EmptyTitle,
    /// The bookmark URL was empty at save time.
    EmptyUrl,
    /// The target position does not exist in the collection.
    InvalidPosition { page_index: usize, bookmark_index: usize },
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::EmptyTitle => write!(f, "Bookmark title must not be empty"),
            BookmarkError::EmptyUrl => write!(f, "Bookmark URL must not be empty"),
            BookmarkError::InvalidPosition {
                page_index,
                bookmark_index,
            } => write!(
                f,
                "No bookmark at page {}, position {}",
                page_index, bookmark_index
            ),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === PageError ===

/// Errors related to page-level operations.
#[derive(Debug, PartialEq, Eq)]
pub enum PageError {
    /// The page still contains bookmarks and may not be deleted.
    NotEmpty(usize),
    /// The page is the only one left; the collection must keep at least one.
    LastPage,
    /// The provided page index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotEmpty(index) => write!(f, "Page {} is not empty", index),
            PageError::LastPage => write!(f, "Cannot delete the last remaining page"),
            PageError::InvalidIndex(index) => write!(f, "Invalid page index: {}", index),
        }
    }
}

impl std::error::Error for PageError {}

// === StorageError ===

/// Errors related to local persistence and import/export.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the data file.
    IoError(String),
    /// Failed to serialize or parse collection data.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === SyncError ===

/// Errors related to the remote snapshot store.
#[derive(Debug)]
pub enum SyncError {
    /// A network error occurred while talking to the snapshot store.
    NetworkError(String),
    /// The snapshot store returned an error response.
    ApiError(String),
    /// No session is active; the remote store requires one.
    NotAuthenticated,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::NetworkError(msg) => write!(f, "Sync network error: {}", msg),
            SyncError::ApiError(msg) => write!(f, "Sync API error: {}", msg),
            SyncError::NotAuthenticated => write!(f, "Not signed in to the snapshot store"),
        }
    }
}

impl std::error::Error for SyncError {}
