//! Read-only seam to the external note store, used by note embeds.

/// A note fetched from the external store at embed-creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Read-only access to the external note store.
///
/// The canvas only reads a note once, when an embed is created; the embed
/// keeps a cached title/preview rather than a live binding, so later note
/// edits never touch the canvas.
pub trait NoteStore {
    /// Fetch a note by ID, or None if it does not exist.
    fn fetch(&self, id: &str) -> Option<NoteSummary>;
}
