use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Book, Chapter, Health, Stats, Suggestions, Verse};

/// Number of results `/search` and `/search/suggest` return when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Read-only access to the Bible backend.
///
/// Every method is a single GET with no client-side state, so implementations
/// must be safe to call concurrently from many tasks.
#[async_trait]
pub trait BibleApi: Send + Sync {
    /// All books in canonical order.
    async fn get_books(&self) -> Result<Vec<Book>, ApiError>;

    async fn get_book(&self, book_id: u32) -> Result<Book, ApiError>;

    /// Chapters of one book, ordered by chapter number.
    async fn get_book_chapters(&self, book_id: u32) -> Result<Vec<Chapter>, ApiError>;

    async fn get_chapter(&self, chapter_id: u32) -> Result<Chapter, ApiError>;

    /// Verses of one chapter, ordered by verse number.
    async fn get_chapter_verses(&self, chapter_id: u32) -> Result<Vec<Verse>, ApiError>;

    async fn get_verse(&self, verse_id: u32) -> Result<Verse, ApiError>;

    /// A verse picked by the backend.
    async fn get_random_verse(&self) -> Result<Verse, ApiError>;

    /// Looks a verse up by book name and chapter/verse numbers, e.g. `("João", 3, 16)`.
    async fn get_verse_by_reference(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Verse, ApiError>;

    /// Full-text search ranked by relevance. `None` means [`DEFAULT_SEARCH_LIMIT`].
    async fn search_verses(&self, query: &str, limit: Option<u32>)
    -> Result<Vec<Verse>, ApiError>;

    /// Auto-complete suggestions. `None` means [`DEFAULT_SEARCH_LIMIT`].
    async fn search_suggestions(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Suggestions, ApiError>;

    async fn get_stats(&self) -> Result<Stats, ApiError>;

    async fn health(&self) -> Result<Health, ApiError>;
}
