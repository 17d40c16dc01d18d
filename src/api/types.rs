use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the canon a book belongs to.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Testament {
    #[serde(rename = "old_testament")]
    Old,
    #[serde(rename = "new_testament")]
    New,
}

impl Testament {
    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A book of the Bible, the root of the book → chapter → verse hierarchy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub id: u32,
    pub name: String,
    pub testament: Testament,
    pub url: String,
    pub total_chapters: u32,
    pub created_at: String,
    /// `/books` does not select this column, `/books/{id}` does.
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: u32,
    pub book_id: u32,
    pub chapter_number: u32,
    /// Null until the chapter has been scraped.
    pub total_verses: Option<u32>,
    pub scraped_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub book_name: String,
    /// Only present on `/chapters/{id}`.
    #[serde(default)]
    pub testament: Option<Testament>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Verse {
    pub id: u32,
    pub chapter_id: u32,
    pub verse_number: u32,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
    pub chapter_number: u32,
    pub book_name: String,
    pub testament: Testament,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u32>,
    /// Ranking value, only set on search results (lower is more relevant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl Verse {
    /// Human-readable reference, e.g. `Genesis 1:1`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter_number, self.verse_number)
    }
}

/// A search response paired with the query that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub verses: Vec<Verse>,
    pub total: usize,
    pub query: String,
}

impl SearchResult {
    pub fn new(query: &str, verses: Vec<Verse>) -> Self {
        Self {
            total: verses.len(),
            verses,
            query: query.to_string(),
        }
    }
}

/// Aggregate counters reported by `/stats`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_books: u64,
    pub total_chapters: u64,
    pub total_verses: u64,
    pub old_testament_books: u64,
    pub new_testament_books: u64,
    /// Null while no verse has been scraped yet.
    pub avg_verse_length: Option<f64>,
    pub api_version: String,
    pub target_audience: String,
    pub last_updated: String,
    pub database_status: String,
}

/// Body of `/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub database: String,
    pub books_count: u32,
    pub timestamp: String,
    pub uptime: String,
}

/// Body of `/search/suggest`. The backend reports failures inline in `error`
/// instead of with a status code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parses a backend timestamp. Accepts RFC 3339 and the offset-less ISO-8601
/// form the backend emits for `timestamp without time zone` columns.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}
