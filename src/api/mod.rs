pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::BibleClient;
pub use error::ApiError;
pub use service::{BibleApi, DEFAULT_SEARCH_LIMIT};
pub use types::{Book, Chapter, Health, SearchResult, Stats, Suggestions, Testament, Verse};
