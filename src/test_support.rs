//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{
    ApiError, BibleApi, Book, Chapter, DEFAULT_SEARCH_LIMIT, Health, Stats, Suggestions,
    Testament, Verse,
};

const TS: &str = "2024-05-01T10:00:00.123456";

pub fn sample_book(id: u32, name: &str, testament: Testament, total_chapters: u32) -> Book {
    Book {
        id,
        name: name.to_string(),
        testament,
        url: format!("https://example.org/{id}"),
        total_chapters,
        created_at: TS.to_string(),
        updated_at: None,
    }
}

pub fn sample_chapter(id: u32, book_id: u32, chapter_number: u32) -> Chapter {
    Chapter {
        id,
        book_id,
        chapter_number,
        total_verses: Some(31),
        scraped_at: Some(TS.to_string()),
        created_at: TS.to_string(),
        updated_at: TS.to_string(),
        book_name: "Gênesis".to_string(),
        testament: None,
    }
}

pub fn sample_verse(id: u32, book_name: &str, chapter_number: u32, verse_number: u32) -> Verse {
    Verse {
        id,
        chapter_id: chapter_number,
        verse_number,
        text: format!("Texto de {book_name} {chapter_number}:{verse_number}."),
        created_at: TS.to_string(),
        updated_at: TS.to_string(),
        chapter_number,
        book_name: book_name.to_string(),
        testament: Testament::Old,
        book_id: None,
        relevance_score: None,
    }
}

pub fn sample_stats() -> Stats {
    Stats {
        total_books: 66,
        total_chapters: 1189,
        total_verses: 31106,
        old_testament_books: 39,
        new_testament_books: 27,
        avg_verse_length: Some(129.4083),
        api_version: "1.0.0".to_string(),
        target_audience: "50+ years".to_string(),
        last_updated: TS.to_string(),
        database_status: "✅ Connected".to_string(),
    }
}

fn not_found(what: String) -> ApiError {
    ApiError::Api {
        status: 404,
        message: format!("{what} não encontrado"),
    }
}

/// In-memory backend holding two books: Gênesis 1 (three verses) and João 3 (two verses).
pub struct FixtureApi {
    pub books: Vec<Book>,
    pub chapters: Vec<Chapter>,
    pub verses: Vec<Verse>,
    /// When set, every call fails with this network message.
    pub offline: Option<String>,
}

impl Default for FixtureApi {
    fn default() -> Self {
        let books = vec![
            sample_book(1, "Gênesis", Testament::Old, 50),
            sample_book(43, "João", Testament::New, 21),
        ];

        let mut john = sample_chapter(1001, 43, 3);
        john.book_name = "João".to_string();
        john.total_verses = Some(36);
        let chapters = vec![sample_chapter(1, 1, 1), sample_chapter(2, 1, 2), john];

        let genesis = [
            "No princípio criou Deus os céus e a terra.",
            "E a terra era sem forma e vazia.",
            "E disse Deus: Haja luz; e houve luz.",
        ];
        let mut verses: Vec<Verse> = genesis
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let n = i as u32 + 1;
                let mut v = sample_verse(n, "Gênesis", 1, n);
                v.chapter_id = 1;
                v.book_id = Some(1);
                v.text = text.to_string();
                v
            })
            .collect();
        for (n, text) in [
            (16, "Porque Deus amou o mundo de tal maneira que deu o seu Filho unigênito."),
            (17, "Porque Deus enviou o seu Filho ao mundo, não para que condenasse o mundo."),
        ] {
            let mut v = sample_verse(30000 + n, "João", 3, n);
            v.chapter_id = 1001;
            v.book_id = Some(43);
            v.testament = Testament::New;
            v.text = text.to_string();
            verses.push(v);
        }

        Self {
            books,
            chapters,
            verses,
            offline: None,
        }
    }
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline(message: &str) -> Self {
        Self {
            offline: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn online(&self) -> Result<(), ApiError> {
        match &self.offline {
            Some(msg) => Err(ApiError::Network(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BibleApi for FixtureApi {
    async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        self.online()?;
        Ok(self.books.clone())
    }

    async fn get_book(&self, book_id: u32) -> Result<Book, ApiError> {
        self.online()?;
        self.books
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
            .ok_or_else(|| not_found(format!("Livro com ID {book_id}")))
    }

    async fn get_book_chapters(&self, book_id: u32) -> Result<Vec<Chapter>, ApiError> {
        self.get_book(book_id).await?;
        Ok(self
            .chapters
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn get_chapter(&self, chapter_id: u32) -> Result<Chapter, ApiError> {
        self.online()?;
        self.chapters
            .iter()
            .find(|c| c.id == chapter_id)
            .cloned()
            .ok_or_else(|| not_found(format!("Capítulo com ID {chapter_id}")))
    }

    async fn get_chapter_verses(&self, chapter_id: u32) -> Result<Vec<Verse>, ApiError> {
        self.get_chapter(chapter_id).await?;
        Ok(self
            .verses
            .iter()
            .filter(|v| v.chapter_id == chapter_id)
            .cloned()
            .collect())
    }

    async fn get_verse(&self, verse_id: u32) -> Result<Verse, ApiError> {
        self.online()?;
        self.verses
            .iter()
            .find(|v| v.id == verse_id)
            .cloned()
            .ok_or_else(|| not_found(format!("Versículo com ID {verse_id}")))
    }

    async fn get_random_verse(&self) -> Result<Verse, ApiError> {
        self.online()?;
        self.verses
            .first()
            .cloned()
            .ok_or_else(|| not_found("Nenhum versículo".to_string()))
    }

    async fn get_verse_by_reference(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Verse, ApiError> {
        self.online()?;
        let book_lower = book.to_lowercase();
        self.verses
            .iter()
            .find(|v| {
                v.book_name.to_lowercase().contains(&book_lower)
                    && v.chapter_number == chapter
                    && v.verse_number == verse
            })
            .cloned()
            .ok_or_else(|| not_found(format!("Versículo {book} {chapter}:{verse}")))
    }

    async fn search_verses(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Verse>, ApiError> {
        self.online()?;
        let needle = query.to_lowercase();
        Ok(self
            .verses
            .iter()
            .filter(|v| v.text.to_lowercase().contains(&needle))
            .take(limit.unwrap_or(DEFAULT_SEARCH_LIMIT) as usize)
            .cloned()
            .collect())
    }

    async fn search_suggestions(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Suggestions, ApiError> {
        self.online()?;
        let needle = query.to_lowercase();
        Ok(Suggestions {
            suggestions: self
                .books
                .iter()
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .take(limit.unwrap_or(DEFAULT_SEARCH_LIMIT) as usize)
                .map(|b| b.name.clone())
                .collect(),
            error: None,
        })
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.online()?;
        Ok(sample_stats())
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.online()?;
        Ok(Health {
            status: "✅ Healthy".to_string(),
            database: "✅ Connected".to_string(),
            books_count: self.books.len() as u32,
            timestamp: TS.to_string(),
            uptime: "Ready to serve".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_default_fixture_is_online_and_seeded() {
        let api = FixtureApi::default();
        assert!(api.offline.is_none());
        assert_eq!(api.books.len(), 2);
        assert_eq!(api.verses.len(), 5);
        assert_eq!(api.books, FixtureApi::new().books);

        let verse = block_on(api.get_verse_by_reference("João", 3, 16)).unwrap();
        assert_eq!(verse.id, 30016);
    }

    #[test]
    fn test_offline_fixture_keeps_default_data() {
        let api = FixtureApi::offline("connection refused");
        assert_eq!(api.chapters.len(), 3);
        assert!(matches!(block_on(api.get_books()), Err(ApiError::Network(_))));
    }
}
