//! # Commands
//!
//! One subcommand per API operation. Each command performs its request(s),
//! renders the decoded value and writes it to the given output. Failures are
//! returned unchanged; nothing is retried or partially printed.

use std::fmt;
use std::io::{self, Write};

use clap::Subcommand;
use futures::future::try_join_all;
use log::info;

use crate::api::{ApiError, BibleApi, SearchResult};
use crate::core::config::ResolvedConfig;
use crate::core::site;
use crate::render;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every book
    Books,
    /// Show one book
    Book { book_id: u32 },
    /// List the chapters of a book
    Chapters { book_id: u32 },
    /// Show one chapter
    Chapter { chapter_id: u32 },
    /// Print all verses of a chapter
    Verses { chapter_id: u32 },
    /// Print a verse by id
    Verse { verse_id: u32 },
    /// Print random verses
    Random {
        /// Number of verses to fetch, 1 to 50 (requests run concurrently)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=50))]
        count: u32,
    },
    /// Print a verse by reference, e.g. `ref João 3 16`
    #[command(name = "ref")]
    Reference {
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// Search verse text
    Search {
        query: String,
        /// Maximum number of results (defaults to the configured search limit)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Suggest book names and common terms
    Suggest {
        query: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show corpus statistics
    Stats,
    /// Check backend health
    Health,
    /// Print the site's HTML head tags
    Head {
        /// Page title to apply to the title template
        #[arg(long)]
        page: Option<String>,
    },
}

#[derive(Debug)]
pub enum CommandError {
    Api(ApiError),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Api(e) => write!(f, "{e}"),
            CommandError::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ApiError> for CommandError {
    fn from(e: ApiError) -> Self {
        CommandError::Api(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}

/// Runs `command` against `api` and writes the rendered result to `out`.
pub async fn run<W: Write>(
    api: &dyn BibleApi,
    command: &Command,
    config: &ResolvedConfig,
    out: &mut W,
) -> Result<(), CommandError> {
    let width = config.wrap_width;
    info!("Running command: {:?}", command);

    let text = match command {
        Command::Books => render::books(&api.get_books().await?),
        Command::Book { book_id } => render::book(&api.get_book(*book_id).await?),
        Command::Chapters { book_id } => {
            render::chapters(&api.get_book_chapters(*book_id).await?)
        }
        Command::Chapter { chapter_id } => render::chapter(&api.get_chapter(*chapter_id).await?),
        Command::Verses { chapter_id } => {
            render::chapter_text(&api.get_chapter_verses(*chapter_id).await?, width)
        }
        Command::Verse { verse_id } => render::verse(&api.get_verse(*verse_id).await?, width),
        Command::Random { count } => {
            let verses = try_join_all((0..*count).map(|_| api.get_random_verse())).await?;
            verses
                .iter()
                .map(|v| render::verse(v, width))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Reference {
            book,
            chapter,
            verse,
        } => render::verse(
            &api.get_verse_by_reference(book, *chapter, *verse).await?,
            width,
        ),
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search_limit);
            let verses = api.search_verses(query, Some(limit)).await?;
            render::search(&SearchResult::new(query, verses), width)
        }
        Command::Suggest { query, limit } => {
            render::suggestions(&api.search_suggestions(query, *limit).await?)
        }
        Command::Stats => render::stats(&api.get_stats().await?),
        Command::Health => render::health(&api.health().await?),
        Command::Head { page } => site::head().to_html(page.as_deref()),
    };

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
