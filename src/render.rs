//! Plain-text rendering of API values for the terminal.
//!
//! Every function returns a `String` ending in a newline so callers can write
//! it straight to stdout. Verse text is wrapped with `textwrap`; columns are
//! padded by display width so accented book names line up.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::api::types::parse_timestamp;
use crate::api::{Book, Chapter, Health, SearchResult, Stats, Suggestions, Testament, Verse};

/// Narrowest width we wrap to, whatever the config says.
const MIN_WIDTH: usize = 20;

fn wrap_options(width: usize, indent: &str) -> textwrap::Options<'_> {
    textwrap::Options::new(width.max(MIN_WIDTH))
        .initial_indent(indent)
        .subsequent_indent(indent)
        .break_words(true)
}

/// Pads `text` with spaces up to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Books grouped by testament, one per line with id and chapter count.
pub fn books(books: &[Book]) -> String {
    let name_width = books.iter().map(|b| b.name.width()).max().unwrap_or(0);
    let mut out = String::new();

    for testament in [Testament::Old, Testament::New] {
        let group: Vec<&Book> = books.iter().filter(|b| b.testament == testament).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({} books)", testament, group.len());
        for book in group {
            let _ = writeln!(
                out,
                "  {:>3}  {}  {:>3} chapters",
                book.id,
                pad(&book.name, name_width),
                book.total_chapters
            );
        }
    }

    if out.is_empty() {
        out.push_str("No books.\n");
    }
    out
}

pub fn book(book: &Book) -> String {
    format!(
        "{} (#{})\n  {}, {} chapters\n  {}\n",
        book.name, book.id, book.testament, book.total_chapters, book.url
    )
}

/// Chapters of a book, with verse counts where known.
pub fn chapters(chapters: &[Chapter]) -> String {
    let Some(first) = chapters.first() else {
        return "No chapters.\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", first.book_name);
    for chapter in chapters {
        let verses = chapter
            .total_verses
            .map(|n| format!("{n} verses"))
            .unwrap_or_else(|| "not scraped".to_string());
        let _ = writeln!(
            out,
            "  {:>3}  chapter {:<3}  {}",
            chapter.id, chapter.chapter_number, verses
        );
    }
    out
}

pub fn chapter(chapter: &Chapter) -> String {
    let mut out = format!(
        "{} {} (#{})\n",
        chapter.book_name, chapter.chapter_number, chapter.id
    );
    if let Some(testament) = chapter.testament {
        let _ = writeln!(out, "  {testament}");
    }
    match chapter.total_verses {
        Some(n) => {
            let _ = writeln!(out, "  {n} verses");
        }
        None => out.push_str("  not scraped yet\n"),
    }
    out
}

/// A single verse: reference line, then the wrapped text.
pub fn verse(verse: &Verse, width: usize) -> String {
    format!(
        "{}\n{}\n",
        verse.reference(),
        textwrap::fill(&verse.text, wrap_options(width, "  "))
    )
}

/// A whole chapter as running text, each verse prefixed by its number.
pub fn chapter_text(verses: &[Verse], width: usize) -> String {
    let Some(first) = verses.first() else {
        return "No verses.\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {}\n", first.book_name, first.chapter_number);
    for verse in verses {
        let number = format!("{:>3} ", verse.verse_number);
        let options = wrap_options(width, "    ").initial_indent(&number);
        let _ = writeln!(out, "{}", textwrap::fill(&verse.text, options));
    }
    out
}

pub fn search(result: &SearchResult, width: usize) -> String {
    let mut out = format!("{} result(s) for \"{}\"\n", result.total, result.query);
    for v in &result.verses {
        out.push('\n');
        out.push_str(&verse(v, width));
    }
    out
}

pub fn suggestions(suggestions: &Suggestions) -> String {
    if let Some(error) = &suggestions.error {
        return format!("No suggestions: {error}\n");
    }
    if suggestions.suggestions.is_empty() {
        return "No suggestions.\n".to_string();
    }
    let mut out = String::new();
    for s in &suggestions.suggestions {
        let _ = writeln!(out, "  {s}");
    }
    out
}

pub fn stats(stats: &Stats) -> String {
    let rows = [
        ("Books", stats.total_books.to_string()),
        ("  Old Testament", stats.old_testament_books.to_string()),
        ("  New Testament", stats.new_testament_books.to_string()),
        ("Chapters", stats.total_chapters.to_string()),
        ("Verses", stats.total_verses.to_string()),
        (
            "Avg. verse length",
            stats
                .avg_verse_length
                .map(|avg| format!("{avg:.1} chars"))
                .unwrap_or_else(|| "n/a".to_string()),
        ),
        ("API version", stats.api_version.clone()),
        ("Audience", stats.target_audience.clone()),
        ("Database", stats.database_status.clone()),
        ("Last updated", display_timestamp(&stats.last_updated)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{}  {}", pad(label, label_width), value);
    }
    out
}

pub fn health(health: &Health) -> String {
    format!(
        "Status:   {}\nDatabase: {}\nBooks:    {}\nChecked:  {}\n",
        health.status,
        health.database,
        health.books_count,
        display_timestamp(&health.timestamp)
    )
}

/// Formats a backend timestamp to the minute, falling back to the raw string.
fn display_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
