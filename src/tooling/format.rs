//! Text rendering of catalog results.
//!
//! Pure `format_*` functions so tests can assert on output, plus the
//! `Console` capability that owns coloring. Handlers never print directly.

use crate::catalog::{CatalogStats, SearchOutcome};
use crate::metadata::MetadataRecord;
use crate::types::Movie;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Console output with optional coloring. Injected into the menu loop so
/// presentation stays decoupled from command handling.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn menu(&self, text: &str) {
        if self.color {
            println!("{}", text.cyan());
        } else {
            println!("{}", text);
        }
    }

    pub fn prompt_hint(&self, text: &str) {
        if self.color {
            println!("{}", text.magenta());
        } else {
            println!("{}", text);
        }
    }

    pub fn response(&self, text: &str) {
        if self.color {
            println!("{}", text.yellow());
        } else {
            println!("{}", text);
        }
    }

    pub fn success(&self, text: &str) {
        if self.color {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    pub fn error(&self, text: &str) {
        if self.color {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text);
        }
    }
}

/// One `Title (Year): Rating` line per movie.
pub fn format_movie_lines(movies: &[Movie]) -> String {
    movies
        .iter()
        .map(|m| format!("{} ({}): {}", m.title, m.year, m.rating))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full listing: count header plus a table with poster URLs.
pub fn format_movie_table(movies: &[Movie]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Title", "Year", "Rating", "Poster"]);
    for m in movies {
        table.add_row(vec![
            m.title.clone(),
            m.year.to_string(),
            format!("{:.1}", m.rating),
            if m.poster.is_empty() {
                "-".to_string()
            } else {
                m.poster.clone()
            },
        ]);
    }
    format!("{} movies in total\n{}", movies.len(), table)
}

pub fn format_stats(stats: &CatalogStats) -> String {
    format!(
        "Average Rating: {:.1}\nMedian Rating: {:.1}\nBest Movie: {}, {:.1}\nWorst Movie: {}, {:.1}",
        stats.average,
        stats.median,
        stats.best.title,
        stats.best.rating,
        stats.worst.title,
        stats.worst.rating
    )
}

pub fn format_random_pick(movie: &Movie) -> String {
    format!(
        "Your movie for tonight: {} ({}), rated {}",
        movie.title, movie.year, movie.rating
    )
}

pub fn format_search(outcome: &SearchOutcome, term: &str) -> String {
    match outcome {
        SearchOutcome::Exact(hits) => format_movie_lines(hits),
        SearchOutcome::Fuzzy(hits) => format!(
            "The movie \"{}\" does not exist.\nDid you mean:\n{}",
            term,
            format_movie_lines(hits)
        ),
        SearchOutcome::NoMatch => "No matching movies found.".to_string(),
    }
}

pub fn format_metadata_preview(record: &MetadataRecord) -> String {
    format!(
        "Found: {} ({}), rating {}{}",
        record.title,
        record.year,
        record.rating,
        if record.poster.is_empty() {
            String::new()
        } else {
            format!(", poster {}", record.poster)
        }
    )
}
