//! CLI Tooling
//!
//! Startup flags and the interactive menu loop. Menu options live in a
//! dispatch table mapping a numeric selector to a command; handlers go
//! through the catalog service and render via the injected [`Console`].

use crate::catalog::{validation, Catalog};
use crate::config::AppConfig;
use crate::error::{CatalogError, ConfigError, MetadataError};
use crate::metadata::{OmdbClient, OmdbConfig};
use crate::store::{open_store, MovieStore, StoreFormat};
use crate::tooling::format::{
    format_metadata_preview, format_movie_lines, format_movie_table, format_random_pick,
    format_search, format_stats, Console,
};
use clap::Parser;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use tracing::{info, warn};

/// Cinelog - personal movie catalog
#[derive(Parser)]
#[command(name = "cinelog")]
#[command(about = "Menu-driven personal movie catalog with flat-file storage")]
pub struct Cli {
    /// Backing file for the movie collection
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Storage format (json or csv); default inferred from the file extension
    #[arg(long)]
    pub format: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// A menu selection, decoupled from prompting and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    List,
    Add,
    Delete,
    UpdateRating,
    Stats,
    Random,
    Search,
    SortByRating,
    SortByYear,
    Filter,
    Lookup,
}

pub struct MenuItem {
    pub selector: u32,
    pub label: &'static str,
    pub command: MenuCommand,
}

/// The dispatch table behind the numbered menu.
pub const MENU: &[MenuItem] = &[
    MenuItem { selector: 0, label: "Exit", command: MenuCommand::Exit },
    MenuItem { selector: 1, label: "List movies", command: MenuCommand::List },
    MenuItem { selector: 2, label: "Add movie", command: MenuCommand::Add },
    MenuItem { selector: 3, label: "Delete movie", command: MenuCommand::Delete },
    MenuItem { selector: 4, label: "Update movie rating", command: MenuCommand::UpdateRating },
    MenuItem { selector: 5, label: "Stats", command: MenuCommand::Stats },
    MenuItem { selector: 6, label: "Random movie", command: MenuCommand::Random },
    MenuItem { selector: 7, label: "Search movie", command: MenuCommand::Search },
    MenuItem { selector: 8, label: "Movies sorted by rating", command: MenuCommand::SortByRating },
    MenuItem { selector: 9, label: "Movies sorted by year", command: MenuCommand::SortByYear },
    MenuItem { selector: 10, label: "Filter movies", command: MenuCommand::Filter },
    MenuItem { selector: 11, label: "Add movie from OMDb lookup", command: MenuCommand::Lookup },
];

pub fn command_for_selector(selector: u32) -> Option<MenuCommand> {
    MENU.iter()
        .find(|item| item.selector == selector)
        .map(|item| item.command)
}

pub fn render_menu() -> String {
    let mut out = String::from("\nMenu:");
    for item in MENU {
        out.push_str(&format!("\n{}. {}", item.selector, item.label));
    }
    out
}

/// The interactive application: a catalog over the configured store plus
/// the presentation capability.
pub struct MenuApp {
    catalog: Catalog<dyn MovieStore>,
    metadata: Option<OmdbConfig>,
    console: Console,
}

impl MenuApp {
    /// Resolve store path and format (CLI over config over defaults) and
    /// open the catalog.
    pub fn new(cli: &Cli, config: &AppConfig) -> Result<Self, ConfigError> {
        let path = cli.file.clone().unwrap_or_else(|| config.store_file());

        let format = match cli.format.as_deref().or(config.storage.format.as_deref()) {
            Some(name) => Some(StoreFormat::parse(name)?),
            None => None,
        };

        let metadata = config.metadata.api_key.clone().map(|api_key| OmdbConfig {
            api_key,
            base_url: config.metadata.base_url.clone(),
        });

        info!(path = %path.display(), "opening movie store");
        Ok(Self {
            catalog: Catalog::new(open_store(path, format)),
            metadata,
            console: Console::new(!cli.no_color),
        })
    }

    #[cfg(test)]
    pub fn with_store(store: Box<dyn MovieStore>) -> Self {
        Self {
            catalog: Catalog::new(store),
            metadata: None,
            console: Console::new(false),
        }
    }

    pub fn catalog(&self) -> &Catalog<dyn MovieStore> {
        &self.catalog
    }

    /// The read-only commands, rendered to text. Interactive commands
    /// collect their inputs in `run` and land in the same catalog calls.
    pub fn execute_display(&self, command: MenuCommand) -> Result<String, CatalogError> {
        match command {
            MenuCommand::List => {
                let movies = self.catalog.list()?;
                if movies.is_empty() {
                    Ok("No movies found.".to_string())
                } else {
                    Ok(format_movie_table(&movies))
                }
            }
            MenuCommand::Stats => Ok(format_stats(&self.catalog.stats()?)),
            MenuCommand::Random => Ok(format_random_pick(&self.catalog.random_pick()?)),
            MenuCommand::SortByRating => {
                let movies = self.catalog.sort_by_rating()?;
                if movies.is_empty() {
                    Ok("No movies found.".to_string())
                } else {
                    Ok(format!("Movies sorted by rating:\n{}", format_movie_lines(&movies)))
                }
            }
            other => unreachable!("not a display command: {:?}", other),
        }
    }

    pub fn search_text(&self, term: &str) -> Result<String, CatalogError> {
        let outcome = self.catalog.search(term)?;
        Ok(format_search(&outcome, term))
    }

    pub fn sort_by_year_text(&self, ascending: bool) -> Result<String, CatalogError> {
        let movies = self.catalog.sort_by_year(ascending)?;
        if movies.is_empty() {
            Ok("No movies available to sort by year.".to_string())
        } else {
            Ok(format!("Movies sorted by year:\n{}", format_movie_lines(&movies)))
        }
    }

    pub fn filter_text(
        &self,
        min_rating: Option<f64>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<String, CatalogError> {
        let movies = self.catalog.filter(min_rating, start_year, end_year)?;
        if movies.is_empty() {
            Ok("No movies match the filter criteria.".to_string())
        } else {
            Ok(format!("Filtered movies:\n{}", format_movie_lines(&movies)))
        }
    }

    /// Fetch metadata for a title and add the record through the normal
    /// validation path. Service errors are reported as "no result".
    pub fn lookup_and_add(&self, title: &str) -> Result<String, CatalogError> {
        let Some(metadata) = &self.metadata else {
            return Ok(
                "Metadata lookup is not configured. Set [metadata].api_key or CINELOG_OMDB_API_KEY."
                    .to_string(),
            );
        };

        let record = match fetch_metadata(metadata.clone(), title) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(format!("No metadata found for \"{}\".", title)),
            Err(e) => {
                warn!("metadata lookup failed: {}", e);
                return Ok(format!("Metadata lookup failed ({}); no result.", e));
            }
        };

        let preview = format_metadata_preview(&record);
        self.catalog
            .add(&record.title, record.year, record.rating, &record.poster)?;
        Ok(format!("{}\nMovie \"{}\" successfully added.", preview, record.title))
    }

    /// The menu loop. Returns when the user chooses Exit.
    pub fn run(&self) -> anyhow::Result<()> {
        loop {
            self.console.menu(&render_menu());

            let choice: String = Input::new()
                .with_prompt(format!("Enter choice (0-{})", MENU.last().map(|i| i.selector).unwrap_or(0)))
                .interact_text()?;

            let command = match choice.trim().parse::<u32>().ok().and_then(command_for_selector) {
                Some(command) => command,
                None => {
                    self.console.error(&format!(
                        "Invalid input. Please enter a number between 0 and {}.",
                        MENU.last().map(|i| i.selector).unwrap_or(0)
                    ));
                    continue;
                }
            };

            if command == MenuCommand::Exit {
                self.console.response("Bye!");
                return Ok(());
            }

            // catalog errors are reported inside dispatch; only prompt I/O
            // failures propagate out of the loop
            self.dispatch(command)?;

            self.console.prompt_hint("\nPress Enter to continue...");
            let _: String = Input::new().allow_empty(true).interact_text()?;
        }
    }

    /// Run one command: prompt for its inputs, invoke the catalog, report.
    /// Catalog errors are printed and swallowed; only terminal/prompt
    /// failures propagate.
    fn dispatch(&self, command: MenuCommand) -> anyhow::Result<()> {
        let result = match command {
            MenuCommand::List
            | MenuCommand::Stats
            | MenuCommand::Random
            | MenuCommand::SortByRating => self.execute_display(command),
            MenuCommand::Add => self.prompt_add()?,
            MenuCommand::Delete => {
                let title: String = Input::new().with_prompt("Enter movie name").interact_text()?;
                self.catalog
                    .delete(title.trim())
                    .map(|_| format!("Movie \"{}\" successfully deleted.", title.trim()))
            }
            MenuCommand::UpdateRating => self.prompt_update()?,
            MenuCommand::Search => {
                let term: String = Input::new()
                    .with_prompt("Enter part of movie name")
                    .interact_text()?;
                self.search_text(term.trim())
            }
            MenuCommand::SortByYear => {
                let latest_first = Confirm::new()
                    .with_prompt("Latest (newest) movies first?")
                    .default(true)
                    .interact()?;
                self.sort_by_year_text(!latest_first)
            }
            MenuCommand::Filter => self.prompt_filter()?,
            MenuCommand::Lookup => {
                let title: String = Input::new().with_prompt("Enter movie name").interact_text()?;
                self.lookup_and_add(title.trim())
            }
            MenuCommand::Exit => unreachable!("exit is handled by the loop"),
        };

        match result {
            Ok(output) => match command {
                MenuCommand::Add | MenuCommand::Delete | MenuCommand::UpdateRating | MenuCommand::Lookup => {
                    self.console.success(&output)
                }
                _ => self.console.response(&output),
            },
            Err(e @ (CatalogError::Validation(_) | CatalogError::NotFound(_) | CatalogError::EmptyCatalog)) => {
                self.console.error(&format!("Error: {}", e));
            }
            Err(CatalogError::Store(e)) => {
                self.console.error(&format!("Operation aborted: {}", e));
            }
        }
        Ok(())
    }

    fn prompt_add(&self) -> anyhow::Result<Result<String, CatalogError>> {
        // Load once for the duplicate check inside prompt validation; the
        // add call re-validates against a fresh copy.
        let movies = match self.catalog.store().load() {
            Ok(m) => m,
            Err(e) => return Ok(Err(e.into())),
        };

        let title: String = Input::new()
            .with_prompt("Enter new movie name")
            .validate_with(|input: &String| {
                validation::validate_title(input.trim(), &movies).map_err(|e| e.to_string())
            })
            .interact_text()?;
        let title = title.trim().to_string();

        let year = self.prompt_year("Enter new movie year")?;
        let rating = self.prompt_rating("Enter new movie rating (0-10)")?;

        let poster: String = Input::new()
            .with_prompt("Poster URL (optional)")
            .allow_empty(true)
            .interact_text()?;

        Ok(self
            .catalog
            .add(&title, year, rating, poster.trim())
            .map(|_| format!("Movie \"{}\" successfully added.", title)))
    }

    fn prompt_update(&self) -> anyhow::Result<Result<String, CatalogError>> {
        let title: String = Input::new().with_prompt("Enter movie name").interact_text()?;
        let title = title.trim().to_string();

        // Check existence before asking for the new rating, like the menu
        // should: no point prompting for a movie that is not there.
        let movies = match self.catalog.store().load() {
            Ok(m) => m,
            Err(e) => return Ok(Err(e.into())),
        };
        if !movies.contains_key(&title) {
            return Ok(Err(CatalogError::NotFound(title)));
        }

        let rating = self.prompt_rating("Enter new movie rating (0-10)")?;
        Ok(self
            .catalog
            .update_rating(&title, rating)
            .map(|_| format!("Movie \"{}\" successfully updated.", title)))
    }

    fn prompt_filter(&self) -> anyhow::Result<Result<String, CatalogError>> {
        let min_rating = self.prompt_optional_rating("Minimum rating (blank for none)")?;
        let start_year = self.prompt_optional_year("Start year (blank for none)")?;
        let end_year = self.prompt_optional_year("End year (blank for none)")?;
        Ok(self.filter_text(min_rating, start_year, end_year))
    }

    fn prompt_year(&self, prompt: &str) -> anyhow::Result<i32> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| match input.trim().parse::<i32>() {
                Ok(year) => validation::validate_year(year).map_err(|e| e.to_string()),
                Err(_) => Err("invalid input: please enter an integer year".to_string()),
            })
            .interact_text()?;
        Ok(raw.trim().parse().expect("validated above"))
    }

    fn prompt_rating(&self, prompt: &str) -> anyhow::Result<f64> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| match input.trim().parse::<f64>() {
                Ok(rating) => validation::validate_rating(rating).map_err(|e| e.to_string()),
                Err(_) => Err("invalid input: rating is not a number".to_string()),
            })
            .interact_text()?;
        Ok(raw.trim().parse().expect("validated above"))
    }

    fn prompt_optional_year(&self, prompt: &str) -> anyhow::Result<Option<i32>> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    return Ok(());
                }
                match input.trim().parse::<i32>() {
                    Ok(year) => validation::validate_year(year).map_err(|e| e.to_string()),
                    Err(_) => Err("invalid input: please enter an integer year".to_string()),
                }
            })
            .interact_text()?;
        Ok(raw.trim().parse().ok())
    }

    fn prompt_optional_rating(&self, prompt: &str) -> anyhow::Result<Option<f64>> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    return Ok(());
                }
                match input.trim().parse::<f64>() {
                    Ok(rating) => validation::validate_rating(rating).map_err(|e| e.to_string()),
                    Err(_) => Err("invalid input: rating is not a number".to_string()),
                }
            })
            .interact_text()?;
        Ok(raw.trim().parse().ok())
    }
}

/// Drive the async metadata client from the synchronous menu loop.
fn fetch_metadata(
    config: OmdbConfig,
    title: &str,
) -> Result<Option<crate::metadata::MetadataRecord>, MetadataError> {
    let client = OmdbClient::new(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| MetadataError::NotConfigured(format!("failed to start runtime: {}", e)))?;
    runtime.block_on(client.fetch(title))
}

/// Apply CLI logging flags over the configured logging section.
pub fn apply_logging_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(log_format) = &cli.log_format {
        config.logging.format = log_format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
}
