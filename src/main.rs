//! Command-line entry point for the word annotator.
//!
//! # Startup sequence
//!
//! 1. Parse arguments and initialise logging from `-v`.
//! 2. Load [`AppConfig`] (defaults on first run) and apply env overrides.
//! 3. Open the JSON word store.
//! 4. Run the sub-command on a tokio runtime and print JSON to stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use word_annotator::{
    annotate::Annotator,
    config::{AppConfig, AppPaths},
    model::{AnnotatedWord, Language, WordRequest, WordType},
    pipeline::BatchRunner,
    store::{JsonFileStore, MediaSummary, WordStore},
};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Annotate words with type, gender, syllables, safe letters, frequency and
/// media availability.
#[derive(Debug, Parser)]
#[command(name = "word-annotator", version, about)]
struct Cli {
    /// Settings file (default: platform config dir)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Word store file (overrides `store.path`)
    #[arg(long, value_name = "FILE", global = true, env = "WORD_ANNOTATOR_STORE")]
    store: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Annotate words and store new records
    Annotate {
        /// Language code (default: `batch.default_language`)
        #[arg(short, long)]
        language: Option<String>,

        /// Words to annotate
        #[arg(required = true, value_name = "WORD")]
        words: Vec<String>,
    },

    /// Annotate the starter vocabulary
    Populate,

    /// Show the most recently stored records
    Recent {
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Show record counts per language and media availability
    Stats,

    /// Show one stored record
    Show { id: u64 },

    /// Mark a record as checked by a therapist
    Approve {
        id: u64,

        /// Clear the mark instead
        #[arg(long)]
        revoke: bool,
    },

    /// Remove a stored record
    Delete { id: u64 },

    /// Search records by word or word type
    Search {
        /// Language code (default: `batch.default_language`)
        #[arg(short, long)]
        language: Option<String>,

        /// Only records of this word type
        #[arg(long = "type", value_name = "TYPE")]
        word_type: Option<WordType>,

        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Case-insensitive text to look for (default: everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// Write a settings file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    total: usize,
    by_language: Vec<LanguageCount>,
    media: MediaSummary,
}

#[derive(Debug, Serialize)]
struct LanguageCount {
    language: Language,
    count: usize,
}

#[derive(Debug, Serialize)]
struct Deleted {
    id: u64,
    deleted: bool,
}

#[derive(Debug)]
struct SearchQuery {
    query: String,
    language: Language,
    word_type: Option<WordType>,
    limit: usize,
    offset: usize,
}

#[derive(Debug, Serialize)]
struct SearchResult {
    total: usize,
    words: Vec<AnnotatedWord>,
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_file = cli
        .config
        .clone()
        .unwrap_or_else(|| AppPaths::new().settings_file);

    if let Command::InitConfig { force } = cli.command {
        return init_config(&settings_file, force);
    }

    let mut config = AppConfig::load_from(&settings_file)
        .with_context(|| format!("failed to load {}", settings_file.display()))?;
    config.apply_env_overrides();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    rt.block_on(run(cli, config))
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let store_path = cli.store.unwrap_or_else(|| config.store.resolved_path());
    log::debug!("using word store at {}", store_path.display());
    let store: Arc<dyn WordStore> = Arc::new(
        JsonFileStore::open(&store_path)
            .with_context(|| format!("failed to open {}", store_path.display()))?,
    );

    match cli.command {
        Command::Annotate { language, words } => {
            let requests = words
                .into_iter()
                .map(|word| WordRequest {
                    word,
                    language: language.clone(),
                })
                .collect();
            let report = runner(&config, store).run(requests).await?;
            print_json(&report)
        }
        Command::Populate => {
            let report = runner(&config, store).populate().await?;
            print_json(&report)
        }
        Command::Recent { limit } => print_json(&store.recent(limit).await?),
        Command::Stats => {
            let by_language: Vec<LanguageCount> = store
                .count_by_language()
                .await?
                .into_iter()
                .map(|(language, count)| LanguageCount { language, count })
                .collect();
            let stats = Stats {
                total: by_language.iter().map(|c| c.count).sum(),
                by_language,
                media: store.media_summary().await?,
            };
            print_json(&stats)
        }
        Command::Show { id } => print_json(&show(store.as_ref(), id).await?),
        Command::Approve { id, revoke } => {
            print_json(&approve(store.as_ref(), id, !revoke).await?)
        }
        Command::Delete { id } => print_json(&delete(store.as_ref(), id).await?),
        Command::Search {
            language,
            word_type,
            limit,
            offset,
            query,
        } => {
            let query = SearchQuery {
                query,
                language: Language::from_code(
                    language
                        .as_deref()
                        .unwrap_or(&config.batch.default_language),
                ),
                word_type,
                limit,
                offset,
            };
            print_json(&search(store.as_ref(), &query).await?)
        }
        Command::InitConfig { .. } => Ok(()),
    }
}

async fn show(store: &dyn WordStore, id: u64) -> Result<AnnotatedWord> {
    store
        .find_by_id(id)
        .await?
        .with_context(|| format!("no word with id {id}"))
}

async fn approve(store: &dyn WordStore, id: u64, proved: bool) -> Result<AnnotatedWord> {
    let mut word = show(store, id).await?;
    word.proved_by_therapist = proved;
    let word = store.update(word).await?;
    log::info!(
        "{:?} ({}) proved by therapist: {proved}",
        word.word,
        word.language
    );
    Ok(word)
}

async fn delete(store: &dyn WordStore, id: u64) -> Result<Deleted> {
    let deleted = store.delete(id).await?;
    if deleted {
        log::info!("deleted word {id}");
    } else {
        log::warn!("no word with id {id} to delete");
    }
    Ok(Deleted { id, deleted })
}

/// With a word type, the query narrows that type's records by word only.
async fn search(store: &dyn WordStore, q: &SearchQuery) -> Result<SearchResult> {
    let Some(word_type) = q.word_type else {
        return Ok(SearchResult {
            total: store.count_filtered(&q.query, q.language).await?,
            words: store
                .find_filtered(&q.query, q.language, q.limit, q.offset)
                .await?,
        });
    };

    let needle = q.query.trim().to_lowercase();
    let matching: Vec<AnnotatedWord> = store
        .find_by_type(word_type, q.language)
        .await?
        .into_iter()
        .filter(|w| w.word.to_lowercase().contains(&needle))
        .collect();
    Ok(SearchResult {
        total: matching.len(),
        words: matching.into_iter().skip(q.offset).take(q.limit).collect(),
    })
}

fn runner(config: &AppConfig, store: Arc<dyn WordStore>) -> BatchRunner {
    let annotator = Arc::new(Annotator::from_config(config));
    BatchRunner::new(annotator, store, config.batch.clone())
}

fn init_config(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    println!("wrote default settings to {}", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
