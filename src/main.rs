//! Word Elimination - CLI
//!
//! Word pair matching game with TUI and line modes, plus list management commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_elimination::{
    commands::{export_list, import_paths, run_simple, summarize},
    core::PairCount,
    game::Session,
    output::{print_import_report, print_list_summary},
    store::{JsonFileStore, WordListStore},
    wordlists::{SAMPLE_LINES_COUNT, sample_pairs},
};

#[derive(Parser)]
#[command(
    name = "word_elimination",
    about = "Word/phrase elimination game: match each word with its pair against the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file holding the title and the word list
    #[arg(long, global = true, default_value = "word_game.json")]
    store: PathBuf,

    /// Pairs per round (5-50)
    #[arg(short, long, global = true, default_value_t = PairCount::DEFAULT.get())]
    pairs: usize,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Word list to import before playing (.xlsx or .txt)
        file: Option<PathBuf>,
    },

    /// Simple line mode (pick tiles by number)
    Simple {
        /// Word list to import before playing (.xlsx or .txt)
        file: Option<PathBuf>,
    },

    /// Import a word list; only the first file is used
    Import {
        /// Files to import (.xlsx or .txt)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the stored title and word list
    Show {
        /// List every pair instead of the first few
        #[arg(short, long)]
        verbose: bool,
    },

    /// Export the stored list as a text file that can be imported again
    Export {
        /// Destination path
        path: PathBuf,
    },

    /// Set the game title (empty restores the default)
    Title {
        /// New title
        title: String,
    },

    /// Load the built-in sample word list
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { file: None });
    let interactive = matches!(command, Commands::Play { .. });
    init_logging(cli.log_file.as_deref(), interactive)?;

    let pair_count = PairCount::clamped(cli.pairs);
    let store = open_store(&cli.store)?;

    match command {
        Commands::Play { file } => run_play_command(store, pair_count, file),
        Commands::Simple { file } => run_simple_command(store, pair_count, file),
        Commands::Import { files } => {
            let mut session = Session::new(store, pair_count);
            let report = import_paths(&mut session, &files)?;
            print_import_report(&report);
            Ok(())
        }
        Commands::Show { verbose } => {
            print_list_summary(&summarize(&store, pair_count), verbose);
            Ok(())
        }
        Commands::Export { path } => {
            let written = export_list(store.words(), &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {written} pairs to {}", path.display());
            Ok(())
        }
        Commands::Title { title } => {
            let mut store = store;
            store.set_title(&title)?;
            println!("Title set to \"{}\"", store.title());
            Ok(())
        }
        Commands::Demo => {
            let mut session = Session::new(store, pair_count);
            session.load_pairs(&sample_pairs())?;
            println!(
                "Loaded {} sample pairs ({SAMPLE_LINES_COUNT} lines embedded)",
                session.word_count()
            );
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// Line commands log to stderr. The TUI owns the terminal, so it only logs
/// when a log file is given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn open_store(path: &Path) -> Result<WordListStore<JsonFileStore>> {
    let backend = JsonFileStore::open(path)
        .with_context(|| format!("failed to open store {}", path.display()))?;
    let store = WordListStore::open(backend)?;
    info!(path = %path.display(), pairs = store.len(), "store opened");
    Ok(store)
}

fn run_simple_command(
    store: WordListStore<JsonFileStore>,
    pair_count: PairCount,
    file: Option<PathBuf>,
) -> Result<()> {
    let mut session = Session::new(store, pair_count);
    if let Some(file) = file {
        let report = import_paths(&mut session, &[file])?;
        print_import_report(&report);
    }
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(
    store: WordListStore<JsonFileStore>,
    pair_count: PairCount,
    file: Option<PathBuf>,
) -> Result<()> {
    use word_elimination::interactive::{App, run_tui};

    let mut app = App::new(Session::new(store, pair_count));
    if let Some(file) = file {
        app.import_file(&file.to_string_lossy());
    }
    run_tui(app)
}
