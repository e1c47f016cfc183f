//! Word Scramble - CLI
//!
//! Find words hidden in a random root word, in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use word_scramble::{
    commands::{find_solutions, run_check, run_simple},
    dictionary::WordListDictionary,
    game::Session,
    logging::{self, LogTarget},
    output::{print_check_result, print_solutions_result},
    wordlists::{
        DICTIONARY, START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: the built-in list)
    #[arg(short = 'w', long, global = true)]
    start_words: Option<PathBuf>,

    /// Seed for choosing root words, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "warn")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, without TUI)
    Simple,

    /// Submit words against a given root and report each outcome
    Check {
        /// Root word to play against
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List every word that can be made from a root
    Solutions {
        /// Root word (default: a random one from the word list)
        root: Option<String>,
    },
}

/// Load the root word list from the -w flag, or the built-in list
///
/// An unreadable or empty list is fatal: there is no sensible game without one.
fn load_start_words(path: Option<&PathBuf>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load word list {}", path.display()))?,
        None => words_from_slice(START_WORDS),
    };

    if words.is_empty() {
        anyhow::bail!("Word list contains no root words");
    }
    Ok(words)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let dictionary = WordListDictionary::embedded();
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => {
            let start_words = load_start_words(cli.start_words.as_ref())?;
            run_play_command(&start_words, &dictionary, rng)
        }
        Commands::Simple => {
            let start_words = load_start_words(cli.start_words.as_ref())?;
            run_simple(&start_words, &dictionary, &mut rng)
        }
        Commands::Check { root, words } => {
            let result = run_check(&root, &words, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solutions { root } => {
            let root = match root {
                Some(root) => root,
                None => {
                    let start_words = load_start_words(cli.start_words.as_ref())?;
                    Session::start_with_rng(&start_words, &mut rng)?
                        .root()
                        .to_string()
                }
            };
            print_solutions_result(&find_solutions(&root, DICTIONARY));
            Ok(())
        }
    }
}

fn run_play_command(
    start_words: &[String],
    dictionary: &WordListDictionary,
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(start_words, dictionary, rng)?;
    run_tui(app)
}
