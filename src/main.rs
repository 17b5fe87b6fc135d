use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use wordsearch::direction::Difficulty;
use wordsearch::errors::PuzzleError;
use wordsearch::fill_pool::{FillGlyphs, FillPools};
use wordsearch::generator::{GeneratorConfig, DEFAULT_GRID_SIZE};
use wordsearch::puzzle::Puzzle;
use wordsearch::script::Language;

/// Word-search grid generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Words to hide in the grid
    #[arg(required = true)]
    words: Vec<String>,

    /// Language code (e.g., en, he, hi)
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Difficulty: easy, hard, loose or babel
    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    /// Grid width and height
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Seed for reproducible grids (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Glyphs to fill empty cells with, overriding the language's built-in pool
    #[arg(short, long)]
    fill: Option<String>,

    /// Random placement attempts per word (0 = fallback placement only)
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Print where each word was placed
    #[arg(short = 'p', long)]
    show_placements: bool,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], printing any error in detailed form before exiting with code 1.
fn main() -> ExitCode {
    wordsearch::log::init_logger(false);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Parse CLI arguments with Clap.
/// 2. Normalize the words and generate the grid.
/// 3. Print the grid on stdout, placements and warnings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let language = Language::new(&cli.language);
    let difficulty: Difficulty = cli.difficulty.parse()?;

    let mut pools = FillPools::with_defaults();
    if let Some(pool) = cli.fill.map(FillGlyphs::Alphabet).and_then(FillGlyphs::into_pool) {
        pools.register(language.code(), pool);
    }

    let mut config = GeneratorConfig::default().with_grid_size(cli.size);
    if let Some(n) = cli.max_attempts {
        config = config.with_max_attempts(n);
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("Using seed {seed}");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let puzzle = Puzzle::from_raw_words(
        cli.words.iter().map(String::as_str),
        language,
        difficulty,
        &pools,
        &config,
        &mut rng,
    )?;

    print!("{}", puzzle.grid());

    if cli.show_placements {
        eprintln!("seed: {seed}");
        for placement in puzzle.placements() {
            let word = &puzzle.words()[placement.word_index];
            eprintln!(
                "{:<16} {} {:?}{}",
                word.text,
                placement.start,
                placement.direction,
                if placement.fallback { " (fallback)" } else { "" }
            );
        }
    }

    for word in puzzle.unplaced() {
        eprintln!("⚠️  \"{}\" did not fit and cannot be found", word.text);
    }

    Ok(())
}
