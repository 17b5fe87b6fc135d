//! `bench_local.rs`: quick local timing runner for grid generation (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of a handful of level setups on *your* machine.
//! - Each case generates many grids from consecutive seeds; we report the median time per
//!   grid and how many words ended up in the fallback or unplaced.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - More grids per case:            `cargo run --bin bench_local --release -- -g 5000`
//! - Print the first grid per case:  `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Cases live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::direction::Difficulty;
use wordsearch::fill_pool::FillPools;
use wordsearch::generator::{generate, GeneratorConfig};
use wordsearch::script::Language;
use wordsearch::word::TargetWord;

/// Simple local benchmark runner for grid generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grids generated per case (median time per grid is reported)
    #[arg(short = 'g', long = "grids", default_value_t = 1000)]
    num_grids: u64,

    /// Print the first generated grid of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: one level setup.
struct Case {
    name: &'static str,
    language: &'static str,
    difficulty: Difficulty,
    size: usize,
    words: &'static [&'static str],
}

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "en easy 12", language: "en", difficulty: Difficulty::Easy, size: 12, words: &["CAT", "DOG", "BIRD", "FISH", "HORSE"] },
        Case { name: "en hard 12", language: "en", difficulty: Difficulty::Hard, size: 12, words: &["CAT", "DOG", "BIRD", "FISH", "HORSE"] },
        Case { name: "he easy 12", language: "he", difficulty: Difficulty::Easy, size: 12, words: &["שלום", "בית", "ספר", "מים", "אור"] },
        Case { name: "hi hard 12", language: "hi", difficulty: Difficulty::Hard, size: 12, words: &["नमस्ते", "किताब", "पानी", "स्त्री", "हिंदी"] },
        // crowded: long words in a small grid push many words into the fallback
        Case { name: "en crowded 8", language: "en", difficulty: Difficulty::Hard, size: 8, words: &["ELEPHANT", "GIRAFFE", "PENGUIN", "DOLPHIN", "OCTOPUS", "LOBSTER"] },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() {
    let cli = Cli::parse();
    let pools = FillPools::with_defaults();

    eprintln!(
        "{:<14} | {:>12} | {:>9} | {:>9}",
        "case", "median (µs)", "fallback", "unplaced"
    );
    eprintln!("{:-<14}-+-{:-<12}-+-{:-<9}-+-{:-<9}", "", "", "", "");

    for case in get_cases() {
        let language = Language::new(case.language);
        let words: Vec<TargetWord> = case.words.iter().map(|w| TargetWord::new(w, &language)).collect();
        let pool = pools.pool_for(&language, &words);
        let config = GeneratorConfig::default().with_grid_size(case.size);

        let mut times = Vec::with_capacity(usize::try_from(cli.num_grids).unwrap_or(0));
        let mut fallback = 0usize;
        let mut unplaced = 0usize;

        for seed in 0..cli.num_grids {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let t_generate = Instant::now();
            let generated = generate(black_box(&words), &language, case.difficulty, &pool, &config, &mut rng);
            times.push(t_generate.elapsed().as_secs_f64() * 1e6);

            fallback += generated.placements.iter().filter(|p| p.fallback).count();
            unplaced += generated.unplaced.len();

            if cli.print_grid && seed == 0 {
                println!("{}:\n{}", case.name, generated.grid);
            }
        }

        eprintln!(
            "{:<14} | {:>12.1} | {:>9} | {:>9}",
            case.name,
            median(times),
            fallback,
            unplaced
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_segment_cleanly() {
        for case in get_cases() {
            let language = Language::new(case.language);
            for word in case.words {
                let target = TargetWord::new(word, &language);
                assert_eq!(target.units.concat(), *word, "{}", case.name);
            }
        }
    }
}
