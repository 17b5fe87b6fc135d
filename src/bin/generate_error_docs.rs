//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` implementation via its
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::PuzzleError;
use wordsearch::grid::Coord;

/// Helper to create all `PuzzleError` variants for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::UnknownDifficulty { input: "medium".to_string() },
        PuzzleError::InvalidGridSize { size: 0 },
        PuzzleError::CellOutOfBounds { row: 12, col: 4, size: 12 },
        PuzzleError::NotStraightLine { from: Coord::new(0, 0), to: Coord::new(2, 5) },
    ]
}

fn render_error_docs(errors: &[PuzzleError]) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    // NB: writing to a String never fails
    for error in errors {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(out, "**How to fix:**");
            let _ = writeln!(out, "```\n{help_text}\n```\n");
        }

        let _ = writeln!(out, "**Example error message:**");
        let _ = writeln!(out, "```\n{error}\n```\n");

        let _ = writeln!(out, "**Detailed format:**");
        let _ = writeln!(out, "```\n{}\n```\n", error.display_detailed());

        let _ = writeln!(out, "---\n");
    }
    out
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors (P001–P004)\n");
    println!("Errors raised while turning caller input (difficulty names, grid sizes, drag coordinates) into puzzle values. Grid generation and word matching never fail; an unplaceable word is reported in the generated grid instead.\n");
    print!("{}", render_error_docs(&all_puzzle_error_variants()));

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: Unknown difficulty: \"medium\" (P001)");
    println!("Use one of: easy, hard, loose, babel");
    println!("```\n");
    println!("1. Note the error code (e.g., `P001`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_documented_once() {
        let docs = render_error_docs(&all_puzzle_error_variants());
        for code in ["P001", "P002", "P003", "P004"] {
            assert_eq!(docs.matches(&format!("### {code}:")).count(), 1, "{code} should have one section");
        }
    }

    #[test]
    fn test_help_rendered_only_when_present() {
        let with_help = render_error_docs(&[PuzzleError::InvalidGridSize { size: 0 }]);
        assert!(with_help.contains("**How to fix:**"));
        let without_help = render_error_docs(&[PuzzleError::CellOutOfBounds { row: 1, col: 1, size: 1 }]);
        assert!(!without_help.contains("**How to fix:**"));
    }
}
