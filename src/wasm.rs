use crate::direction::Difficulty;
use crate::errors::PuzzleError;
use crate::fill_pool::{FillGlyphs, FillPools};
use crate::generator::GeneratorConfig;
use crate::grid::{Cell, Coord, Placement};
use crate::log::init_logger;
use crate::path::selection_path;
use crate::puzzle::Puzzle;
use crate::script::Language;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "P001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmGrid<'a> {
    size: usize,
    rows: Vec<&'a [Cell]>,
    placements: &'a [Placement],
    unplaced: Vec<&'a str>,
}

/// A level in play, exposed to JavaScript.
///
/// Build a new `WasmPuzzle` for every level or language change; the grid never changes
/// after construction.
#[wasm_bindgen]
pub struct WasmPuzzle {
    puzzle: Puzzle,
}

#[wasm_bindgen]
impl WasmPuzzle {
    /// JS entry: (words: string[], language: string, difficulty: string, size: number,
    /// seed: number, fill?: string | string[])
    ///
    /// `fill`, when given and non-empty, replaces the language's built-in fill pool. A string
    /// is split into single glyphs; an array keeps each entry as one unit.
    #[wasm_bindgen(constructor)]
    pub fn new(
        words: JsValue,
        language: &str,
        difficulty: &str,
        size: usize,
        seed: u64,
        fill: JsValue,
    ) -> Result<WasmPuzzle, JsValue> {
        let raw: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
            code: "WASM001".to_string(),
            message: format!("words must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            help: Some("Pass a JavaScript array of strings, e.g., ['cat', 'dog']".to_string()),
        })?;
        let fill: Option<FillGlyphs> = serde_wasm_bindgen::from_value(fill).map_err(|e| WasmError {
            code: "WASM003".to_string(),
            message: format!("fill must be a string or string[]: {e}"),
            description: "Invalid fill-glyph format".to_string(),
            help: Some("Pass an alphabet string such as 'ABC', an array of units, or leave it undefined".to_string()),
        })?;

        let language = Language::new(language);
        let difficulty: Difficulty = difficulty.parse().map_err(WasmError::from)?;

        let mut pools = FillPools::with_defaults();
        if let Some(pool) = fill.and_then(FillGlyphs::into_pool) {
            pools.register(language.code(), pool);
        }

        let config = GeneratorConfig::default().with_grid_size(size);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let puzzle = Puzzle::from_raw_words(
            raw.iter().map(String::as_str),
            language,
            difficulty,
            &pools,
            &config,
            &mut rng,
        )
        .map_err(WasmError::from)?;

        Ok(WasmPuzzle { puzzle })
    }

    /// Returns `{ size, rows: Cell[][], placements, unplaced }`.
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        let grid = self.puzzle.grid();
        let view = WasmGrid {
            size: grid.size(),
            rows: grid.rows().collect(),
            placements: self.puzzle.placements(),
            unplaced: self.puzzle.unplaced().map(|w| w.text.as_str()).collect(),
        };
        serde_wasm_bindgen::to_value(&view).map_err(|e| serialization_error("grid", e))
    }

    /// Straight selection path for a drag from (start_row, start_col) toward the pointer.
    pub fn path(
        &self,
        start_row: usize,
        start_col: usize,
        pointer_row: usize,
        pointer_col: usize,
    ) -> Result<JsValue, JsValue> {
        let path = selection_path(
            Coord::new(start_row, start_col),
            Coord::new(pointer_row, pointer_col),
            self.puzzle.grid().size(),
        )
        .map_err(WasmError::from)?;
        serde_wasm_bindgen::to_value(&path).map_err(|e| serialization_error("path", e))
    }

    /// Check a finished drag. Returns the found word's text, or `null`.
    pub fn check(
        &mut self,
        start_row: usize,
        start_col: usize,
        pointer_row: usize,
        pointer_col: usize,
    ) -> Result<Option<String>, JsValue> {
        let found = self
            .puzzle
            .check_drag(Coord::new(start_row, start_col), Coord::new(pointer_row, pointer_col))
            .map_err(WasmError::from)?;
        Ok(found.map(|i| self.puzzle.words()[i].text.clone()))
    }

    /// Words not yet found.
    pub fn remaining(&self) -> Result<JsValue, JsValue> {
        let words: Vec<&str> = self.puzzle.remaining().map(|w| w.text.as_str()).collect();
        serde_wasm_bindgen::to_value(&words).map_err(|e| serialization_error("remaining words", e))
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.puzzle.is_complete()
    }

    /// First cell of an unfound word as `{ row, col }`, or `null`.
    pub fn hint(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.puzzle.hint()).map_err(|e| serialization_error("hint", e))
    }
}

/// Generate a debug report for troubleshooting.
///
/// Includes the error message, the level settings, and environment information, formatted
/// for users to paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(
    language: &str,
    difficulty: &str,
    error_message: &str,
    word_count: usize,
    seed: u64,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Level");
    let _ = writeln!(&mut report, "Language: {}", language);
    let _ = writeln!(&mut report, "Difficulty: {}", difficulty);
    let _ = writeln!(&mut report, "Words: {}", word_count);
    let _ = writeln!(&mut report, "Seed: {}", seed);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("hi", "hard", "selection error", 5, 42);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDSEARCH DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(lines[2].starts_with("Generated: "));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "selection error");
        let level_idx = lines.iter().position(|&l| l == "## Level").unwrap();
        assert_eq!(lines[level_idx + 1], "Language: hi");
        assert_eq!(lines[level_idx + 2], "Difficulty: hard");
        assert_eq!(lines[level_idx + 3], "Words: 5");
        assert_eq!(lines[level_idx + 4], "Seed: 42");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_wasm_error_from_puzzle_error() {
        let err = WasmError::from(PuzzleError::UnknownDifficulty { input: "x".to_string() });
        assert_eq!(err.code, "P001");
        assert!(err.help.is_some());
    }

    #[test]
    fn test_fill_accepts_string_and_array() {
        let alphabet: Option<FillGlyphs> = serde_wasm_bindgen::from_value(JsValue::from_str("XYZ")).unwrap();
        assert_eq!(alphabet, Some(FillGlyphs::Alphabet("XYZ".to_string())));

        let units: Option<FillGlyphs> =
            serde_wasm_bindgen::from_value(serde_wasm_bindgen::to_value(&["क्ष", "त्र"]).unwrap()).unwrap();
        assert_eq!(units, Some(FillGlyphs::Units(vec!["क्ष".to_string(), "त्र".to_string()])));

        let absent: Option<FillGlyphs> = serde_wasm_bindgen::from_value(JsValue::UNDEFINED).unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn test_invalid_fill_is_an_error() {
        let result = WasmPuzzle::new(
            serde_wasm_bindgen::to_value(&["cat"]).unwrap(),
            "en",
            "easy",
            12,
            1,
            JsValue::from_f64(42.0),
        );
        assert!(result.is_err());
    }
}
