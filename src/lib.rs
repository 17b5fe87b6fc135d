// Reusable library API, visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod fill_pool;
pub mod generator;
pub mod grid;
pub mod log;
pub mod matcher;
pub mod path;
pub mod puzzle;
pub mod script;
pub mod segmenter;
pub mod word;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::{Difficulty, Direction};
pub use errors::PuzzleError;
pub use fill_pool::{FillPoolProvider, FillPools};
pub use generator::{generate, GeneratedGrid, GeneratorConfig};
pub use grid::{Cell, Coord, Grid, Placement};
pub use matcher::match_selection;
pub use path::{selection_path, trace_line};
pub use puzzle::Puzzle;
pub use script::Language;
pub use segmenter::segment;
pub use word::TargetWord;
