//! Logger setup for the CLI and the browser build.
//!
//! Records from this crate are shown at `Info`, or `Debug` when asked for; dependencies
//! only get through at `Warn`. Native builds also read [`DEBUG_ENV_VAR`] and `RUST_LOG`.

use log::LevelFilter;

/// Environment variable that turns on debug output in native builds.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

const CRATE_TARGET: &str = "wordsearch";

fn crate_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Whether a [`DEBUG_ENV_VAR`] value asks for debug output. Unset, empty, `0` and `false`
/// do not.
#[cfg(not(target_arch = "wasm32"))]
fn debug_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
    })
}

/// Initialize logging for the word-search core.
///
/// - **Native (CLI):** debug output when `debug_enabled` or [`DEBUG_ENV_VAR`] is set;
///   `RUST_LOG` directives are applied on top.
/// - **WASM:** console logging at `Debug` if `debug_enabled`, otherwise `Info`.
///
/// Calling this more than once is harmless; later calls leave the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    init_console(crate_level(debug_enabled));

    #[cfg(not(target_arch = "wasm32"))]
    init_native(
        debug_enabled || debug_requested(std::env::var(DEBUG_ENV_VAR).ok().as_deref()),
    );
}

#[cfg(target_arch = "wasm32")]
fn init_console(level: LevelFilter) {
    // console_log filters by level only, so dependency records share the crate level
    let Some(level) = level.to_level() else {
        return;
    };
    match console_log::init_with_level(level) {
        Ok(()) => log::debug!("{CRATE_TARGET}: console logging at {level}"),
        Err(e) => {
            let msg = format!("{CRATE_TARGET}: console logging unavailable ({e})");
            web_sys::console::error_1(&msg.into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_native(debug_enabled: bool) {
    let level = crate_level(debug_enabled);
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_TARGET, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logging {CRATE_TARGET} records at {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level() {
        assert_eq!(crate_level(true), LevelFilter::Debug);
        assert_eq!(crate_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_debug_requested() {
        assert!(!debug_requested(None));
        assert!(!debug_requested(Some("")));
        assert!(!debug_requested(Some("0")));
        assert!(!debug_requested(Some(" FALSE ")));
        assert!(debug_requested(Some("1")));
        assert!(debug_requested(Some("yes")));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
    }
}
