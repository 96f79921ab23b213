//! Browser Console Logger
//!
//! `log` facade backend writing `[target] message` lines to the devtools
//! console, one console method per level.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    // module path without the crate prefix
    let target = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("{level:<5} [{target}] {message}")
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate_prefix() {
        let line = format_line(Level::Info, "client_portal_ui::pages::invoices", "3 rows");
        assert_eq!(line, "INFO  [pages::invoices] 3 rows");
    }

    #[test]
    fn test_format_line_keeps_bare_target() {
        let line = format_line(Level::Warn, "Config", "fallback");
        assert_eq!(line, "WARN  [Config] fallback");
    }
}
