//! Console Logging
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

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
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // Crate root (main.rs) is "APP"; otherwise the last path segment:
    // "todo_list_ui::context" -> "CONTEXT"
    let module = if target == env!("CARGO_CRATE_NAME") {
        "APP".to_string()
    } else {
        target.rsplit("::").next().unwrap_or(target).to_uppercase()
    };
    format!("[{}] {} {}", module, level, message)
}

/// Install the console logger; fails if a logger is already set
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(Level::Debug, "todo_list_ui::context", "dispatch ADD_TODO"),
            "[CONTEXT] DEBUG dispatch ADD_TODO"
        );
        assert_eq!(format_record(Level::Info, "app", "mounted"), "[APP] INFO mounted");
    }

    #[test]
    fn test_crate_root_target_is_app() {
        assert_eq!(
            format_record(Level::Info, env!("CARGO_CRATE_NAME"), "mounting"),
            "[APP] INFO mounting"
        );
    }
}
