//! Terminal and file logging.
//!
//! The [`info!`](crate::info), [`err!`](crate::err) and
//! [`pt!`](crate::pt) macros print a colored line to
//! the terminal (unless silenced with [`set_print`]) and append a
//! timestamped line to the day's log file under `RosterPad/logs/`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};

use owo_colors::OwoColorize;

use crate::ROSTER_DIR;

mod macros;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    Info,
    Error,
    /// A small step in some process.
    Point,
}

impl LogType {
    fn prefix(self) -> &'static str {
        match self {
            LogType::Info => "info",
            LogType::Error => "error",
            LogType::Point => "point",
        }
    }
}

static PRINT_ENABLED: AtomicBool = AtomicBool::new(true);

static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(open_log_file()));

pub fn is_print() -> bool {
    PRINT_ENABLED.load(Ordering::Relaxed)
}

pub fn set_print(enable: bool) {
    PRINT_ENABLED.store(enable, Ordering::Relaxed);
}

pub fn print_term(msg: &str, kind: LogType) {
    if !is_print() {
        return;
    }
    match kind {
        LogType::Info => println!("{} {msg}", "[info]".yellow()),
        LogType::Error => eprintln!("{} {msg}", "[error]".red()),
        LogType::Point => println!("{} {msg}", "-".bold()),
    }
}

pub fn print_to_file(msg: &str, kind: LogType) {
    let Ok(mut guard) = LOG_FILE.lock() else {
        return;
    };
    if let Some(file) = guard.as_mut() {
        _ = file.write_all(format_line(kind, msg).as_bytes());
    }
}

fn open_log_file() -> Option<File> {
    let dir = ROSTER_DIR.join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    let path = dir.join(format!("{}.log", chrono::Local::now().format("%Y-%m-%d")));
    OpenOptions::new().append(true).create(true).open(path).ok()
}

fn format_line(kind: LogType, msg: &str) -> String {
    format!(
        "[{}] [{}] {msg}\n",
        chrono::Local::now().format("%H:%M:%S"),
        kind.prefix()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_carry_kind_and_message() {
        let line = format_line(LogType::Error, "config went missing");
        assert!(line.contains("[error]"));
        assert!(line.ends_with("config went missing\n"));
    }

    #[test]
    fn silencing_stops_terminal_output() {
        set_print(false);
        assert!(!is_print());
        set_print(true);
        assert!(is_print());
    }
}
