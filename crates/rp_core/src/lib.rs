//! Core library for RosterPad, a pocket-sized roster collector.
//!
//! This crate holds everything the GUI doesn't: the roster data model,
//! error types, and the logging macros. It has no knowledge of any
//! windowing or rendering library.

use std::path::PathBuf;
use std::sync::LazyLock;

mod error;
pub mod print;
mod roster;

pub use error::{IntoIoError, IntoJsonError, IoError, JsonError, JsonFileError};
pub use roster::{Entry, Roster};

/// Version of the RosterPad application, as shown in logs
/// and recorded in the config file.
pub const VERSION_NAME: &str = "0.1.0";

/// Directory where RosterPad keeps its config and logs.
///
/// `<platform config dir>/RosterPad`, falling back to a `RosterPad`
/// directory next to the working directory on platforms where no
/// config dir can be determined.
pub static ROSTER_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::config_dir()
        .map(|dir| dir.join("RosterPad"))
        .unwrap_or_else(|| PathBuf::from("RosterPad"))
});
