use iced::Task;
use rp_core::{Entry, Roster};

use crate::config::RosterConfig;

/// The entire application, one screen at a time.
pub struct RosterPad {
    pub state: State,
    pub config: RosterConfig,
}

/// Which screen is currently shown, with that screen's state.
pub enum State {
    Home(MenuHome),
    Result(MenuResult),
}

/// Screen where names are typed and collected.
///
/// Owns both the in-progress input and the accumulated roster; both
/// are dropped when the screen is left and rebuilt fresh when it's
/// entered again.
pub struct MenuHome {
    pub pending: Entry,
    pub roster: Roster,
}

impl MenuHome {
    pub fn new() -> Self {
        Self {
            pending: Entry::default(),
            roster: Roster::with_sample_entries(),
        }
    }
}

impl Default for MenuHome {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen that shows the collected roster as one piece of text.
///
/// Holds only the already-serialized string it was handed; it never
/// parses it back.
pub struct MenuResult {
    pub list_data: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Home(HomeMessage),
    /// Back to a fresh home screen.
    HomeScreenOpen,
    CoreThemeToggled,
    CoreConfigSaved(Result<(), String>),
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    InputChanged(String),
    Add,
    OpenResult,
}

impl RosterPad {
    pub fn new(config: RosterConfig) -> (Self, Task<Message>) {
        (
            Self {
                state: State::Home(MenuHome::new()),
                config,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "RosterPad".to_owned()
    }

    pub fn theme(&self) -> iced::Theme {
        self.config.c_theme()
    }

    pub fn go_to_home(&mut self) {
        self.state = State::Home(MenuHome::new());
    }

    pub fn go_to_result(&mut self, list_data: String) {
        self.state = State::Result(MenuResult { list_data });
    }
}
