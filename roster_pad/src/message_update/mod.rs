//! Message handlers. All state mutation happens here, synchronously on
//! the UI thread; the renderer in [`crate::menu_renderer`] only reads.

use iced::Task;
use rp_core::{err, info};

use crate::state::{Message, RosterPad};

mod home;

impl RosterPad {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(msg) => return self.update_home(msg),

            Message::HomeScreenOpen => {
                info!("Back to the home screen");
                self.go_to_home();
            }

            Message::CoreThemeToggled => {
                self.config.theme = Some(self.config.theme.unwrap_or_default().flipped());

                let config = self.config.clone();
                return Task::perform(
                    async move { config.save().await.map_err(|error| error.to_string()) },
                    Message::CoreConfigSaved,
                );
            }

            Message::CoreConfigSaved(result) => {
                if let Err(error) = result {
                    err!("Could not save config: {error}");
                }
            }
        }
        Task::none()
    }
}
