//! Handler for the home screen, where the roster is built.

use iced::Task;
use rp_core::{info, pt};

use crate::state::{HomeMessage, Message, RosterPad, State};

impl RosterPad {
    pub fn update_home(&mut self, message: HomeMessage) -> Task<Message> {
        match message {
            HomeMessage::InputChanged(input) => {
                if let State::Home(menu) = &mut self.state {
                    menu.pending.label = input;
                }
            }

            HomeMessage::Add => {
                if let State::Home(menu) = &mut self.state {
                    if menu.roster.push_non_blank(menu.pending.clone()) {
                        pt!("Added \"{}\"", menu.pending.label);
                        menu.pending.label.clear();
                    }
                }
            }

            HomeMessage::OpenResult => {
                if let State::Home(menu) = &self.state {
                    let list_data = menu.roster.to_string();
                    info!("Opening result screen with {} entries", menu.roster.len());
                    self.go_to_result(list_data);
                }
            }
        }
        Task::none()
    }
}
