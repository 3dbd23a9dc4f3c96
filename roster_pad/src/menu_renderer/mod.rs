use iced::{widget, Alignment, Length};

use crate::menu_renderer::ui::{back_button, center_x};
use crate::state::{HomeMessage, MenuHome, MenuResult, Message, RosterPad, State};

/// Helpful UI components/handrolled widgets
pub mod ui;

pub type Element<'a> = iced::Element<'a, Message>;

impl RosterPad {
    pub fn view(&self) -> Element<'_> {
        match &self.state {
            State::Home(menu) => menu.view(),
            State::Result(menu) => menu.view(),
        }
    }
}

impl MenuHome {
    pub fn view(&self) -> Element<'_> {
        let labels: Vec<String> = self.roster.labels().map(str::to_owned).collect();

        widget::scrollable(
            widget::column![
                widget::row![
                    widget::horizontal_space(),
                    widget::button(widget::text("Theme").size(12))
                        .on_press(Message::CoreThemeToggled)
                        .style(widget::button::text),
                ],
                widget::text("Enter a name").size(20),
                widget::text_input("Type here...", &self.pending.label)
                    .on_input(|input| Message::Home(HomeMessage::InputChanged(input)))
                    .on_submit(Message::Home(HomeMessage::Add))
                    .width(240),
                widget::row![
                    widget::button(widget::text("Add").size(14))
                        .on_press(Message::Home(HomeMessage::Add))
                        .style(widget::button::primary),
                    widget::button(widget::text("View Roster").size(14))
                        .on_press(Message::Home(HomeMessage::OpenResult))
                        .style(widget::button::secondary),
                ]
                .spacing(5),
                widget::horizontal_rule(1),
                // Rebuilt only when the roster actually changes.
                widget::lazy(self.roster.revision(), move |_| {
                    widget::column(labels.iter().map(|label| {
                        center_x(widget::text(label.clone()).size(16))
                    }))
                    .spacing(8)
                    .width(Length::Fill)
                }),
            ]
            .align_x(Alignment::Center)
            .padding(16)
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

impl MenuResult {
    pub fn view(&self) -> Element<'_> {
        widget::column![
            widget::row![back_button().on_press(Message::HomeScreenOpen)],
            widget::vertical_space(),
            center_x(widget::text(&self.list_data).size(16)),
            widget::vertical_space(),
        ]
        .padding(16)
        .spacing(10)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
