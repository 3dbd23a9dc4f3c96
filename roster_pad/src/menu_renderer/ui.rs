use iced::widget;

use crate::menu_renderer::Element;
use crate::state::Message;

/// Plain-text Back control, shown on every screen reachable from home.
pub fn back_button<'a>() -> widget::Button<'a, Message> {
    widget::button(widget::text("Back").size(14)).style(widget::button::secondary)
}

pub fn center_x<'a>(e: impl Into<Element<'a>>) -> Element<'a> {
    widget::row![
        widget::horizontal_space(),
        e.into(),
        widget::horizontal_space(),
    ]
    .into()
}
