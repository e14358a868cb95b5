//! Delete-confirmation modal.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::DeleteModal;
use crate::theme::{self, ConsoleTheme};
use crate::views::role_badge;

pub fn view(modal: &DeleteModal) -> Element<'_, Message> {
    let user = &modal.target;

    let base_line = match &user.base {
        Some(base) => format!("Assigned to {} ({})", base.name, base.state),
        None => "No base assignment".to_string(),
    };

    let summary = column![
        row![
            text(&user.name).size(15),
            role_badge(&user.role),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        text(&user.email)
            .size(13)
            .style(|_theme| iced::widget::text::Style {
                color: Some(ConsoleTheme::TEXT_SECONDARY),
            }),
        text(base_line)
            .size(13)
            .style(|_theme| iced::widget::text::Style {
                color: Some(ConsoleTheme::TEXT_DIMMED),
            }),
    ]
    .spacing(6);

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Cancel").size(14))
            .padding([10, 18])
            .style(theme::secondary_button)
            .on_press(Message::CancelDelete),
        button(text(if modal.deleting { "Deleting..." } else { "Delete User" }).size(14))
            .padding([10, 18])
            .style(theme::destructive_button)
            .on_press_maybe((!modal.deleting).then_some(Message::ConfirmDelete)),
    ]
    .spacing(10);

    container(
        column![
            text("Delete User").size(20),
            text("This action cannot be undone.")
                .size(13)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::ERROR),
                }),
            summary,
            actions,
        ]
        .spacing(18)
        .width(Length::Fixed(380.0)),
    )
    .padding(24)
    .style(theme::Container::Modal.style())
    .into()
}
