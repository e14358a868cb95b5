//! Page header: title, summary stat cards, search box, add button.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{roster_stats, State};
use crate::theme::{self, ConsoleTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let stats = roster_stats(&state.users);

    let title_row = row![
        column![
            text("User Management").size(26),
            text("Roster, roles and base assignments")
                .size(14)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::TEXT_SECONDARY),
                }),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        button(text("Add User").size(14))
            .padding([10, 18])
            .style(theme::primary_button)
            .on_press(Message::OpenCreateForm),
    ]
    .align_y(iced::Alignment::Center);

    let stat_cards = row![
        stat_card("Total Users", stats.total_users),
        stat_card("Admins", stats.admin_users),
        stat_card("Active", stats.active_users),
        stat_card("Bases", stats.distinct_bases),
    ]
    .spacing(12);

    let search = text_input("Search by name, email, role or base...", &state.search_term)
        .on_input(Message::SearchChanged)
        .padding(10)
        .size(14)
        .style(theme::search_input);

    column![title_row, stat_cards, search]
        .spacing(16)
        .width(Length::Fill)
        .into()
}

fn stat_card<'a>(label: &'a str, value: usize) -> Element<'a, Message> {
    container(
        column![
            text(value.to_string()).size(24),
            text(label).size(12).style(|_theme| iced::widget::text::Style {
                color: Some(ConsoleTheme::TEXT_DIMMED),
            }),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::StatCard.style())
    .into()
}
