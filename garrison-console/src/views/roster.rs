//! User roster table: loading, empty, and row states.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use garrison_model::User;

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, ConsoleTheme};
use crate::views::role_badge;

pub fn view(state: &State) -> Element<'_, Message> {
    if state.loading_users {
        return container(
            text("Loading users...")
                .size(15)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::TEXT_DIMMED),
                }),
        )
        .width(Length::Fill)
        .padding(48)
        .align_x(iced::alignment::Horizontal::Center)
        .style(theme::Container::EmptyState.style())
        .into();
    }

    if state.filtered_users.is_empty() {
        return container(
            text("No users found")
                .size(15)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::TEXT_DIMMED),
                }),
        )
        .width(Length::Fill)
        .padding(48)
        .align_x(iced::alignment::Horizontal::Center)
        .style(theme::Container::EmptyState.style())
        .into();
    }

    let rows = state.filtered_users.iter().map(user_row);

    container(column![header_row()].extend(rows).spacing(1))
        .style(theme::Container::Card.style())
        .into()
}

fn header_row<'a>() -> Element<'a, Message> {
    container(
        row![
            text("User").size(12).width(Length::FillPortion(3)),
            text("Role").size(12).width(Length::FillPortion(2)),
            text("Base").size(12).width(Length::FillPortion(2)),
            text("Actions").size(12).width(Length::Fixed(140.0)),
        ]
        .spacing(12),
    )
    .padding([8, 16])
    .width(Length::Fill)
    .style(theme::Container::TableHeader.style())
    .into()
}

fn user_row(user: &User) -> Element<'_, Message> {
    let identity = row![
        avatar(&user.name),
        column![
            text(&user.name).size(14),
            text(&user.email)
                .size(12)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::TEXT_SECONDARY),
                }),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .width(Length::FillPortion(3));

    let base_cell: Element<'_, Message> = match &user.base {
        Some(base) => column![
            text(&base.name).size(13),
            text(&base.state)
                .size(12)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(ConsoleTheme::TEXT_DIMMED),
                }),
        ]
        .spacing(2)
        .width(Length::FillPortion(2))
        .into(),
        None => text("Unassigned")
            .size(13)
            .style(|_theme| iced::widget::text::Style {
                color: Some(ConsoleTheme::TEXT_DIMMED),
            })
            .width(Length::FillPortion(2))
            .into(),
    };

    let mut actions = row![button(text("Edit").size(12))
        .padding([6, 12])
        .style(theme::secondary_button)
        .on_press(Message::OpenEditForm(user.clone()))]
    .spacing(8)
    .width(Length::Fixed(140.0));

    // Admins cannot be deleted from the console
    if !user.role.is_admin() {
        actions = actions.push(
            button(text("Delete").size(12))
                .padding([6, 12])
                .style(theme::destructive_button)
                .on_press(Message::RequestDelete(user.clone())),
        );
    }

    row![
        identity,
        container(role_badge(&user.role)).width(Length::FillPortion(2)),
        base_cell,
        actions,
    ]
    .spacing(12)
    .padding([10, 16])
    .align_y(Alignment::Center)
    .into()
}

fn avatar(name: &str) -> Element<'_, Message> {
    container(text(initials(name)).size(14))
        .width(Length::Fixed(36.0))
        .height(Length::Fixed(36.0))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(|_theme| iced::widget::container::Style {
            text_color: Some(ConsoleTheme::TEXT_PRIMARY),
            background: Some(iced::Background::Color(ConsoleTheme::ACCENT)),
            border: iced::Border {
                radius: 18.0.into(),
                ..iced::Border::default()
            },
            shadow: iced::Shadow::default(),
        })
        .into()
}

/// Avatar initials: first letter of up to two name tokens, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_tokens() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Jane Alice Doe"), "JA");
    }

    #[test]
    fn initials_handle_short_and_empty_names() {
        assert_eq!(initials("jane"), "J");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }
}
