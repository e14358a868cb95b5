//! Toast notification overlay.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Background, Border, Element, Length, Shadow};

use crate::message::Message;
use crate::state::State;
use crate::theme::ConsoleTheme;
use crate::toast::{Severity, Toast};

pub fn view(state: &State) -> Element<'_, Message> {
    let cards = column(state.toasts.iter().map(toast_card)).spacing(8);

    container(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(16)
        .into()
}

fn toast_card(toast: &Toast) -> Element<'_, Message> {
    let accent = match toast.severity {
        Severity::Success => ConsoleTheme::SUCCESS,
        Severity::Error => ConsoleTheme::ERROR,
    };

    container(
        row![
            text(&toast.message).size(13),
            button(text("x").size(12))
                .padding([2, 8])
                .style(|_theme, _status| iced::widget::button::Style {
                    background: None,
                    text_color: ConsoleTheme::TEXT_DIMMED,
                    ..iced::widget::button::Style::default()
                })
                .on_press(Message::DismissToast(toast.id)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([10, 14])
    .style(move |_theme| iced::widget::container::Style {
        text_color: Some(ConsoleTheme::TEXT_PRIMARY),
        background: Some(Background::Color(ConsoleTheme::CARD_BG)),
        border: Border {
            color: accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    })
    .into()
}
