//! Root-level view composition

use iced::widget::{center, column, container, mouse_area, opaque, scrollable, stack};
use iced::{Color, Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views::{delete_confirm, header, roster, toasts, user_form};

pub fn view(state: &State) -> Element<'_, Message> {
    let page = column![header::view(state), roster::view(state)]
        .spacing(20)
        .padding(24)
        .max_width(1100);

    let base = container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(theme::Container::Default.style());

    let mut layers = stack![base];

    if let Some(form) = &state.form {
        layers = layers.push(modal_overlay(
            user_form::view(form, &state.bases),
            Message::CloseForm,
        ));
    }

    if let Some(delete) = &state.delete {
        layers = layers.push(modal_overlay(
            delete_confirm::view(delete),
            Message::CancelDelete,
        ));
    }

    if !state.toasts.is_empty() {
        layers = layers.push(toasts::view(state));
    }

    layers.into()
}

/// Dim the page behind `content`; clicking the backdrop dismisses.
fn modal_overlay<'a>(
    content: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    opaque(
        mouse_area(center(opaque(content)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.7,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }))
        .on_press(on_dismiss),
    )
}
