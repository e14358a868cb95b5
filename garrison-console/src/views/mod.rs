pub mod delete_confirm;
pub mod header;
pub mod roster;
pub mod toasts;
pub mod user_form;

use iced::widget::{container, text};
use iced::Element;

use crate::message::Message;
use crate::theme;
use garrison_model::Role;

/// Pill-shaped role badge used by the roster and both modals.
pub fn role_badge(role: &Role) -> Element<'_, Message> {
    container(text(role.label()).size(12))
        .padding([3, 10])
        .style(theme::role_badge(role))
        .into()
}
