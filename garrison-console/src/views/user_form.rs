//! Create/edit user form modal.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use garrison_model::{Base, Role};

use crate::message::{FormEvent, Message};
use crate::state::{FormModal, FormMode};
use crate::theme::{self, ConsoleTheme};

pub fn view<'a>(form: &'a FormModal, bases: &'a [Base]) -> Element<'a, Message> {
    let title = match form.mode {
        FormMode::Create => "Add New User",
        FormMode::Edit { .. } => "Edit User",
    };

    let name_input = labeled(
        "Name",
        text_input("Full name", &form.draft.name)
            .on_input(|value| Message::Form(FormEvent::NameChanged(value)))
            .padding(10)
            .size(14)
            .style(theme::search_input)
            .into(),
    );

    let email_input = labeled(
        "Email",
        text_input("Email address", &form.draft.email)
            .on_input(|value| Message::Form(FormEvent::EmailChanged(value)))
            .padding(10)
            .size(14)
            .style(theme::search_input)
            .into(),
    );

    let password_placeholder = match form.mode {
        FormMode::Create => "Password",
        FormMode::Edit { .. } => "Leave blank to keep current password",
    };
    let password_input = labeled(
        "Password",
        row![
            text_input(password_placeholder, &form.draft.password)
                .on_input(|value| Message::Form(FormEvent::PasswordChanged(value)))
                .secure(!form.show_password)
                .padding(10)
                .size(14)
                .style(theme::search_input),
            button(text(if form.show_password { "Hide" } else { "Show" }).size(12))
                .padding([8, 12])
                .style(theme::secondary_button)
                .on_press(Message::Form(FormEvent::PasswordVisibilityToggled)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
    );

    let role_input = labeled(
        "Role",
        pick_list(Role::ASSIGNABLE, Some(form.draft.role.clone()), |role| {
            Message::Form(FormEvent::RoleSelected(role))
        })
        .padding(10)
        .width(Length::Fill)
        .into(),
    );

    let mut fields = column![name_input, email_input, password_input, role_input].spacing(14);

    // Admins are not tied to a single base
    if !form.draft.role.is_admin() {
        let selected = bases
            .iter()
            .find(|base| Some(&base.id) == form.draft.base.as_ref())
            .cloned();
        fields = fields.push(labeled(
            "Base Assignment",
            pick_list(bases, selected, |base| {
                Message::Form(FormEvent::BaseSelected(base))
            })
            .placeholder("Select a base")
            .padding(10)
            .width(Length::Fill)
            .into(),
        ));
    }

    let can_submit = !form.saving && form.draft.required_fields_present(&form.mode);
    let submit_label = match (&form.mode, form.saving) {
        (_, true) => "Saving...",
        (FormMode::Create, false) => "Create User",
        (FormMode::Edit { .. }, false) => "Save Changes",
    };

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Cancel").size(14))
            .padding([10, 18])
            .style(theme::secondary_button)
            .on_press(Message::CloseForm),
        button(text(submit_label).size(14))
            .padding([10, 18])
            .style(theme::primary_button)
            .on_press_maybe(can_submit.then_some(Message::Form(FormEvent::Submit))),
    ]
    .spacing(10);

    container(
        column![text(title).size(20), fields, actions]
            .spacing(20)
            .width(Length::Fixed(420.0)),
    )
    .padding(24)
    .style(theme::Container::Modal.style())
    .into()
}

fn labeled<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    column![
        text(label).size(12).style(|_theme| iced::widget::text::Style {
            color: Some(ConsoleTheme::TEXT_SECONDARY),
        }),
        input,
    ]
    .spacing(6)
    .into()
}
