//! Create/edit form handlers.

use iced::Task;
use log::{error, info, warn};

use garrison_model::User;

use crate::message::{FormEvent, Message};
use crate::state::{FormModal, FormMode, State};
use crate::toast::Severity;
use crate::updates::roster;

pub fn handle_open_create(state: &mut State) -> Task<Message> {
    state.form = Some(FormModal::create());
    Task::none()
}

pub fn handle_open_edit(state: &mut State, user: User) -> Task<Message> {
    info!("Editing user {}", user.id);
    state.form = Some(FormModal::edit(user));
    Task::none()
}

pub fn handle_close(state: &mut State) -> Task<Message> {
    state.form = None;
    Task::none()
}

pub fn handle_event(state: &mut State, event: FormEvent) -> Task<Message> {
    let Some(form) = state.form.as_mut() else {
        return Task::none();
    };

    match event {
        FormEvent::NameChanged(name) => {
            form.draft.name = name;
            Task::none()
        }
        FormEvent::EmailChanged(email) => {
            form.draft.email = email;
            Task::none()
        }
        FormEvent::PasswordChanged(password) => {
            form.draft.password = password;
            Task::none()
        }
        FormEvent::PasswordVisibilityToggled => {
            form.show_password = !form.show_password;
            Task::none()
        }
        FormEvent::RoleSelected(role) => {
            form.draft.role = role;
            Task::none()
        }
        FormEvent::BaseSelected(base) => {
            // Drafts carry the plain identifier, never the Base object
            form.draft.base = Some(base.id);
            Task::none()
        }
        FormEvent::Submit => submit(state),
    }
}

fn submit(state: &mut State) -> Task<Message> {
    let Some(form) = state.form.as_mut() else {
        return Task::none();
    };
    if form.saving {
        return Task::none();
    }
    if !form.draft.required_fields_present(&form.mode) {
        warn!("Rejecting submit with missing required fields");
        // A password is only required when creating
        let notice = if form.is_create() {
            "Name, email and password are required"
        } else {
            "Name and email are required"
        };
        return state.push_toast(Severity::Error, notice);
    }

    form.saving = true;
    let service = state.services.users.clone();
    match &form.mode {
        FormMode::Create => {
            let request = form.draft.create_request();
            info!("Creating user {}", request.email);
            Task::perform(
                async move { service.create_user(request).await.map_err(|e| e.to_string()) },
                Message::SaveFinished,
            )
        }
        FormMode::Edit { target } => {
            let user_id = target.id.clone();
            let request = form.draft.update_request();
            info!("Updating user {user_id}");
            Task::perform(
                async move {
                    service
                        .update_user(user_id, request)
                        .await
                        .map_err(|e| e.to_string())
                },
                Message::SaveFinished,
            )
        }
    }
}

/// Always clears the in-flight flag; only success schedules the roster
/// refresh. The result is processed even when the modal was dismissed while
/// the save was in flight, since the server state changed regardless.
pub fn handle_save_finished(state: &mut State, result: Result<User, String>) -> Task<Message> {
    let was_create = state.form.as_mut().map(|form| {
        form.saving = false;
        form.is_create()
    });

    match result {
        Ok(user) => {
            info!("Saved user {} ({})", user.name, user.id);
            state.form = None;
            let notice = match was_create {
                Some(true) => "User created successfully",
                Some(false) => "User updated successfully",
                None => "User saved successfully",
            };
            let toast = state.push_toast(Severity::Success, notice);
            let refresh = roster::handle_fetch_users(state);
            Task::batch([toast, refresh])
        }
        Err(error) => {
            error!("Failed to save user: {error}");
            let notice = match was_create {
                Some(true) => "Failed to create user",
                Some(false) => "Failed to update user",
                None => "Failed to save user",
            };
            // An open modal stays open for retry
            state.push_toast(Severity::Error, notice)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::stubs::{sample_base, sample_user, StubDirectory};
    use crate::infrastructure::Services;
    use crate::toast::Severity;
    use garrison_model::Role;
    use std::sync::Arc;

    fn state() -> State {
        State::new(Services::from_stub(Arc::new(StubDirectory::empty())))
    }

    #[test]
    fn edit_seeds_draft_without_password() {
        let mut state = state();
        let base = sample_base("b-1", "Delta", "TX");
        let user = sample_user(
            "u-1",
            "Jane Doe",
            "jane@x.com",
            Role::BaseCommander,
            Some(base),
        );

        let _ = handle_open_edit(&mut state, user);

        let form = state.form.as_ref().unwrap();
        assert_eq!(form.draft.name, "Jane Doe");
        assert_eq!(form.draft.email, "jane@x.com");
        assert!(form.draft.password.is_empty());
        assert_eq!(form.draft.base.as_ref().unwrap().as_str(), "b-1");
        assert!(!form.is_create());
    }

    #[test]
    fn create_opens_with_an_empty_draft() {
        let mut state = state();
        let _ = handle_open_create(&mut state);

        let form = state.form.as_ref().unwrap();
        assert!(form.is_create());
        assert!(form.draft.name.is_empty());
        assert!(form.draft.base.is_none());
    }

    #[test]
    fn submit_with_missing_fields_is_rejected() {
        let mut state = state();
        let _ = handle_open_create(&mut state);

        let _ = handle_event(&mut state, FormEvent::Submit);

        let form = state.form.as_ref().unwrap();
        assert!(!form.saving);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].severity, Severity::Error);
    }

    #[test]
    fn submit_sets_saving_and_blocks_resubmission() {
        let mut state = state();
        let _ = handle_open_create(&mut state);
        {
            let form = state.form.as_mut().unwrap();
            form.draft.name = "Jane Doe".to_string();
            form.draft.email = "jane@x.com".to_string();
            form.draft.password = "hunter2".to_string();
        }

        let _ = handle_event(&mut state, FormEvent::Submit);
        assert!(state.form.as_ref().unwrap().saving);

        // Second submit while in flight is a no-op
        let _ = handle_event(&mut state, FormEvent::Submit);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn successful_save_closes_form_and_schedules_refresh() {
        let mut state = state();
        let _ = handle_open_create(&mut state);
        state.form.as_mut().unwrap().saving = true;

        let saved = sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, None);
        let _ = handle_save_finished(&mut state, Ok(saved));

        assert!(state.form.is_none());
        assert!(state.loading_users, "refresh should have been scheduled");
        assert_eq!(state.fetch_epoch, 1);
        assert_eq!(state.toasts[0].severity, Severity::Success);
    }

    #[test]
    fn save_landing_after_dismissal_still_schedules_refresh() {
        let mut state = state();
        let _ = handle_open_create(&mut state);
        state.form.as_mut().unwrap().saving = true;

        // User closes the modal while the save is in flight
        let _ = handle_close(&mut state);
        assert!(state.form.is_none());

        let saved = sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, None);
        let _ = handle_save_finished(&mut state, Ok(saved));

        assert!(state.loading_users, "refresh should have been scheduled");
        assert_eq!(state.fetch_epoch, 1);
        assert_eq!(state.toasts[0].severity, Severity::Success);
    }

    #[test]
    fn edit_rejection_toast_does_not_mention_password() {
        let mut state = state();
        let user = sample_user("u-1", "Jane Doe", "", Role::BaseCommander, None);
        let _ = handle_open_edit(&mut state, user);

        let _ = handle_event(&mut state, FormEvent::Submit);

        assert_eq!(state.toasts[0].message, "Name and email are required");
    }

    #[test]
    fn failed_save_clears_saving_but_keeps_modal_open() {
        let mut state = state();
        let user = sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, None);
        let _ = handle_open_edit(&mut state, user);
        state.form.as_mut().unwrap().saving = true;

        let _ = handle_save_finished(&mut state, Err("boom".to_string()));

        let form = state.form.as_ref().unwrap();
        assert!(!form.saving);
        assert!(!state.loading_users);
        assert_eq!(state.toasts[0].message, "Failed to update user");
    }
}
