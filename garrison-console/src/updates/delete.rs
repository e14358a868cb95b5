//! Delete-confirmation handlers.

use iced::Task;
use log::{error, info, warn};

use garrison_model::{User, UserId};

use crate::message::Message;
use crate::state::{DeleteModal, State};
use crate::toast::Severity;
use crate::updates::roster;

pub fn handle_request(state: &mut State, user: User) -> Task<Message> {
    // UI-level rule only, not a security boundary; the row also hides the
    // delete button for admins.
    if user.role.is_admin() {
        warn!("Refusing to open delete confirmation for admin {}", user.id);
        return Task::none();
    }

    state.delete = Some(DeleteModal {
        target: user,
        deleting: false,
    });
    Task::none()
}

pub fn handle_cancel(state: &mut State) -> Task<Message> {
    state.delete = None;
    Task::none()
}

pub fn handle_confirm(state: &mut State) -> Task<Message> {
    let Some(modal) = state.delete.as_mut() else {
        return Task::none();
    };
    if modal.deleting {
        return Task::none();
    }

    modal.deleting = true;
    let user_id = modal.target.id.clone();
    info!("Deleting user {user_id}");
    let service = state.services.users.clone();
    Task::perform(
        async move {
            service
                .delete_user(user_id.clone())
                .await
                .map(|_| user_id)
                .map_err(|e| e.to_string())
        },
        Message::DeleteFinished,
    )
}

pub fn handle_finished(state: &mut State, result: Result<UserId, String>) -> Task<Message> {
    if let Some(modal) = state.delete.as_mut() {
        modal.deleting = false;
    }

    match result {
        Ok(user_id) => {
            info!("Deleted user {user_id}");
            state.delete = None;
            let toast = state.push_toast(Severity::Success, "User deleted successfully");
            let refresh = roster::handle_fetch_users(state);
            Task::batch([toast, refresh])
        }
        Err(error) => {
            error!("Failed to delete user: {error}");
            // Modal stays open; canonical list untouched
            state.push_toast(Severity::Error, "Failed to delete user")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::stubs::{sample_user, StubDirectory};
    use crate::infrastructure::Services;
    use garrison_model::Role;
    use std::sync::Arc;

    fn state() -> State {
        State::new(Services::from_stub(Arc::new(StubDirectory::empty())))
    }

    #[test]
    fn admin_delete_request_is_ignored() {
        let mut state = state();
        let admin = sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, None);

        let _ = handle_request(&mut state, admin);
        assert!(state.delete.is_none());
    }

    #[test]
    fn non_admin_delete_request_opens_the_modal() {
        let mut state = state();
        let user = sample_user("u-2", "Sam Park", "sam@x.com", Role::Analyst, None);

        let _ = handle_request(&mut state, user);
        let modal = state.delete.as_ref().unwrap();
        assert_eq!(modal.target.name, "Sam Park");
        assert!(!modal.deleting);
    }

    #[test]
    fn successful_delete_closes_modal_and_schedules_refresh() {
        let mut state = state();
        let user = sample_user("u-2", "Sam Park", "sam@x.com", Role::Analyst, None);
        let _ = handle_request(&mut state, user);
        state.delete.as_mut().unwrap().deleting = true;

        let _ = handle_finished(&mut state, Ok(UserId::new("u-2")));

        assert!(state.delete.is_none());
        assert!(state.loading_users, "refresh should have been scheduled");
        assert_eq!(state.fetch_epoch, 1);
    }

    #[test]
    fn failed_delete_keeps_modal_open_and_list_unchanged() {
        let mut state = state();
        state.users = vec![sample_user("u-2", "Sam Park", "sam@x.com", Role::Analyst, None)];
        state.apply_filter();
        let target = state.users[0].clone();
        let _ = handle_request(&mut state, target);
        state.delete.as_mut().unwrap().deleting = true;

        let _ = handle_finished(&mut state, Err("boom".to_string()));

        let modal = state.delete.as_ref().unwrap();
        assert!(!modal.deleting);
        assert_eq!(state.users.len(), 1);
        assert!(!state.loading_users);
        assert_eq!(state.toasts[0].message, "Failed to delete user");
    }
}
