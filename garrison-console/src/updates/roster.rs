//! Roster handlers: fetching, search filtering, base lookup.

use iced::Task;
use log::{debug, error, info};

use garrison_model::{Base, User};

use crate::message::Message;
use crate::state::State;
use crate::toast::Severity;

/// Start a roster fetch. Bumps the fetch epoch so any fetch already in
/// flight resolves as stale and gets discarded.
pub fn handle_fetch_users(state: &mut State) -> Task<Message> {
    state.fetch_epoch += 1;
    let epoch = state.fetch_epoch;
    state.loading_users = true;

    info!("Fetching user roster (epoch {epoch})");
    let service = state.services.users.clone();
    Task::perform(
        async move { service.list_users().await.map_err(|e| e.to_string()) },
        move |result| Message::UsersFetched { epoch, result },
    )
}

pub fn handle_users_fetched(
    state: &mut State,
    epoch: u64,
    result: Result<Vec<User>, String>,
) -> Task<Message> {
    if epoch != state.fetch_epoch {
        debug!(
            "Discarding stale roster fetch (epoch {epoch}, current {})",
            state.fetch_epoch
        );
        return Task::none();
    }

    state.loading_users = false;
    match result {
        Ok(users) => {
            info!("Loaded {} users", users.len());
            state.users = users;
            state.apply_filter();
            Task::none()
        }
        Err(error) => {
            error!("Failed to load users: {error}");
            // Canonical list stays in its last known state
            state.push_toast(Severity::Error, "Failed to fetch users")
        }
    }
}

pub fn handle_search_changed(state: &mut State, term: String) -> Task<Message> {
    state.search_term = term;
    state.apply_filter();
    Task::none()
}

pub fn handle_fetch_bases(state: &mut State) -> Task<Message> {
    state.bases_loading = true;
    let service = state.services.bases.clone();
    Task::perform(
        async move { service.list_bases().await.map_err(|e| e.to_string()) },
        Message::BasesLoaded,
    )
}

pub fn handle_bases_loaded(
    state: &mut State,
    result: Result<Vec<Base>, String>,
) -> Task<Message> {
    state.bases_loading = false;
    match result {
        Ok(bases) => {
            info!("Loaded {} bases", bases.len());
            state.bases = bases;
            Task::none()
        }
        Err(error) => {
            error!("Failed to load bases: {error}");
            state.push_toast(Severity::Error, "Failed to fetch bases")
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
    fn fetch_bumps_epoch_and_sets_loading() {
        let mut state = state();
        let _task = handle_fetch_users(&mut state);
        assert_eq!(state.fetch_epoch, 1);
        assert!(state.loading_users);
    }

    #[test]
    fn stale_fetch_result_is_discarded() {
        let mut state = state();
        let _ = handle_fetch_users(&mut state);
        let _ = handle_fetch_users(&mut state);
        assert_eq!(state.fetch_epoch, 2);

        let stale = vec![sample_user("u-9", "Stale", "stale@x.com", Role::User, None)];
        let _ = handle_users_fetched(&mut state, 1, Ok(stale));

        // The older fetch result must not clobber anything
        assert!(state.users.is_empty());
        assert!(state.loading_users);

        let fresh = vec![sample_user("u-1", "Fresh", "fresh@x.com", Role::User, None)];
        let _ = handle_users_fetched(&mut state, 2, Ok(fresh));
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].name, "Fresh");
        assert!(!state.loading_users);
    }

    #[test]
    fn failed_fetch_keeps_last_known_list_and_toasts() {
        let mut state = state();
        state.users = vec![sample_user("u-1", "Jane", "jane@x.com", Role::Admin, None)];
        state.apply_filter();

        let _ = handle_fetch_users(&mut state);
        let _ = handle_users_fetched(&mut state, 1, Err("boom".to_string()));

        assert_eq!(state.users.len(), 1);
        assert!(!state.loading_users);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "Failed to fetch users");
    }

    #[test]
    fn search_re_derives_the_filtered_view() {
        let mut state = state();
        state.users = vec![
            sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, None),
            sample_user("u-2", "Sam Park", "sam@x.com", Role::User, None),
        ];
        state.apply_filter();
        assert_eq!(state.filtered_users.len(), 2);

        let _ = handle_search_changed(&mut state, "jane".to_string());
        assert_eq!(state.filtered_users.len(), 1);
        assert_eq!(state.filtered_users[0].name, "Jane Doe");

        let _ = handle_search_changed(&mut state, String::new());
        assert_eq!(state.filtered_users.len(), 2);
    }
}
