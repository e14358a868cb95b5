//! Message-driven flows through the root reducer.
//!
//! Async service results are produced by calling the stub directory directly
//! and fed back into [`update`] as the messages the runtime would deliver, so
//! each flow is exercised end to end without a running event loop.

use std::sync::Arc;

use garrison_console::infrastructure::testing::stubs::StubDirectory;
use garrison_console::infrastructure::Services;
use garrison_console::message::{FormEvent, Message};
use garrison_console::state::State;
use garrison_console::toast::Severity;
use garrison_console::update::update;
use garrison_model::Role;

fn console() -> (State, Arc<StubDirectory>) {
    let stub = Arc::new(StubDirectory::default());
    (State::new(Services::from_stub(stub.clone())), stub)
}

/// Complete the in-flight roster fetch with the stub's current contents.
fn deliver_roster(state: &mut State, stub: &StubDirectory) {
    let epoch = state.fetch_epoch;
    let _ = update(
        state,
        Message::UsersFetched {
            epoch,
            result: Ok(stub.users()),
        },
    );
}

#[test]
fn boot_fetch_populates_the_roster() {
    let (mut state, stub) = console();

    let _ = update(&mut state, Message::FetchUsers);
    assert!(state.loading_users);

    deliver_roster(&mut state, &stub);
    assert!(!state.loading_users);
    assert_eq!(state.users.len(), 2);
    assert_eq!(state.filtered_users, state.users);
}

#[test]
fn search_persists_across_a_refresh() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::FetchUsers);
    deliver_roster(&mut state, &stub);

    let _ = update(&mut state, Message::SearchChanged("jane".to_string()));
    assert_eq!(state.filtered_users.len(), 1);

    // A later refresh re-derives the view with the same term
    let _ = update(&mut state, Message::FetchUsers);
    deliver_roster(&mut state, &stub);
    assert_eq!(state.search_term, "jane");
    assert_eq!(state.filtered_users.len(), 1);
    assert_eq!(state.filtered_users[0].name, "Jane Doe");
}

#[test]
fn stale_fetch_results_are_discarded() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::FetchUsers);
    let first_epoch = state.fetch_epoch;
    let _ = update(&mut state, Message::FetchUsers);

    let _ = update(
        &mut state,
        Message::UsersFetched {
            epoch: first_epoch,
            result: Ok(Vec::new()),
        },
    );
    assert!(state.loading_users, "older epoch must not settle the fetch");
    assert!(state.users.is_empty());

    deliver_roster(&mut state, &stub);
    assert!(!state.loading_users);
    assert_eq!(state.users.len(), 2);
}

#[tokio::test]
async fn create_flow_closes_the_form_and_refreshes() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::FetchUsers);
    deliver_roster(&mut state, &stub);

    let _ = update(&mut state, Message::OpenCreateForm);
    for event in [
        FormEvent::NameChanged("Rae Lee".to_string()),
        FormEvent::EmailChanged("rae@x.com".to_string()),
        FormEvent::PasswordChanged("hunter2".to_string()),
        FormEvent::RoleSelected(Role::BaseCommander),
    ] {
        let _ = update(&mut state, Message::Form(event));
    }
    let request = state.form.as_ref().unwrap().draft.create_request();

    let _ = update(&mut state, Message::Form(FormEvent::Submit));
    assert!(state.form.as_ref().unwrap().saving);

    let created = state
        .services
        .users
        .create_user(request)
        .await
        .map_err(|e| e.to_string());
    let _ = update(&mut state, Message::SaveFinished(created));

    assert!(state.form.is_none());
    assert!(state.loading_users, "refresh should have been scheduled");
    assert!(state
        .toasts
        .iter()
        .any(|toast| toast.severity == Severity::Success));

    deliver_roster(&mut state, &stub);
    assert_eq!(state.users.len(), 3);
    assert!(state.users.iter().any(|user| user.email == "rae@x.com"));
}

#[tokio::test]
async fn create_landing_after_modal_dismissal_still_refreshes() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::FetchUsers);
    deliver_roster(&mut state, &stub);

    let _ = update(&mut state, Message::OpenCreateForm);
    for event in [
        FormEvent::NameChanged("Rae Lee".to_string()),
        FormEvent::EmailChanged("rae@x.com".to_string()),
        FormEvent::PasswordChanged("hunter2".to_string()),
    ] {
        let _ = update(&mut state, Message::Form(event));
    }
    let request = state.form.as_ref().unwrap().draft.create_request();
    let _ = update(&mut state, Message::Form(FormEvent::Submit));

    // Modal dismissed while the save is still in flight
    let _ = update(&mut state, Message::CloseForm);
    assert!(state.form.is_none());

    let created = state
        .services
        .users
        .create_user(request)
        .await
        .map_err(|e| e.to_string());
    let _ = update(&mut state, Message::SaveFinished(created));

    assert!(
        state.loading_users,
        "server state changed, a refresh must be scheduled"
    );
    deliver_roster(&mut state, &stub);
    assert_eq!(state.users.len(), 3);
    assert!(state.users.iter().any(|user| user.email == "rae@x.com"));
}

#[tokio::test]
async fn failed_create_keeps_the_form_open() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::OpenCreateForm);
    for event in [
        FormEvent::NameChanged("Rae Lee".to_string()),
        FormEvent::EmailChanged("rae@x.com".to_string()),
        FormEvent::PasswordChanged("hunter2".to_string()),
    ] {
        let _ = update(&mut state, Message::Form(event));
    }
    let request = state.form.as_ref().unwrap().draft.create_request();
    let _ = update(&mut state, Message::Form(FormEvent::Submit));

    stub.fail_next_create();
    let result = state
        .services
        .users
        .create_user(request)
        .await
        .map_err(|e| e.to_string());
    let _ = update(&mut state, Message::SaveFinished(result));

    let form = state.form.as_ref().unwrap();
    assert!(!form.saving);
    assert_eq!(form.draft.email, "rae@x.com");
    assert_eq!(state.toasts[0].message, "Failed to create user");
    assert_eq!(stub.users().len(), 2);
}

#[tokio::test]
async fn delete_flow_removes_the_user_after_refresh() {
    let (mut state, stub) = console();
    let _ = update(&mut state, Message::FetchUsers);
    deliver_roster(&mut state, &stub);

    let target = state
        .users
        .iter()
        .find(|user| !user.role.is_admin())
        .cloned()
        .unwrap();
    let _ = update(&mut state, Message::RequestDelete(target.clone()));
    let _ = update(&mut state, Message::ConfirmDelete);
    assert!(state.delete.as_ref().unwrap().deleting);

    let result = state
        .services
        .users
        .delete_user(target.id.clone())
        .await
        .map(|_| target.id.clone())
        .map_err(|e| e.to_string());
    let _ = update(&mut state, Message::DeleteFinished(result));

    assert!(state.delete.is_none());
    deliver_roster(&mut state, &stub);
    assert_eq!(state.users.len(), 1);
    assert!(state.users.iter().all(|user| user.id != target.id));
}

#[test]
fn toast_dismissal_removes_only_the_matching_toast() {
    let (mut state, _stub) = console();
    let _ = update(
        &mut state,
        Message::UsersFetched {
            epoch: 1,
            result: Err("down".to_string()),
        },
    );
    // Unknown epoch, still stale; nothing happens
    assert!(state.toasts.is_empty());

    let _ = update(&mut state, Message::FetchUsers);
    let epoch = state.fetch_epoch;
    let _ = update(
        &mut state,
        Message::UsersFetched {
            epoch,
            result: Err("down".to_string()),
        },
    );
    assert_eq!(state.toasts.len(), 1);

    let id = state.toasts[0].id;
    let _ = update(&mut state, Message::DismissToast(id));
    assert!(state.toasts.is_empty());
}
