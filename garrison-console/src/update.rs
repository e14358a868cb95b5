//! Root-level reducer
//!
//! Dispatches every [`Message`] to the matching handler. Handlers mutate the
//! state in place and return the [`Task`]s for any follow-up async work.

use iced::Task;
use log::debug;

use crate::message::Message;
use crate::state::State;
use crate::updates::{delete, form, roster};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    debug!("update: {}", message.name());

    match message {
        // Roster
        Message::FetchUsers => roster::handle_fetch_users(state),
        Message::UsersFetched { epoch, result } => {
            roster::handle_users_fetched(state, epoch, result)
        }
        Message::SearchChanged(term) => roster::handle_search_changed(state, term),
        Message::FetchBases => roster::handle_fetch_bases(state),
        Message::BasesLoaded(result) => roster::handle_bases_loaded(state, result),

        // Create/edit form modal
        Message::OpenCreateForm => form::handle_open_create(state),
        Message::OpenEditForm(user) => form::handle_open_edit(state, user),
        Message::CloseForm => form::handle_close(state),
        Message::Form(event) => form::handle_event(state, event),
        Message::SaveFinished(result) => form::handle_save_finished(state, result),

        // Delete confirmation modal
        Message::RequestDelete(user) => delete::handle_request(state, user),
        Message::CancelDelete => delete::handle_cancel(state),
        Message::ConfirmDelete => delete::handle_confirm(state),
        Message::DeleteFinished(result) => delete::handle_finished(state, result),

        // Notifications
        Message::DismissToast(id) => {
            state.dismiss_toast(id);
            Task::none()
        }
    }
}
