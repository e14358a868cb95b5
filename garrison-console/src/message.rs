//! Application messages.

use garrison_model::{Base, Role, User, UserId};

/// Every event the reducer can react to.
#[derive(Debug, Clone)]
pub enum Message {
    // Roster
    FetchUsers,
    UsersFetched {
        epoch: u64,
        result: Result<Vec<User>, String>,
    },
    SearchChanged(String),
    FetchBases,
    BasesLoaded(Result<Vec<Base>, String>),

    // Create/edit form modal
    OpenCreateForm,
    OpenEditForm(User),
    CloseForm,
    Form(FormEvent),
    SaveFinished(Result<User, String>),

    // Delete confirmation modal
    RequestDelete(User),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished(Result<UserId, String>),

    // Notifications
    DismissToast(u64),
}

/// Edits inside the open create/edit form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    PasswordVisibilityToggled,
    RoleSelected(Role),
    BaseSelected(Base),
    Submit,
}

impl Message {
    /// Short name for reducer debug logs.
    pub fn name(&self) -> &'static str {
        match self {
            Message::FetchUsers => "FetchUsers",
            Message::UsersFetched { .. } => "UsersFetched",
            Message::SearchChanged(_) => "SearchChanged",
            Message::FetchBases => "FetchBases",
            Message::BasesLoaded(_) => "BasesLoaded",
            Message::OpenCreateForm => "OpenCreateForm",
            Message::OpenEditForm(_) => "OpenEditForm",
            Message::CloseForm => "CloseForm",
            Message::Form(event) => event.name(),
            Message::SaveFinished(_) => "SaveFinished",
            Message::RequestDelete(_) => "RequestDelete",
            Message::CancelDelete => "CancelDelete",
            Message::ConfirmDelete => "ConfirmDelete",
            Message::DeleteFinished(_) => "DeleteFinished",
            Message::DismissToast(_) => "DismissToast",
        }
    }
}

impl FormEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::NameChanged(_) => "Form::NameChanged",
            FormEvent::EmailChanged(_) => "Form::EmailChanged",
            FormEvent::PasswordChanged(_) => "Form::PasswordChanged",
            FormEvent::PasswordVisibilityToggled => "Form::PasswordVisibilityToggled",
            FormEvent::RoleSelected(_) => "Form::RoleSelected",
            FormEvent::BaseSelected(_) => "Form::BaseSelected",
            FormEvent::Submit => "Form::Submit",
        }
    }
}
