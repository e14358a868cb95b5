//! Application state
//!
//! The whole screen is a single explicit state value: the canonical user
//! list, the derived filtered view, modal states, and toast notifications.
//! Everything the reducer touches lives here so transitions stay testable
//! without a rendering layer.

use iced::Task;

use garrison_model::{Base, BaseId, CreateUserRequest, Role, UpdateUserRequest, User};

use crate::infrastructure::Services;
use crate::message::Message;
use crate::toast::{Severity, Toast, TOAST_TTL};

/// Top-level application state.
#[derive(Debug)]
pub struct State {
    /// Canonical, unfiltered user collection. Replaced wholesale by every
    /// successful fetch; never patched incrementally.
    pub users: Vec<User>,
    /// Derived view of `users`; always a subset.
    pub filtered_users: Vec<User>,
    pub search_term: String,
    pub loading_users: bool,
    /// Monotonic fetch counter; results carrying an older epoch are stale
    /// and get discarded.
    pub fetch_epoch: u64,

    /// Read-only base lookup, fetched once at boot.
    pub bases: Vec<Base>,
    pub bases_loading: bool,

    pub form: Option<FormModal>,
    pub delete: Option<DeleteModal>,

    pub toasts: Vec<Toast>,
    next_toast_id: u64,

    pub services: Services,
}

impl State {
    pub fn new(services: Services) -> Self {
        Self {
            users: Vec::new(),
            filtered_users: Vec::new(),
            search_term: String::new(),
            loading_users: false,
            fetch_epoch: 0,
            bases: Vec::new(),
            bases_loading: false,
            form: None,
            delete: None,
            toasts: Vec::new(),
            next_toast_id: 0,
            services,
        }
    }

    /// Re-derive `filtered_users` from the canonical list and search term.
    pub fn apply_filter(&mut self) {
        self.filtered_users = filter_users(&self.users, &self.search_term);
    }

    /// Queue a toast and schedule its expiry.
    pub fn push_toast(&mut self, severity: Severity, message: impl Into<String>) -> Task<Message> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            message: message.into(),
        });
        Task::perform(async { tokio::time::sleep(TOAST_TTL).await }, move |_| {
            Message::DismissToast(id)
        })
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Whether the form modal creates a new user or edits an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit { target: User },
}

/// State of the open create/edit modal.
#[derive(Debug, Clone)]
pub struct FormModal {
    pub mode: FormMode,
    pub draft: UserDraft,
    pub show_password: bool,
    pub saving: bool,
}

impl FormModal {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: UserDraft::empty(),
            show_password: false,
            saving: false,
        }
    }

    pub fn edit(target: User) -> Self {
        Self {
            draft: UserDraft::from_user(&target),
            mode: FormMode::Edit { target },
            show_password: false,
            saving: false,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self.mode, FormMode::Create)
    }
}

/// State of the open delete-confirmation modal.
#[derive(Debug, Clone)]
pub struct DeleteModal {
    pub target: User,
    pub deleting: bool,
}

/// In-progress, locally edited copy of a user record.
///
/// The base assignment is a plain identifier; the owning `Base` object only
/// exists on fetched records.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    /// Never seeded from a fetched record.
    pub password: String,
    pub role: Role,
    pub base: Option<BaseId>,
}

impl UserDraft {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            // Least privileged of the roles the form may assign
            role: Role::LogisticsOfficer,
            base: None,
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone(),
            base: user.base.as_ref().map(|base| base.id.clone()),
        }
    }

    /// Required-field check; a password is only mandatory when creating.
    pub fn required_fields_present(&self, mode: &FormMode) -> bool {
        let basics = !self.name.trim().is_empty() && !self.email.trim().is_empty();
        match mode {
            FormMode::Create => basics && !self.password.is_empty(),
            FormMode::Edit { .. } => basics,
        }
    }

    pub fn create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
            base: self.base.clone(),
        }
    }

    /// Build an update payload; a blank password is dropped from the payload
    /// entirely so the stored credential stays untouched.
    pub fn update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            role: self.role.clone(),
            base: self.base.clone(),
        }
    }
}

/// Case-insensitive substring filter over name, email, role code, base name
/// and base state. A missing base simply never matches.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&term)
                || user.email.to_lowercase().contains(&term)
                || user.role.code().to_lowercase().contains(&term)
                || user.base.as_ref().is_some_and(|base| {
                    base.name.to_lowercase().contains(&term)
                        || base.state.to_lowercase().contains(&term)
                })
        })
        .cloned()
        .collect()
}

/// Summary statistics over the canonical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total_users: usize,
    pub admin_users: usize,
    pub active_users: usize,
    pub distinct_bases: usize,
}

pub fn roster_stats(users: &[User]) -> RosterStats {
    let distinct_bases = users
        .iter()
        .filter_map(|user| user.base.as_ref().map(|base| &base.id))
        .collect::<std::collections::HashSet<_>>()
        .len();

    RosterStats {
        total_users: users.len(),
        admin_users: users.iter().filter(|user| user.role.is_admin()).count(),
        active_users: users.iter().filter(|user| user.is_active()).count(),
        distinct_bases,
    }
}
