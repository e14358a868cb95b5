use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use garrison_model::{Base, BaseId, CreateUserRequest, Role, UpdateUserRequest, User, UserId};

use crate::errors::ApiError;
use crate::infrastructure::services::bases::BaseDirectoryService;
use crate::infrastructure::services::users::UserDirectoryService;

/// Shared in-memory implementation of both directory services.
///
/// Backs the console in stub mode and in tests. Each operation can be
/// scripted to fail once via `fail_next_*`, and call counts are recorded so
/// tests can assert that a refresh actually reached the service layer.
#[derive(Debug, Clone)]
pub struct StubDirectory {
    inner: Arc<RwLock<InnerDirectoryState>>,
}

#[derive(Debug)]
struct InnerDirectoryState {
    users: Vec<User>,
    bases: Vec<Base>,
    next_user_number: u64,
    fail_next_list: bool,
    fail_next_create: bool,
    fail_next_update: bool,
    fail_next_delete: bool,
    list_calls: u64,
}

impl Default for StubDirectory {
    fn default() -> Self {
        let bases = vec![sample_base("b-1", "Delta", "TX"), sample_base("b-2", "Omaha", "NE")];
        let users = vec![
            sample_user("u-1", "Jane Doe", "jane@x.com", Role::Admin, Some(bases[0].clone())),
            sample_user(
                "u-2",
                "Sam Park",
                "sam@x.com",
                Role::LogisticsOfficer,
                Some(bases[1].clone()),
            ),
        ];

        Self {
            inner: Arc::new(RwLock::new(InnerDirectoryState {
                users,
                bases,
                next_user_number: 3,
                fail_next_list: false,
                fail_next_create: false,
                fail_next_update: false,
                fail_next_delete: false,
                list_calls: 0,
            })),
        }
    }
}

impl StubDirectory {
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerDirectoryState {
                users: Vec::new(),
                bases: Vec::new(),
                next_user_number: 1,
                fail_next_list: false,
                fail_next_create: false,
                fail_next_update: false,
                fail_next_delete: false,
                list_calls: 0,
            })),
        }
    }

    pub fn set_users(&self, users: Vec<User>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.users = users;
        }
    }

    pub fn push_base(&self, base: Base) {
        if let Ok(mut guard) = self.inner.write() {
            guard.bases.push(base);
        }
    }

    pub fn fail_next_list(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_next_list = true;
        }
    }

    pub fn fail_next_create(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_next_create = true;
        }
    }

    pub fn fail_next_update(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_next_update = true;
        }
    }

    pub fn fail_next_delete(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_next_delete = true;
        }
    }

    pub fn list_calls(&self) -> u64 {
        self.inner.read().map(|guard| guard.list_calls).unwrap_or(0)
    }

    pub fn users(&self) -> Vec<User> {
        self.inner
            .read()
            .map(|guard| guard.users.clone())
            .unwrap_or_default()
    }

    fn scripted_failure() -> ApiError {
        ApiError::Server {
            status: 500,
            message: "scripted stub failure".to_string(),
        }
    }
}

#[async_trait]
impl UserDirectoryService for StubDirectory {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        guard.list_calls += 1;
        if std::mem::take(&mut guard.fail_next_list) {
            return Err(Self::scripted_failure());
        }
        Ok(guard.users.clone())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        if std::mem::take(&mut guard.fail_next_create) {
            return Err(Self::scripted_failure());
        }

        let id = UserId::new(format!("u-{}", guard.next_user_number));
        guard.next_user_number += 1;

        let base = request
            .base
            .as_ref()
            .and_then(|id| guard.bases.iter().find(|base| &base.id == id).cloned());
        let user = User {
            id,
            name: request.name,
            email: request.email,
            role: request.role,
            base,
            status: None,
        };
        guard.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        if std::mem::take(&mut guard.fail_next_update) {
            return Err(Self::scripted_failure());
        }

        let base = request
            .base
            .as_ref()
            .and_then(|id| guard.bases.iter().find(|base| &base.id == id).cloned());
        let Some(user) = guard.users.iter_mut().find(|user| user.id == user_id) else {
            return Err(ApiError::Server {
                status: 404,
                message: format!("no such user: {user_id}"),
            });
        };

        user.name = request.name;
        user.email = request.email;
        user.role = request.role;
        user.base = base;
        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), ApiError> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        if std::mem::take(&mut guard.fail_next_delete) {
            return Err(Self::scripted_failure());
        }

        let before = guard.users.len();
        guard.users.retain(|user| user.id != user_id);
        if guard.users.len() == before {
            return Err(ApiError::Server {
                status: 404,
                message: format!("no such user: {user_id}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BaseDirectoryService for StubDirectory {
    async fn list_bases(&self) -> Result<Vec<Base>, ApiError> {
        let guard = self.inner.read().expect("stub state poisoned");
        Ok(guard.bases.clone())
    }
}

pub fn sample_base(id: &str, name: &str, state: &str) -> Base {
    Base {
        id: BaseId::new(id),
        name: name.to_string(),
        state: state.to_string(),
    }
}

pub fn sample_user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    base: Option<Base>,
) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        base,
        status: None,
    }
}
