use async_trait::async_trait;
use garrison_model::{CreateUserRequest, UpdateUserRequest, User, UserId};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::constants::routes;

#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError>;
    async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, ApiError>;
    async fn delete_user(&self, user_id: UserId) -> Result<(), ApiError>;
}

#[derive(Clone, Debug)]
pub struct UserDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl UserDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectoryService for UserDirectoryApiAdapter {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        // Server returns the full collection at /api/users
        self.client.get(routes::USERS).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError> {
        self.client.post(routes::USERS, &request).await
    }

    async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let path = routes::replace_param(routes::USER_ITEM, "{id}", user_id.as_str());
        self.client.put(&path, &request).await
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), ApiError> {
        let path = routes::replace_param(routes::USER_ITEM, "{id}", user_id.as_str());
        self.client.delete(&path).await
    }
}
