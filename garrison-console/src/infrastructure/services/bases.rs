use async_trait::async_trait;
use garrison_model::Base;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::constants::routes;

/// Read-only lookup of the bases a user can be assigned to.
#[async_trait]
pub trait BaseDirectoryService: Send + Sync {
    async fn list_bases(&self) -> Result<Vec<Base>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct BaseDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl BaseDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseDirectoryService for BaseDirectoryApiAdapter {
    async fn list_bases(&self) -> Result<Vec<Base>, ApiError> {
        self.client.get(routes::BASES).await
    }
}
