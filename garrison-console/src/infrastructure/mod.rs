//! API client, service seams, and test stubs.

pub mod api_client;
pub mod constants;
pub mod services;
pub mod testing;

use std::sync::Arc;

use api_client::ApiClient;
use services::bases::{BaseDirectoryApiAdapter, BaseDirectoryService};
use services::users::{UserDirectoryApiAdapter, UserDirectoryService};
use testing::stubs::StubDirectory;

/// Handles to the external collaborators the reducer talks to.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserDirectoryService>,
    pub bases: Arc<dyn BaseDirectoryService>,
}

impl Services {
    /// Wire both directories to the HTTP API at `server_url`.
    pub fn over_http(server_url: impl Into<String>) -> Self {
        let client = Arc::new(ApiClient::new(server_url));
        Self {
            users: Arc::new(UserDirectoryApiAdapter::new(client.clone())),
            bases: Arc::new(BaseDirectoryApiAdapter::new(client)),
        }
    }

    /// Back both directories with a shared in-memory stub.
    pub fn stubbed() -> Self {
        let stub = Arc::new(StubDirectory::default());
        Self::from_stub(stub)
    }

    pub fn from_stub(stub: Arc<StubDirectory>) -> Self {
        Self {
            users: stub.clone(),
            bases: stub,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("has_users", &true)
            .field("has_bases", &true)
            .finish()
    }
}
