use iced::Task;

use std::sync::Arc;

use crate::infrastructure::Services;
use crate::message::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_url: Arc<str>,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(server_url.into()),
            use_test_stubs: false,
        }
    }

    pub fn from_environment() -> Self {
        let server_url = std::env::var("GARRISON_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            server_url: Arc::from(server_url),
            use_test_stubs: false,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }
}

/// Construct the initial state and kick off the boot fetches.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let services = if config.use_test_stubs() {
        Services::stubbed()
    } else {
        Services::over_http(config.server_url())
    };

    log::info!("Booting console against {}", config.server_url());

    let state = State::new(services);
    let boot_tasks = Task::batch([
        Task::done(Message::FetchUsers),
        Task::done(Message::FetchBases),
    ]);

    (state, boot_tasks)
}
