//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderName;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` backed by in-memory storage.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::new());
/// let app_state = TestAppStateBuilder::new().with_repo(repo.clone()).build();
/// ```
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    /// Starts with a fresh, empty in-memory repository.
    pub fn new() -> Self {
        Self {
            repo: Some(Arc::new(InMemoryWaitlistRepo::new())),
        }
    }

    pub fn with_repo(mut self, repo: Arc<InMemoryWaitlistRepo>) -> Self {
        self.repo = Some(repo as Arc<dyn WaitlistRepo>);
        self
    }

    /// Simulates a deployment with no database configured.
    pub fn without_storage(mut self) -> Self {
        self.repo = None;
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: None,
            database_max_connections: 1,
            client_ip_header: HeaderName::from_static("cf-connecting-ip"),
            log_file: "test.log".to_string(),
        };

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }
}
