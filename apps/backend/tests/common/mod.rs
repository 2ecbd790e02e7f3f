//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wrapping the application router
//! - Helper functions for building quiz markdown

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use quiz_import_backend::build_router;
use quiz_import_backend::config::ServerConfig;

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a new test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new test context with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            app: build_router(&config),
        }
    }

    /// Start an in-process test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }
}
