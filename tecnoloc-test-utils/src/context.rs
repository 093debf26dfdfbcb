//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory database plus the mock AI provider for a single test.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_knowledge_tables().build().await?;
///
/// test.knowledge().insert_mock_manual("MLT6", "Manual da torre").await?;
/// let client = GeminiClient::new(GeminiConfig { api_url: test.server_url(), .. })?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server standing in for the AI provider
    pub(crate) server: ServerGuard,
    /// Mock endpoints registered by the builder, kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock AI provider, used as the client's `api_url`
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
