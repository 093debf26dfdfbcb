//! Declarative test builder.
//!
//! Configuration methods only queue work; everything runs in `build()`, in order: tables,
//! database fixtures, then mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,

    manuals: Vec<(String, String)>,               // (model, content)
    maintenance_logs: Vec<(String, String, String, bool)>, // (model, defect, notes, resolved)
    checklist_templates: Vec<(String, String)>,   // (id, equipment_type)

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    generate_content_endpoints: Vec<(String, usize)>,
    generate_content_errors: Vec<(usize, String, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            manuals: Vec::new(),
            maintenance_logs: Vec::new(),
            checklist_templates: Vec::new(),
            mock_builders: Vec::new(),
            generate_content_endpoints: Vec::new(),
            generate_content_errors: Vec::new(),
        }
    }

    /// Add an entity table to the test database.
    ///
    /// ```no_run
    /// use tecnoloc_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), tecnoloc_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Manual)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add the manual and maintenance log tables used as diagnosis context.
    pub fn with_knowledge_tables(self) -> Self {
        self.with_table(entity::prelude::Manual)
            .with_table(entity::prelude::MaintenanceLog)
    }

    /// Add the checklist template and report tables.
    pub fn with_checklist_tables(self) -> Self {
        self.with_table(entity::prelude::ChecklistTemplate)
            .with_table(entity::prelude::ChecklistReport)
    }

    /// Insert a manual for `model` during `build()`.
    pub fn with_mock_manual(mut self, model: impl Into<String>, content: impl Into<String>) -> Self {
        self.manuals.push((model.into(), content.into()));
        self
    }

    /// Insert a maintenance log for `model` during `build()`.
    pub fn with_mock_maintenance_log(
        mut self,
        model: impl Into<String>,
        defect: impl Into<String>,
        notes: impl Into<String>,
        resolved: bool,
    ) -> Self {
        self.maintenance_logs
            .push((model.into(), defect.into(), notes.into(), resolved));
        self
    }

    /// Insert an imported checklist template during `build()`.
    pub fn with_mock_checklist_template(
        mut self,
        id: impl Into<String>,
        equipment_type: impl Into<String>,
    ) -> Self {
        self.checklist_templates
            .push((id.into(), equipment_type.into()));
        self
    }

    /// Add a mock `generateContent` endpoint answering with `text`, expected to be called
    /// exactly `expected_requests` times.
    pub fn with_generate_content_endpoint(
        mut self,
        text: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.generate_content_endpoints
            .push((text.into(), expected_requests));
        self
    }

    /// Add a mock `generateContent` endpoint failing with `status` and the provider's error body.
    pub fn with_generate_content_error(
        mut self,
        status: usize,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.generate_content_errors
            .push((status, message.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        setup.with_tables(self.tables).await?;

        for (model, content) in self.manuals {
            setup.knowledge().insert_mock_manual(&model, &content).await?;
        }

        for (model, defect, notes, resolved) in self.maintenance_logs {
            setup
                .knowledge()
                .insert_mock_maintenance_log(&model, &defect, &notes, resolved)
                .await?;
        }

        for (id, equipment_type) in self.checklist_templates {
            setup
                .checklist()
                .insert_mock_template(&id, &equipment_type)
                .await?;
        }

        // Custom endpoints first so tests can stack mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (text, expected) in self.generate_content_endpoints {
            mocks.push(setup.ai().create_generate_content_endpoint(&text, expected));
        }

        for (status, message, expected) in self.generate_content_errors {
            mocks.push(
                setup
                    .ai()
                    .create_generate_content_error(status, &message, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
