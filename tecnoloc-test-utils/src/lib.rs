//! Test setup shared by the unit and integration tests of the Tecnoloc server.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares tables, database fixtures and
//! mock AI provider endpoints, then `build()` returns a [`TestContext`] holding an in-memory
//! SQLite database and the mockito server the AI client should point at.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_GEMINI_API_KEY, TEST_GEMINI_MODEL},
        TestBuilder, TestContext, TestError,
    };
}
