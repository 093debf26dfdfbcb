//! Database and HTTP mock fixtures.
//!
//! - `ai` - mock `generateContent` endpoints of the AI provider
//! - `checklist` - stored checklist templates
//! - `knowledge` - manuals and maintenance logs used as diagnosis context

pub mod ai;
pub mod checklist;
pub mod knowledge;

use crate::TestContext;

impl TestContext {
    pub fn ai<'a>(&'a mut self) -> ai::AiFixtures<'a> {
        ai::AiFixtures { setup: self }
    }

    pub fn checklist<'a>(&'a self) -> checklist::ChecklistFixtures<'a> {
        checklist::ChecklistFixtures { setup: self }
    }

    pub fn knowledge<'a>(&'a self) -> knowledge::KnowledgeFixtures<'a> {
        knowledge::KnowledgeFixtures { setup: self }
    }
}
