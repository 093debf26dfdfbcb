//! Business logic services.
//!
//! Services sit between the controllers and the repositories: they validate requests, run the
//! diagnosis pipeline against the AI provider and map entity models to the shared DTOs.

pub mod checklist;
pub mod diagnose;
pub mod diagnosis;
pub mod maintenance;
pub mod manual;
