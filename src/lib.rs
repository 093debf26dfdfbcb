//! Tecnoloc maintenance assistant.
//!
//! Shared code for the web client and the server: DTOs exchanged over the HTTP API, the pure
//! pieces of the diagnosis pipeline (prompt building, response parsing), and the checklist
//! catalog and run state. Server-only code lives behind the `server` feature.

pub mod checklist;
pub mod diagnosis;
pub mod model;

#[cfg(feature = "server")]
pub mod server;
