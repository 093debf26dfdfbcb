//! Data transfer objects shared between the web client and the server API.

pub mod api;
pub mod checklist;
pub mod diagnosis;
pub mod maintenance;
pub mod manual;
