//! Server application core modules.
//!
//! This module contains all server-side functionality for the Tecnoloc assistant: HTTP routing,
//! the AI provider client, database repositories for manuals, maintenance logs and checklists,
//! and the services that run the diagnosis pipeline on top of them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ai;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
