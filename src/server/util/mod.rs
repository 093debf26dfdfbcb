//! Helpers shared by server tests.
