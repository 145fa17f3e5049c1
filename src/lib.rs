// ABOUTME: Library root for harbor-job - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod job;
pub mod logging;
pub mod output;
pub mod registry;
pub mod retention;
pub mod types;
