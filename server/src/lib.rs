//! DualStore server
//!
//! Loads configuration, installs logging and connects both databases.
//! Process termination is decided in `main`, never in library code.

pub mod app;
pub mod telemetry;
