//! folio library
//!
//! Configuration, subcommand handlers and text rendering for the `folio`
//! binary, exported for integration tests.

pub mod commands;
pub mod config;
pub mod render;
