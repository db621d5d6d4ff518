//! contacts - A small interactive contact book for the terminal.
//!
//! This library exposes the core modules for use in integration tests.

pub mod app;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
