//! Tests that run the built `contacts` binary.

pub mod common;
