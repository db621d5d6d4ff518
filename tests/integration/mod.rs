//! Session-level tests driven through in-memory input and output.

pub mod scenario_test;
pub mod session_test;
