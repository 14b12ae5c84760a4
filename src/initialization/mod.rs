//! Application initialization.
//!
//! This module provides the process-wide setup the binary performs before
//! inspecting a document. The inspection engine itself holds no global state.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
