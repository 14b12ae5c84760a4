//! Error type definitions.
//!
//! Validation findings are data (`Issue`), never errors. The types here cover
//! the few operations that can genuinely fail: logger setup and reading input.

use std::io;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading the document to inspect.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InputError {
    /// The input file or stdin could not be read (including invalid UTF-8).
    #[error("Failed to read {source_name}: {source}")]
    ReadError {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    pub(crate) fn read(source_name: impl Into<String>, source: io::Error) -> Self {
        InputError::ReadError {
            source_name: source_name.into(),
            source,
        }
    }
}
