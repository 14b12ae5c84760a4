//! Error handling.
//!
//! This module provides the error types for the operations that can fail:
//! - **Initialization**: logger setup
//! - **Input**: reading the HTML document from a file or stdin
//!
//! Rule violations are not errors; they are returned as `Issue` values.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_input_error_message_names_source() {
        let err = InputError::read("index.html", io::Error::from(io::ErrorKind::NotFound));
        let message = err.to_string();
        assert!(message.starts_with("Failed to read index.html"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_input_error_keeps_io_kind() {
        let err = InputError::read("<stdin>", io::Error::from(io::ErrorKind::InvalidData));
        match err {
            InputError::ReadError { source_name, source } => {
                assert_eq!(source_name, "<stdin>");
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
        }
    }
}
