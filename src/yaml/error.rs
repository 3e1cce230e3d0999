//! Error types for YAML operations.

use saphyr_parser::ScanError;
use std::io;

/// Error type for YAML operations.
#[derive(Debug)]
pub enum Error {
    /// YAML syntax error from the parser
    Parse(String),
    /// I/O error
    Io(String),
    /// Generic error
    Base(String),
}

impl std::error::Error for Error {}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Base(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Base(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Base(e) => write!(f, "{}", e),
        }
    }
}
