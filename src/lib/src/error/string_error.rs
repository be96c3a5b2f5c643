//! # StringError
//!
//! Message payload for the domain variants of [`RtfsError`](crate::error::RtfsError).
//!

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct StringError(String);

impl StringError {
    pub fn new(message: impl Into<String>) -> Self {
        StringError(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringError {
    fn from(message: &str) -> Self {
        StringError::new(message)
    }
}

impl From<String> for StringError {
    fn from(message: String) -> Self {
        StringError::new(message)
    }
}

// Debug prints the bare message so `Result` returning tests stay readable
impl fmt::Debug for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StringError {}
