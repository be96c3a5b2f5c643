//! Errors for the rtfs library
//!
//! Enumeration for all errors that can occur while listing a remote repository
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

pub mod string_error;

pub use crate::error::string_error::StringError;

pub const NO_SERVERS_CONFIGURED: &str =
    "No servers configured, add one with:\n\n  rtfs config --add <SERVER_ID> <URL> --access-token <TOKEN>\n";

pub const PATH_ARGUMENT_MISSING: &str =
    "Must supply a path to list, for example:\n\n  rtfs ls libs-release-local/org/acme\n";

#[derive(Debug, Display, Error)]
pub enum RtfsError {
    /// Internal rtfs errors
    // Input
    InputError(StringError),

    // Connection context (server config, client construction)
    ConnectionError(Box<StringError>),
    ServerNotFound(Box<StringError>),

    // Listing
    PathNotFound(Box<StringError>),
    SearchError(Box<StringError>),
    StreamError(StringError),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),
    ENV(std::env::VarError),

    // Fallback
    Basic(StringError),
}

impl RtfsError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        RtfsError::Basic(StringError::from(s.as_ref()))
    }

    pub fn input_error(s: impl AsRef<str>) -> Self {
        RtfsError::InputError(StringError::from(s.as_ref()))
    }

    pub fn path_argument_missing() -> Self {
        RtfsError::input_error(PATH_ARGUMENT_MISSING)
    }

    pub fn connection_error(s: impl AsRef<str>) -> Self {
        RtfsError::ConnectionError(Box::new(StringError::from(s.as_ref())))
    }

    pub fn no_servers_configured() -> Self {
        RtfsError::connection_error(NO_SERVERS_CONFIGURED)
    }

    pub fn server_not_found(server_id: impl AsRef<str>) -> Self {
        let err = format!(
            "Server '{}' is not configured, list the configured servers with:\n\n  rtfs config --list\n",
            server_id.as_ref()
        );
        RtfsError::ServerNotFound(Box::new(StringError::from(err)))
    }

    pub fn default_server_not_set() -> Self {
        RtfsError::connection_error(
            "Multiple servers configured and no default set, pick one with --server-id or run:\n\n  rtfs config --default <SERVER_ID>\n",
        )
    }

    pub fn invalid_server_url(url: impl AsRef<str>, err: url::ParseError) -> Self {
        let err = format!(
            "Server url invalid, must be fully qualified, got: {:?} ({err})",
            url.as_ref()
        );
        RtfsError::connection_error(err)
    }

    pub fn path_not_found(pattern: impl AsRef<str>) -> Self {
        let err = format!("{}: No such file or directory", pattern.as_ref());
        RtfsError::PathNotFound(Box::new(StringError::from(err)))
    }

    pub fn search_failed(pattern: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        let err = format!("Search for '{}' failed: {err}", pattern.as_ref());
        RtfsError::SearchError(Box::new(StringError::from(err)))
    }

    pub fn stream_error(s: impl AsRef<str>) -> Self {
        RtfsError::StreamError(StringError::from(s.as_ref()))
    }

    pub fn file_error(path: impl AsRef<Path>, error: std::io::Error) -> RtfsError {
        let err = format!("Could not read file: {:?} error {:?}", path.as_ref(), error);
        RtfsError::basic_str(err)
    }

    pub fn home_dir_not_found() -> RtfsError {
        RtfsError::basic_str("Home directory not found")
    }

    pub fn is_path_not_found(&self) -> bool {
        matches!(self, RtfsError::PathNotFound(_))
    }
}

// if you do not want to call .map_err, implement the std::convert::From trait
impl From<io::Error> for RtfsError {
    fn from(error: io::Error) -> Self {
        RtfsError::IO(error)
    }
}

impl From<String> for RtfsError {
    fn from(error: String) -> Self {
        RtfsError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for RtfsError {
    fn from(error: toml::ser::Error) -> Self {
        RtfsError::TomlSer(error)
    }
}

impl From<toml::de::Error> for RtfsError {
    fn from(error: toml::de::Error) -> Self {
        RtfsError::TomlDe(error)
    }
}

impl From<url::ParseError> for RtfsError {
    fn from(error: url::ParseError) -> Self {
        RtfsError::URL(error)
    }
}

impl From<serde_json::Error> for RtfsError {
    fn from(error: serde_json::Error) -> Self {
        RtfsError::JSON(error)
    }
}

impl From<reqwest::Error> for RtfsError {
    fn from(error: reqwest::Error) -> Self {
        RtfsError::HTTP(error)
    }
}

impl From<std::env::VarError> for RtfsError {
    fn from(error: std::env::VarError) -> Self {
        RtfsError::ENV(error)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RtfsError;

    #[test]
    fn test_path_not_found_names_the_pattern() {
        let err = RtfsError::path_not_found("libs-release-local/missing");
        assert!(err.is_path_not_found());
        assert_eq!(
            err.to_string(),
            "libs-release-local/missing: No such file or directory"
        );
    }

    #[test]
    fn test_search_failed_keeps_the_cause() {
        let err = RtfsError::search_failed("repo/dir", "500 Internal Server Error");
        assert!(matches!(err, RtfsError::SearchError(_)));
        assert_eq!(
            err.to_string(),
            "Search for 'repo/dir' failed: 500 Internal Server Error"
        );
    }
}
