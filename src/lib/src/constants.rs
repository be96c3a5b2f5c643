//! Constants used throughout rtfs
//!

/// Version of the rtfs library and cli
pub const RTFS_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name used for the config directory and the user agent
pub const RTFS: &str = "rtfs";
/// Config dir relative to the home directory
pub const CONFIG_DIR: &str = ".config";
/// Overrides the location of the config directory
pub const CONFIG_DIR_ENV: &str = "RTFS_CONFIG_DIR";

// Search service
pub const AQL_SEARCH_ENDPOINT: &str = "/api/search/aql";
pub const AQL_INCLUDE_FIELDS: &str = r#""repo","path","name","type""#;
/// Path value the search service uses for items directly under a repository
pub const REPO_ROOT_PATH: &str = ".";
/// Type value the search service uses for folders
pub const FOLDER_TYPE: &str = "folder";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Paths
pub const PATH_SEPARATOR: char = '/';
pub const WILDCARDS: [char; 2] = ['*', '?'];

// Terminal
/// Blank cells between two columns of `ls` output
pub const COLUMN_PADDING: usize = 2;
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;
