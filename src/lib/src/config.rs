//! Configuration for rtfs, the servers `ls` can talk to
//!

pub mod server_config;

pub use crate::config::server_config::ServerConfig;
pub use crate::config::server_config::SERVER_CONFIG_FILENAME;
