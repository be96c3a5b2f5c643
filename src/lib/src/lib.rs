//! librtfs
//!
//! Directory listings for remote artifact repositories that only expose a
//! pattern search API.
//!
//! # Examples
//!
//! Listing the children of a folder:
//!
//! ```ignore
//! use librtfs::api::client::search::AqlSearch;
//! use librtfs::command;
//! use librtfs::config::ServerConfig;
//! use librtfs::opts::LsOpts;
//!
//! // Resolve the server from ~/.config/rtfs/servers.toml
//! let server = ServerConfig::get()?.resolve(None)?;
//! let opts = LsOpts::new(server.clone(), "libs-release-local/org/acme");
//! // Search, disambiguate and project the results
//! let search = AqlSearch::new(&server)?;
//! let result_set = command::ls(&search, &opts).await?;
//! // Print them in columns sized to the terminal
//! result_set.print_stdout()?;
//! ```

pub mod api;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod model;
pub mod opts;
pub mod util;
pub mod view;
