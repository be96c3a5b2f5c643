//! # rtfs Commands - entry point for all rtfs commands
//!
//! Top level commands you are likely to run against an artifact server
//!

pub mod ls;

pub use crate::command::ls::ls;
