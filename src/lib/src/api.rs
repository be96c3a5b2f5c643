//! # API - talking to the remote artifact server
//!
//! The listing logic only needs a [`SearchService`]; [`client::search::AqlSearch`]
//! is the implementation backed by the server's query language endpoint.
//!

use async_trait::async_trait;

use crate::error::RtfsError;
use crate::io::ContentReader;
use crate::opts::SearchOpts;

pub mod client;

/// Resolves a path pattern into the records that match it.
///
/// Each call hands back a fresh [`ContentReader`] owned by the caller. A
/// service may be called any number of times in a row.
#[async_trait]
pub trait SearchService {
    async fn search(&self, opts: &SearchOpts) -> Result<ContentReader, RtfsError>;
}
