//! Wire formats of the artifact server's responses
//!

pub mod aql_response;
pub mod error_response;

pub use crate::view::aql_response::{AqlItem, AqlRange, AqlResponse};
pub use crate::view::error_response::{ErrorMessage, ErrorResponse};
