//! Various utility functions
//!

pub mod columns;
pub mod fs;
pub mod logging;
pub mod path;
