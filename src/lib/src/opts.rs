pub mod ls_opts;
pub mod search_opts;

pub use crate::opts::ls_opts::LsOpts;
pub use crate::opts::search_opts::SearchOpts;
