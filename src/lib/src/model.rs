pub mod display_entry;
pub mod entry_type;
pub mod result_set;
pub mod search_result;
pub mod server_details;

pub use crate::model::display_entry::DisplayEntry;
pub use crate::model::entry_type::EntryType;
pub use crate::model::result_set::ResultSet;
pub use crate::model::search_result::SearchResult;
pub use crate::model::server_details::ServerDetails;
