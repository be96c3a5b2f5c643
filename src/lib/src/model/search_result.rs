use serde::{Deserialize, Serialize};

use crate::model::EntryType;

/// One record returned by the search service.
///
/// `path` is slash separated and starts with the repository key,
/// e.g. `libs-release-local/org/acme/app.jar`.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct SearchResult {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl SearchResult {
    pub fn new(path: impl AsRef<str>, entry_type: EntryType) -> SearchResult {
        SearchResult {
            path: path.as_ref().to_string(),
            entry_type,
        }
    }

    pub fn file(path: impl AsRef<str>) -> SearchResult {
        SearchResult::new(path, EntryType::File)
    }

    pub fn folder(path: impl AsRef<str>) -> SearchResult {
        SearchResult::new(path, EntryType::Folder)
    }
}
