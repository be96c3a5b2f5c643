use serde::{Deserialize, Serialize};

use crate::constants::{PATH_SEPARATOR, REPO_ROOT_PATH};
use crate::model::{EntryType, SearchResult};

/// Body of a successful `items.find(...)` query
#[derive(Serialize, Deserialize, Debug)]
pub struct AqlResponse {
    #[serde(default)]
    pub results: Vec<AqlItem>,
    pub range: Option<AqlRange>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AqlItem {
    pub repo: String,
    pub path: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AqlRange {
    pub start_pos: usize,
    pub end_pos: usize,
    pub total: usize,
}

impl AqlItem {
    /// `repo/path/name`, where a path of `.` is the repository root
    pub fn full_path(&self) -> String {
        let mut full_path = self.repo.clone();
        for part in [self.path.as_str(), self.name.as_str()] {
            let part = part.trim_matches(PATH_SEPARATOR);
            if part.is_empty() || part == REPO_ROOT_PATH {
                continue;
            }
            full_path.push(PATH_SEPARATOR);
            full_path.push_str(part);
        }
        full_path
    }
}

impl From<AqlItem> for SearchResult {
    fn from(item: AqlItem) -> SearchResult {
        SearchResult {
            path: item.full_path(),
            entry_type: EntryType::from_search_type(&item.item_type),
        }
    }
}
