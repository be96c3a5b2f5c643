use serde::{Deserialize, Serialize};

use crate::model::EntryType;

/// A trimmed, human facing name for one immediate child of the listed path.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct DisplayEntry {
    pub path: String,
    pub entry_type: EntryType,
}

impl DisplayEntry {
    pub fn new(path: impl AsRef<str>, entry_type: EntryType) -> DisplayEntry {
        DisplayEntry {
            path: path.as_ref().to_string(),
            entry_type,
        }
    }

    /// Width of the name in terminal columns
    pub fn width(&self) -> usize {
        self.path.chars().count()
    }
}
