use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::FOLDER_TYPE;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Folder,
}

impl EntryType {
    /// Maps the type string of a search record. Anything that is not a folder
    /// is listed as a file.
    pub fn from_search_type(s: impl AsRef<str>) -> EntryType {
        if s.as_ref().eq_ignore_ascii_case(FOLDER_TYPE) {
            EntryType::Folder
        } else {
            EntryType::File
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, EntryType::Folder)
    }
}

impl FromStr for EntryType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(EntryType::File),
            "folder" => Ok(EntryType::Folder),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EntryType::File => write!(f, "file"),
            EntryType::Folder => write!(f, "folder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::EntryType;

    #[test]
    fn test_unknown_search_types_are_files() {
        assert_eq!(EntryType::from_search_type("folder"), EntryType::Folder);
        assert_eq!(EntryType::from_search_type("FOLDER"), EntryType::Folder);
        assert_eq!(EntryType::from_search_type("file"), EntryType::File);
        assert_eq!(EntryType::from_search_type("any"), EntryType::File);
    }
}
