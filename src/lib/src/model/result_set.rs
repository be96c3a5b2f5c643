use std::collections::HashMap;
use std::io::Write;

use crate::error::RtfsError;
use crate::model::{DisplayEntry, EntryType};
use crate::util;

/// The children of a listed path, in the order the search service delivered
/// them, plus the width of the longest name.
///
/// Entries are never empty and never repeated.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    entries: Vec<DisplayEntry>,
    max_path_length: usize,
    positions: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> ResultSet {
        ResultSet::default()
    }

    /// Adds a child to the listing. Returns false if the name was empty or
    /// already listed. A repeated name seen as a folder upgrades the existing
    /// entry to a folder, since only folders can have descendants.
    pub fn add(&mut self, path: impl AsRef<str>, entry_type: EntryType) -> bool {
        let path = path.as_ref();
        if path.is_empty() {
            return false;
        }

        if let Some(&idx) = self.positions.get(path) {
            if entry_type.is_folder() {
                self.entries[idx].entry_type = EntryType::Folder;
            }
            return false;
        }

        let entry = DisplayEntry::new(path, entry_type);
        self.max_path_length = self.max_path_length.max(entry.width());
        self.positions.insert(entry.path.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn max_path_length(&self) -> usize {
        self.max_path_length
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, out: &mut impl Write, terminal_width: usize) -> Result<(), RtfsError> {
        util::columns::render(out, &self.entries, self.max_path_length, terminal_width)
    }

    pub fn print_stdout(&self) -> Result<(), RtfsError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render(&mut handle, util::columns::terminal_width())?;
        handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{EntryType, ResultSet};

    #[test]
    fn test_empty_result_set_has_zero_width() {
        let result_set = ResultSet::new();
        assert!(result_set.is_empty());
        assert_eq!(result_set.max_path_length(), 0);
    }

    #[test]
    fn test_add_skips_empty_and_repeated_names() {
        let mut result_set = ResultSet::new();
        assert!(result_set.add("a.txt", EntryType::File));
        assert!(!result_set.add("", EntryType::Folder));
        assert!(!result_set.add("a.txt", EntryType::File));
        assert!(result_set.add("folder", EntryType::Folder));

        assert_eq!(result_set.len(), 2);
        assert_eq!(result_set.max_path_length(), "folder".len());
        assert!(result_set.entries().iter().all(|e| !e.path.is_empty()));
    }

    #[test]
    fn test_repeated_folder_upgrades_entry_type() {
        let mut result_set = ResultSet::new();
        result_set.add("sub", EntryType::File);
        result_set.add("sub", EntryType::Folder);

        assert_eq!(result_set.len(), 1);
        assert_eq!(result_set.entries()[0].entry_type, EntryType::Folder);
    }

    #[test]
    fn test_max_path_length_counts_characters() {
        let mut result_set = ResultSet::new();
        result_set.add("données", EntryType::File);
        result_set.add("ab", EntryType::File);
        assert_eq!(result_set.max_path_length(), 7);
    }
}
