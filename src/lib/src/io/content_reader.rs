use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::RtfsError;
use crate::io::ContentWriter;
use crate::model::SearchResult;

/// A single pass cursor over the results of one search.
///
/// Records live in a temporary file that is removed when the reader is
/// closed or dropped. Reading stops at the first unreadable record; the
/// cause is kept and handed out by [`ContentReader::take_error`] once
/// iteration is over.
pub struct ContentReader {
    file: NamedTempFile,
    lines: Option<Lines<BufReader<File>>>,
    peeked: Option<SearchResult>,
    length: usize,
    error: Option<RtfsError>,
    done: bool,
}

impl ContentReader {
    pub(crate) fn new(file: NamedTempFile, length: usize) -> ContentReader {
        ContentReader {
            file,
            lines: None,
            peeked: None,
            length,
            error: None,
            done: false,
        }
    }

    pub fn from_records(
        records: impl IntoIterator<Item = SearchResult>,
    ) -> Result<ContentReader, RtfsError> {
        let mut writer = ContentWriter::new()?;
        for record in records {
            writer.write(&record)?;
        }
        writer.finish()
    }

    /// Takes ownership of an existing results file, one json record per line
    pub fn from_file(file: NamedTempFile) -> Result<ContentReader, RtfsError> {
        let reader = BufReader::new(file.reopen()?);
        let mut length = 0;
        for line in reader.lines() {
            if !line?.trim().is_empty() {
                length += 1;
            }
        }
        Ok(ContentReader::new(file, length))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of records the search produced
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Looks at the next record without consuming it
    pub fn peek(&mut self) -> Option<&SearchResult> {
        if self.peeked.is_none() {
            self.peeked = self.read_record();
        }
        self.peeked.as_ref()
    }

    pub fn next_record(&mut self) -> Option<SearchResult> {
        match self.peeked.take() {
            Some(record) => Some(record),
            None => self.read_record(),
        }
    }

    /// The error that ended iteration early, if any
    pub fn take_error(&mut self) -> Option<RtfsError> {
        self.error.take()
    }

    /// Removes the results file. Consumes the reader, so it can only happen
    /// once.
    pub fn close(self) -> Result<(), RtfsError> {
        log::debug!("ContentReader::close {:?}", self.file.path());
        self.file.close()?;
        Ok(())
    }

    fn read_record(&mut self) -> Option<SearchResult> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.fail(err);
                    return None;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<SearchResult>(&line) {
                Ok(record) => return Some(record),
                Err(err) => {
                    let err = RtfsError::stream_error(format!(
                        "Could not read search result {line:?} from {:?}: {err}",
                        self.file.path()
                    ));
                    self.fail(err);
                    return None;
                }
            }
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, RtfsError> {
        if self.lines.is_none() {
            let file = self.file.reopen()?;
            self.lines = Some(BufReader::new(file).lines());
        }

        match self.lines.as_mut().and_then(|lines| lines.next()) {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => Err(RtfsError::stream_error(format!(
                "Could not read search results from {:?}: {err}",
                self.file.path()
            ))),
            None => Ok(None),
        }
    }

    fn fail(&mut self, err: RtfsError) {
        log::debug!("ContentReader stopped early: {err}");
        self.error = Some(err);
        self.done = true;
    }
}

impl Iterator for ContentReader {
    type Item = SearchResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::error::RtfsError;
    use crate::io::ContentReader;
    use crate::model::{EntryType, SearchResult};

    #[test]
    fn test_reads_records_in_order() -> Result<(), RtfsError> {
        let reader = ContentReader::from_records(vec![
            SearchResult::file("repo/dir/x.txt"),
            SearchResult::folder("repo/dir/sub"),
        ])?;
        assert_eq!(reader.len(), 2);

        let records: Vec<SearchResult> = reader.collect();
        assert_eq!(records[0].path, "repo/dir/x.txt");
        assert_eq!(records[0].entry_type, EntryType::File);
        assert_eq!(records[1].path, "repo/dir/sub");
        assert_eq!(records[1].entry_type, EntryType::Folder);
        Ok(())
    }

    #[test]
    fn test_peek_does_not_consume() -> Result<(), RtfsError> {
        let mut reader = ContentReader::from_records(vec![SearchResult::folder("repo/dir")])?;

        assert_eq!(reader.peek().map(|r| r.path.clone()), Some("repo/dir".into()));
        assert_eq!(reader.peek().map(|r| r.path.clone()), Some("repo/dir".into()));
        assert_eq!(reader.next_record(), Some(SearchResult::folder("repo/dir")));
        assert_eq!(reader.next_record(), None);
        assert!(reader.take_error().is_none());
        Ok(())
    }

    #[test]
    fn test_empty_reader() -> Result<(), RtfsError> {
        let mut reader = ContentReader::from_records(Vec::new())?;
        assert!(reader.is_empty());
        assert!(reader.peek().is_none());
        assert!(reader.take_error().is_none());
        Ok(())
    }

    #[test]
    fn test_close_removes_the_results_file() -> Result<(), RtfsError> {
        let reader = ContentReader::from_records(vec![SearchResult::file("repo/a")])?;
        let path = reader.path().to_path_buf();
        assert!(path.exists());

        reader.close()?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_drop_removes_the_results_file() -> Result<(), RtfsError> {
        let reader = ContentReader::from_records(vec![SearchResult::file("repo/a")])?;
        let path = reader.path().to_path_buf();
        drop(reader);
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_malformed_record_stops_iteration_with_error() -> Result<(), RtfsError> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, r#"{{"path":"repo/dir/a","type":"file"}}"#)?;
        writeln!(file, "not json")?;
        writeln!(file, r#"{{"path":"repo/dir/b","type":"file"}}"#)?;
        file.flush()?;

        let mut reader = ContentReader::from_file(file)?;
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.next_record(), Some(SearchResult::file("repo/dir/a")));
        assert_eq!(reader.next_record(), None);
        assert_eq!(reader.next_record(), None);

        let err = reader.take_error();
        assert!(matches!(err, Some(RtfsError::StreamError(_))));
        Ok(())
    }
}
