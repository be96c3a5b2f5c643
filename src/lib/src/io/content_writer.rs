use std::fs::File;
use std::io::{BufWriter, Write};

use tempfile::NamedTempFile;

use crate::error::RtfsError;
use crate::io::ContentReader;
use crate::model::SearchResult;

/// Spools search results to a temporary file, one json record per line.
///
/// Large result sets never have to be held in memory; `finish` hands the file
/// over to a [`ContentReader`].
pub struct ContentWriter {
    file: NamedTempFile,
    writer: BufWriter<File>,
    length: usize,
}

impl ContentWriter {
    pub fn new() -> Result<ContentWriter, RtfsError> {
        let file = tempfile::Builder::new()
            .prefix("rtfs-search-")
            .suffix(".jsonl")
            .tempfile()?;
        let writer = BufWriter::new(file.as_file().try_clone()?);
        Ok(ContentWriter {
            file,
            writer,
            length: 0,
        })
    }

    pub fn write(&mut self, record: &SearchResult) -> Result<(), RtfsError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.length += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn finish(mut self) -> Result<ContentReader, RtfsError> {
        self.writer.flush()?;
        log::debug!(
            "ContentWriter::finish wrote {} records to {:?}",
            self.length,
            self.file.path()
        );
        Ok(ContentReader::new(self.file, self.length))
    }
}
