//! # rtfs ls
//!
//! List the immediate children of a path in a remote repository
//!

use crate::api::SearchService;
use crate::error::RtfsError;
use crate::io::ContentReader;
use crate::model::{EntryType, ResultSet};
use crate::opts::{LsOpts, SearchOpts};
use crate::util;

/// Lists `opts.pattern`. Every stream opened along the way is closed before
/// this returns, whether it succeeds or not.
pub async fn ls<S>(service: &S, opts: &LsOpts) -> Result<ResultSet, RtfsError>
where
    S: SearchService + ?Sized,
{
    log::debug!("ls {:?} on server {}", opts.pattern, opts.server.server_id);
    let mut reader = search(service, opts).await?;
    let result = project(&opts.pattern, &mut reader);
    let closed = reader.close();

    let result_set = result?;
    closed?;
    Ok(result_set)
}

/// Searches for the pattern and returns the stream holding its children.
///
/// A search for a folder may only return the folder itself. In that case the
/// first stream is closed and the children are searched for with a trailing
/// separator. Either search coming back empty means the path does not exist.
/// The caller owns the returned stream.
pub async fn search<S>(service: &S, opts: &LsOpts) -> Result<ContentReader, RtfsError>
where
    S: SearchService + ?Sized,
{
    let search_opts = SearchOpts::with_dirs(&opts.pattern, opts.quiet);
    let mut reader = service.search(&search_opts).await?;

    if reader.is_empty() {
        close_quietly(reader);
        return Err(RtfsError::path_not_found(&opts.pattern));
    }

    let matched_itself = match is_only_match(&mut reader, &opts.pattern) {
        Ok(matched_itself) => matched_itself,
        Err(err) => {
            close_quietly(reader);
            return Err(err);
        }
    };
    if !matched_itself {
        return Ok(reader);
    }

    reader.close()?;
    let children = search_opts.children();
    log::debug!("{:?} matched itself, searching {:?}", opts.pattern, children.pattern);
    let reader = service.search(&children).await?;
    if reader.is_empty() {
        close_quietly(reader);
        return Err(RtfsError::path_not_found(&opts.pattern));
    }
    Ok(reader)
}

/// Turns the records of a stream into the entries `ls` shows, in the order
/// they arrive. Descendants deeper than one level collapse into their top
/// level folder. A stream error discards everything collected so far.
pub fn project(pattern: &str, reader: &mut ContentReader) -> Result<ResultSet, RtfsError> {
    let mut result_set = ResultSet::new();
    while let Some(record) = reader.next_record() {
        let Some(child) = util::path::child_of(pattern, &record.path) else {
            continue;
        };
        let entry_type = if child.is_nested {
            EntryType::Folder
        } else {
            record.entry_type
        };
        result_set.add(child.name, entry_type);
    }

    if let Some(err) = reader.take_error() {
        return Err(err);
    }

    log::debug!(
        "projected {} entries for {pattern:?}, max length {}",
        result_set.len(),
        result_set.max_path_length()
    );
    Ok(result_set)
}

// The single record of a stream is the pattern's own node
fn is_only_match(reader: &mut ContentReader, pattern: &str) -> Result<bool, RtfsError> {
    if reader.len() != 1 {
        return Ok(false);
    }
    if let Some(record) = reader.peek() {
        return Ok(record.path == pattern);
    }
    Err(reader.take_error().unwrap_or_else(|| {
        RtfsError::stream_error(format!("Search results for '{pattern}' ended early"))
    }))
}

fn close_quietly(reader: ContentReader) {
    if let Err(err) = reader.close() {
        log::debug!("could not close search results: {err}");
    }
}
