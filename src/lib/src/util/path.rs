//! Turning full repository paths into the names `ls` displays
//!

use crate::constants::{PATH_SEPARATOR, WILDCARDS};

/// The immediate child of a listed pattern that a search result falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Child<'a> {
    pub name: &'a str,
    /// The result is a descendant below `name`, so `name` is a folder
    pub is_nested: bool,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
}

/// Canonical form of a listing pattern: no leading or repeated separators. A
/// trailing separator is kept since it asks for the children of a folder.
///
/// ```
/// use librtfs::util::path::normalize;
///
/// assert_eq!(normalize("/repo//dir"), "repo/dir");
/// assert_eq!(normalize("repo/dir//"), "repo/dir/");
/// ```
pub fn normalize(pattern: &str) -> String {
    let mut normalized = segments(pattern.trim()).collect::<Vec<&str>>().join("/");
    if !normalized.is_empty() && pattern.trim().ends_with(PATH_SEPARATOR) {
        normalized.push(PATH_SEPARATOR);
    }
    normalized
}

/// Number of leading segments of the pattern that are a literal directory
/// path. A trailing separator is ignored, and a segment holding a wildcard
/// ends the prefix.
pub fn literal_prefix_len(pattern: &str) -> usize {
    segments(pattern)
        .take_while(|segment| !segment.contains(WILDCARDS))
        .count()
}

/// Finds the child of `pattern` that `full_path` belongs to.
///
/// Returns None when `full_path` is the pattern's own node (or above it).
/// Results of a search always live under the pattern's literal prefix, so
/// the prefix is stripped by position.
pub fn child_of<'a>(pattern: &str, full_path: &'a str) -> Option<Child<'a>> {
    let prefix_len = literal_prefix_len(pattern);
    let mut rest = segments(full_path).skip(prefix_len);
    let name = rest.next()?;
    Some(Child {
        name,
        is_nested: rest.next().is_some(),
    })
}

/// Display name of `full_path` when listing `pattern`, empty for the
/// pattern's own node.
///
/// ```
/// use librtfs::util::path::trim;
///
/// assert_eq!(trim("repo/a/b", "repo/a/b/c/d"), "c");
/// assert_eq!(trim("repo/a/b", "repo/a/b"), "");
/// ```
pub fn trim(pattern: &str, full_path: &str) -> String {
    child_of(pattern, full_path)
        .map(|child| child.name.to_string())
        .unwrap_or_default()
}
