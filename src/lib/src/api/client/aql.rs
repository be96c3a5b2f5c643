//! Builds `items.find(...)` queries from `ls` patterns
//!

use crate::constants::{AQL_INCLUDE_FIELDS, PATH_SEPARATOR, REPO_ROOT_PATH, WILDCARDS};
use crate::error::RtfsError;
use crate::opts::SearchOpts;

/// The parts of a pattern the search service matches on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqlCriteria {
    pub repo: String,
    pub path: String,
    pub name: String,
    pub include_dirs: bool,
}

impl AqlCriteria {
    /// Splits `repo/dir/name` into repository, parent path and name.
    ///
    /// A pattern ending in a separator, or naming only a repository, asks for
    /// the children of that folder.
    pub fn from_opts(opts: &SearchOpts) -> Result<AqlCriteria, RtfsError> {
        let pattern = opts.pattern.trim();
        let children = pattern.ends_with(PATH_SEPARATOR);
        let mut segments: Vec<&str> = pattern
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(RtfsError::input_error(format!(
                "Pattern {:?} does not name a repository",
                opts.pattern
            )));
        }
        let repo = segments.remove(0).to_string();

        let (path, name) = if children || segments.is_empty() {
            (join_or_root(&segments), String::from("*"))
        } else {
            let name = segments.pop().unwrap_or_default().to_string();
            (join_or_root(&segments), name)
        };

        Ok(AqlCriteria {
            repo,
            path,
            name,
            include_dirs: opts.include_dirs,
        })
    }

    pub fn to_query(&self) -> String {
        let item_type = if self.include_dirs { "any" } else { "file" };
        format!(
            r#"items.find({{"repo":{},"path":{},"name":{},"type":{}}}).include({})"#,
            match_value(&self.repo),
            matcher(&self.path),
            matcher(&self.name),
            quote(item_type),
            AQL_INCLUDE_FIELDS
        )
    }
}

pub fn query_for(opts: &SearchOpts) -> Result<String, RtfsError> {
    Ok(AqlCriteria::from_opts(opts)?.to_query())
}

fn join_or_root(segments: &[&str]) -> String {
    if segments.is_empty() {
        REPO_ROOT_PATH.to_string()
    } else {
        segments.join("/")
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn matcher(s: &str) -> String {
    format!(r#"{{"$match":{}}}"#, quote(s))
}

// Repository keys only need a matcher when they hold a wildcard
fn match_value(s: &str) -> String {
    if s.contains(WILDCARDS) {
        matcher(s)
    } else {
        quote(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::aql::{query_for, AqlCriteria};
    use crate::error::RtfsError;
    use crate::opts::SearchOpts;

    fn criteria(pattern: &str) -> Result<AqlCriteria, RtfsError> {
        AqlCriteria::from_opts(&SearchOpts::with_dirs(pattern, true))
    }

    #[test]
    fn test_pattern_names_a_node() -> Result<(), RtfsError> {
        let c = criteria("repo/a/b")?;
        assert_eq!((c.repo.as_str(), c.path.as_str(), c.name.as_str()), ("repo", "a", "b"));

        let c = criteria("repo/dir")?;
        assert_eq!((c.path.as_str(), c.name.as_str()), (".", "dir"));
        Ok(())
    }

    #[test]
    fn test_trailing_separator_lists_children() -> Result<(), RtfsError> {
        let c = criteria("repo/dir/")?;
        assert_eq!((c.path.as_str(), c.name.as_str()), ("dir", "*"));

        let c = criteria("repo/a/b/")?;
        assert_eq!((c.path.as_str(), c.name.as_str()), ("a/b", "*"));
        Ok(())
    }

    #[test]
    fn test_repository_only_lists_the_root() -> Result<(), RtfsError> {
        for pattern in ["repo", "repo/"] {
            let c = criteria(pattern)?;
            assert_eq!((c.repo.as_str(), c.path.as_str(), c.name.as_str()), ("repo", ".", "*"));
        }
        Ok(())
    }

    #[test]
    fn test_empty_pattern_is_an_input_error() {
        assert!(matches!(criteria(""), Err(RtfsError::InputError(_))));
        assert!(matches!(criteria("/"), Err(RtfsError::InputError(_))));
    }

    #[test]
    fn test_query_text() -> Result<(), RtfsError> {
        let query = query_for(&SearchOpts::with_dirs("repo/dir/*.jar", true))?;
        assert_eq!(
            query,
            r#"items.find({"repo":"repo","path":{"$match":"dir"},"name":{"$match":"*.jar"},"type":"any"}).include("repo","path","name","type")"#
        );
        Ok(())
    }

    #[test]
    fn test_files_only_query() -> Result<(), RtfsError> {
        let mut opts = SearchOpts::with_dirs("repo/dir/", true);
        opts.include_dirs = false;
        let query = query_for(&opts)?;
        assert!(query.contains(r#""type":"file""#));
        Ok(())
    }

    #[test]
    fn test_values_are_escaped() -> Result<(), RtfsError> {
        let query = query_for(&SearchOpts::with_dirs(r#"repo/we"ird"#, true))?;
        assert!(query.contains(r#""name":{"$match":"we\"ird"}"#));
        Ok(())
    }
}
