use crate::model::ServerDetails;
use crate::util;

/// One `ls` invocation: which server to ask and which path to list.
#[derive(Clone, Debug)]
pub struct LsOpts {
    pub server: ServerDetails,
    pub pattern: String,
    /// Suppress the search service's own progress logs
    pub quiet: bool,
}

impl LsOpts {
    /// The pattern is normalized, so `/repo//dir` lists `repo/dir`
    pub fn new(server: ServerDetails, pattern: impl AsRef<str>) -> LsOpts {
        LsOpts {
            server,
            pattern: util::path::normalize(pattern.as_ref()),
            quiet: true,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> LsOpts {
        self.quiet = !verbose;
        self
    }
}
