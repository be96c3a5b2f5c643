use crate::constants::PATH_SEPARATOR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOpts {
    pub pattern: String,
    pub include_dirs: bool,
    pub quiet: bool,
}

impl SearchOpts {
    /// Search matching folders as well as files
    pub fn with_dirs(pattern: impl AsRef<str>, quiet: bool) -> SearchOpts {
        SearchOpts {
            pattern: pattern.as_ref().to_string(),
            include_dirs: true,
            quiet,
        }
    }

    /// Same search, but for the children of the pattern
    pub fn children(&self) -> SearchOpts {
        SearchOpts {
            pattern: format!("{}{}", self.pattern, PATH_SEPARATOR),
            ..self.clone()
        }
    }
}
