use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::RtfsError;

/// Directory holding the rtfs config files.
///
/// `$RTFS_CONFIG_DIR` when set, otherwise `~/.config/rtfs`.
pub fn rtfs_config_dir() -> Result<PathBuf, RtfsError> {
    if let Ok(dir) = std::env::var(constants::CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let Some(home_dir) = dirs::home_dir() else {
        return Err(RtfsError::home_dir_not_found());
    };
    Ok(home_dir.join(constants::CONFIG_DIR).join(constants::RTFS))
}

pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, RtfsError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| RtfsError::file_error(path, err))
}

/// Writes the value, creating parent directories as needed
pub fn write_to_path(path: impl AsRef<Path>, value: impl AsRef<str>) -> Result<(), RtfsError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, value.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::RtfsError;
    use crate::util;

    #[test]
    fn test_write_creates_parent_dirs() -> Result<(), RtfsError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("servers.toml");
        util::fs::write_to_path(&path, "default_server = \"prod\"")?;
        assert_eq!(
            util::fs::read_from_path(&path)?,
            "default_server = \"prod\""
        );
        Ok(())
    }

    #[test]
    fn test_read_missing_file_names_the_path() {
        let result = util::fs::read_from_path("does/not/exist.toml");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("exist.toml"));
    }
}
