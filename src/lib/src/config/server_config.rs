use crate::error::RtfsError;
use crate::model::ServerDetails;
use crate::util;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const SERVER_CONFIG_FILENAME: &str = "servers.toml";

/// The servers rtfs knows about, stored in `servers.toml`
///
/// ```toml
/// default_server = "prod"
///
/// [[servers]]
/// server_id = "prod"
/// url = "https://acme.jfrog.io/artifactory"
/// access_token = "..."
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ServerConfig {
    pub default_server: Option<String>,
    #[serde(default)]
    pub servers: HashSet<ServerDetails>,
}

impl ServerConfig {
    pub fn new_empty() -> ServerConfig {
        ServerConfig::default()
    }

    pub fn from_path(path: &Path) -> Result<ServerConfig, RtfsError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn default_path() -> Result<PathBuf, RtfsError> {
        Ok(util::fs::rtfs_config_dir()?.join(SERVER_CONFIG_FILENAME))
    }

    pub fn get() -> Result<ServerConfig, RtfsError> {
        let config_file = Self::default_path()?;
        log::debug!("looking for config file in...{:?}", config_file);
        if config_file.exists() {
            ServerConfig::from_path(&config_file)
        } else {
            log::debug!("unable to find server config file at {:?}", config_file);
            Err(RtfsError::no_servers_configured())
        }
    }

    pub fn get_or_create() -> Result<ServerConfig, RtfsError> {
        match Self::get() {
            Ok(config) => Ok(config),
            Err(RtfsError::ConnectionError(_)) => Ok(Self::new_empty()),
            Err(err) => Err(err),
        }
    }

    pub fn save_default(&self) -> Result<(), RtfsError> {
        let config_file = Self::default_path()?;
        log::debug!("Saving config to {:?}", config_file);
        self.save(&config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), RtfsError> {
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)?;
        Ok(())
    }

    /// Adds the server, replacing any server with the same id. The first
    /// server added becomes the default.
    pub fn add_server(&mut self, server: ServerDetails) {
        if self.default_server.is_none() {
            self.default_server = Some(server.server_id.clone());
        }
        self.servers.replace(server);
    }

    pub fn remove_server(&mut self, server_id: impl AsRef<str>) -> bool {
        let server_id = server_id.as_ref();
        let before = self.servers.len();
        self.servers.retain(|server| server.server_id != server_id);
        if self.default_server.as_deref() == Some(server_id) {
            self.default_server = None;
        }
        self.servers.len() != before
    }

    pub fn set_default(&mut self, server_id: impl AsRef<str>) -> Result<(), RtfsError> {
        let server_id = server_id.as_ref();
        if self.server(server_id).is_none() {
            return Err(RtfsError::server_not_found(server_id));
        }
        self.default_server = Some(server_id.to_string());
        Ok(())
    }

    pub fn server(&self, server_id: impl AsRef<str>) -> Option<&ServerDetails> {
        let server_id = server_id.as_ref();
        self.servers.iter().find(|s| s.server_id == server_id)
    }

    /// Servers sorted by id
    pub fn list(&self) -> Vec<&ServerDetails> {
        let mut servers: Vec<&ServerDetails> = self.servers.iter().collect();
        servers.sort_by(|a, b| a.server_id.cmp(&b.server_id));
        servers
    }

    /// Picks the server for a command: the one asked for, else the default,
    /// else the only one configured.
    pub fn resolve(&self, server_id: Option<&str>) -> Result<ServerDetails, RtfsError> {
        if let Some(server_id) = server_id {
            return self
                .server(server_id)
                .cloned()
                .ok_or_else(|| RtfsError::server_not_found(server_id));
        }

        if let Some(default_server) = &self.default_server {
            if let Some(server) = self.server(default_server) {
                return Ok(server.clone());
            }
            log::debug!("default server {default_server} is no longer configured");
        }

        match self.servers.len() {
            0 => Err(RtfsError::no_servers_configured()),
            1 => Ok(self.list()[0].clone()),
            _ => Err(RtfsError::default_server_not_set()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use crate::config::ServerConfig;
    use crate::constants;
    use crate::error::RtfsError;
    use crate::model::ServerDetails;

    fn prod() -> ServerDetails {
        ServerDetails::new("prod", "https://acme.jfrog.io/artifactory").with_access_token("1234")
    }

    fn staging() -> ServerDetails {
        ServerDetails::new("staging", "https://staging.acme.io/artifactory")
            .with_basic_auth("ci", "hunter2")
    }

    #[test]
    fn test_second_add_should_overwrite_first() {
        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.add_server(prod().with_access_token("5678"));

        assert_eq!(config.servers.len(), 1);
        assert_eq!(
            config.server("prod").and_then(|s| s.access_token.clone()),
            Some("5678".to_string())
        );
    }

    #[test]
    fn test_first_server_becomes_default() -> Result<(), RtfsError> {
        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.add_server(staging());

        assert_eq!(config.default_server.as_deref(), Some("prod"));
        assert_eq!(config.resolve(None)?.server_id, "prod");
        assert_eq!(config.resolve(Some("staging"))?.server_id, "staging");
        Ok(())
    }

    #[test]
    fn test_resolve_unknown_server() {
        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        let result = config.resolve(Some("nope"));
        assert!(matches!(result, Err(RtfsError::ServerNotFound(_))));
    }

    #[test]
    fn test_resolve_without_servers_is_a_connection_error() {
        let config = ServerConfig::new_empty();
        let result = config.resolve(None);
        assert!(matches!(result, Err(RtfsError::ConnectionError(_))));
    }

    #[test]
    fn test_resolve_needs_default_when_ambiguous() {
        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.add_server(staging());
        config.default_server = None;

        let result = config.resolve(None);
        assert!(matches!(result, Err(RtfsError::ConnectionError(_))));

        assert!(config.set_default("staging").is_ok());
        assert!(config.set_default("missing").is_err());
        assert_eq!(config.default_server.as_deref(), Some("staging"));
    }

    #[test]
    fn test_removing_the_default_falls_back_to_the_only_server() -> Result<(), RtfsError> {
        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.add_server(staging());

        assert!(config.remove_server("prod"));
        assert!(!config.remove_server("prod"));
        assert!(config.default_server.is_none());
        assert_eq!(config.resolve(None)?.server_id, "staging");
        Ok(())
    }

    #[test]
    fn test_save_and_load_round_trip() -> Result<(), RtfsError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(crate::config::SERVER_CONFIG_FILENAME);

        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.add_server(staging());
        config.save(&path)?;

        let loaded = ServerConfig::from_path(&path)?;
        assert_eq!(loaded.default_server.as_deref(), Some("prod"));
        assert_eq!(loaded.servers.len(), 2);
        let staging = loaded.server("staging").unwrap();
        assert_eq!(staging.user.as_deref(), Some("ci"));
        assert_eq!(staging.password.as_deref(), Some("hunter2"));
        assert!(staging.access_token.is_none());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_get_reads_from_config_dir_env() -> Result<(), RtfsError> {
        let dir = tempfile::tempdir()?;
        std::env::set_var(constants::CONFIG_DIR_ENV, dir.path());

        let missing = ServerConfig::get();
        assert!(matches!(missing, Err(RtfsError::ConnectionError(_))));
        assert!(ServerConfig::get_or_create()?.servers.is_empty());

        let mut config = ServerConfig::new_empty();
        config.add_server(prod());
        config.save_default()?;
        let loaded = ServerConfig::get();

        std::env::remove_var(constants::CONFIG_DIR_ENV);
        assert_eq!(loaded?.resolve(None)?.server_id, "prod");
        Ok(())
    }
}
