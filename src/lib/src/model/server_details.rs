use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

use crate::error::RtfsError;

/// Connection and auth context for one artifact server.
#[derive(Serialize, Deserialize, Clone)]
pub struct ServerDetails {
    pub server_id: String,
    pub url: String,
    pub access_token: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ServerDetails {
    pub fn new(server_id: impl AsRef<str>, url: impl AsRef<str>) -> ServerDetails {
        ServerDetails {
            server_id: server_id.as_ref().to_string(),
            url: url.as_ref().to_string(),
            access_token: None,
            user: None,
            password: None,
        }
    }

    pub fn with_access_token(mut self, token: impl AsRef<str>) -> ServerDetails {
        self.access_token = Some(token.as_ref().to_string());
        self
    }

    pub fn with_basic_auth(
        mut self,
        user: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> ServerDetails {
        self.user = Some(user.as_ref().to_string());
        self.password = Some(password.as_ref().to_string());
        self
    }

    /// Parsed base url, always ending in a slash so endpoints join under it
    pub fn base_url(&self) -> Result<Url, RtfsError> {
        let mut url = self.url.trim().to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        Url::parse(&url).map_err(|err| RtfsError::invalid_server_url(&self.url, err))
    }

    /// Url of an endpoint such as `/api/search/aql` on this server
    pub fn endpoint_url(&self, endpoint: impl AsRef<str>) -> Result<Url, RtfsError> {
        let endpoint = endpoint.as_ref().trim_start_matches('/');
        Ok(self.base_url()?.join(endpoint)?)
    }
}

// Hash on the server id so configs can be looked up in a set
impl PartialEq for ServerDetails {
    fn eq(&self, other: &ServerDetails) -> bool {
        self.server_id == other.server_id
    }
}
impl Eq for ServerDetails {}
impl Hash for ServerDetails {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.server_id.hash(state);
    }
}

// Keep credentials out of debug logs
impl fmt::Debug for ServerDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerDetails")
            .field("server_id", &self.server_id)
            .field("url", &self.url)
            .field("access_token", &self.access_token.as_ref().map(|_| "****"))
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}
