//! # API Client - For talking to an artifact server
//!

use crate::constants;
use crate::error::RtfsError;
use crate::model::ServerDetails;
use crate::view::ErrorResponse;
pub use reqwest::Url;
use reqwest::{header, Client, ClientBuilder, IntoUrl, RequestBuilder};
use std::time;

pub mod aql;
pub mod search;

const VERSION: &str = constants::RTFS_VERSION;
const USER_AGENT: &str = constants::RTFS;

pub fn get_scheme_and_host_from_url<U: IntoUrl>(url: U) -> Result<(String, String), RtfsError> {
    let parsed_url = url.into_url()?;
    let mut host_str = parsed_url.host_str().unwrap_or_default().to_string();
    if let Some(port) = parsed_url.port() {
        host_str = format!("{host_str}:{port}");
    }
    Ok((parsed_url.scheme().to_owned(), host_str))
}

/// Client for one server, carrying its bearer token if it has one
pub fn new_for_server(server: &ServerDetails) -> Result<Client, RtfsError> {
    match builder_for_server(server)?
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(RtfsError::connection_error(format!(
            "Could not create a client for server '{}': {reqwest_err}",
            server.server_id
        ))),
    }
}

pub fn builder_for_server(server: &ServerDetails) -> Result<ClientBuilder, RtfsError> {
    let (_scheme, host) = get_scheme_and_host_from_url(server.base_url()?)?;
    match &server.access_token {
        Some(token) => builder_with_bearer_token(&host, token),
        None => {
            log::trace!("No access token found for host: {host}");
            Ok(builder())
        }
    }
}

fn builder_with_bearer_token(host: &str, bearer_token: &str) -> Result<ClientBuilder, RtfsError> {
    log::debug!("Setting bearer token for host: {host}");
    let auth_header = format!("Bearer {bearer_token}");
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("api::client invalid header value: {}", err);
            return Err(RtfsError::connection_error(
                "Error setting request auth. Please check the access token in your rtfs config.",
            ));
        }
    };
    auth_value.set_sensitive(true);
    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth_value);
    Ok(builder().default_headers(headers))
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(format!("{USER_AGENT}/{VERSION}"))
}

/// Basic auth for servers configured with a user instead of a token
pub fn with_basic_auth(server: &ServerDetails, request: RequestBuilder) -> RequestBuilder {
    match (&server.access_token, &server.user) {
        (None, Some(user)) => request.basic_auth(user, server.password.as_ref()),
        _ => request,
    }
}

/// Reads the body of a response, turning a non success status into an error
/// message built from the server's `errors` list when it sent one.
pub async fn parse_response_body(url: &str, res: reqwest::Response) -> Result<String, String> {
    let status = res.status();
    let body = res.text().await.map_err(|err| err.to_string())?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    let msg = serde_json::from_str::<ErrorResponse>(&body)
        .map(|response| response.full_err_msg())
        .unwrap_or_default();
    if msg.is_empty() {
        Err(format!("Err status [{status}] from url {url}"))
    } else {
        Err(format!("Err status [{status}] from url {url} [{msg}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_for_server_with_access_token() {
        let server = ServerDetails::new("prod", "https://acme.jfrog.io/artifactory")
            .with_access_token("test_token_123");
        assert!(new_for_server(&server).is_ok());
    }

    #[test]
    fn test_new_for_server_anonymous() {
        let server = ServerDetails::new("prod", "http://localhost:8081/artifactory");
        assert!(new_for_server(&server).is_ok());
    }

    #[test]
    fn test_invalid_token_is_a_connection_error() {
        let server = ServerDetails::new("prod", "https://acme.jfrog.io/artifactory")
            .with_access_token("invalid\ntoken");
        let result = new_for_server(&server);
        assert!(matches!(result, Err(RtfsError::ConnectionError(_))));
        assert!(result
            .err()
            .map(|err| err.to_string().contains("Error setting request auth"))
            .unwrap_or(false));
    }

    #[test]
    fn test_get_scheme_and_host_from_url() {
        let test_cases = vec![
            ("https://example.com", ("https".to_string(), "example.com".to_string())),
            ("http://localhost:8080", ("http".to_string(), "localhost:8080".to_string())),
            (
                "https://acme.jfrog.io:8443/artifactory",
                ("https".to_string(), "acme.jfrog.io:8443".to_string()),
            ),
        ];

        for (url, expected) in test_cases {
            let result = get_scheme_and_host_from_url(url);
            assert!(result.is_ok());
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_get_scheme_and_host_from_url_invalid() {
        let result = get_scheme_and_host_from_url("not-a-url");
        assert!(result.is_err());
    }
}
