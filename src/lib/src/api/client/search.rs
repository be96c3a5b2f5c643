use async_trait::async_trait;
use reqwest::{header, Client, Url};

use crate::api::client;
use crate::api::client::aql;
use crate::api::SearchService;
use crate::constants::AQL_SEARCH_ENDPOINT;
use crate::error::RtfsError;
use crate::io::{ContentReader, ContentWriter};
use crate::model::{SearchResult, ServerDetails};
use crate::opts::SearchOpts;
use crate::view::AqlResponse;

/// Searches a server through its AQL endpoint
pub struct AqlSearch {
    server: ServerDetails,
    client: Client,
    url: Url,
}

impl AqlSearch {
    pub fn new(server: &ServerDetails) -> Result<AqlSearch, RtfsError> {
        Ok(AqlSearch {
            server: server.clone(),
            client: client::new_for_server(server)?,
            url: server.endpoint_url(AQL_SEARCH_ENDPOINT)?,
        })
    }

    async fn fetch(&self, opts: &SearchOpts, query: String) -> Result<AqlResponse, RtfsError> {
        let url = self.url.as_str();
        log::debug!("api::client::search {url} {query}");

        let request = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "text/plain")
            .body(query);
        let res = client::with_basic_auth(&self.server, request)
            .send()
            .await
            .map_err(|err| RtfsError::search_failed(&opts.pattern, err))?;

        let body = client::parse_response_body(url, res)
            .await
            .map_err(|err| RtfsError::search_failed(&opts.pattern, err))?;

        serde_json::from_str(&body).map_err(|err| {
            RtfsError::search_failed(
                &opts.pattern,
                format!("Could not deserialize response from [{url}]: {err}"),
            )
        })
    }
}

#[async_trait]
impl SearchService for AqlSearch {
    async fn search(&self, opts: &SearchOpts) -> Result<ContentReader, RtfsError> {
        let query = aql::query_for(opts)?;
        if !opts.quiet {
            log::info!("Searching artifacts...");
        }

        let response = self.fetch(opts, query).await?;

        let mut writer = ContentWriter::new()?;
        for item in response.results {
            writer.write(&SearchResult::from(item))?;
        }
        if !opts.quiet {
            log::info!("Found {} artifacts.", writer.len());
        }
        writer.finish()
    }
}
