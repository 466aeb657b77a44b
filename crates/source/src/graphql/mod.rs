// GraphQL slug source

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sitemap_kit_core::{Error, Result, SiteConfig, Slug, SlugSource, Slugs};

/// GraphQL API client fetching client and author slugs with one query
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
    query: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// `data` object of the slug query; lists may be absent or null
#[derive(Debug, Deserialize)]
struct SlugData {
    #[serde(default)]
    clients: Option<Vec<SlugRecord>>,
    #[serde(default)]
    authors: Option<Vec<SlugRecord>>,
}

#[derive(Debug, Deserialize)]
struct SlugRecord {
    slug: Slug,
}

impl GraphqlClient {
    /// Client with a direct connection; proxy environment variables are ignored
    pub fn new(endpoint: impl Into<String>, query: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| Error::Source(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, endpoint, query))
    }

    /// Use a preconfigured HTTP client (proxies, timeouts)
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            query: query.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(&config.endpoint, &config.query)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SlugSource for GraphqlClient {
    async fn fetch_slugs(&self) -> Result<Slugs> {
        log::debug!(target: "source", "POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query: &self.query })
            .send()
            .await
            .map_err(|e| Error::Source(format!("Request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Source(format!(
                "{} responded with HTTP {}",
                self.endpoint, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Source(format!("Failed to read response body: {}", e)))?;

        decode_response(&body)
    }
}

/// Decode a GraphQL response body into slugs.
///
/// Any entry in `errors` fails the whole response, even when `data` is present.
fn decode_response(body: &str) -> Result<Slugs> {
    let response: GraphqlResponse<SlugData> = serde_json::from_str(body)
        .map_err(|e| Error::Source(format!("Invalid GraphQL response: {}", e)))?;

    if let Some(error) = response.errors.first() {
        return Err(Error::Source(format!("GraphQL error: {}", error.message)));
    }

    let data = response
        .data
        .ok_or_else(|| Error::Source("GraphQL response has no data".to_string()))?;

    let into_slugs = |records: Option<Vec<SlugRecord>>| -> Vec<Slug> {
        records
            .unwrap_or_default()
            .into_iter()
            .map(|record| record.slug)
            .collect()
    };

    Ok(Slugs {
        authors: into_slugs(data.authors),
        clients: into_slugs(data.clients),
    })
}
