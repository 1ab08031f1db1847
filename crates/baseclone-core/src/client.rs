//! HTTP client for the remote tabular-data service
//!
//! One method per remote operation: share-view reads, base and table
//! creation, and chunked record insertion. The bearer credential is injected
//! at construction; core logic never reads ambient process state.

use crate::endpoints;
use crate::error::{CloneError, Result};
use crate::record::{CreatedBase, Record, TableSpec, ViewPayload};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// Client Constants
// ============================================================================

/// Default metadata/content API root.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Host marker that identifies in-record links back to the remote service.
pub const DEFAULT_SHARE_HOST: &str = "airtable.com";

/// Per-request timeout in seconds. A hung request becomes a reported error
/// for its branch only.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed number of records per insert request.
pub const INSERT_CHUNK_SIZE: usize = 10;

/// Client configuration, injected explicitly at construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root for metadata and content endpoints
    pub api_url: String,

    /// Bearer credential; omitted for unauthenticated share reads
    pub token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// API client for the remote tabular-data service
pub struct AirtableClient {
    client: Client,
    api_url: String,
}

impl AirtableClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| CloneError::config("API token contains invalid header characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a shared view's records
    pub async fn get_view(&self, url: &str) -> Result<ViewPayload> {
        debug!(url = %url, "Fetching shared view");

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response)?;

        Ok(response.json().await?)
    }

    /// Create a destination base holding the given tables
    ///
    /// Returns the new base id along with any tables the service echoed
    /// back. A failure here is a hard failure for the clone operation.
    pub async fn create_base(&self, name: &str, tables: &[TableSpec]) -> Result<CreatedBase> {
        let url = endpoints::create_base_url(&self.api_url);
        let payload = CreateBaseRequest { name, tables };

        debug!(name = %name, tables = tables.len(), "Creating destination base");

        let response = self.client.post(&url).json(&payload).send().await?;
        let response = ensure_success(response)?;

        Ok(response.json().await?)
    }

    /// Create a table inside an existing base, returning its id
    pub async fn create_table(&self, base_id: &str, table: &TableSpec) -> Result<String> {
        let url = endpoints::create_table_url(&self.api_url, base_id);

        debug!(base_id = %base_id, table = %table.name, "Creating destination table");

        let response = self.client.post(&url).json(table).send().await?;
        let response = ensure_success(response)?;

        let created: CreatedId = response.json().await?;
        Ok(created.id)
    }

    /// Insert records into a table in fixed-size chunks
    ///
    /// Chunks are written strictly sequentially; each must succeed before
    /// the next is issued. The first failing chunk aborts the operation and
    /// the error reports how many records were already written. There is no
    /// compensation: the destination keeps the committed prefix.
    pub async fn insert_records(
        &self,
        base_id: &str,
        table_id: &str,
        records: &[Record],
    ) -> std::result::Result<usize, InsertError> {
        let url = endpoints::insert_records_url(&self.api_url, base_id, table_id);
        let mut written = 0;

        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            debug!(
                base_id = %base_id,
                table_id = %table_id,
                chunk_len = chunk.len(),
                written,
                "Writing record chunk"
            );

            self.insert_chunk(&url, chunk)
                .await
                .map_err(|source| InsertError { written, source })?;

            written += chunk.len();
        }

        Ok(written)
    }

    async fn insert_chunk(&self, url: &str, chunk: &[Record]) -> Result<()> {
        let payload = InsertRequest {
            records: chunk
                .iter()
                .map(|record| WriteRecord {
                    fields: &record.fields,
                })
                .collect(),
        };

        let response = self.client.post(url).json(&payload).send().await?;
        ensure_success(response)?;

        Ok(())
    }

    /// Get the configured API root
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// A record-insert failure carrying the prefix-committed count
#[derive(Debug, Error)]
#[error("{source} ({written} record(s) were already written and remain in place)")]
pub struct InsertError {
    /// Records successfully written before the failing chunk
    pub written: usize,

    #[source]
    pub source: CloneError,
}

/// Map a non-success status to a [`CloneError::RemoteStatus`]
fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(CloneError::RemoteStatus {
            status: response.status(),
            url: response.url().to_string(),
        })
    }
}

#[derive(Serialize)]
struct CreateBaseRequest<'a> {
    name: &'a str,
    tables: &'a [TableSpec],
}

#[derive(Serialize)]
struct InsertRequest<'a> {
    records: Vec<WriteRecord<'a>>,
}

/// Outgoing record: source ids are stripped, the destination assigns its own
#[derive(Serialize)]
struct WriteRecord<'a> {
    fields: &'a serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct CreatedId {
    id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AirtableClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = AirtableClient::new(ClientConfig {
            api_url: "http://localhost:8000/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_rejects_bad_token() {
        let result = AirtableClient::new(ClientConfig {
            token: Some("bad\ntoken".to_string()),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(CloneError::Config(_))));
    }

    #[test]
    fn test_insert_error_reports_written_count() {
        let err = InsertError {
            written: 10,
            source: CloneError::config("boom"),
        };
        assert!(err.to_string().contains("10 record(s)"));
    }
}
