//! Recursive view fetching
//!
//! Depth-bounded depth-first traversal of a shared view and every view
//! reachable through its record fields. A field value is treated as a link
//! when it is textual and contains the remote service's host marker; such
//! values are replaced in place with the nested clone result.
//!
//! Two guards bound the traversal: the fixed depth limit, and a per-branch
//! set of in-progress addresses that refuses to re-expand a view already on
//! the current path. Neither guard deduplicates across sibling branches, so
//! a widely cross-linked graph is still re-fetched once per branch up to the
//! depth bound.

use crate::client::{AirtableClient, DEFAULT_SHARE_HOST};
use crate::record::{Record, Schema};
use crate::schema::infer_schema;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Maximum link-expansion depth. A fetch at this depth returns the sentinel
/// without issuing a request.
pub const MAX_CLONE_DEPTH: usize = 3;

/// Outcome of fetching one view
///
/// A tagged union: either the fetched payload, a terminal sentinel, or the
/// propagated error for this branch. Never payload and error simultaneously.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// View fetched; records carry their link expansions applied
    Fetched { schema: Schema, records: Vec<Record> },

    /// Depth bound hit before this view was requested (sentinel, not an
    /// error)
    MaxDepthReached,

    /// The address is already being fetched on this branch (sentinel, not
    /// an error)
    LinkCycle { link: String },

    /// Transport or status failure for this branch; siblings are unaffected
    Failed { error: String },
}

/// One clone traversal: injected client plus the traversal bounds
pub struct CloneJob<'a> {
    client: &'a AirtableClient,
    share_host: String,
    max_depth: usize,
}

impl<'a> CloneJob<'a> {
    /// Create a job with the default host marker and depth bound
    pub fn new(client: &'a AirtableClient) -> Self {
        Self {
            client,
            share_host: DEFAULT_SHARE_HOST.to_string(),
            max_depth: MAX_CLONE_DEPTH,
        }
    }

    /// Override the host marker used to recognize in-record links
    pub fn with_share_host(mut self, host: impl Into<String>) -> Self {
        self.share_host = host.into();
        self
    }

    /// Override the depth bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The client this job issues requests through
    pub fn client(&self) -> &AirtableClient {
        self.client
    }

    /// Recursively fetch a view and everything it links to
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        self.fetch_at(url.to_string(), 0, Vec::new()).await
    }

    /// One traversal step
    ///
    /// `path` holds the addresses currently being fetched on this branch;
    /// it is passed by value so sibling branches stay independent. Boxed
    /// because async recursion needs an indirection.
    fn fetch_at(
        &self,
        url: String,
        depth: usize,
        path: Vec<String>,
    ) -> BoxFuture<'_, FetchOutcome> {
        async move {
            if depth >= self.max_depth {
                debug!(url = %url, depth, "Depth bound reached, not fetching");
                return FetchOutcome::MaxDepthReached;
            }

            if path.contains(&url) {
                debug!(url = %url, depth, "Address already on this branch, not fetching");
                return FetchOutcome::LinkCycle { link: url };
            }

            let payload = match self.client.get_view(&url).await {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(url = %url, depth, error = %e, "View fetch failed");
                    return FetchOutcome::Failed {
                        error: e.to_string(),
                    };
                },
            };

            let mut records = payload.records;

            // Inferred from the raw first record, before link expansion.
            let schema = infer_schema(&records);

            let mut next_path = path;
            next_path.push(url);

            // Depth-first, field order, record by record; every expansion
            // for one record completes before the next record starts.
            for record in &mut records {
                let links: Vec<(String, String)> = record
                    .fields
                    .iter()
                    .filter_map(|(name, value)| {
                        value
                            .as_str()
                            .filter(|s| s.contains(&self.share_host))
                            .map(|s| (name.clone(), s.to_string()))
                    })
                    .collect();

                for (field, link) in links {
                    let nested = self
                        .fetch_at(link.clone(), depth + 1, next_path.clone())
                        .await;

                    let cloned_data = serde_json::to_value(&nested).unwrap_or(Value::Null);
                    record.fields.insert(
                        field,
                        json!({
                            "link": link,
                            "cloned_data": cloned_data,
                        }),
                    );
                }
            }

            FetchOutcome::Fetched { schema, records }
        }
        .boxed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_tagging() {
        let outcome = FetchOutcome::MaxDepthReached;
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "max_depth_reached"})
        );

        let outcome = FetchOutcome::Failed {
            error: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "failed", "error": "boom"})
        );

        let outcome = FetchOutcome::LinkCycle {
            link: "https://airtable.com/a/b".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "link_cycle", "link": "https://airtable.com/a/b"})
        );
    }

    #[test]
    fn test_fetched_outcome_round_trip() {
        let outcome = FetchOutcome::Fetched {
            schema: Schema::default(),
            records: Vec::new(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "fetched");

        let back: FetchOutcome = serde_json::from_value(value).unwrap();
        assert_eq!(back, outcome);
    }
}
