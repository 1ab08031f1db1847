//! End-to-end clone orchestration
//!
//! Runs address resolution, the recursive fetch, destination
//! materialization, and the batched record writes in order. The write path
//! is best-effort: there is no rollback, so the output always reports
//! exactly which steps succeeded.

use crate::address::ShareAddress;
use crate::fetch::{CloneJob, FetchOutcome};
use crate::record::{Record, Schema, TableSpec};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of one clone operation
///
/// Tagged success/failure, used uniformly instead of ad hoc string
/// sentinels. `Aborted` carries the ids of every step that completed so a
/// caller can retry or clean up by hand; nothing is deleted on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CloneOutput {
    Completed {
        message: String,
        base_id: String,
        table_id: String,
        records_written: usize,
        structure: Schema,
    },
    Aborted {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        base_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        table_id: Option<String>,
        records_written: usize,
    },
}

impl CloneOutput {
    fn aborted(error: impl Into<String>) -> Self {
        Self::Aborted {
            error: error.into(),
            base_id: None,
            table_id: None,
            records_written: 0,
        }
    }

    /// Whether the clone ran to completion
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Clone a shared view into a freshly created base
///
/// Stages run strictly sequentially; each consumes the previous stage's
/// output. Fetch-level failures on nested links are contained inside the
/// fetched records; a failure of the root fetch, the materialization, or a
/// record chunk aborts the operation.
pub async fn clone_shared_view_to_base(
    job: &CloneJob<'_>,
    url: &str,
    base_name: &str,
) -> CloneOutput {
    let address = match ShareAddress::parse(url) {
        Ok(address) => address,
        Err(e) => return CloneOutput::aborted(e.to_string()),
    };

    info!(address = %address, "Resolved share address");

    let (schema, records) = match job.fetch(url).await {
        FetchOutcome::Fetched { schema, records } => (schema, records),
        FetchOutcome::Failed { error } => return CloneOutput::aborted(error),
        FetchOutcome::MaxDepthReached => {
            return CloneOutput::aborted("depth bound reached before any data was fetched")
        },
        FetchOutcome::LinkCycle { link } => {
            return CloneOutput::aborted(format!("share view links back to itself: {}", link))
        },
    };

    info!(records = records.len(), fields = schema.fields.len(), "View fetched");

    let table_spec = TableSpec::from_schema(table_name(&address, base_name), &schema);

    let base = match job
        .client()
        .create_base(base_name, std::slice::from_ref(&table_spec))
        .await
    {
        Ok(base) => base,
        Err(e) => {
            warn!(error = %e, "Base creation failed");
            return CloneOutput::aborted(e.to_string());
        },
    };

    let base_id = base.id;

    let table_id = match base.tables.into_iter().next() {
        Some(table) => table.id,
        // The create-base response did not echo the table; create it
        // explicitly.
        None => match job.client().create_table(&base_id, &table_spec).await {
            Ok(id) => id,
            Err(e) => {
                warn!(base_id = %base_id, error = %e, "Table creation failed");
                return CloneOutput::Aborted {
                    error: e.to_string(),
                    base_id: Some(base_id),
                    table_id: None,
                    records_written: 0,
                };
            },
        },
    };

    let records_written = match insert_all(job, &base_id, &table_id, &records).await {
        Ok(written) => written,
        Err((written, error)) => {
            warn!(base_id = %base_id, table_id = %table_id, written, error = %error, "Record write aborted");
            return CloneOutput::Aborted {
                error,
                base_id: Some(base_id),
                table_id: Some(table_id),
                records_written: written,
            };
        },
    };

    info!(base_id = %base_id, table_id = %table_id, records_written, "Clone completed");

    CloneOutput::Completed {
        message: "Base created successfully".to_string(),
        base_id,
        table_id,
        records_written,
        structure: schema,
    }
}

async fn insert_all(
    job: &CloneJob<'_>,
    base_id: &str,
    table_id: &str,
    records: &[Record],
) -> std::result::Result<usize, (usize, String)> {
    if records.is_empty() {
        return Ok(0);
    }

    job.client()
        .insert_records(base_id, table_id, records)
        .await
        .map_err(|e| (e.written, e.source.to_string()))
}

/// Destination table name: the address's table or view id when present,
/// falling back to the base name
fn table_name(address: &ShareAddress, base_name: &str) -> String {
    address
        .table_id
        .clone()
        .or_else(|| address.view_id.clone())
        .unwrap_or_else(|| base_name.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_prefers_table_id() {
        let address = ShareAddress::parse("https://airtable.com/appA/shrB/tblC").unwrap();
        assert_eq!(table_name(&address, "dest"), "tblC");

        let address = ShareAddress::parse("https://airtable.com/appA/shrB").unwrap();
        assert_eq!(table_name(&address, "dest"), "shrB");
    }

    #[test]
    fn test_aborted_serialization_skips_missing_ids() {
        let output = CloneOutput::aborted("boom");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["status"], "aborted");
        assert_eq!(value["error"], "boom");
        assert!(value.get("base_id").is_none());
        assert!(value.get("table_id").is_none());
    }

    #[test]
    fn test_is_completed() {
        assert!(!CloneOutput::aborted("x").is_completed());
        let output = CloneOutput::Completed {
            message: "ok".to_string(),
            base_id: "appA".to_string(),
            table_id: "tblB".to_string(),
            records_written: 1,
            structure: Schema::default(),
        };
        assert!(output.is_completed());
    }
}
