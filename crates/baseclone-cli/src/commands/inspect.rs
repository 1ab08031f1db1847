//! `baseclone inspect` command implementation
//!
//! Fetches a shared view (with nested link expansion) and reports its
//! structure without touching the destination service.

use crate::config::Settings;
use crate::error::Result;
use crate::progress;
use baseclone_core::{AirtableClient, CloneJob, FetchOutcome, ShareAddress};
use colored::Colorize;
use serde_json::Value;

/// Inspect a shared view
pub async fn run(settings: &Settings, url: String, json: bool) -> Result<()> {
    let address = ShareAddress::parse(&url)?;

    let client = AirtableClient::new(settings.client_config())?;
    let job = CloneJob::new(&client).with_share_host(settings.share_host.clone());

    let spinner = progress::create_spinner("Fetching view data...");
    let outcome = job.fetch(&url).await;
    spinner.finish_and_clear();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "address": address,
                "data": outcome,
            }))?
        );
        return Ok(());
    }

    println!("Base:  {}", address.base_id.bold());
    if let Some(ref view_id) = address.view_id {
        println!("View:  {}", view_id);
    }
    if let Some(ref table_id) = address.table_id {
        println!("Table: {}", table_id);
    }
    println!();

    match outcome {
        FetchOutcome::Fetched { schema, records } => {
            println!("{} Fetched {} record(s)", "✓".green(), records.len());

            if schema.is_empty() {
                println!("  (no fields: the view returned no records)");
            } else {
                println!("  Inferred fields:");
                for field in &schema.fields {
                    let kind = serde_json::to_value(field.kind)?;
                    println!("    {} ({})", field.name, kind.as_str().unwrap_or("?"));
                }
            }

            let expansions = count_expansions(&records);
            if expansions > 0 {
                println!("  Nested views expanded: {}", expansions);
            }
            Ok(())
        }
        FetchOutcome::Failed { error } => {
            eprintln!("{} Fetch failed: {}", "✗".red(), error);
            Err(crate::error::CliError::clone_aborted(error))
        }
        FetchOutcome::MaxDepthReached | FetchOutcome::LinkCycle { .. } => {
            // Cannot happen at depth 0 with an empty path; report it anyway
            // rather than panicking on a future behavior change.
            eprintln!("{} View was not fetched", "✗".red());
            Err(crate::error::CliError::clone_aborted("view was not fetched"))
        }
    }
}

/// Count fields that were rewritten to nested clone results
fn count_expansions(records: &[baseclone_core::Record]) -> usize {
    records
        .iter()
        .flat_map(|record| record.fields.values())
        .filter(|value| {
            matches!(value, Value::Object(map) if map.contains_key("link") && map.contains_key("cloned_data"))
        })
        .count()
}
