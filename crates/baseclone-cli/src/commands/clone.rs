//! `baseclone clone` command implementation
//!
//! Runs the full clone pipeline and reports the result, including partial
//! state when the clone aborts mid-write.

use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::progress;
use baseclone_core::{clone_shared_view_to_base, AirtableClient, CloneJob, CloneOutput};
use colored::Colorize;

/// Clone a shared view into a new base
pub async fn run(settings: &Settings, url: String, name: String, json: bool) -> Result<()> {
    let client = AirtableClient::new(settings.client_config())?;
    let job = CloneJob::new(&client).with_share_host(settings.share_host.clone());

    let spinner = progress::create_spinner(&format!("Cloning shared view into '{}'...", name));
    let output = clone_shared_view_to_base(&job, &url, &name).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return match output {
            CloneOutput::Completed { .. } => Ok(()),
            CloneOutput::Aborted { error, .. } => Err(CliError::clone_aborted(error)),
        };
    }

    match output {
        CloneOutput::Completed {
            base_id,
            table_id,
            records_written,
            structure,
            ..
        } => {
            println!("{} Base created: {}", "✓".green(), base_id.bold());
            println!("{} Table created: {}", "✓".green(), table_id);
            println!(
                "{} {} record(s) written across {} field(s)",
                "✓".green(),
                records_written,
                structure.fields.len()
            );
            Ok(())
        }
        CloneOutput::Aborted {
            error,
            base_id,
            table_id,
            records_written,
        } => {
            eprintln!("{} Clone did not complete: {}", "✗".red(), error);

            // Report what was reached; nothing is cleaned up automatically.
            if let Some(base_id) = base_id {
                eprintln!("  base created: {}", base_id);
            }
            if let Some(table_id) = table_id {
                eprintln!("  table created: {}", table_id);
            }
            if records_written > 0 {
                eprintln!("  records already written: {}", records_written);
            }

            Err(CliError::clone_aborted(error))
        }
    }
}
