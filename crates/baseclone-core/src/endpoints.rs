//! API endpoint URL builders
//!
//! Helper functions to construct destination-service endpoint URLs.

/// Build the base creation URL
pub fn create_base_url(api_url: &str) -> String {
    format!("{}/meta/bases", api_url)
}

/// Build the table creation URL for a base
pub fn create_table_url(api_url: &str, base_id: &str) -> String {
    format!("{}/meta/bases/{}/tables", api_url, base_id)
}

/// Build the record insertion URL for a table
pub fn insert_records_url(api_url: &str, base_id: &str, table_id: &str) -> String {
    format!("{}/{}/{}", api_url, base_id, table_id)
}
