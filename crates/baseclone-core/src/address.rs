//! Share address parsing
//!
//! A shared view is addressed by a URL whose path carries the base id,
//! the share/view id, and optionally a table id:
//! `https://airtable.com/appXXXXXXXX/shrYYYYYYYY[/tblZZZZZZZZ]`.

use crate::error::{CloneError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Structural identifiers extracted from a share-view URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareAddress {
    /// Base ("container") identifier, first path segment
    pub base_id: String,

    /// View identifier, second path segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    /// Table identifier, third path segment when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}

impl ShareAddress {
    /// Parse a share-view URL into its structural identifiers
    ///
    /// Fails with [`CloneError::MalformedAddress`] when the URL does not
    /// parse or has fewer than two path segments.
    pub fn parse(address: &str) -> Result<Self> {
        let url = Url::parse(address).map_err(|e| {
            CloneError::malformed_address(format!("'{}' is not a valid URL ({})", address, e))
        })?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|parts| parts.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if segments.len() < 2 {
            return Err(CloneError::malformed_address(format!(
                "'{}' has {} path segment(s), need at least a base id and a view id",
                address,
                segments.len()
            )));
        }

        Ok(Self {
            base_id: segments[0].to_string(),
            view_id: segments.get(1).map(|s| s.to_string()),
            table_id: segments.get(2).map(|s| s.to_string()),
        })
    }
}

impl std::fmt::Display for ShareAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_id)?;
        if let Some(ref view) = self.view_id {
            write!(f, "/{}", view)?;
        }
        if let Some(ref table) = self.table_id {
            write!(f, "/{}", table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_and_view() {
        let address = ShareAddress::parse("https://airtable.com/appAbc123/shrDef456").unwrap();
        assert_eq!(address.base_id, "appAbc123");
        assert_eq!(address.view_id, Some("shrDef456".to_string()));
        assert_eq!(address.table_id, None);
    }

    #[test]
    fn test_parse_with_table() {
        let address =
            ShareAddress::parse("https://airtable.com/appAbc123/shrDef456/tblGhi789").unwrap();
        assert_eq!(address.base_id, "appAbc123");
        assert_eq!(address.view_id, Some("shrDef456".to_string()));
        assert_eq!(address.table_id, Some("tblGhi789".to_string()));
    }

    #[test]
    fn test_parse_ignores_trailing_slash() {
        let address = ShareAddress::parse("https://airtable.com/appAbc123/shrDef456/").unwrap();
        assert_eq!(address.view_id, Some("shrDef456".to_string()));
        assert_eq!(address.table_id, None);
    }

    #[test]
    fn test_parse_too_few_segments() {
        let err = ShareAddress::parse("https://airtable.com/appAbc123").unwrap_err();
        assert!(matches!(err, CloneError::MalformedAddress(_)));

        let err = ShareAddress::parse("https://airtable.com/").unwrap_err();
        assert!(matches!(err, CloneError::MalformedAddress(_)));
    }

    #[test]
    fn test_parse_not_a_url() {
        let err = ShareAddress::parse("not a url at all").unwrap_err();
        assert!(matches!(err, CloneError::MalformedAddress(_)));
    }

    #[test]
    fn test_display() {
        let address =
            ShareAddress::parse("https://airtable.com/appAbc123/shrDef456/tblGhi789").unwrap();
        assert_eq!(address.to_string(), "appAbc123/shrDef456/tblGhi789");
    }
}
