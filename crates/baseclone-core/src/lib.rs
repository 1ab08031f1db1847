//! Baseclone Core Library
//!
//! Clones an Airtable shared view into a freshly created base, preserving
//! structure (inferred schema) and content (records), including nested views
//! reachable through in-record links.
//!
//! # Pipeline
//!
//! - **Address resolution** ([`address`]): parse a share-view URL into its
//!   base/view/table identifiers.
//! - **Recursive fetch** ([`fetch`]): depth-bounded traversal of the view and
//!   any views linked from its record fields.
//! - **Schema inference** ([`schema`]): derive field kinds from the first
//!   sampled record.
//! - **Materialization and batch writes** ([`client`]): create the
//!   destination base and table, then insert records in fixed-size chunks.
//! - **Orchestration** ([`pipeline`]): [`pipeline::clone_shared_view_to_base`]
//!   runs the stages end to end and reports exactly how far it got.
//!
//! Every remote call is awaited to completion before the next one is issued;
//! the traversal is strictly sequential by design.

pub mod address;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod record;
pub mod schema;

// Re-export commonly used types
pub use address::ShareAddress;
pub use client::{AirtableClient, ClientConfig, InsertError, INSERT_CHUNK_SIZE};
pub use error::{CloneError, Result};
pub use fetch::{CloneJob, FetchOutcome, MAX_CLONE_DEPTH};
pub use pipeline::{clone_shared_view_to_base, CloneOutput};
pub use record::{FieldDescriptor, FieldKind, Record, Schema, TableSpec, ViewPayload};
pub use schema::infer_schema;
