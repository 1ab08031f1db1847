//! CLI command implementations

pub mod clone;
pub mod inspect;
