//! Shared foundation for the biomap ecosystem.
//!
//! `biomap-core` provides what the other biomap crates build on:
//!
//! - **Error types** — [`BiomapError`] and [`Result`] for structured error
//!   handling
//! - **Mapping utilities** — [`rename_keys`], [`index_by_key`],
//!   [`remove_keys`] over plain JSON objects ([`Dict`])

pub mod error;
pub mod map;

pub use error::{BiomapError, Result};
pub use map::{index_by_id, index_by_key, remove_key, remove_keys, rename_keys, Dict};
