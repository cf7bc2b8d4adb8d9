//! Tiered full-text search over the component and icon catalogs.
//!
//! This module provides query parsing (terms or guarded regex), per-term tier
//! scoring, and the ranking engine that combines them.

pub mod engine;
pub mod query;
pub mod scoring;

pub use engine::{Catalog, SearchOptions, UriBuilder, perform_search};
pub use query::{ParsedQuery, has_nested_quantifier, parse_search_query};
pub use scoring::{MatchFields, MatchTier, TagPrefixes};
