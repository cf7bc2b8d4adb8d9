//! Documentation search and retrieval for the Green design system.
//!
//! Serves a pre-generated, read-only corpus of component, icon, and guide
//! documents through an MCP server and an equivalent command-line interface.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;
pub mod types;
pub mod validation;

pub use config::ContextConfig;
pub use corpus::Corpus;
pub use error::{ContextError, Result};
pub use server::DocsServer;
