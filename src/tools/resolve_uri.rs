//! Raw content behind a resource URI.

use super::instructions::read_instructions;
use crate::corpus::{Corpus, instructions_uri, parse_resource_uri};
use crate::error::{ContextError, ResourceKind, Result};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ResolveUriRequest {
    /// Resource URI, e.g. "green://components/button/api" or "green://guides/angular"
    pub uri: String,
}

pub async fn handle_resolve_uri(corpus: &Corpus, uri: &str) -> Result<String> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(ContextError::validation("uri", "is required"));
    }
    if uri == instructions_uri(corpus.scheme()) {
        return read_instructions(corpus).await;
    }

    let parsed = parse_resource_uri(corpus.scheme(), uri).ok_or_else(|| {
        ContextError::not_found(
            ResourceKind::Uri,
            uri,
            format!("Invalid resource URI format: {}", uri),
        )
    })?;

    let file_path = parsed.file_path().ok_or_else(|| {
        ContextError::not_found(
            ResourceKind::DocType,
            uri,
            format!(
                "Document type required for {} URIs (e.g. {}://{}/{}/api)",
                parsed.category,
                corpus.scheme(),
                parsed.category,
                parsed.name
            ),
        )
    })?;

    tracing::debug!(%uri, %file_path, "Resolving resource URI");

    corpus.read_file(&file_path).await.ok_or_else(|| {
        ContextError::not_found(
            ResourceKind::File,
            file_path,
            format!("Resource not found: {}", uri),
        )
    })
}
