//! Assembled, framework-specific documentation for a single component or icon.

use crate::corpus::{Corpus, find_component, find_icon};
use crate::error::{ContextError, ResourceKind, Result};
use crate::format::{DocSources, assemble_component_docs};
use crate::types::{DocEntry, DocType, Framework};
use crate::validation::validate_component_docs_input;
use rapidfuzz::distance::jaro_winkler;
use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write;

const MAX_SUGGESTIONS: usize = 3;
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocsRequest {
    /// Component or icon name, e.g. "button", "gds-button", or "icon-arrow"
    pub component_name: String,
    /// Target framework; aliases web, webcomponent, and web-components are accepted
    pub framework: Framework,
    /// Include design guidelines when available (default: true)
    #[serde(default = "default_true")]
    pub include_guidelines: bool,
    /// Include usage instructions when available (default: true)
    #[serde(default = "default_true")]
    pub include_instructions: bool,
}

fn default_true() -> bool {
    true
}

pub async fn handle_get_component_docs(corpus: &Corpus, input: &Value) -> Result<String> {
    let request = validate_component_docs_input(input)?;

    let (components, icons) =
        tokio::join!(corpus.load_components_index(), corpus.load_icons_index());
    let (Some(components), Some(icons)) = (components, icons) else {
        return Err(ContextError::not_found(
            ResourceKind::Index,
            "components/icons",
            "Failed to load component indexes",
        ));
    };

    let config = corpus.config();
    let found = find_component(&request.component_name, &components.components, config)
        .or_else(|| find_icon(&request.component_name, &icons.icons, config));

    let Some(entry) = found else {
        let all: Vec<&DocEntry> = components.components.iter().chain(&icons.icons).collect();
        return Err(component_not_found(corpus, &request.component_name, &all));
    };

    let sources = gather_sources(corpus, entry, &request).await;
    tracing::info!(
        component = %entry.tag_name,
        framework = request.framework.as_str(),
        "Assembled component documentation"
    );
    Ok(assemble_component_docs(entry, request.framework, &sources))
}

/// Read every section the request and the entry's `files` call for.
/// Unreadable files are skipped.
async fn gather_sources(corpus: &Corpus, entry: &DocEntry, request: &ComponentDocsRequest) -> DocSources {
    let framework = request.framework;

    let (primary, api, guidelines, instructions) = tokio::join!(
        read_doc(corpus, entry, framework.primary_doc(), true),
        read_doc(corpus, entry, DocType::Api, framework.is_framework_specific()),
        read_doc(corpus, entry, DocType::Guidelines, request.include_guidelines),
        read_doc(corpus, entry, DocType::Instructions, request.include_instructions),
    );

    DocSources {
        primary,
        api,
        guidelines,
        instructions,
    }
}

async fn read_doc(corpus: &Corpus, entry: &DocEntry, doc: DocType, enabled: bool) -> Option<String> {
    if !enabled || !entry.has_doc(doc) {
        return None;
    }
    let path = format!("{}/{}.md", corpus.short_name(entry), doc);
    let content = corpus.read_file(&path).await;
    if content.is_none() {
        tracing::warn!(%path, "Advertised document missing, skipping section");
    }
    content
}

fn component_not_found(corpus: &Corpus, name: &str, entries: &[&DocEntry]) -> ContextError {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = entries
        .iter()
        .map(|entry| {
            let short = corpus.short_name(entry);
            (jaro_winkler::similarity(needle.chars(), short.chars()), short)
        })
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut message = format!(
        "Component not found: {}. Try using the search_components tool to find available components.",
        name
    );
    if !scored.is_empty() {
        let suggestions: Vec<&str> = scored.iter().take(MAX_SUGGESTIONS).map(|(_, s)| *s).collect();
        let _ = write!(message, " Did you mean: {}?", suggestions.join(", "));
    }

    ContextError::not_found(ResourceKind::Component, name, message)
}
