//! Tiered relevance search over components and icons.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::search::{Catalog, SearchOptions, parse_search_query, perform_search};
use crate::types::{Category, SearchCategory, SearchResult};
use crate::validation::{DEFAULT_MAX_RESULTS, validate_search_input};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Search query: component name, tag, keyword, or regex when useRegex is set
    pub query: String,
    /// Restrict results to components, icons, or both (default: all)
    #[serde(default)]
    pub category: SearchCategory,
    /// Split the query on whitespace and commas into separate terms (default: true)
    #[serde(default = "default_true")]
    pub split_terms: bool,
    /// Require every term to match instead of any (default: false)
    #[serde(default)]
    pub match_all: bool,
    /// Treat the query as a case-insensitive regular expression over tag names (default: false)
    #[serde(default)]
    pub use_regex: bool,
    /// Maximum number of results, 1-100 (default: 20)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse<'a> {
    query: &'a str,
    result_count: usize,
    results: &'a [SearchResult],
}

/// Run a search and render `{query, resultCount, results}` as pretty JSON.
pub async fn handle_search(corpus: &Corpus, input: &Value) -> Result<String> {
    let request = validate_search_input(input)?;
    let config = corpus.config();

    let mut parsed = parse_search_query(
        &request.query,
        request.split_terms,
        request.use_regex,
        config.max_regex_length,
    )?;

    // An empty query lists everything by matching the shared tag prefix.
    if request.split_terms && !request.use_regex && request.query.trim().is_empty() {
        parsed = parsed.with_single_term(config.broad_term());
    }

    // Only the indexes the category filter needs are read.
    let (components, icons) = tokio::join!(
        async {
            if request.category.includes(Category::Component) {
                corpus.load_components_index().await
            } else {
                None
            }
        },
        async {
            if request.category.includes(Category::Icon) {
                corpus.load_icons_index().await
            } else {
                None
            }
        },
    );
    let components = components.map(|i| i.components).unwrap_or_default();
    let icons = icons.map(|i| i.icons).unwrap_or_default();

    let catalog = Catalog {
        components: &components,
        icons: &icons,
        prefixes: corpus.tag_prefixes(),
    };
    let options = SearchOptions {
        category: request.category,
        match_all: request.match_all,
        max_results: request.max_results,
    };
    let results = perform_search(&catalog, &parsed, options, corpus);

    tracing::info!(
        query = %request.query,
        category = request.category.as_str(),
        results = results.len(),
        "Search completed"
    );

    let response = SearchResponse {
        query: &request.query,
        result_count: results.len(),
        results: &results,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}
