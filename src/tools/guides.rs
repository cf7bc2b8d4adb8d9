//! Setup guides and concept documents listed in the global index.

use crate::corpus::{Corpus, ResourceCategory, build_resource_uri};
use crate::error::{ContextError, ResourceKind, Result};
use crate::types::{GlobalIndex, GuideCategory, GuideEntry, GuideFramework};
use crate::validation::{validate_get_guide_input, validate_list_guides_input};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filters for listing guides. An unset filter means "all".
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListGuidesRequest {
    /// Guide category to list (omit for all)
    #[serde(default)]
    pub category: Option<GuideCategory>,
    /// Only guides tagged with this framework (omit for all)
    #[serde(default)]
    pub framework: Option<GuideFramework>,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct GetGuideRequest {
    /// Guide name as it appears in its URI, e.g. "angular" or "tokens"
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GuideSummary<'a> {
    title: &'a str,
    category: &'a str,
    description: &'a str,
    tags: &'a [String],
    resource_uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListGuidesResponse<'a> {
    guide_count: usize,
    guides: Vec<GuideSummary<'a>>,
}

pub async fn handle_list_guides(corpus: &Corpus, input: &Value) -> Result<String> {
    let request = validate_list_guides_input(input)?;
    let index = load_global_index(corpus).await?;

    let guides: Vec<GuideSummary<'_>> = index
        .guides
        .iter()
        .filter(|g| request.category.is_none_or(|c| g.category == c.as_str()))
        .filter(|g| {
            request
                .framework
                .is_none_or(|f| g.tags.iter().any(|t| t == f.as_str()))
        })
        .map(|g| GuideSummary {
            title: &g.title,
            category: &g.category,
            description: &g.description,
            tags: &g.tags,
            resource_uri: guide_uri(corpus, g),
        })
        .collect();

    tracing::debug!(count = guides.len(), "Listed guides");

    let response = ListGuidesResponse {
        guide_count: guides.len(),
        guides,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Return `# {title}\n\n{content}` for the guide whose path names `name`.
pub async fn handle_get_guide(corpus: &Corpus, input: &Value) -> Result<String> {
    let request = validate_get_guide_input(input)?;
    let index = load_global_index(corpus).await?;

    let guide = index
        .guides
        .iter()
        .find(|g| g.name() == request.name)
        .ok_or_else(|| {
            ContextError::not_found(
                ResourceKind::Guide,
                &request.name,
                format!(
                    "Guide not found: {}. Use list_guides to see available guides.",
                    request.name
                ),
            )
        })?;

    let content = corpus.read_file(&guide.path).await.ok_or_else(|| {
        ContextError::not_found(
            ResourceKind::File,
            &guide.path,
            format!("Guide file not found: {}", guide.path),
        )
    })?;

    Ok(format!("# {}\n\n{}", guide.title, content))
}

pub(crate) async fn load_global_index(corpus: &Corpus) -> Result<GlobalIndex> {
    corpus.load_global_index().await.ok_or_else(|| {
        ContextError::not_found(ResourceKind::Index, "global", "Failed to load global index")
    })
}

fn guide_uri(corpus: &Corpus, guide: &GuideEntry) -> String {
    let category = if guide.is_concept() {
        ResourceCategory::Concepts
    } else {
        ResourceCategory::Guides
    };
    build_resource_uri(corpus.scheme(), category, guide.name(), None)
}
