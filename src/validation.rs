//! Input validation for every operation.
//!
//! Each validator takes the raw JSON arguments exactly as a caller sent them
//! and returns a fully-defaulted request, or a validation error naming the
//! offending field. Nothing here touches the filesystem.

use crate::error::{ContextError, Result};
use crate::tools::component_docs::ComponentDocsRequest;
use crate::tools::guides::{GetGuideRequest, ListGuidesRequest};
use crate::tools::resolve_uri::ResolveUriRequest;
use crate::tools::search::SearchRequest;
use crate::types::{Framework, GuideCategory, GuideFramework, SearchCategory};
use serde_json::{Map, Value};

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const MAX_RESULTS_LIMIT: usize = 100;

type Object = Map<String, Value>;

pub fn validate_search_input(input: &Value) -> Result<SearchRequest> {
    let obj = as_object(input)?;

    // Whitespace-only queries are allowed through; the search handler turns
    // them into a list-everything query.
    let query = required_string(obj, "query", false)?;

    let category = match optional_str(obj, "category")? {
        None => SearchCategory::All,
        Some(raw) => SearchCategory::parse(raw).ok_or_else(|| {
            ContextError::validation("category", "must be one of: component, icon, all")
        })?,
    };

    let max_results = match optional_integer(obj, "maxResults")? {
        None => DEFAULT_MAX_RESULTS,
        Some(n) if (1..=MAX_RESULTS_LIMIT as i64).contains(&n) => n as usize,
        Some(_) => {
            return Err(ContextError::validation(
                "maxResults",
                format!("must be between 1 and {}", MAX_RESULTS_LIMIT),
            ));
        }
    };

    Ok(SearchRequest {
        query,
        category,
        split_terms: optional_bool(obj, "splitTerms", true)?,
        match_all: optional_bool(obj, "matchAll", false)?,
        use_regex: optional_bool(obj, "useRegex", false)?,
        max_results,
    })
}

pub fn validate_component_docs_input(input: &Value) -> Result<ComponentDocsRequest> {
    let obj = as_object(input)?;

    let raw_name = required_string(obj, "componentName", true)?;
    let component_name = sanitize_component_name(&raw_name);
    if component_name.is_empty() {
        return Err(ContextError::validation(
            "componentName",
            "must contain letters, digits, or hyphens",
        ));
    }

    let raw_framework = required_string(obj, "framework", true)?;
    let framework = Framework::normalize(&raw_framework).ok_or_else(|| {
        ContextError::validation(
            "framework",
            format!(
                "'{}' is not supported; must be one of: angular, react, web-component \
                 (aliases: web, webcomponent, web-components)",
                raw_framework
            ),
        )
    })?;

    Ok(ComponentDocsRequest {
        component_name,
        framework,
        include_guidelines: optional_bool(obj, "includeGuidelines", true)?,
        include_instructions: optional_bool(obj, "includeInstructions", true)?,
    })
}

pub fn validate_get_guide_input(input: &Value) -> Result<GetGuideRequest> {
    let obj = as_object(input)?;
    Ok(GetGuideRequest {
        name: required_string(obj, "name", true)?.trim().to_string(),
    })
}

/// An absent or empty URI is left for the resolver to reject.
pub fn validate_resolve_uri_input(input: &Value) -> Result<ResolveUriRequest> {
    let obj = as_object(input)?;
    Ok(ResolveUriRequest {
        uri: optional_str(obj, "uri")?.unwrap_or_default().to_string(),
    })
}

/// `all` (or absence) leaves a filter unset; the caller applies "everything".
pub fn validate_list_guides_input(input: &Value) -> Result<ListGuidesRequest> {
    let obj = as_object(input)?;

    let category = match optional_str(obj, "category")? {
        None | Some("all") => None,
        Some(raw) => Some(GuideCategory::parse(raw).ok_or_else(|| {
            ContextError::validation(
                "category",
                "must be one of: framework-setup, getting-started, concepts, troubleshooting, migration, all",
            )
        })?),
    };

    let framework = match optional_str(obj, "framework")? {
        None | Some("all") => None,
        Some("angular") => Some(GuideFramework::Angular),
        Some("react") => Some(GuideFramework::React),
        Some(_) => {
            return Err(ContextError::validation(
                "framework",
                "must be one of: angular, react, all",
            ));
        }
    };

    Ok(ListGuidesRequest {
        category,
        framework,
    })
}

/// Reduce a component name to letters, digits, and hyphens so it can never
/// address anything outside its own corpus directory.
///
/// `../../etc/passwd` becomes `etcpasswd`, `my_component` becomes `mycomponent`.
pub fn sanitize_component_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

fn as_object(input: &Value) -> Result<&Object> {
    static EMPTY: std::sync::OnceLock<Object> = std::sync::OnceLock::new();
    match input {
        Value::Object(obj) => Ok(obj),
        Value::Null => Ok(EMPTY.get_or_init(Map::new)),
        _ => Err(ContextError::validation("input", "must be an object")),
    }
}

/// Present and non-null.
fn field<'a>(obj: &'a Object, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|v| !v.is_null())
}

fn required_string(obj: &Object, name: &str, reject_blank: bool) -> Result<String> {
    let value = field(obj, name).ok_or_else(|| ContextError::validation(name, "is required"))?;
    let s = value
        .as_str()
        .ok_or_else(|| ContextError::validation(name, "must be a string"))?;

    let empty = if reject_blank { s.trim().is_empty() } else { s.is_empty() };
    if empty {
        return Err(ContextError::validation(name, "must not be empty"));
    }
    Ok(s.to_string())
}

fn optional_str<'a>(obj: &'a Object, name: &str) -> Result<Option<&'a str>> {
    field(obj, name)
        .map(|v| {
            v.as_str()
                .ok_or_else(|| ContextError::validation(name, "must be a string"))
        })
        .transpose()
}

fn optional_bool(obj: &Object, name: &str, default: bool) -> Result<bool> {
    field(obj, name).map_or(Ok(default), |v| {
        v.as_bool()
            .ok_or_else(|| ContextError::validation(name, "must be a boolean"))
    })
}

/// Accepts integral JSON numbers, including `20.0`.
fn optional_integer(obj: &Object, name: &str) -> Result<Option<i64>> {
    let Some(value) = field(obj, name) else {
        return Ok(None);
    };

    let not_integer = || ContextError::validation(name, "must be an integer");
    let number = value.as_number().ok_or_else(not_integer)?;

    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 => Ok(Some(f as i64)),
        _ => Err(not_integer()),
    }
}
