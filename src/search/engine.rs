//! Tiered relevance ranking over the component and icon catalogs.

use super::query::ParsedQuery;
use super::scoring::{MatchFields, MatchTier, TagPrefixes};
use crate::types::{Category, DocEntry, SearchCategory, SearchResult};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Builds the resource URI for one advertised document of an entry.
///
/// Injected into the engine so ranking stays independent of URI syntax.
pub trait UriBuilder {
    fn resource_uri(&self, category: Category, entry: &DocEntry, doc_type: &str) -> String;
}

/// Knobs for a single search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub category: SearchCategory,
    /// Require every term to match (AND) instead of any term (OR).
    pub match_all: bool,
    pub max_results: usize,
}

/// The catalogs being searched. Unloaded catalogs are empty slices.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub components: &'a [DocEntry],
    pub icons: &'a [DocEntry],
    pub prefixes: TagPrefixes<'a>,
}

impl<'a> Catalog<'a> {
    /// Entries admitted by the category filter, components first, in corpus order.
    fn candidates(&self, filter: SearchCategory) -> impl Iterator<Item = (Category, &'a DocEntry)> {
        let components = filter
            .includes(Category::Component)
            .then_some(self.components)
            .unwrap_or_default();
        let icons = filter
            .includes(Category::Icon)
            .then_some(self.icons)
            .unwrap_or_default();

        components
            .iter()
            .map(|e| (Category::Component, e))
            .chain(icons.iter().map(|e| (Category::Icon, e)))
    }
}

#[derive(Debug)]
struct Ranked<'a> {
    category: Category,
    entry: &'a DocEntry,
    matched_terms: usize,
    score: u32,
    exact: bool,
}

/// Rank catalog entries against a parsed query.
///
/// Never fails: an empty result is a normal outcome.
pub fn perform_search(
    catalog: &Catalog<'_>,
    query: &ParsedQuery,
    options: SearchOptions,
    uris: &dyn UriBuilder,
) -> Vec<SearchResult> {
    let limit = options.max_results;

    if let Some(regex) = &query.regex {
        return catalog
            .candidates(options.category)
            .filter(|(_, entry)| regex.is_match(&entry.tag_name))
            .take(limit)
            .map(|(category, entry)| to_result(category, entry, uris))
            .collect();
    }

    if query.terms.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Ranked<'_>> = catalog
        .candidates(options.category)
        .filter_map(|(category, entry)| {
            score_entry(category, entry, &query.terms, options.match_all, catalog.prefixes)
        })
        .collect();

    // Stable sort keeps corpus order (components before icons) for full ties.
    ranked.sort_by_key(|r| (Reverse(r.matched_terms), Reverse(r.score), Reverse(r.exact)));

    tracing::debug!(
        terms = ?query.terms,
        matches = ranked.len(),
        limit,
        "Ranked search candidates"
    );

    ranked
        .into_iter()
        .take(limit)
        .map(|r| to_result(r.category, r.entry, uris))
        .collect()
}

fn score_entry<'a>(
    category: Category,
    entry: &'a DocEntry,
    terms: &[String],
    match_all: bool,
    prefixes: TagPrefixes<'_>,
) -> Option<Ranked<'a>> {
    let fields = MatchFields::new(category, entry, prefixes);

    let mut matched_terms = 0;
    let mut score = 0;
    let mut exact = false;

    for term in terms {
        match fields.tier(term) {
            Some(tier) => {
                matched_terms += 1;
                score += tier.weight();
                exact |= tier == MatchTier::Exact;
            }
            None if match_all => return None,
            None => {}
        }
    }

    (matched_terms > 0).then_some(Ranked {
        category,
        entry,
        matched_terms,
        score,
        exact,
    })
}

fn to_result(category: Category, entry: &DocEntry, uris: &dyn UriBuilder) -> SearchResult {
    let resource_uris: BTreeMap<String, String> = entry
        .files
        .iter()
        .map(|doc_type| {
            (
                doc_type.clone(),
                uris.resource_uri(category, entry, doc_type),
            )
        })
        .collect();

    SearchResult {
        name: entry.name.clone(),
        tag_name: entry.tag_name.clone(),
        class_name: entry.class_name.clone(),
        category,
        description: entry.description.clone(),
        resource_uris,
    }
}
