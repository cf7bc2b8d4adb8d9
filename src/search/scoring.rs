//! Search relevance tiers.
//!
//! Each term is matched against an entry's fields and lands in the highest
//! tier it qualifies for. Per-term weights are summed by the engine.

use crate::types::{Category, DocEntry};

/// Priority bucket for a single term match, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Term equals the name or (prefix-stripped) tag name.
    Exact,
    /// Name or tag name starts with the term.
    Prefix,
    /// Term appears inside the name, tag name, or class name.
    Substring,
    /// Term appears inside the description only.
    Description,
}

impl MatchTier {
    pub const fn weight(self) -> u32 {
        match self {
            Self::Exact => 100,
            Self::Prefix => 50,
            Self::Substring => 25,
            Self::Description => 10,
        }
    }
}

/// Tag prefixes stripped before tag names are compared with terms.
#[derive(Debug, Clone, Copy)]
pub struct TagPrefixes<'a> {
    pub component: &'a str,
    pub icon: &'a str,
}

impl TagPrefixes<'_> {
    /// `gds-button` -> `button`, `gds-icon-arrow` -> `arrow`.
    pub fn strip<'t>(&self, category: Category, tag: &'t str) -> &'t str {
        let prefix = match category {
            Category::Component => self.component,
            Category::Icon => self.icon,
        };
        strip_prefix_ignore_case(tag, prefix)
            .or_else(|| strip_prefix_ignore_case(tag, self.component))
            .unwrap_or(tag)
    }
}

fn strip_prefix_ignore_case<'t>(text: &'t str, prefix: &str) -> Option<&'t str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

/// Lowercased searchable fields of one entry.
#[derive(Debug, Clone)]
pub struct MatchFields {
    name: String,
    tag: String,
    short_tag: String,
    class_name: String,
    description: String,
}

impl MatchFields {
    pub fn new(category: Category, entry: &DocEntry, prefixes: TagPrefixes<'_>) -> Self {
        Self {
            name: entry.name.to_lowercase(),
            tag: entry.tag_name.to_lowercase(),
            short_tag: prefixes.strip(category, &entry.tag_name).to_lowercase(),
            class_name: entry.class_name.to_lowercase(),
            description: entry.description.to_lowercase(),
        }
    }

    /// Best tier for a lowercased term, or `None` when nothing matches.
    pub fn tier(&self, term: &str) -> Option<MatchTier> {
        if term.is_empty() {
            return None;
        }

        let names = [&self.name, &self.tag, &self.short_tag];

        if names.iter().any(|field| field.as_str() == term) {
            Some(MatchTier::Exact)
        } else if names.iter().any(|field| field.starts_with(term)) {
            Some(MatchTier::Prefix)
        } else if names.iter().any(|field| field.contains(term)) || self.class_name.contains(term) {
            Some(MatchTier::Substring)
        } else if self.description.contains(term) {
            Some(MatchTier::Description)
        } else {
            None
        }
    }
}
