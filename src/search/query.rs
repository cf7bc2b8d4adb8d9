//! Query parsing: splits a raw query into search terms or compiles it as a
//! guarded regular expression.

use crate::error::RegexError;
use regex::{Regex, RegexBuilder};

/// A query ready for the ranking engine.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    /// Lowercased terms, in the order they appeared.
    pub terms: Vec<String>,
    /// Set when the query was compiled as a regular expression.
    pub regex: Option<Regex>,
}

impl ParsedQuery {
    /// Replace the terms with a single term (used for the empty-query sentinel).
    #[must_use]
    pub fn with_single_term(mut self, term: &str) -> Self {
        self.terms = vec![term.to_lowercase()];
        self
    }
}

/// Parse a raw query.
///
/// - `use_regex`: the whole query (minus optional `/.../` delimiters) is compiled
///   case-insensitively after the length and nested-quantifier checks.
/// - `split_terms`: the query is split on whitespace and commas.
/// - otherwise the trimmed query is a single term.
pub fn parse_search_query(
    query: &str,
    split_terms: bool,
    use_regex: bool,
    max_regex_length: usize,
) -> Result<ParsedQuery, RegexError> {
    if use_regex {
        let regex = compile_guarded(query, max_regex_length)?;
        return Ok(ParsedQuery {
            terms: Vec::new(),
            regex: Some(regex),
        });
    }

    let terms = if split_terms {
        split_query_terms(query)
    } else {
        let term = query.trim();
        if term.is_empty() {
            Vec::new()
        } else {
            vec![term.to_lowercase()]
        }
    };

    Ok(ParsedQuery { terms, regex: None })
}

/// Split on whitespace and commas, dropping empty tokens.
pub fn split_query_terms(query: &str) -> Vec<String> {
    query
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Strip `/pattern/` delimiters if both are present.
fn strip_delimiters(pattern: &str) -> &str {
    pattern
        .strip_prefix('/')
        .and_then(|p| p.strip_suffix('/'))
        .unwrap_or(pattern)
}

fn compile_guarded(query: &str, max_len: usize) -> Result<Regex, RegexError> {
    let pattern = strip_delimiters(query.trim());

    let len = pattern.chars().count();
    if len > max_len {
        tracing::warn!(len, max_len, "Rejected overlong regex query");
        return Err(RegexError::TooLong { len, max: max_len });
    }

    if has_nested_quantifier(pattern) {
        tracing::warn!(pattern, "Rejected regex with nested quantifiers");
        return Err(RegexError::Catastrophic {
            pattern: pattern.to_string(),
        });
    }

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RegexError::Invalid {
            pattern: pattern.to_string(),
            source,
        })
}

/// Detect a quantified group whose body already contains a quantifier,
/// e.g. `(a+)+`, `(a*)*`, `(a+){2,}` or `([a-z]+)*`.
///
/// Escapes and character classes are skipped. `?` is not treated as a
/// repeating quantifier on either side.
pub fn has_nested_quantifier(pattern: &str) -> bool {
    let chars: Vec<char> = pattern.chars().collect();
    // One flag per open group: does its body contain a repeat?
    let mut groups: Vec<bool> = Vec::new();
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            i += 2;
            continue;
        }

        if in_class {
            if c == ']' {
                in_class = false;
            }
            i += 1;
            continue;
        }

        match c {
            '[' => in_class = true,
            '(' => groups.push(false),
            ')' => {
                let body_repeats = groups.pop().unwrap_or(false);
                let group_repeats = is_repeat_at(&chars, i + 1);
                if body_repeats && group_repeats {
                    return true;
                }
                if let Some(parent) = groups.last_mut() {
                    *parent |= body_repeats || group_repeats;
                }
            }
            _ if is_repeat_at(&chars, i) => {
                if let Some(current) = groups.last_mut() {
                    *current = true;
                }
            }
            _ => {}
        }

        i += 1;
    }

    false
}

/// `+`, `*`, or a `{n...}` counted repetition starting at `idx`.
fn is_repeat_at(chars: &[char], idx: usize) -> bool {
    match chars.get(idx) {
        Some('+' | '*') => true,
        Some('{') => chars.get(idx + 1).is_some_and(char::is_ascii_digit),
        _ => false,
    }
}
