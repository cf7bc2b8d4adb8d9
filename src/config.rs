//! Runtime configuration passed explicitly into every operation.

use std::borrow::Cow;
use std::path::PathBuf;

/// Default URI scheme for corpus resources (`green://components/button/api`).
pub const DEFAULT_SCHEME: &str = "green";

/// Regex queries longer than this are rejected before compilation.
pub const DEFAULT_MAX_REGEX_LENGTH: usize = 100;

pub const DEFAULT_TAG_PREFIX: &str = "gds-";
pub const DEFAULT_ICON_TAG_PREFIX: &str = "gds-icon-";

/// Configuration for one corpus.
///
/// Built once at startup from CLI flags and environment, then handed to
/// [`Corpus`](crate::corpus::Corpus). There is no process-wide state.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Directory holding the JSON indexes and markdown documents.
    pub corpus_root: PathBuf,
    /// Scheme used when building and parsing resource URIs.
    pub scheme: String,
    pub max_regex_length: usize,
    /// Prefix shared by every component tag name.
    pub tag_prefix: String,
    /// Prefix shared by every icon tag name.
    pub icon_tag_prefix: String,
}

impl ContextConfig {
    pub fn new(corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            scheme: DEFAULT_SCHEME.to_string(),
            max_regex_length: DEFAULT_MAX_REGEX_LENGTH,
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            icon_tag_prefix: DEFAULT_ICON_TAG_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Term substituted for an empty query; matches every tag name.
    pub fn broad_term(&self) -> &str {
        self.tag_prefix.trim_end_matches('-')
    }

    /// Corpus location used when none is configured.
    pub fn default_corpus_root() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gds-context")
            .join("mcp")
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
