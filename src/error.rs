//! Error handling types and utilities.

use std::fmt;

/// A specialized Result type for documentation context operations.
pub type Result<T, E = ContextError> = std::result::Result<T, E>;

/// Kind of resource a [`ContextError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Index,
    Component,
    Guide,
    File,
    Uri,
    DocType,
    Category,
}

impl ResourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Component => "component",
            Self::Guide => "guide",
            Self::File => "file",
            Self::Uri => "uri",
            Self::DocType => "docType",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while compiling a user-supplied regular expression.
#[derive(Debug, thiserror::Error)]
pub enum RegexError {
    #[error("Regex pattern too long ({len} characters, maximum is {max})")]
    TooLong { len: usize, max: usize },

    #[error(
        "Regex pattern '{pattern}' contains nested quantifiers that could cause catastrophic backtracking"
    )]
    Catastrophic { pattern: String },

    #[error("Invalid regex pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors surfaced by every documentation operation.
///
/// All variants are terminal: the corpus is static, so nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// Malformed, missing, or out-of-range input.
    #[error("Invalid '{field}': {message}")]
    Validation { field: String, message: String },

    /// A component, guide, index, or file is absent from the corpus.
    #[error("{message}")]
    NotFound {
        kind: ResourceKind,
        identifier: String,
        message: String,
    },

    #[error(transparent)]
    Regex(#[from] RegexError),

    /// A response could not be rendered as JSON.
    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContextError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(
        kind: ResourceKind,
        identifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            kind,
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code, shown as `Error [CODE]: ...` at the boundary.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Regex(_) => "REGEX_ERROR",
            Self::Serialization(_) => "INTERNAL_ERROR",
        }
    }

    /// Render the error the way both the CLI and the MCP server report it.
    pub fn to_report(&self) -> String {
        format!("Error [{}]: {}", self.code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_codes_are_stable() {
        check!(ContextError::validation("query", "required").code() == "VALIDATION_ERROR");
        check!(
            ContextError::not_found(ResourceKind::Guide, "x", "Guide not found: x").code()
                == "NOT_FOUND"
        );
        check!(
            ContextError::from(RegexError::TooLong { len: 101, max: 100 }).code() == "REGEX_ERROR"
        );
    }

    #[test]
    fn test_report_includes_field_name() {
        let err = ContextError::validation("maxResults", "must be between 1 and 100");
        check!(err.to_report() == "Error [VALIDATION_ERROR]: Invalid 'maxResults': must be between 1 and 100");
    }
}
