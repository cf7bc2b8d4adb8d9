//! Resource URI grammar.
//!
//! ```text
//! scheme://components/{name}/{docType}
//! scheme://icons/{name}/{docType}
//! scheme://guides/{name}
//! scheme://concepts/{name}
//! scheme://instructions
//! ```

use crate::types::DocType;
use std::fmt;

/// Path segment naming the root instructions document.
pub const INSTRUCTIONS_SEGMENT: &str = "instructions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Components,
    Icons,
    Guides,
    Concepts,
}

impl ResourceCategory {
    pub const ALL: [Self; 4] = [Self::Components, Self::Icons, Self::Guides, Self::Concepts];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Icons => "icons",
            Self::Guides => "guides",
            Self::Concepts => "concepts",
        }
    }

    pub fn parse(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == segment)
    }

    /// Components and icons address one document per entry.
    pub const fn takes_doc_type(self) -> bool {
        matches!(self, Self::Components | Self::Icons)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, non-root resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    pub category: ResourceCategory,
    pub name: String,
    pub doc_type: Option<DocType>,
}

impl ResourceUri {
    /// Corpus-relative file the URI points at.
    ///
    /// `None` for a components/icons URI without a document type.
    pub fn file_path(&self) -> Option<String> {
        match self.category {
            ResourceCategory::Components | ResourceCategory::Icons => {
                self.doc_type.map(|doc| format!("{}/{}.md", self.name, doc))
            }
            ResourceCategory::Guides | ResourceCategory::Concepts => {
                Some(format!("{}/{}.md", self.category, self.name))
            }
        }
    }
}

/// Build `scheme://category/name[/docType]`.
pub fn build_resource_uri(
    scheme: &str,
    category: ResourceCategory,
    name: &str,
    doc_type: Option<&str>,
) -> String {
    match doc_type {
        Some(doc) => format!("{}://{}/{}/{}", scheme, category, name, doc),
        None => format!("{}://{}/{}", scheme, category, name),
    }
}

/// `scheme://instructions`
pub fn instructions_uri(scheme: &str) -> String {
    format!("{}://{}", scheme, INSTRUCTIONS_SEGMENT)
}

/// Parse a non-root resource URI. Returns `None` for anything off-grammar,
/// including names that could step outside the corpus (`.`, `..`, backslashes).
pub fn parse_resource_uri(scheme: &str, uri: &str) -> Option<ResourceUri> {
    let rest = uri.strip_prefix(scheme)?.strip_prefix("://")?;
    let mut segments = rest.split('/');

    let category = ResourceCategory::parse(segments.next()?)?;
    let name = segments.next().filter(|n| is_valid_name(n))?;
    let doc_type = segments.next();

    if segments.next().is_some() {
        return None;
    }

    let doc_type = match (category.takes_doc_type(), doc_type) {
        (true, Some(doc)) => Some(DocType::parse(doc)?),
        (true, None) => None,
        (false, Some(_)) => return None,
        (false, None) => None,
    };

    Some(ResourceUri {
        category,
        name: name.to_string(),
        doc_type,
    })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case(ResourceCategory::Components, "button", Some(DocType::Api))]
    #[case(ResourceCategory::Components, "dropdown", Some(DocType::Angular))]
    #[case(ResourceCategory::Icons, "icon-arrow", Some(DocType::React))]
    #[case(ResourceCategory::Components, "card", Some(DocType::Guidelines))]
    #[case(ResourceCategory::Components, "card", Some(DocType::Instructions))]
    #[case(ResourceCategory::Guides, "angular", None)]
    #[case(ResourceCategory::Concepts, "tokens", None)]
    fn test_build_parse_inverse(
        #[case] category: ResourceCategory,
        #[case] name: &str,
        #[case] doc_type: Option<DocType>,
    ) {
        let uri = build_resource_uri("green", category, name, doc_type.map(DocType::as_str));
        let_assert!(Some(parsed) = parse_resource_uri("green", &uri));
        check!(parsed.category == category);
        check!(parsed.name == name);
        check!(parsed.doc_type == doc_type);
    }

    #[test]
    fn test_build_shape() {
        check!(
            build_resource_uri("green", ResourceCategory::Components, "button", Some("api"))
                == "green://components/button/api"
        );
        check!(build_resource_uri("green", ResourceCategory::Guides, "react", None) == "green://guides/react");
        check!(instructions_uri("green") == "green://instructions");
    }

    #[rstest]
    #[case("")]
    #[case("green://")]
    #[case("green://instructions")]
    #[case("green://widgets/button/api")]
    #[case("green://components/button/vue")]
    #[case("green://components/button/api/extra")]
    #[case("green://components//api")]
    #[case("green://components/../api")]
    #[case("green://guides/angular/api")]
    #[case("green://guides/")]
    #[case("blue://components/button/api")]
    #[case("components/button/api")]
    fn test_parse_rejects_off_grammar(#[case] uri: &str) {
        check!(parse_resource_uri("green", uri).is_none());
    }

    #[test]
    fn test_component_uri_without_doc_type_parses() {
        let_assert!(Some(parsed) = parse_resource_uri("green", "green://components/button"));
        check!(parsed.doc_type.is_none());
        check!(parsed.file_path().is_none());
    }

    #[rstest]
    #[case("green://components/button/api", "button/api.md")]
    #[case("green://icons/icon-arrow/api", "icon-arrow/api.md")]
    #[case("green://guides/angular", "guides/angular.md")]
    #[case("green://concepts/tokens", "concepts/tokens.md")]
    fn test_file_path(#[case] uri: &str, #[case] path: &str) {
        let_assert!(Some(parsed) = parse_resource_uri("green", uri));
        check!(parsed.file_path().as_deref() == Some(path));
    }
}
