//! Corpus data model and the typed values produced by validation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which catalog an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Component,
    Icon,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Icon => "icon",
        }
    }
}

/// Category filter accepted by search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Component,
    Icon,
    #[default]
    All,
}

impl SearchCategory {
    pub const ALL: [Self; 3] = [Self::Component, Self::Icon, Self::All];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Icon => "icon",
            Self::All => "all",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == input)
    }

    pub const fn includes(self, category: Category) -> bool {
        matches!(
            (self, category),
            (Self::All, _) | (Self::Component, Category::Component) | (Self::Icon, Category::Icon)
        )
    }
}

/// Document slugs an entry may advertise in its `files` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    Api,
    Angular,
    React,
    Guidelines,
    Instructions,
}

impl DocType {
    pub const ALL: [Self; 5] = [
        Self::Api,
        Self::Angular,
        Self::React,
        Self::Guidelines,
        Self::Instructions,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Angular => "angular",
            Self::React => "react",
            Self::Guidelines => "guidelines",
            Self::Instructions => "instructions",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == input)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target framework for component documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    Angular,
    React,
    WebComponent,
}

impl Framework {
    pub const ALL: [Self; 3] = [Self::Angular, Self::React, Self::WebComponent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::React => "react",
            Self::WebComponent => "web-component",
        }
    }

    /// Human label used in headings ("Angular", "React", "Web-component").
    pub fn label(self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Resolve a framework name or alias, ignoring case and surrounding whitespace.
    pub fn normalize(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "angular" => Some(Self::Angular),
            "react" => Some(Self::React),
            "web-component" | "web-components" | "webcomponent" | "webcomponents" | "web" => {
                Some(Self::WebComponent)
            }
            _ => None,
        }
    }

    /// Document holding the framework-specific usage.
    pub const fn primary_doc(self) -> DocType {
        match self {
            Self::Angular => DocType::Angular,
            Self::React => DocType::React,
            Self::WebComponent => DocType::Api,
        }
    }

    pub const fn is_framework_specific(self) -> bool {
        matches!(self, Self::Angular | Self::React)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component or icon as listed in its catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    pub name: String,
    pub tag_name: String,
    pub class_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    /// Document slugs available on disk for this entry.
    #[serde(default)]
    pub files: Vec<String>,
}

impl DocEntry {
    pub fn has_doc(&self, doc_type: DocType) -> bool {
        self.files.iter().any(|f| f == doc_type.as_str())
    }
}

/// `components.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsIndex {
    #[serde(default)]
    pub components: Vec<DocEntry>,
}

/// `icons.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconsIndex {
    #[serde(default)]
    pub icons: Vec<DocEntry>,
}

/// Fixed set of guide categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    FrameworkSetup,
    GettingStarted,
    Concepts,
    Troubleshooting,
    Migration,
}

impl GuideCategory {
    pub const ALL: [Self; 5] = [
        Self::FrameworkSetup,
        Self::GettingStarted,
        Self::Concepts,
        Self::Troubleshooting,
        Self::Migration,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrameworkSetup => "framework-setup",
            Self::GettingStarted => "getting-started",
            Self::Concepts => "concepts",
            Self::Troubleshooting => "troubleshooting",
            Self::Migration => "migration",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == input)
    }
}

/// Framework filter accepted by guide listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GuideFramework {
    Angular,
    React,
}

impl GuideFramework {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::React => "react",
        }
    }
}

/// A setup guide or concept document from the global index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuideEntry {
    /// `guides/<name>.md` or `concepts/<name>.md`
    pub path: String,
    pub title: String,
    /// Free-form in the index; only known categories can be filtered on.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GuideEntry {
    /// Name portion of the path, as used in URIs and `get_guide`.
    pub fn name(&self) -> &str {
        let path = self
            .path
            .strip_prefix("guides/")
            .or_else(|| self.path.strip_prefix("concepts/"))
            .unwrap_or(&self.path);
        path.strip_suffix(".md").unwrap_or(path)
    }

    pub fn is_concept(&self) -> bool {
        self.path.starts_with("concepts/")
    }
}

/// `index.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalIndex {
    #[serde(default)]
    pub guides: Vec<GuideEntry>,
    /// Whether `INSTRUCTIONS.md` was generated.
    #[serde(default)]
    pub instructions: bool,
}

/// One ranked search hit, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    pub tag_name: String,
    pub class_name: String,
    pub category: Category,
    pub description: String,
    pub resource_uris: BTreeMap<String, String>,
}
