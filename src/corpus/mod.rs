//! Read-only access to the pre-generated documentation corpus.
//!
//! The corpus is a directory of JSON indexes plus markdown documents:
//!
//! ```text
//! {root}/components.json
//! {root}/icons.json
//! {root}/index.json
//! {root}/INSTRUCTIONS.md
//! {root}/{shortName}/{docType}.md
//! {root}/guides/{name}.md
//! {root}/concepts/{name}.md
//! ```
//!
//! Nothing is cached between calls; each operation loads what it needs.

pub mod uri;

use crate::config::ContextConfig;
use crate::search::{TagPrefixes, UriBuilder};
use crate::types::{Category, ComponentsIndex, DocEntry, GlobalIndex, IconsIndex};
use serde::de::DeserializeOwned;
use std::path::{Component, Path, PathBuf};

pub use uri::{
    ResourceCategory, ResourceUri, build_resource_uri, instructions_uri, parse_resource_uri,
};

pub const COMPONENTS_INDEX_FILE: &str = "components.json";
pub const ICONS_INDEX_FILE: &str = "icons.json";
pub const GLOBAL_INDEX_FILE: &str = "index.json";
pub const INSTRUCTIONS_FILE: &str = "INSTRUCTIONS.md";

/// Handle to one corpus directory plus the configuration used to query it.
#[derive(Debug, Clone)]
pub struct Corpus {
    config: ContextConfig,
}

impl Corpus {
    pub const fn new(config: ContextConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.corpus_root
    }

    pub fn scheme(&self) -> &str {
        &self.config.scheme
    }

    pub fn tag_prefixes(&self) -> TagPrefixes<'_> {
        TagPrefixes {
            component: &self.config.tag_prefix,
            icon: &self.config.icon_tag_prefix,
        }
    }

    /// Directory name of an entry's documents: its tag without the component prefix.
    ///
    /// `gds-button` -> `button`, `gds-icon-arrow` -> `icon-arrow`.
    pub fn short_name<'e>(&self, entry: &'e DocEntry) -> &'e str {
        entry
            .tag_name
            .strip_prefix(self.config.tag_prefix.as_str())
            .unwrap_or(&entry.tag_name)
    }

    pub async fn load_components_index(&self) -> Option<ComponentsIndex> {
        let index: ComponentsIndex = self.load_json(COMPONENTS_INDEX_FILE).await?;
        tracing::debug!(count = index.components.len(), "Loaded components index");
        Some(index)
    }

    pub async fn load_icons_index(&self) -> Option<IconsIndex> {
        let index: IconsIndex = self.load_json(ICONS_INDEX_FILE).await?;
        tracing::debug!(count = index.icons.len(), "Loaded icons index");
        Some(index)
    }

    pub async fn load_global_index(&self) -> Option<GlobalIndex> {
        let index: GlobalIndex = self.load_json(GLOBAL_INDEX_FILE).await?;
        tracing::debug!(
            guides = index.guides.len(),
            instructions = index.instructions,
            "Loaded global index"
        );
        Some(index)
    }

    /// Absent or unparsable indexes yield `None`; callers decide if that is fatal.
    async fn load_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.root().join(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Index {} unavailable: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!("Failed to parse index {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Read a corpus-relative file whole. `None` when missing or when the path
    /// would leave the corpus root.
    pub async fn read_file(&self, relative: &str) -> Option<String> {
        let Some(path) = self.contained_path(relative) else {
            tracing::warn!(relative, "Rejected corpus path outside the root");
            return None;
        };

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("Corpus file {} not readable: {}", path.display(), e);
                None
            }
        }
    }

    fn contained_path(&self, relative: &str) -> Option<PathBuf> {
        let relative = Path::new(relative);
        let normal_only = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        (normal_only && relative.components().next().is_some())
            .then(|| self.root().join(relative))
    }
}

impl UriBuilder for Corpus {
    fn resource_uri(&self, category: Category, entry: &DocEntry, doc_type: &str) -> String {
        let resource_category = match category {
            Category::Component => ResourceCategory::Components,
            Category::Icon => ResourceCategory::Icons,
        };
        build_resource_uri(
            self.scheme(),
            resource_category,
            self.short_name(entry),
            Some(doc_type),
        )
    }
}

/// Find a component by short name (`button`) or tag name (`gds-button`),
/// ignoring case.
pub fn find_component<'a>(
    name_or_tag: &str,
    components: &'a [DocEntry],
    config: &ContextConfig,
) -> Option<&'a DocEntry> {
    find_entry(name_or_tag, components, &[config.tag_prefix.as_str()])
}

/// Find an icon by `arrow`, `icon-arrow`, or `gds-icon-arrow`, ignoring case.
pub fn find_icon<'a>(
    name_or_tag: &str,
    icons: &'a [DocEntry],
    config: &ContextConfig,
) -> Option<&'a DocEntry> {
    find_entry(
        name_or_tag,
        icons,
        &[config.icon_tag_prefix.as_str(), config.tag_prefix.as_str()],
    )
}

fn find_entry<'a>(needle: &str, entries: &'a [DocEntry], prefixes: &[&str]) -> Option<&'a DocEntry> {
    let needle = needle.trim().to_lowercase();
    entries.iter().find(|entry| {
        let tag = entry.tag_name.to_lowercase();
        tag == needle
            || prefixes
                .iter()
                .any(|prefix| tag.strip_prefix(&prefix.to_lowercase()) == Some(needle.as_str()))
    })
}
