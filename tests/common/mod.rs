//! Shared test fixtures and utilities for integration tests.
//!
//! Every test gets its own temporary corpus directory laid out the way the
//! documentation generator writes it:
//!
//! ```text
//! components.json  icons.json  index.json  INSTRUCTIONS.md
//! button/{api,angular,react,guidelines,instructions}.md
//! input/{api,guidelines}.md
//! dropdown/api.md
//! icon-arrow/api.md  icon-check/api.md
//! guides/{angular,react}.md  concepts/{tokens,forms}.md
//! ```
//!
//! # Available Fixtures
//!
//! - `sample_corpus`: the full corpus above
//! - `empty_corpus`: an empty directory (every index missing)

use gds_context::{ContextConfig, Corpus};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Deletes a file within this workspace.
    ///
    /// # Panics
    /// Panics if the file cannot be removed.
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.root.join(path))
            .unwrap_or_else(|e| panic!("Failed to remove file '{}': {}", path, e));
    }
}

/// A corpus on disk plus a handle for querying it.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct TestCorpus {
    pub workspace: TempWorkspace,
    pub corpus: Corpus,
}

#[allow(dead_code)]
impl TestCorpus {
    fn new(workspace: TempWorkspace) -> Self {
        gds_context::tracing::init(tracing::Level::DEBUG);
        let corpus = Corpus::new(ContextConfig::new(workspace.path()));
        Self { workspace, corpus }
    }
}

const COMPONENTS_JSON: &str = r#"{
  "components": [
    {
      "name": "Button",
      "tagName": "gds-button",
      "className": "GdsButton",
      "description": "A clickable button component",
      "path": "components/button",
      "files": ["api", "angular", "react", "guidelines", "instructions"]
    },
    {
      "name": "Input",
      "tagName": "gds-input",
      "className": "GdsInput",
      "description": "An input field for text entry",
      "path": "components/input",
      "files": ["api", "guidelines"]
    },
    {
      "name": "Dropdown",
      "tagName": "gds-dropdown",
      "className": "GdsDropdown",
      "description": "A dropdown menu component for selecting options",
      "path": "components/dropdown",
      "files": ["api"]
    }
  ]
}"#;

const ICONS_JSON: &str = r#"{
  "icons": [
    {
      "name": "Arrow",
      "tagName": "gds-icon-arrow",
      "className": "GdsIconArrow",
      "description": "Arrow icon",
      "path": "icons/arrow",
      "files": ["api"]
    },
    {
      "name": "Check",
      "tagName": "gds-icon-check",
      "className": "GdsIconCheck",
      "description": "Checkmark icon",
      "path": "icons/check",
      "files": ["api"]
    }
  ]
}"#;

const INDEX_JSON: &str = r#"{
  "guides": [
    {
      "path": "guides/angular.md",
      "title": "Angular Setup",
      "category": "framework-setup",
      "description": "Install and configure components in Angular",
      "tags": ["angular", "setup"]
    },
    {
      "path": "guides/react.md",
      "title": "React Setup",
      "category": "framework-setup",
      "description": "Install and configure components in React",
      "tags": ["react", "setup"]
    },
    {
      "path": "concepts/tokens.md",
      "title": "Design Tokens",
      "category": "concepts",
      "description": "Color, spacing, and typography tokens",
      "tags": ["tokens"]
    },
    {
      "path": "concepts/forms.md",
      "title": "Angular Forms",
      "category": "concepts",
      "description": "Form controls with reactive forms",
      "tags": ["angular", "forms"]
    }
  ],
  "instructions": true
}"#;

pub const BUTTON_API: &str = "# gds-button\n\n**Class**: `GdsButton`\n**Tag**: `<gds-button>`\n\n### Properties\n\n| Name | Type |\n| rank | string |\n";

/// Writes the full sample corpus into `workspace`.
pub fn write_sample_corpus(workspace: &TempWorkspace) {
    workspace.create_file("components.json", COMPONENTS_JSON);
    workspace.create_file("icons.json", ICONS_JSON);
    workspace.create_file("index.json", INDEX_JSON);
    workspace.create_file(
        "INSTRUCTIONS.md",
        "# Instructions\n\nAlways read the MCP server docs before using MCP tools.\n",
    );

    workspace.create_file("button/api.md", BUTTON_API);
    workspace.create_file("button/angular.md", "# Button\nimport { GdsButtonComponent } from '@sebgroup/green-core/angular'\n");
    workspace.create_file("button/react.md", "# Button\nimport { GdsButton } from '@sebgroup/green-core/react'\n");
    workspace.create_file("button/guidelines.md", "Use one primary button per view.\n");
    workspace.create_file("button/instructions.md", "Prefer the label slot over text content.\n");

    workspace.create_file("input/api.md", "# gds-input\n\n### Properties\n| value |\n");
    workspace.create_file("input/guidelines.md", "Always pair inputs with a label.\n");
    workspace.create_file("dropdown/api.md", "# gds-dropdown\n\n### Properties\n| options |\n");

    workspace.create_file("icon-arrow/api.md", "# gds-icon-arrow\n\n### Properties\n| size |\n");
    workspace.create_file("icon-check/api.md", "# gds-icon-check\n\n### Properties\n| size |\n");

    workspace.create_file("guides/angular.md", "Run `npm install @sebgroup/green-core`.\n");
    workspace.create_file("guides/react.md", "Wrap your app in the theme provider.\n");
    workspace.create_file("concepts/tokens.md", "Tokens are exposed as CSS custom properties.\n");
    workspace.create_file("concepts/forms.md", "Bind form controls with formControlName.\n");
}

/// Fixture: the full sample corpus.
#[fixture]
pub fn sample_corpus() -> TestCorpus {
    let workspace = TempWorkspace::new();
    write_sample_corpus(&workspace);
    TestCorpus::new(workspace)
}

/// Fixture: a corpus directory with nothing in it.
#[fixture]
pub fn empty_corpus() -> TestCorpus {
    TestCorpus::new(TempWorkspace::new())
}
