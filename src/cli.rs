//! Command-line interface: the same operations as the MCP tools, printed to stdout.

use crate::config::{ContextConfig, DEFAULT_SCHEME, expand_tilde};
use crate::corpus::Corpus;
use crate::error::{ContextError, Result};
use crate::format::rewrite_for_cli;
use crate::tools::{
    handle_get_component_docs, handle_get_guide, handle_get_instructions, handle_list_guides,
    handle_resolve_uri, handle_search,
};
use crate::types::Framework;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gds-context", version)]
#[command(
    about = "Design system documentation, component APIs, guides, and usage instructions from the command line",
    long_about = None
)]
pub struct Cli {
    /// Corpus directory holding the generated indexes and markdown documents
    #[arg(long, global = true, env = "GDS_CONTEXT_CORPUS")]
    pub corpus: Option<String>,

    /// URI scheme used in resource URIs
    #[arg(long, global = true, env = "GDS_CONTEXT_SCHEME", default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    /// Log at debug level (GDS_CONTEXT_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for components and icons
    Search {
        /// Search term
        query: String,
        /// Filter by type: component, icon, all
        #[arg(long)]
        category: Option<String>,
        /// Don't split the query on spaces and commas
        #[arg(long)]
        no_split_terms: bool,
        /// Require all terms to match
        #[arg(long)]
        match_all: bool,
        /// Treat the query as a regular expression
        #[arg(long)]
        use_regex: bool,
        /// Maximum results to return, 1-100
        #[arg(long)]
        max_results: Option<i64>,
    },
    /// Get component documentation
    Docs {
        /// Component name, e.g. "button" or "gds-button"
        component: String,
        /// Target framework: angular, react, web-component
        framework: String,
        /// Exclude design guidelines
        #[arg(long)]
        no_guidelines: bool,
        /// Exclude usage instructions
        #[arg(long)]
        no_instructions: bool,
    },
    /// Fetch raw content by resource URI
    Get {
        uri: String,
    },
    /// List available guides
    Guides {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by framework: angular, react
        #[arg(long)]
        framework: Option<String>,
    },
    /// Get a specific guide's content
    Guide {
        name: String,
    },
    /// Get base usage instructions
    Instructions,
    /// Serve the tools over MCP on stdio
    Serve,
}

impl Cli {
    /// Resolve the corpus configuration from flags, environment, and defaults.
    pub fn config(&self) -> ContextConfig {
        let root = self.corpus.as_deref().map_or_else(ContextConfig::default_corpus_root, |path| {
            PathBuf::from(expand_tilde(path).as_ref())
        });
        ContextConfig::new(root).with_scheme(&self.scheme)
    }
}

/// Run a non-serve command and return what should be printed to stdout.
pub async fn run_command(corpus: &Corpus, command: &Commands) -> Result<String> {
    match command {
        Commands::Search {
            query,
            category,
            no_split_terms,
            match_all,
            use_regex,
            max_results,
        } => {
            let mut input = Map::new();
            input.insert("query".into(), json!(query));
            if let Some(category) = category {
                input.insert("category".into(), json!(category));
            }
            if *no_split_terms {
                input.insert("splitTerms".into(), json!(false));
            }
            if *match_all {
                input.insert("matchAll".into(), json!(true));
            }
            if *use_regex {
                input.insert("useRegex".into(), json!(true));
            }
            if let Some(n) = max_results {
                input.insert("maxResults".into(), json!(n));
            }
            handle_search(corpus, &Value::Object(input)).await
        }
        Commands::Docs {
            component,
            framework,
            no_guidelines,
            no_instructions,
        } => {
            let framework = Framework::normalize(framework).ok_or_else(|| {
                ContextError::validation(
                    "framework",
                    format!(
                        "Invalid framework '{}'. Allowed values: {}. \
                         Aliases accepted for web-component: web, webcomponent, web-components.",
                        framework,
                        Framework::ALL.map(Framework::as_str).join(", ")
                    ),
                )
            })?;
            let input = json!({
                "componentName": component,
                "framework": framework.as_str(),
                "includeGuidelines": !no_guidelines,
                "includeInstructions": !no_instructions,
            });
            handle_get_component_docs(corpus, &input).await
        }
        Commands::Get { uri } => handle_resolve_uri(corpus, uri).await,
        Commands::Guides {
            category,
            framework,
        } => {
            let mut input = Map::new();
            if let Some(category) = category {
                input.insert("category".into(), json!(category));
            }
            if let Some(framework) = framework {
                input.insert("framework".into(), json!(framework));
            }
            handle_list_guides(corpus, &Value::Object(input)).await
        }
        Commands::Guide { name } => handle_get_guide(corpus, &json!({ "name": name })).await,
        Commands::Instructions => {
            let text = handle_get_instructions(corpus).await?;
            Ok(rewrite_for_cli(&text).into_owned())
        }
        Commands::Serve => Err(ContextError::validation(
            "command",
            "serve is handled by the server entry point",
        )),
    }
}
