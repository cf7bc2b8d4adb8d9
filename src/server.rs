//! MCP server exposing the documentation tools over stdio.

use crate::corpus::Corpus;
use crate::error::ContextError;
use crate::tools::{
    ComponentDocsRequest, GetGuideRequest, ListGuidesRequest, ResolveUriRequest, SearchRequest,
    handle_get_component_docs, handle_get_guide, handle_get_instructions, handle_list_guides,
    handle_resolve_uri, handle_search,
};
use crate::validation::validate_resolve_uri_input;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use std::sync::Arc;

/// Arguments for tools that take none.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct EmptyRequest {}

/// MCP server over one read-only documentation corpus.
#[derive(Clone)]
pub struct DocsServer {
    corpus: Arc<Corpus>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("corpus", &self.corpus)
            .finish()
    }
}

/// Arguments arrive as raw JSON so validation can name the offending field.
fn into_value(arguments: JsonObject) -> Value {
    Value::Object(arguments)
}

fn report(result: Result<String, ContextError>) -> Result<String, String> {
    result.map_err(|e| {
        tracing::warn!(code = e.code(), "{}", e);
        e.to_report()
    })
}

#[tool_router]
impl DocsServer {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus: Arc::new(corpus),
            tool_router: Self::tool_router(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[tool(
        description = "Search design system components and icons by name, tag, class, or description. Results are ranked by relevance (exact > prefix > substring > description) and include resource URIs for every available document.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_components(
        &self,
        Parameters(arguments): Parameters<JsonObject>,
    ) -> Result<String, String> {
        report(handle_search(&self.corpus, &into_value(arguments)).await)
    }

    #[tool(
        description = "Get complete documentation for a component or icon: framework-specific imports and usage, the full API reference, design guidelines, and usage instructions.",
        input_schema = inline_schema_for_type::<ComponentDocsRequest>()
    )]
    async fn get_component_docs(
        &self,
        Parameters(arguments): Parameters<JsonObject>,
    ) -> Result<String, String> {
        report(handle_get_component_docs(&self.corpus, &into_value(arguments)).await)
    }

    #[tool(
        description = "List setup guides and concept documents, optionally filtered by category and framework.",
        input_schema = inline_schema_for_type::<ListGuidesRequest>()
    )]
    async fn list_guides(
        &self,
        Parameters(arguments): Parameters<JsonObject>,
    ) -> Result<String, String> {
        report(handle_list_guides(&self.corpus, &into_value(arguments)).await)
    }

    #[tool(
        description = "Get the full content of a guide by name (as listed by list_guides).",
        input_schema = inline_schema_for_type::<GetGuideRequest>()
    )]
    async fn get_guide(
        &self,
        Parameters(arguments): Parameters<JsonObject>,
    ) -> Result<String, String> {
        report(handle_get_guide(&self.corpus, &into_value(arguments)).await)
    }

    #[tool(
        description = "Get the base usage instructions: critical rules, typography, layout system requirements, and general best practices. Read this before writing UI code.",
        input_schema = inline_schema_for_type::<EmptyRequest>()
    )]
    async fn get_instructions(&self) -> Result<String, String> {
        report(handle_get_instructions(&self.corpus).await)
    }

    #[tool(
        description = "Read the raw content behind a resource URI returned by other tools, e.g. green://components/button/api.",
        input_schema = inline_schema_for_type::<ResolveUriRequest>()
    )]
    async fn resolve_uri(
        &self,
        Parameters(arguments): Parameters<JsonObject>,
    ) -> Result<String, String> {
        let result = match validate_resolve_uri_input(&into_value(arguments)) {
            Ok(request) => handle_resolve_uri(&self.corpus, &request.uri).await,
            Err(e) => Err(e),
        };
        report(result)
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "gds-context: design system documentation for AI assistants. \
                 Call get_instructions first, use search_components to find components and icons, \
                 then get_component_docs for framework-specific usage. \
                 list_guides and get_guide cover setup and concepts; resolve_uri reads any returned resource URI."
                    .to_string(),
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
