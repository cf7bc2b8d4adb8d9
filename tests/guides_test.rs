mod common;

use assert2::{check, let_assert};
use common::{TestCorpus, empty_corpus, sample_corpus};
use gds_context::ContextError;
use gds_context::error::ResourceKind;
use gds_context::tools::{handle_get_guide, handle_get_instructions, handle_list_guides};
use rstest::rstest;
use serde_json::{Value, json};

async fn list(corpus: &TestCorpus, input: Value) -> Value {
    let_assert!(Ok(text) = handle_list_guides(&corpus.corpus, &input).await);
    serde_json::from_str(&text).unwrap()
}

fn titles(response: &Value) -> Vec<&str> {
    response["guides"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap())
        .collect()
}

#[rstest]
#[tokio::test]
async fn list_guides_without_filters_returns_all(sample_corpus: TestCorpus) {
    let response = list(&sample_corpus, json!({})).await;
    check!(response["guideCount"] == 4);
    check!(titles(&response) == ["Angular Setup", "React Setup", "Design Tokens", "Angular Forms"]);
    check!(response["guides"][0]["resourceUri"] == "green://guides/angular");
    check!(response["guides"][2]["resourceUri"] == "green://concepts/tokens");
}

#[rstest]
#[tokio::test]
async fn list_guides_filters_by_category(sample_corpus: TestCorpus) {
    let response = list(&sample_corpus, json!({ "category": "concepts" })).await;
    check!(titles(&response) == ["Design Tokens", "Angular Forms"]);
    check!(response["guides"][0]["category"] == "concepts");
}

#[rstest]
#[tokio::test]
async fn list_guides_category_and_framework_both_apply(sample_corpus: TestCorpus) {
    let response = list(&sample_corpus, json!({ "category": "concepts", "framework": "angular" })).await;
    check!(titles(&response) == ["Angular Forms"]);
    check!(response["guides"][0]["resourceUri"] == "green://concepts/forms");
}

#[rstest]
#[tokio::test]
async fn list_guides_tolerates_unknown_category_in_index(sample_corpus: TestCorpus) {
    sample_corpus.workspace.create_file(
        "index.json",
        r#"{ "guides": [
            { "path": "guides/angular.md", "title": "Angular Setup", "category": "framework-setup", "tags": ["angular"] },
            { "path": "guides/cards.md", "title": "Cards", "category": "components", "tags": [] }
        ], "instructions": true }"#,
    );

    let response = list(&sample_corpus, json!({})).await;
    check!(titles(&response) == ["Angular Setup", "Cards"]);
    check!(response["guides"][1]["category"] == "components");

    let response = list(&sample_corpus, json!({ "category": "framework-setup" })).await;
    check!(titles(&response) == ["Angular Setup"]);

    let_assert!(Ok(text) = handle_get_instructions(&sample_corpus.corpus).await);
    check!(text.starts_with("# Instructions"));
}

#[rstest]
#[tokio::test]
async fn list_guides_filters_by_framework_tag(sample_corpus: TestCorpus) {
    let response = list(&sample_corpus, json!({ "framework": "angular" })).await;
    check!(titles(&response) == ["Angular Setup", "Angular Forms"]);
    check!(response["guides"][0]["tags"] == json!(["angular", "setup"]));
}

#[rstest]
#[tokio::test]
async fn list_guides_all_is_no_filter(sample_corpus: TestCorpus) {
    let response = list(&sample_corpus, json!({ "category": "all", "framework": "all" })).await;
    check!(response["guideCount"] == 4);
}

#[rstest]
#[tokio::test]
async fn list_guides_without_index_is_not_found(empty_corpus: TestCorpus) {
    let result = handle_list_guides(&empty_corpus.corpus, &json!({})).await;
    let_assert!(Err(ContextError::NotFound { kind, identifier, .. }) = result);
    check!(kind == ResourceKind::Index);
    check!(identifier == "global");
}

#[rstest]
#[tokio::test]
async fn get_guide_prepends_title(sample_corpus: TestCorpus) {
    let_assert!(Ok(text) = handle_get_guide(&sample_corpus.corpus, &json!({ "name": "angular" })).await);
    check!(text == "# Angular Setup\n\nRun `npm install @sebgroup/green-core`.\n");
}

#[rstest]
#[tokio::test]
async fn get_guide_finds_concepts_by_name(sample_corpus: TestCorpus) {
    let_assert!(Ok(text) = handle_get_guide(&sample_corpus.corpus, &json!({ "name": "tokens" })).await);
    check!(text.starts_with("# Design Tokens\n\n"));
}

#[rstest]
#[tokio::test]
async fn get_guide_unknown_is_not_found(sample_corpus: TestCorpus) {
    let result = handle_get_guide(&sample_corpus.corpus, &json!({ "name": "vue" })).await;
    let_assert!(Err(err) = result);
    check!(err.to_report() == "Error [NOT_FOUND]: Guide not found: vue. Use list_guides to see available guides.");
}

#[rstest]
#[tokio::test]
async fn get_guide_missing_file_is_file_not_found(sample_corpus: TestCorpus) {
    sample_corpus.workspace.remove_file("guides/react.md");
    let result = handle_get_guide(&sample_corpus.corpus, &json!({ "name": "react" })).await;
    let_assert!(Err(ContextError::NotFound { kind, identifier, .. }) = result);
    check!(kind == ResourceKind::File);
    check!(identifier == "guides/react.md");
}

#[rstest]
#[tokio::test]
async fn get_instructions_returns_raw_markdown(sample_corpus: TestCorpus) {
    let_assert!(Ok(text) = handle_get_instructions(&sample_corpus.corpus).await);
    check!(text.starts_with("# Instructions"));
    check!(text.contains("MCP server"));
}

#[rstest]
#[tokio::test]
async fn get_instructions_requires_flag_in_index(sample_corpus: TestCorpus) {
    sample_corpus
        .workspace
        .create_file("index.json", r#"{ "guides": [], "instructions": false }"#);
    let result = handle_get_instructions(&sample_corpus.corpus).await;
    let_assert!(Err(ContextError::NotFound { kind, .. }) = result);
    check!(kind == ResourceKind::File);
}
