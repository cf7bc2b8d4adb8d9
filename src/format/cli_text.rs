//! Rewording of server-oriented text for terminal users.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SERVER_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bMCP server\b").expect("static pattern"));
static PROTOCOL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bMCP\b").expect("static pattern"));

/// Replace "MCP server" (any case) with "Context CLI", then any standalone
/// "MCP" with "CLI". Occurrences inside larger words are left alone.
pub fn rewrite_for_cli(text: &str) -> Cow<'_, str> {
    match SERVER_PHRASE.replace_all(text, "Context CLI") {
        Cow::Borrowed(unchanged) => PROTOCOL_WORD.replace_all(unchanged, "CLI"),
        Cow::Owned(replaced) => Cow::Owned(PROTOCOL_WORD.replace_all(&replaced, "CLI").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Use the MCP server tools.", "Use the Context CLI tools.")]
    #[case("The mcp Server is fast.", "The Context CLI is fast.")]
    #[case("Ask MCP for docs.", "Ask CLI for docs.")]
    #[case("MCPX and fooMCP stay.", "MCPX and fooMCP stay.")]
    #[case("No references here.", "No references here.")]
    fn test_rewrite_for_cli(#[case] input: &str, #[case] expected: &str) {
        check!(rewrite_for_cli(input) == expected);
    }

    #[test]
    fn test_unchanged_text_is_borrowed() {
        check!(matches!(rewrite_for_cli("plain"), Cow::Borrowed(_)));
    }
}
