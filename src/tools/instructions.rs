//! The corpus-wide instructions document.

use super::guides::load_global_index;
use crate::corpus::{Corpus, INSTRUCTIONS_FILE};
use crate::error::{ContextError, ResourceKind, Result};

pub async fn handle_get_instructions(corpus: &Corpus) -> Result<String> {
    let index = load_global_index(corpus).await?;

    if !index.instructions {
        return Err(ContextError::not_found(
            ResourceKind::File,
            INSTRUCTIONS_FILE,
            "Instructions not available. The corpus may not have been generated with instructions support.",
        ));
    }

    read_instructions(corpus).await
}

pub(crate) async fn read_instructions(corpus: &Corpus) -> Result<String> {
    corpus.read_file(INSTRUCTIONS_FILE).await.ok_or_else(|| {
        ContextError::not_found(
            ResourceKind::File,
            INSTRUCTIONS_FILE,
            "Instructions file not found",
        )
    })
}
