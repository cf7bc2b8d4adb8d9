//! Text rendering: assembled component documents and CLI-facing rewording.

mod assembler;
mod cli_text;

pub use assembler::{DocSources, assemble_component_docs};
pub use cli_text::rewrite_for_cli;
