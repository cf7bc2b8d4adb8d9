pub mod component_docs;
pub mod guides;
pub mod instructions;
pub mod resolve_uri;
pub mod search;

pub use component_docs::*;
pub use guides::*;
pub use instructions::*;
pub use resolve_uri::*;
pub use search::*;
