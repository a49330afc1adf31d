mod ingest_components;
mod search_components;

pub use ingest_components::*;
pub use search_components::*;
