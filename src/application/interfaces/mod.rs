mod embedding_provider;
mod vector_index;

pub use embedding_provider::*;
pub use vector_index::*;
