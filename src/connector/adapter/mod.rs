mod azure_search_vector_index;
mod in_memory_vector_index;
mod mock_embedding;
mod openai_embedding;

pub use azure_search_vector_index::*;
pub use in_memory_vector_index::*;
pub use mock_embedding::*;
pub use openai_embedding::*;
