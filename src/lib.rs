pub mod application;
pub mod config;
pub mod connector;
pub mod domain;

pub use application::{
    EmbeddingProvider, IndexState, IngestComponentsUseCase, IngestReport, SearchComponentsUseCase,
    UpsertFailure, UpsertReport, VectorIndex,
};

pub use config::ServiceConfig;

pub use connector::{
    AzureSearchVectorIndex, InMemoryVectorIndex, MockEmbedding, OpenAiEmbedding,
};

pub use domain::{
    sanitize_id, Alignment, Arrangement, Category, ChildrenShape, ComplexityLevel,
    ComponentDocument, ComponentMatch, ComponentProfile, ComponentQuery, ComponentSource,
    DomainError, ExportPattern, HeadingTag, Hook, LayoutMethod, ResponsiveStrategy, Sizing,
    VECTOR_DIMENSIONS,
};
