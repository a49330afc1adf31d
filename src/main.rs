use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use uisearch::{
    AzureSearchVectorIndex, Category, ComplexityLevel, ComponentQuery, EmbeddingProvider,
    InMemoryVectorIndex, IngestComponentsUseCase, MockEmbedding, OpenAiEmbedding,
    SearchComponentsUseCase, ServiceConfig, VectorIndex,
};

#[derive(Parser)]
#[command(name = "uisearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use deterministic in-process embeddings instead of the remote API
    #[arg(long, global = true)]
    mock_embeddings: bool,

    /// Use an in-process index instead of the remote search service
    #[arg(long, global = true)]
    memory_index: bool,

    /// Vector search service endpoint (overrides UISEARCH_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Index name (overrides UISEARCH_INDEX)
    #[arg(long, global = true)]
    index_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a folder of component source files into the index
    Index {
        folder: String,

        /// File extension of component sources
        #[arg(long, default_value = "jsx")]
        ext: String,
    },

    /// Search indexed components by free text
    Search {
        query: String,

        #[arg(long, default_value = "5")]
        num: usize,

        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Exact image count filter
        #[arg(long)]
        images: Option<u32>,

        #[arg(long, value_enum)]
        complexity: Option<ComplexityLevel>,
    },

    /// Recommend components for a content description
    Recommend {
        description: String,

        /// Number of images the content will carry
        #[arg(long)]
        images: Option<u32>,

        /// Preferred layout keyword (e.g. grid)
        #[arg(long)]
        layout: Option<String>,
    },

    /// Show index statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ServiceConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config.search_endpoint = endpoint;
    }
    if let Some(index_name) = cli.index_name {
        config.index_name = index_name;
    }

    let embedding_provider: Arc<dyn EmbeddingProvider> = if cli.mock_embeddings {
        info!("Using mock embedding provider");
        Arc::new(MockEmbedding::new())
    } else {
        Arc::new(OpenAiEmbedding::from_config(&config))
    };

    let vector_index: Arc<dyn VectorIndex> = if cli.memory_index {
        info!("Using in-memory vector index");
        Arc::new(InMemoryVectorIndex::new())
    } else {
        info!(
            "Using vector index {} at {}",
            config.index_name, config.search_endpoint
        );
        Arc::new(AzureSearchVectorIndex::from_config(&config))
    };

    match cli.command {
        Commands::Index { folder, ext } => {
            let use_case = IngestComponentsUseCase::new(vector_index, embedding_provider);
            let report = use_case.execute(&PathBuf::from(folder), &ext).await?;

            if report.skipped {
                println!(
                    "Index already holds {} documents, ingestion skipped.",
                    report.total_in_index
                );
            } else {
                println!(
                    "Ingested {} components ({} failed, {} rejected by the index).",
                    report.indexed, report.failed, report.upload_failed
                );
                println!("Index now holds {} documents.", report.total_in_index);
            }
        }

        Commands::Search {
            query,
            num,
            category,
            images,
            complexity,
        } => {
            let use_case = SearchComponentsUseCase::new(vector_index, embedding_provider);

            let mut component_query = ComponentQuery::new(&query).with_top_k(num);
            if let Some(category) = category {
                component_query = component_query.with_category(category);
            }
            if let Some(images) = images {
                component_query = component_query.with_image_count(images);
            }
            if let Some(complexity) = complexity {
                component_query = component_query.with_complexity(complexity);
            }

            let results = use_case.execute(component_query).await?;
            print_matches(&results);
        }

        Commands::Recommend {
            description,
            images,
            layout,
        } => {
            let use_case = SearchComponentsUseCase::new(vector_index, embedding_provider);
            let results = use_case
                .recommend(&description, images, layout.as_deref())
                .await?;
            print_matches(&results);
        }

        Commands::Stats => {
            let total = vector_index.count().await?;
            println!("Index:     {}", config.index_name);
            println!("Endpoint:  {}", config.search_endpoint);
            println!("Documents: {}", total);
        }
    }

    Ok(())
}

fn print_matches(results: &[uisearch::ComponentMatch]) {
    if results.is_empty() {
        println!("No results found.");
        return;
    }

    println!("Found {} results:\n", results.len());
    for (i, result) in results.iter().enumerate() {
        println!("{}. {}", i + 1, result.display_line());
        println!(
            "   category: {}, layout: {}, images: {} ({}), complexity: {}",
            result.category,
            result.layout_method,
            result.image_count,
            result.image_arrangement,
            result.complexity
        );
        println!("   keywords: {}", result.keywords);
        println!();
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn search_accepts_category_filter() {
        let cli = Cli::try_parse_from([
            "uisearch",
            "search",
            "magazine layout",
            "--category",
            "image_focused",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let cli = Cli::try_parse_from(["uisearch", "search", "x", "--category", "bogus"]);
        assert!(cli.is_err());
    }
}
