use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, StreamExt};
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::application::{EmbeddingProvider, IndexState, VectorIndex};
use crate::domain::analysis;
use crate::domain::{ComponentDocument, ComponentSource, DomainError, VECTOR_DIMENSIONS};

/// Files processed concurrently during ingestion. Each file's pipeline is
/// independent; only the assembled document list is shared.
const INGEST_CONCURRENCY: usize = 8;

/// Outcome summary of one ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Documents assembled and submitted to the index.
    pub indexed: usize,
    /// Files that failed to read or analyze; the batch continued.
    pub failed: usize,
    /// Documents the index rejected during the bulk upsert.
    pub upload_failed: usize,
    /// True when the index already held documents and ingestion was
    /// skipped entirely.
    pub skipped: bool,
    /// Document count reported by the index after the run.
    pub total_in_index: u64,
}

/// Streams a folder of component source files through the extraction
/// pipeline and bulk-upserts the assembled documents into the index.
pub struct IngestComponentsUseCase {
    vector_index: Arc<dyn VectorIndex>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
}

impl IngestComponentsUseCase {
    pub fn new(
        vector_index: Arc<dyn VectorIndex>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            vector_index,
            embedding_provider,
        }
    }

    pub async fn execute(
        &self,
        folder: &Path,
        extension: &str,
    ) -> Result<IngestReport, DomainError> {
        if !folder.is_dir() {
            return Err(DomainError::invalid_input(format!(
                "Component folder not found: {}",
                folder.display()
            )));
        }

        let state = self.vector_index.ensure_index().await?;
        if state == IndexState::Existing && self.vector_index.has_documents().await? {
            info!("Index already holds documents, skipping ingestion");
            let total_in_index = self.vector_index.count().await.unwrap_or(0);
            return Ok(IngestReport {
                skipped: true,
                total_in_index,
                ..IngestReport::default()
            });
        }

        let files = collect_component_files(folder, extension);
        if files.is_empty() {
            info!(
                "No .{} files found in {}, nothing to ingest",
                extension,
                folder.display()
            );
            return Ok(IngestReport::default());
        }

        info!("Found {} component files to process", files.len());
        let start_time = Instant::now();

        let progress_bar = ProgressBar::new(files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );

        let outcomes: Vec<Result<ComponentDocument, ()>> = stream::iter(files)
            .map(|path| {
                let provider = self.embedding_provider.clone();
                let progress_bar = progress_bar.clone();
                async move {
                    let result = process_file(&path, provider.as_ref()).await;
                    progress_bar.inc(1);
                    match result {
                        Ok(document) => {
                            debug!("Assembled document for {}", path.display());
                            Ok(document)
                        }
                        Err(e) => {
                            warn!("Failed to process {}: {}", path.display(), e);
                            Err(())
                        }
                    }
                }
            })
            .buffer_unordered(INGEST_CONCURRENCY)
            .collect()
            .await;

        progress_bar.finish_and_clear();

        let mut documents = Vec::new();
        let mut failed = 0usize;
        for outcome in outcomes {
            match outcome {
                Ok(document) => documents.push(document),
                Err(()) => failed += 1,
            }
        }

        let mut upload_failed = 0usize;
        if !documents.is_empty() {
            // One bulk submission for the whole batch, not per document.
            let report = self.vector_index.upsert(&documents).await?;
            upload_failed = report.failures.len();
            for failure in &report.failures {
                warn!("Upload failed for {}: {}", failure.key, failure.message);
            }
        } else {
            warn!("No documents assembled, nothing to upload");
        }

        let total_in_index = self.vector_index.count().await.unwrap_or(0);

        info!(
            "Ingested {} components ({} failed) in {:.2}s, index now holds {}",
            documents.len(),
            failed,
            start_time.elapsed().as_secs_f64(),
            total_in_index
        );

        Ok(IngestReport {
            indexed: documents.len(),
            failed,
            upload_failed,
            skipped: false,
            total_in_index,
        })
    }
}

fn collect_component_files(folder: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkBuilder::new(folder)
        .hidden(true)
        .git_ignore(true)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .map(|entry| entry.into_path())
        .collect();

    // Stable processing order for reproducible runs.
    files.sort();
    files
}

async fn process_file(
    path: &Path,
    provider: &dyn EmbeddingProvider,
) -> Result<ComponentDocument, DomainError> {
    let raw_text = tokio::fs::read_to_string(path).await?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DomainError::invalid_input(format!("Unreadable file name: {}", path.display())))?;
    let name = ComponentSource::name_from_file(file_name).to_string();

    let source = ComponentSource::new(name, raw_text);
    let profile = analysis::profile(&source);
    let embedding_text = analysis::compose_embedding_text(&profile);

    // A failed embedding degrades to a zero vector rather than dropping
    // the document from the batch.
    let vector = match provider.embed(&embedding_text).await {
        Ok(vector) => vector,
        Err(e) => {
            warn!("Embedding failed for {}, using zero vector: {}", source.name, e);
            vec![0.0; VECTOR_DIMENSIONS]
        }
    };

    ComponentDocument::assemble(&source, &profile, embedding_text, vector)
}
