use kdw_core::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::chunking::PassageChunk;
use crate::embeddings::Embedder;
use crate::retrieve::similarity::l2_norm;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageIndexStatus {
    pub ready: bool,
    pub model: Option<String>,
    pub dims: Option<u32>,
    pub chunk_count: u32,
    pub sources: Vec<String>,
    pub built_at: Option<String>,
}

impl PassageIndexStatus {
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            model: None,
            dims: None,
            chunk_count: 0,
            sources: Vec::new(),
            built_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IndexedPassage {
    pub chunk: PassageChunk,
    pub vector: Vec<f32>,
    pub norm: f32,
}

/// Immutable in-memory vector index over corpus chunks.
///
/// Built once per session; there is no insert or delete path. A new corpus
/// means a new index.
#[derive(Debug, Clone)]
pub struct PassageIndex {
    model: String,
    dims: u32,
    built_at: String,
    entries: Vec<IndexedPassage>,
}

impl PassageIndex {
    pub fn build(
        chunks: Vec<PassageChunk>,
        embedder: &dyn Embedder,
        model: &str,
        built_at: &str,
    ) -> Result<Self, AppError> {
        if chunks.is_empty() {
            return Err(AppError::new(
                "AI_INDEX_BUILD_FAILED",
                "No chunks available; the corpus produced no passages",
            ));
        }

        let mut dims: Option<u32> = None;
        let mut entries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let vector = embedder.embed(model, &chunk.embedded_text()).map_err(|e| {
                AppError::new("AI_EMBEDDINGS_FAILED", "Failed to compute embeddings")
                    .with_details(format!("chunk_id={}; err={}", chunk.chunk_id, e))
                    .with_retryable(e.retryable)
            })?;

            let this_dims = vector.len() as u32;
            match dims {
                Some(d) if d != this_dims => {
                    return Err(AppError::new(
                        "AI_INDEX_BUILD_FAILED",
                        "Embedding dimension mismatch across chunks",
                    )
                    .with_details(format!(
                        "expected={}; got={}; chunk_id={}",
                        d, this_dims, chunk.chunk_id
                    )));
                }
                Some(_) => {}
                None => dims = Some(this_dims),
            }

            debug!(chunk_id = %chunk.chunk_id, source = %chunk.source, "embedded chunk");
            let norm = l2_norm(&vector);
            entries.push(IndexedPassage {
                chunk,
                vector,
                norm,
            });
        }

        let dims = dims.unwrap_or(0);
        info!(model, dims, chunks = entries.len(), "passage index built");
        Ok(Self {
            model: model.to_string(),
            dims,
            built_at: built_at.to_string(),
            entries,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn dims(&self) -> u32 {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &PassageChunk> {
        self.entries.iter().map(|e| &e.chunk)
    }

    pub(crate) fn entries(&self) -> &[IndexedPassage] {
        &self.entries
    }

    pub fn status(&self) -> PassageIndexStatus {
        let mut sources: Vec<String> = Vec::new();
        for e in &self.entries {
            if !sources.contains(&e.chunk.source) {
                sources.push(e.chunk.source.clone());
            }
        }
        PassageIndexStatus {
            ready: true,
            model: Some(self.model.clone()),
            dims: Some(self.dims),
            chunk_count: self.entries.len() as u32,
            sources,
            built_at: Some(self.built_at.clone()),
        }
    }
}
