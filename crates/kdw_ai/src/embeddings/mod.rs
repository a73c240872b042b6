use kdw_core::error::AppError;

/// Sentence embedding backend. Indexing and querying must use the same model.
pub trait Embedder {
    fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, AppError>;
}

pub mod ollama_embed;

pub use ollama_embed::OllamaEmbedder;
