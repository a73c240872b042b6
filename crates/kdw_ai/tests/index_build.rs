mod common;

use kdw_ai::embeddings::Embedder;
use kdw_ai::passages::{chunk_corpus, PassageIndex};
use kdw_core::config::ChunkingConfig;
use kdw_core::corpus::{literal_corpus, ScriptureCorpus};
use kdw_core::error::AppError;
use pretty_assertions::assert_eq;

use common::{FailingEmbedder, VocabEmbedder};

struct ShrinkingEmbedder;

impl Embedder for ShrinkingEmbedder {
    fn embed(&self, _model: &str, input: &str) -> Result<Vec<f32>, AppError> {
        // Dimensionality depends on the source label, so the second source disagrees.
        if input.starts_with("[Bhagavad Gita]") {
            Ok(vec![1.0, 0.0, 0.0])
        } else {
            Ok(vec![1.0, 0.0])
        }
    }
}

#[test]
fn builds_index_over_every_literal_chunk() {
    let chunks = chunk_corpus(&literal_corpus(), &ChunkingConfig::default());
    let expected = chunks.len();
    let embedder = VocabEmbedder::new();

    let index = PassageIndex::build(chunks, &embedder, "mock", "2026-10-18T00:00:00Z").expect("build");
    let st = index.status();

    assert!(st.ready);
    assert_eq!(st.model.as_deref(), Some("mock"));
    assert_eq!(st.dims, Some(7));
    assert_eq!(st.chunk_count as usize, expected);
    assert_eq!(st.sources, vec!["Bhagavad Gita", "Upanishads", "Bhagavata Purana"]);
    assert_eq!(st.built_at.as_deref(), Some("2026-10-18T00:00:00Z"));
    assert_eq!(embedder.call_count(), expected);
}

#[test]
fn empty_corpus_cannot_be_indexed() {
    let chunks = chunk_corpus(&ScriptureCorpus::new(), &ChunkingConfig::default());
    let err = PassageIndex::build(chunks, &VocabEmbedder::new(), "mock", "t").expect_err("empty");
    assert_eq!(err.code, "AI_INDEX_BUILD_FAILED");
}

#[test]
fn embedding_backend_failure_is_surfaced() {
    let chunks = chunk_corpus(&literal_corpus(), &ChunkingConfig::default());
    let err = PassageIndex::build(chunks, &FailingEmbedder, "mock", "t").expect_err("backend down");
    assert_eq!(err.code, "AI_EMBEDDINGS_FAILED");
    assert!(err.retryable);
    assert!(err.details.unwrap_or_default().contains("chunk_id="));
}

#[test]
fn dimension_mismatch_fails_the_build() {
    let chunks = chunk_corpus(&literal_corpus(), &ChunkingConfig::default());
    let err = PassageIndex::build(chunks, &ShrinkingEmbedder, "mock", "t").expect_err("mismatch");
    assert_eq!(err.code, "AI_INDEX_BUILD_FAILED");
}
