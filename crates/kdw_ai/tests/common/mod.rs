#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use kdw_ai::embeddings::Embedder;
use kdw_ai::llm::Llm;
use kdw_core::corpus::DatasetFetcher;
use kdw_core::error::AppError;

pub const VOCAB: [&str; 6] = ["soul", "duty", "love", "peace", "truth", "bondage"];

/// Deterministic bag-of-words embedding over a tiny vocabulary plus a bias term.
pub struct VocabEmbedder {
    pub calls: AtomicUsize,
}

impl VocabEmbedder {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl Embedder for VocabEmbedder {
    fn embed(&self, _model: &str, input: &str) -> Result<Vec<f32>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lowered = input.to_lowercase();
        let mut v = VOCAB
            .iter()
            .map(|w| lowered.matches(w).count() as f32)
            .collect::<Vec<_>>();
        v.push(0.1);
        Ok(v)
    }
}

pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _model: &str, _input: &str) -> Result<Vec<f32>, AppError> {
        Err(AppError::new("AI_EMBEDDINGS_FAILED", "Failed to call embeddings endpoint").with_retryable(true))
    }
}

pub struct OfflineFetcher;

impl DatasetFetcher for OfflineFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, AppError> {
        Err(AppError::new("CORPUS_REMOTE_UNREACHABLE", "Failed to reach remote dataset")
            .with_details(url.to_string()))
    }
}

/// Serves canned bodies keyed by a substring of the URL.
pub struct CannedFetcher {
    pub bodies: Vec<(&'static str, String)>,
}

impl DatasetFetcher for CannedFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, AppError> {
        self.bodies
            .iter()
            .find(|(key, _)| url.contains(key))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| AppError::new("CORPUS_REMOTE_STATUS", "Remote dataset request failed"))
    }
}

pub struct ScriptedLlm {
    pub outputs: Vec<Result<String, AppError>>,
    pub next: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(outputs: Vec<Result<String, AppError>>) -> Self {
        Self {
            outputs,
            next: AtomicUsize::new(0),
        }
    }
}

impl Llm for ScriptedLlm {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String, AppError> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.outputs
            .get(i % self.outputs.len().max(1))
            .cloned()
            .unwrap_or_else(|| Err(AppError::new("AI_GENERATION_FAILED", "no scripted output")))
    }
}
