use kdw_core::error::AppError;
use kdw_core::persona::ScriptureReference;
use serde::{Deserialize, Serialize};

use crate::embeddings::Embedder;
use crate::passages::PassageIndex;

pub(crate) mod similarity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassageHit {
    pub chunk_id: String,
    pub source: String,
    pub ordinal: u32,
    pub score: f32,
    /// Text as it was embedded, source label prefix included.
    pub text: String,
}

/// Top-k chunks by cosine similarity to the query, most similar first.
/// Ties keep corpus order. Overlapping chunks are not deduplicated.
pub fn search(
    index: &PassageIndex,
    embedder: &dyn Embedder,
    query: &str,
    top_k: usize,
) -> Result<Vec<PassageHit>, AppError> {
    let q = query.trim();
    if q.is_empty() {
        return Err(AppError::new("AI_RETRIEVAL_FAILED", "Query must not be empty"));
    }
    if index.is_empty() {
        return Err(AppError::new(
            "AI_INDEX_NOT_READY",
            "Index has no passages; rebuild the index",
        ));
    }

    let qv = embedder.embed(index.model(), q)?;
    if qv.len() as u32 != index.dims() {
        return Err(AppError::new(
            "AI_RETRIEVAL_FAILED",
            "Query embedding dims do not match index dims",
        )
        .with_details(format!("index_dims={}; query_dims={}", index.dims(), qv.len())));
    }

    let qnorm = similarity::l2_norm(&qv);
    if qnorm == 0.0 {
        return Err(AppError::new(
            "AI_RETRIEVAL_FAILED",
            "Query embedding norm is zero",
        ));
    }

    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(index.len());
    for (i, entry) in index.entries().iter().enumerate() {
        // Zero vectors still rank, with a score of 0.0.
        let score = if entry.norm == 0.0 {
            0.0
        } else {
            similarity::cosine_similarity(&qv, &entry.vector, qnorm, entry.norm)
        };
        scored.push((i, score));
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(top_k);

    let entries = index.entries();
    Ok(scored
        .into_iter()
        .map(|(i, score)| {
            let chunk = &entries[i].chunk;
            PassageHit {
                chunk_id: chunk.chunk_id.clone(),
                source: chunk.source.clone(),
                ordinal: chunk.ordinal,
                score,
                text: chunk.embedded_text(),
            }
        })
        .collect())
}

/// First `max_chars` chars of `text`, and whether anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (text[..byte_idx].to_string(), true),
        None => (text.to_string(), false),
    }
}

/// Retrieve and shape the references appended beneath a persona response.
pub fn scripture_references(
    index: &PassageIndex,
    embedder: &dyn Embedder,
    query: &str,
    top_k: usize,
    max_chars: usize,
) -> Result<Vec<ScriptureReference>, AppError> {
    let hits = search(index, embedder, query, top_k)?;
    Ok(hits
        .into_iter()
        .enumerate()
        .map(|(i, hit)| {
            let (text, truncated) = truncate_chars(&hit.text, max_chars);
            ScriptureReference {
                rank: (i + 1) as u32,
                source: hit.source,
                text,
                truncated,
                score: hit.score,
            }
        })
        .collect())
}
