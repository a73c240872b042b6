//! Session-scoped wisdom service: index once, answer many.

use kdw_core::config::WisdomConfig;
use kdw_core::corpus::{load_all_scriptures, DatasetFetcher, OmittedSource, ScriptureCorpus};
use kdw_core::error::AppError;
use kdw_core::persona::{select_response, DivineResponse};
use rand::Rng;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::embeddings::Embedder;
use crate::passages::{chunk_corpus, PassageIndex, PassageIndexStatus};
use crate::retrieve::scripture_references;

/// Corpus and index for one session. Immutable once built.
#[derive(Debug, Clone)]
pub struct WisdomSession {
    corpus: ScriptureCorpus,
    omitted: Vec<OmittedSource>,
    index: PassageIndex,
}

impl WisdomSession {
    /// Load the corpus (best effort) and build the index (must succeed).
    pub fn build(
        fetcher: &dyn DatasetFetcher,
        embedder: &dyn Embedder,
        config: &WisdomConfig,
    ) -> Result<Self, AppError> {
        let report = load_all_scriptures(fetcher, config.remote_record_limit);
        let chunks = chunk_corpus(&report.corpus, &config.chunking);
        info!(
            sources = report.corpus.len(),
            chunks = chunks.len(),
            "indexing scripture corpus"
        );
        let index = PassageIndex::build(chunks, embedder, &config.embed_model, &now_rfc3339_utc()?)?;
        Ok(Self {
            corpus: report.corpus,
            omitted: report.omitted,
            index,
        })
    }

    pub fn corpus(&self) -> &ScriptureCorpus {
        &self.corpus
    }

    pub fn omitted(&self) -> &[OmittedSource] {
        &self.omitted
    }

    pub fn index(&self) -> &PassageIndex {
        &self.index
    }

    pub fn ask<R: Rng + ?Sized>(
        &self,
        embedder: &dyn Embedder,
        config: &WisdomConfig,
        query: &str,
        rng: &mut R,
    ) -> Result<DivineResponse, AppError> {
        let persona = select_response(query, rng);
        let references = scripture_references(
            &self.index,
            embedder,
            query,
            config.top_k,
            config.reference_max_chars,
        )?;
        Ok(DivineResponse::new(persona, references))
    }
}

/// Owns the backends and the (at most one) live session.
pub struct WisdomService<F, E> {
    fetcher: F,
    embedder: E,
    config: WisdomConfig,
    session: Option<WisdomSession>,
}

impl<F: DatasetFetcher, E: Embedder> WisdomService<F, E> {
    pub fn new(fetcher: F, embedder: E, config: WisdomConfig) -> Self {
        Self {
            fetcher,
            embedder,
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &WisdomConfig {
        &self.config
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn is_ready(&self) -> bool {
        self.session.is_some()
    }

    /// Build the session on first call; later calls return the existing one.
    pub fn ensure_ready(&mut self) -> Result<&WisdomSession, AppError> {
        if self.session.is_none() {
            let session = WisdomSession::build(&self.fetcher, &self.embedder, &self.config)?;
            self.session = Some(session);
        }
        self.session().ok_or_else(not_ready)
    }

    /// Discard the current session and build a fresh one. On failure the
    /// service is left without a session.
    pub fn rebuild(&mut self) -> Result<&WisdomSession, AppError> {
        self.session = None;
        self.ensure_ready()
    }

    pub fn session(&self) -> Option<&WisdomSession> {
        self.session.as_ref()
    }

    pub fn loaded_sources(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|s| s.corpus().labels())
            .unwrap_or_default()
    }

    pub fn omitted_sources(&self) -> Vec<OmittedSource> {
        self.session
            .as_ref()
            .map(|s| s.omitted().to_vec())
            .unwrap_or_default()
    }

    pub fn index_status(&self) -> PassageIndexStatus {
        self.session
            .as_ref()
            .map(|s| s.index().status())
            .unwrap_or_else(PassageIndexStatus::not_ready)
    }

    pub fn ask<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> Result<DivineResponse, AppError> {
        let session = self.session.as_ref().ok_or_else(not_ready)?;
        session.ask(&self.embedder, &self.config, query, rng)
    }
}

fn not_ready() -> AppError {
    AppError::new(
        "AI_INDEX_NOT_READY",
        "Index not ready; load the scriptures before asking",
    )
}

fn now_rfc3339_utc() -> Result<String, AppError> {
    OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| {
        AppError::new("AI_INDEX_BUILD_FAILED", "Failed to format time").with_details(e.to_string())
    })
}
