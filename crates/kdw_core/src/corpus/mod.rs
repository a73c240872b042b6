//! Scripture corpus assembly: literal excerpts plus best-effort remote Q/A datasets.

pub mod literal;
pub mod remote;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AppError;
use remote::{RemoteDataset, REMOTE_DATASETS};

/// Downloads the raw body of a remote dataset.
pub trait DatasetFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceOrigin {
    Literal,
    Remote { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptureSource {
    pub label: String,
    pub text: String,
    pub origin: SourceOrigin,
}

/// Ordered label -> text mapping. Labels are unique; inserting an existing
/// label replaces its text in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptureCorpus {
    sources: Vec<ScriptureSource>,
}

impl ScriptureCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: ScriptureSource) {
        match self.sources.iter_mut().find(|s| s.label == source.label) {
            Some(existing) => *existing = source,
            None => self.sources.push(source),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.text.as_str())
    }

    pub fn labels(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.label.clone()).collect()
    }

    pub fn sources(&self) -> &[ScriptureSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OmittedSource {
    pub label: String,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusLoadReport {
    pub corpus: ScriptureCorpus,
    pub omitted: Vec<OmittedSource>,
}

pub fn literal_corpus() -> ScriptureCorpus {
    let mut corpus = ScriptureCorpus::new();
    for (label, text) in literal::literal_scriptures() {
        corpus.insert(ScriptureSource {
            label: label.to_string(),
            text: text.to_string(),
            origin: SourceOrigin::Literal,
        });
    }
    corpus
}

pub fn fetch_remote_source(
    fetcher: &dyn DatasetFetcher,
    dataset: &RemoteDataset,
    limit: usize,
) -> Result<ScriptureSource, AppError> {
    let body = fetcher.fetch_text(dataset.url)?;
    let text = remote::records_to_text(dataset.format, &body, limit)?;
    Ok(ScriptureSource {
        label: dataset.label.to_string(),
        text,
        origin: SourceOrigin::Remote {
            url: dataset.url.to_string(),
        },
    })
}

/// Build the session corpus. Never fails: a remote dataset that cannot be
/// fetched or parsed is logged and left out.
pub fn load_all_scriptures(fetcher: &dyn DatasetFetcher, limit: usize) -> CorpusLoadReport {
    let mut corpus = literal_corpus();
    let mut omitted = Vec::new();

    for dataset in REMOTE_DATASETS.iter() {
        match fetch_remote_source(fetcher, dataset, limit) {
            Ok(source) => {
                info!(label = dataset.label, chars = source.text.len(), "loaded remote dataset");
                corpus.insert(source);
            }
            Err(e) => {
                warn!(label = dataset.label, error = %e, "remote dataset omitted");
                omitted.push(OmittedSource {
                    label: dataset.label.to_string(),
                    url: dataset.url.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(sources = corpus.len(), omitted = omitted.len(), "scripture corpus assembled");
    CorpusLoadReport { corpus, omitted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct OfflineFetcher;

    impl DatasetFetcher for OfflineFetcher {
        fn fetch_text(&self, url: &str) -> Result<String, AppError> {
            Err(AppError::new("CORPUS_REMOTE_UNREACHABLE", "offline").with_details(url.to_string()))
        }
    }

    #[test]
    fn offline_load_keeps_exactly_the_literal_scriptures() {
        let report = load_all_scriptures(&OfflineFetcher, 300);
        assert_eq!(
            report.corpus.labels(),
            vec!["Bhagavad Gita", "Upanishads", "Bhagavata Purana"]
        );
        assert_eq!(report.omitted.len(), 3);
        assert!(report.omitted.iter().all(|o| o.reason.contains("CORPUS_REMOTE_UNREACHABLE")));
    }

    #[test]
    fn insert_replaces_existing_label_in_place() {
        let mut corpus = literal_corpus();
        corpus.insert(ScriptureSource {
            label: "Upanishads".to_string(),
            text: "replaced".to_string(),
            origin: SourceOrigin::Literal,
        });
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.labels()[1], "Upanishads");
        assert_eq!(corpus.get("Upanishads"), Some("replaced"));
    }
}
