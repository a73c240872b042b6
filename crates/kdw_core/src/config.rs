//! Literal parameters for indexing, retrieval and dataset generation.
//!
//! Nothing here is read from the environment, from files or from CLI flags.

use serde::{Deserialize, Serialize};

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
/// MiniLM-L6 class sentence embedder.
pub const DEFAULT_EMBED_MODEL: &str = "all-minilm";
/// Vector width produced by [`DEFAULT_EMBED_MODEL`].
pub const DEFAULT_EMBED_DIMS: u32 = 384;
pub const DEFAULT_GEN_MODEL: &str = "zephyr";

pub const CHUNK_SIZE: usize = 1000;
pub const CHUNK_OVERLAP: usize = 200;
pub const CHUNK_SEPARATORS: [&str; 6] = ["\n\n", "\n", "CHAPTER", "BOOK", "Q:", "Verse:"];

pub const RETRIEVAL_TOP_K: usize = 3;
pub const REFERENCE_MAX_CHARS: usize = 350;

/// Upper bound on records taken from each remote Q/A dataset.
pub const REMOTE_RECORD_LIMIT: usize = 300;

/// Dataset builder locations, relative to the working directory.
pub const DATASET_INPUT_DIR: &str = "gita_pdfs";
pub const DATASET_JSONL_PATH: &str = "geetgpt_hf_dataset.jsonl";
pub const DATASET_CSV_PATH: &str = "geetgpt_hf_dataset.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub separators: Vec<String>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            chunk_overlap: CHUNK_OVERLAP,
            separators: CHUNK_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WisdomConfig {
    pub ollama_url: String,
    pub embed_model: String,
    pub gen_model: String,
    pub chunking: ChunkingConfig,
    pub top_k: usize,
    pub reference_max_chars: usize,
    pub remote_record_limit: usize,
}

impl Default for WisdomConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            embed_model: DEFAULT_EMBED_MODEL.to_string(),
            gen_model: DEFAULT_GEN_MODEL.to_string(),
            chunking: ChunkingConfig::default(),
            top_k: RETRIEVAL_TOP_K,
            reference_max_chars: REFERENCE_MAX_CHARS,
            remote_record_limit: REMOTE_RECORD_LIMIT,
        }
    }
}
