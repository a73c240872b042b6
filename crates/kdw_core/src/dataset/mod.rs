//! Instruction-tuning dataset records built from scripture PDFs.

pub mod extract;
pub mod verses;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use extract::{collect_pdf_paths, extract_pdf_text};
pub use verses::{extract_verses, remove_devanagari_lines, Verse};

pub const INSTRUCTION: &str =
    "Answer the following question based on the teachings of the Bhagavad Gita.";
pub const FALLBACK_QUESTION: &str = "What does this verse mean?";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetRecord {
    pub instruction: String,
    pub input: String,
    pub output: String,
    pub verse_id: String,
}

impl DatasetRecord {
    pub fn new(question: impl Into<String>, verse: Verse) -> Self {
        Self {
            instruction: INSTRUCTION.to_string(),
            input: question.into(),
            output: verse.text,
            verse_id: verse.verse_id,
        }
    }
}

/// Extracted text -> verses, with Devanagari lines removed first.
pub fn verses_from_text(raw: &str) -> Vec<Verse> {
    extract_verses(&remove_devanagari_lines(raw))
}

pub fn write_jsonl(path: &Path, records: &[DatasetRecord]) -> Result<(), AppError> {
    let file = fs::File::create(path)
        .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to create JSONL output", path, e))?;
    let mut w = BufWriter::new(file);
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to encode dataset record")
                .with_details(format!("verse_id={}; err={}", record.verse_id, e))
        })?;
        writeln!(w, "{line}")
            .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to write JSONL output", path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to flush JSONL output", path, e))
}

/// Column order of the CSV export; matches the field order of [`DatasetRecord`].
pub const CSV_HEADER: [&str; 4] = ["instruction", "input", "output", "verse_id"];

/// CSV export with a header row, also when there are no records.
pub fn write_csv(path: &Path, records: &[DatasetRecord]) -> Result<(), AppError> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to create CSV output", path, e))?;
    w.write_record(CSV_HEADER)
        .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to write CSV header", path, e))?;
    for record in records {
        w.serialize(record)
            .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to write CSV row", path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::io("DATASET_WRITE_FAILED", "Failed to flush CSV output", path, e))
}
