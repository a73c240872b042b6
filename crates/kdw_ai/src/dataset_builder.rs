//! PDF folder -> question/verse training records.

use std::path::{Path, PathBuf};

use kdw_core::dataset::{
    collect_pdf_paths, extract_pdf_text, verses_from_text, write_csv, write_jsonl, DatasetRecord,
    FALLBACK_QUESTION,
};
use kdw_core::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm::Llm;

pub fn question_prompt(verse_text: &str) -> String {
    format!(
        "You're a spiritual seeker. Read this verse:\n\n\"{verse_text}\"\n\nWhat thoughtful question might arise in your mind after reading it?"
    )
}

/// Ask the model for a question about `verse_text`. Never fails: any
/// generation error or blank output yields [`FALLBACK_QUESTION`].
pub fn generate_question(llm: &dyn Llm, model: &str, verse_text: &str) -> String {
    match llm.generate(model, &question_prompt(verse_text)) {
        Ok(out) => match out.lines().rev().map(str::trim).find(|l| !l.is_empty()) {
            Some(q) => q.to_string(),
            None => {
                warn!("question generation returned blank output; using fallback");
                FALLBACK_QUESTION.to_string()
            }
        },
        Err(e) => {
            warn!(error = %e, "question generation failed; using fallback");
            FALLBACK_QUESTION.to_string()
        }
    }
}

/// One record per extracted verse of an already-extracted document text.
pub fn records_for_text(raw_text: &str, llm: &dyn Llm, model: &str) -> Vec<DatasetRecord> {
    verses_from_text(raw_text)
        .into_iter()
        .map(|verse| {
            info!(verse_id = %verse.verse_id, "generating question");
            let question = generate_question(llm, model, &verse.text);
            DatasetRecord::new(question, verse)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetBuildSummary {
    pub files_processed: usize,
    pub records: usize,
    pub jsonl_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

/// Process every PDF in `input_dir` sequentially and write the outputs once
/// at the end. Unreadable PDFs abort the run.
pub fn build_dataset(
    input_dir: &Path,
    llm: &dyn Llm,
    model: &str,
    jsonl_path: &Path,
    csv_path: Option<&Path>,
) -> Result<DatasetBuildSummary, AppError> {
    let pdfs = collect_pdf_paths(input_dir)?;
    let mut records = Vec::new();
    for path in pdfs.iter() {
        info!(file = %path.display(), "processing pdf");
        let raw = extract_pdf_text(path)?;
        records.extend(records_for_text(&raw, llm, model));
    }

    write_jsonl(jsonl_path, &records)?;
    info!(path = %jsonl_path.display(), records = records.len(), "jsonl saved");
    if let Some(csv_path) = csv_path {
        write_csv(csv_path, &records)?;
        info!(path = %csv_path.display(), "csv saved");
    }

    Ok(DatasetBuildSummary {
        files_processed: pdfs.len(),
        records: records.len(),
        jsonl_path: jsonl_path.to_path_buf(),
        csv_path: csv_path.map(Path::to_path_buf),
    })
}
