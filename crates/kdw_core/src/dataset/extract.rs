use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// All `*.pdf` files directly inside `dir`, sorted by file name.
pub fn collect_pdf_paths(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        AppError::io("DATASET_INPUT_INVALID", "Failed to read PDF input directory", dir, e)
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AppError::io("DATASET_INPUT_INVALID", "Failed to list PDF input directory", dir, e)
        })?;
        let path = entry.path();
        let is_pdf = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Extract the raw text of every page, concatenated in page order.
pub fn extract_pdf_text(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::io("DATASET_PDF_UNREADABLE", "Failed to read PDF file", path, e))?;
    // pdf_extract can panic on malformed object streams.
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(&bytes)
    }))
    .map_err(|_| {
        AppError::new("DATASET_PDF_INVALID", "Failed to extract text from PDF")
            .with_details(format!("path={}; err=extractor panicked", path.display()))
    })?;
    extracted
        .map_err(|e| AppError::io("DATASET_PDF_INVALID", "Failed to extract text from PDF", path, e))
}
