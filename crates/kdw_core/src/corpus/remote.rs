use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemoteFormat {
    /// CSV with `question`,`answer` columns.
    QaCsv,
    /// JSON array of `{instruction, output}` objects.
    AlpacaJson,
    /// CSV with `Verse`,`Question`,`Answer` columns.
    VerseQaCsv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteDataset {
    pub label: &'static str,
    pub url: &'static str,
    pub format: RemoteFormat,
}

pub const VYASA: RemoteDataset = RemoteDataset {
    label: "Bhagavad Gita Vyasa",
    url: "https://huggingface.co/datasets/sweatSmile/Bhagavad-Gita-Vyasa-Edwin-Arnold/resolve/main/bhagavad_gita_qa.csv",
    format: RemoteFormat::QaCsv,
};

pub const ALPACA: RemoteDataset = RemoteDataset {
    label: "Bhagavad Gita Alpaca",
    url: "https://huggingface.co/datasets/SatyaSanatan/shrimad-bhagavad-gita-dataset-alpaca/resolve/main/data.json",
    format: RemoteFormat::AlpacaJson,
};

pub const VEDANTA: RemoteDataset = RemoteDataset {
    label: "Bhagavad Gita Vedanta",
    url: "https://raw.githubusercontent.com/VedantaHub/Datasets/main/Bhagwad_Gita_Verses_English_Questions.csv",
    format: RemoteFormat::VerseQaCsv,
};

pub const REMOTE_DATASETS: [RemoteDataset; 3] = [VYASA, ALPACA, VEDANTA];

/// Turn a downloaded body into one text blob of at most `limit` Q/A records
/// separated by blank lines.
pub fn records_to_text(format: RemoteFormat, body: &str, limit: usize) -> Result<String, AppError> {
    let records = match format {
        RemoteFormat::QaCsv => csv_records(body, &["question", "answer"], |v| {
            format!("Q: {}\nA: {}", v[0], v[1])
        })?,
        RemoteFormat::VerseQaCsv => csv_records(body, &["Verse", "Question", "Answer"], |v| {
            format!("Verse: {}\nQ: {}\nA: {}", v[0], v[1], v[2])
        })?,
        RemoteFormat::AlpacaJson => alpaca_records(body, limit)?,
    };

    let kept = records.into_iter().take(limit).collect::<Vec<_>>();
    if kept.is_empty() {
        return Err(AppError::new(
            "CORPUS_REMOTE_EMPTY",
            "Remote dataset contained no records",
        ));
    }
    Ok(kept.join("\n\n"))
}

fn csv_records(
    body: &str,
    columns: &[&str],
    render: impl Fn(&[&str]) -> String,
) -> Result<Vec<String>, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| {
            AppError::new("CORPUS_REMOTE_SCHEMA", "Failed to read CSV headers")
                .with_details(e.to_string())
        })?
        .clone();

    let mut positions = Vec::with_capacity(columns.len());
    for col in columns {
        let idx = headers.iter().position(|h| h.trim() == *col).ok_or_else(|| {
            AppError::new("CORPUS_REMOTE_SCHEMA", "CSV is missing a required column")
                .with_details(format!("column={col}"))
        })?;
        positions.push(idx);
    }

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| {
            AppError::new("CORPUS_REMOTE_SCHEMA", "Failed to parse CSV row")
                .with_details(format!("row={}; err={}", i + 1, e))
        })?;
        let values = positions
            .iter()
            .map(|&idx| row.get(idx).unwrap_or("").trim())
            .collect::<Vec<_>>();
        out.push(render(&values));
    }
    Ok(out)
}

fn alpaca_records(body: &str, limit: usize) -> Result<Vec<String>, AppError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|e| {
        AppError::new("CORPUS_REMOTE_SCHEMA", "Expected a JSON array of records")
            .with_details(e.to_string())
    })?;

    let mut out = Vec::new();
    for (i, item) in items.iter().take(limit).enumerate() {
        let instruction = json_field(item, "instruction", i)?;
        let output = json_field(item, "output", i)?;
        out.push(format!("Q: {instruction}\nA: {output}"));
    }
    Ok(out)
}

fn json_field(item: &serde_json::Value, key: &str, index: usize) -> Result<String, AppError> {
    match item.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(
            AppError::new("CORPUS_REMOTE_SCHEMA", "JSON record is missing a required field")
                .with_details(format!("index={index}; field={key}")),
        ),
    }
}
