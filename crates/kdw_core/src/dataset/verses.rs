use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verse {
    pub verse_id: String,
    pub text: String,
}

/// Paragraphs at or below this many characters are dropped by the fallback split.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

fn verse_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.\d+)\s+([^\n]+)").expect("static verse regex"))
}

fn verse_id_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+").expect("static verse id regex"))
}

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Drop every line containing Devanagari script and strip the rest.
pub fn remove_devanagari_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.chars().any(is_devanagari))
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract `<chapter>.<verse> <text>` records.
///
/// A verse continues over following non-empty lines until a line that itself
/// starts with a verse number. When nothing matches, falls back to blank-line
/// paragraphs longer than [`MIN_PARAGRAPH_CHARS`], numbered `V1`, `V2`, ...
pub fn extract_verses(text: &str) -> Vec<Verse> {
    let numbered = numbered_verses(text);
    if !numbered.is_empty() {
        return numbered;
    }
    paragraph_verses(text)
}

fn numbered_verses(text: &str) -> Vec<Verse> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(caps) = verse_start().captures_at(text, pos) {
        let (Some(whole), Some(id), Some(first)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        let mut end = whole.end();
        let mut body = first.as_str().to_string();
        // `end` sits on the '\n' that closed the first line (or at EOF).
        while end < text.len() {
            let next_start = end + 1;
            let rest = &text[next_start..];
            let line = rest.split('\n').next().unwrap_or("");
            if line.is_empty() || verse_id_prefix().is_match(line) {
                break;
            }
            body.push('\n');
            body.push_str(line);
            end = next_start + line.len();
        }

        out.push(Verse {
            verse_id: id.as_str().trim().to_string(),
            text: body.trim().replace('\n', " "),
        });
        pos = end;
    }
    out
}

fn paragraph_verses(text: &str) -> Vec<Verse> {
    text.split("\n\n")
        .map(|p| p.trim())
        .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
        .enumerate()
        .map(|(i, p)| Verse {
            verse_id: format!("V{}", i + 1),
            text: p.to_string(),
        })
        .collect()
}
