use kdw_core::config::ChunkingConfig;
use kdw_core::corpus::ScriptureCorpus;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassageChunk {
    pub chunk_id: String,
    pub source: String,
    /// Position of the chunk across the whole corpus, in corpus order.
    pub ordinal: u32,
    pub text: String,
}

impl PassageChunk {
    fn new(source: &str, ordinal: u32, text: String) -> Self {
        let payload = format!("source={source}\nordinal={ordinal}\ntext={text}");
        let chunk_id = hex::encode(Sha256::digest(payload.as_bytes()));
        Self {
            chunk_id,
            source: source.to_string(),
            ordinal,
            text,
        }
    }

    /// Text handed to the embedder: the chunk prefixed with its source label.
    pub fn embedded_text(&self) -> String {
        format!("[{}]\n{}", self.source, self.text)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Recursive character splitter.
///
/// Splits on the highest-priority separator present in the text, keeping each
/// separator at the start of the piece that follows it. Pieces that still
/// reach the chunk size are split again with the lower-priority separators;
/// the rest are merged back up to the chunk size with a trailing overlap.
/// Lengths are counted in chars.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: ChunkingConfig,
}

impl RecursiveSplitter {
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_with(text, &self.config.separators)
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut separator = separators.last().map(|s| s.as_str()).unwrap_or("");
        let mut next: &[String] = &[];
        for (i, s) in separators.iter().enumerate() {
            if s.is_empty() {
                separator = "";
                break;
            }
            if text.contains(s.as_str()) {
                separator = s.as_str();
                next = &separators[i + 1..];
                break;
            }
        }

        let mut out = Vec::new();
        let mut good: Vec<&str> = Vec::new();
        for piece in split_keeping_separator(text, separator) {
            if char_len(piece) < self.config.chunk_size {
                good.push(piece);
                continue;
            }
            if !good.is_empty() {
                out.extend(self.merge(&good));
                good.clear();
            }
            if next.is_empty() {
                out.push(piece.to_string());
            } else {
                out.extend(self.split_with(piece, next));
            }
        }
        if !good.is_empty() {
            out.extend(self.merge(&good));
        }
        out
    }

    fn merge(&self, pieces: &[&str]) -> Vec<String> {
        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;

        let mut docs = Vec::new();
        let mut window: std::collections::VecDeque<(&str, usize)> = std::collections::VecDeque::new();
        let mut total = 0usize;

        for &piece in pieces {
            let len = char_len(piece);
            if total + len > size && !window.is_empty() {
                push_joined(&mut docs, window.iter().map(|(p, _)| *p));
                while total > overlap || (total + len > size && total > 0) {
                    match window.pop_front() {
                        Some((_, l)) => total -= l,
                        None => break,
                    }
                }
            }
            window.push_back((piece, len));
            total += len;
        }
        push_joined(&mut docs, window.iter().map(|(p, _)| *p));
        docs
    }
}

fn push_joined<'a>(docs: &mut Vec<String>, parts: impl Iterator<Item = &'a str>) {
    let joined = parts.collect::<String>();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        docs.push(trimmed.to_string());
    }
}

fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    let mut out = Vec::new();
    let mut last = 0usize;
    for (idx, _) in text.match_indices(separator) {
        out.push(&text[last..idx]);
        last = idx;
    }
    out.push(&text[last..]);
    out.retain(|p| !p.is_empty());
    out
}

/// Chunk every source in corpus order. Ordinals run across the whole corpus.
pub fn chunk_corpus(corpus: &ScriptureCorpus, config: &ChunkingConfig) -> Vec<PassageChunk> {
    let splitter = RecursiveSplitter::new(config.clone());
    let mut out = Vec::new();
    let mut ordinal: u32 = 0;
    for source in corpus.sources() {
        for text in splitter.split_text(&source.text) {
            out.push(PassageChunk::new(&source.label, ordinal, text));
            ordinal += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdw_core::corpus::literal_corpus;
    use pretty_assertions::assert_eq;

    fn splitter() -> RecursiveSplitter {
        RecursiveSplitter::new(ChunkingConfig::default())
    }

    fn numbered_lines(n: usize, width: usize) -> String {
        (0..n)
            .map(|i| format!("{:<width$}", format!("line {i}"), width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn separator_is_kept_at_start_of_following_piece() {
        assert_eq!(split_keeping_separator("a\n\nb\n\nc", "\n\n"), vec!["a", "\n\nb", "\n\nc"]);
        assert_eq!(split_keeping_separator("\n\nx", "\n\n"), vec!["\n\nx"]);
        assert_eq!(split_keeping_separator("abc", "Q:"), vec!["abc"]);
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        assert_eq!(splitter().split_text("  The soul is eternal.  "), vec!["The soul is eternal."]);
        assert!(splitter().split_text("   \n\n  ").is_empty());
    }

    #[test]
    fn paragraphs_are_preferred_boundaries() {
        let p1 = "a".repeat(600);
        let p2 = "b".repeat(600);
        let chunks = splitter().split_text(&format!("{p1}\n\n{p2}"));
        assert_eq!(chunks, vec![p1, p2]);
    }

    #[test]
    fn long_line_runs_split_with_overlap_and_bounded_size() {
        let text = numbered_lines(30, 100);
        let chunks = splitter().split_text(&text);
        assert!(chunks.len() >= 3);
        for c in &chunks {
            assert!(char_len(c) <= 1000, "chunk too long: {}", char_len(c));
        }
        for pair in chunks.windows(2) {
            let tail = pair[0].lines().last().expect("non-empty chunk").trim();
            assert!(pair[1].starts_with(tail), "no overlap between adjacent chunks");
        }
    }

    #[test]
    fn oversized_paragraph_falls_through_to_line_separator() {
        let big = numbered_lines(15, 100);
        let text = format!("intro paragraph\n\n{big}");
        let chunks = splitter().split_text(&text);
        assert_eq!(chunks[0], "intro paragraph");
        assert!(chunks.len() >= 3);
        assert!(chunks.iter().all(|c| char_len(c) <= 1000));
    }

    #[test]
    fn splitting_is_idempotent() {
        let text = format!("{}\n\nQ: one\nA: two\n\n{}", numbered_lines(25, 90), "Verse: 2.47 ".repeat(40));
        assert_eq!(splitter().split_text(&text), splitter().split_text(&text));

        let corpus = literal_corpus();
        let a = chunk_corpus(&corpus, &ChunkingConfig::default());
        let b = chunk_corpus(&corpus, &ChunkingConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn literal_corpus_chunks_are_labelled_and_ordered() {
        let chunks = chunk_corpus(&literal_corpus(), &ChunkingConfig::default());
        assert!(chunks.len() >= 3);
        assert_eq!(chunks[0].source, "Bhagavad Gita");
        assert!(chunks[0].text.starts_with("CHAPTER 2"));
        assert!(chunks[0].embedded_text().starts_with("[Bhagavad Gita]\nCHAPTER 2"));
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.ordinal as usize, i);
            assert_eq!(c.chunk_id.len(), 64);
            assert!(char_len(&c.text) <= 1000);
        }
        assert_eq!(chunks.last().map(|c| c.source.as_str()), Some("Bhagavata Purana"));
    }
}
