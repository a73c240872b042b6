//! Keyword-driven persona responses.
//!
//! A query is classified into a [`Bucket`] by substring presence of trigger
//! words, tested in priority order. The bucket picks a fixed narrative body;
//! the gesture and opening are drawn uniformly from small fixed sets.

pub mod templates;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use templates::{GESTURES, OPENINGS};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Anxiety,
    Purpose,
    Peace,
    Sorrow,
    Love,
    Fear,
    Default,
}

/// Trigger table in priority order. The first bucket with a matching trigger wins.
pub const BUCKET_TRIGGERS: [(Bucket, &[&str]); 6] = [
    (Bucket::Anxiety, &["anxiety", "worry", "stress", "nervous"]),
    (Bucket::Purpose, &["purpose", "dharma", "calling", "mission"]),
    (Bucket::Peace, &["peace", "calm", "serenity", "tranquility"]),
    (Bucket::Sorrow, &["sad", "grief", "depressed", "sorrow"]),
    (Bucket::Love, &["love", "relationship", "compassion", "connection"]),
    (Bucket::Fear, &["fear", "afraid", "scared", "courage"]),
];

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Anxiety => "anxiety",
            Bucket::Purpose => "purpose",
            Bucket::Peace => "peace",
            Bucket::Sorrow => "sorrow",
            Bucket::Love => "love",
            Bucket::Fear => "fear",
            Bucket::Default => "default",
        }
    }

    pub fn body(self) -> &'static str {
        templates::body_for(self)
    }
}

pub fn classify(query: &str) -> Bucket {
    let lowered = query.to_lowercase();
    BUCKET_TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(Bucket::Default)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonaResponse {
    pub bucket: Bucket,
    pub gesture: String,
    pub opening: String,
    pub body: String,
}

pub fn select_response<R: Rng + ?Sized>(query: &str, rng: &mut R) -> PersonaResponse {
    let bucket = classify(query);
    let gesture = GESTURES[rng.gen_range(0..GESTURES.len())];
    let opening = OPENINGS[rng.gen_range(0..OPENINGS.len())];
    PersonaResponse {
        bucket,
        gesture: gesture.to_string(),
        opening: opening.to_string(),
        body: bucket.body().to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptureReference {
    /// 1 = most similar.
    pub rank: u32,
    pub source: String,
    pub text: String,
    pub truncated: bool,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DivineResponse {
    pub bucket: Bucket,
    pub gesture: String,
    pub opening: String,
    pub body: String,
    pub references: Vec<ScriptureReference>,
}

impl DivineResponse {
    pub fn new(persona: PersonaResponse, references: Vec<ScriptureReference>) -> Self {
        Self {
            bucket: persona.bucket,
            gesture: persona.gesture,
            opening: persona.opening,
            body: persona.body,
            references,
        }
    }

    /// Opening and body joined as one message, without the gesture line.
    pub fn message(&self) -> String {
        format!("{} {}", self.opening, self.body)
    }

    /// Markdown rendering: gesture line, message, then the numbered references.
    pub fn render(&self) -> String {
        let mut out = format!("*{}*\n{}", self.gesture, self.message());
        if !self.references.is_empty() {
            out.push_str("\n\n**Relevant Scriptures**:\n");
            for r in &self.references {
                out.push_str(&format!(
                    "\n{}. {}{}",
                    r.rank,
                    r.text,
                    if r.truncated { "..." } else { "" }
                ));
            }
        }
        out
    }
}
