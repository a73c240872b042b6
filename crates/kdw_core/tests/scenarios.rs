use kdw_core::corpus::{load_all_scriptures, DatasetFetcher};
use kdw_core::dataset::{verses_from_text, DatasetRecord, FALLBACK_QUESTION, INSTRUCTION};
use kdw_core::error::AppError;
use kdw_core::persona::{select_response, Bucket, DivineResponse};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

struct VyasaOnly;

impl DatasetFetcher for VyasaOnly {
    fn fetch_text(&self, url: &str) -> Result<String, AppError> {
        if url.contains("Vyasa") {
            Ok("question,answer\nWhat is karma?,Action\nWhat is yoga?,Skill in action\n".to_string())
        } else {
            Err(AppError::new("CORPUS_REMOTE_STATUS", "Remote dataset request failed"))
        }
    }
}

#[test]
fn anxious_seeker_gets_the_banyan_tree_teaching() {
    let mut rng = StdRng::seed_from_u64(2024);
    let resp = DivineResponse::new(
        select_response("I feel so much anxiety about my future", &mut rng),
        Vec::new(),
    );
    assert_eq!(resp.bucket, Bucket::Anxiety);
    assert!(resp.render().contains("banyan tree"));
}

#[test]
fn partial_remote_availability_keeps_loaded_sources_in_order() {
    let report = load_all_scriptures(&VyasaOnly, 1);
    assert_eq!(
        report.corpus.labels(),
        vec!["Bhagavad Gita", "Upanishads", "Bhagavata Purana", "Bhagavad Gita Vyasa"]
    );
    assert_eq!(
        report.corpus.get("Bhagavad Gita Vyasa"),
        Some("Q: What is karma?\nA: Action")
    );
    let omitted = report.omitted.iter().map(|o| o.label.as_str()).collect::<Vec<_>>();
    assert_eq!(omitted, vec!["Bhagavad Gita Alpaca", "Bhagavad Gita Vedanta"]);
}

#[test]
fn numbered_verse_becomes_a_training_record() {
    let verses = verses_from_text("2.20 The soul is never born nor dies at any time.");
    let record = DatasetRecord::new(FALLBACK_QUESTION, verses[0].clone());
    assert_eq!(record.verse_id, "2.20");
    assert_eq!(record.instruction, INSTRUCTION);
    assert_eq!(record.output, "The soul is never born nor dies at any time.");
}
