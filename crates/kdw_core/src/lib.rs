pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod persona;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("AI_INDEX_BUILD_FAILED", "index failed")
            .with_details("chunk_id=abc")
            .with_retryable(true);
        assert_eq!(err.code, "AI_INDEX_BUILD_FAILED");
        assert_eq!(err.message, "index failed");
        assert!(err.retryable);
        assert_eq!(err.to_string(), "[AI_INDEX_BUILD_FAILED] index failed (chunk_id=abc)");
    }

    #[test]
    fn default_config_matches_literal_parameters() {
        let cfg = super::config::WisdomConfig::default();
        assert_eq!(cfg.chunking.chunk_size, 1000);
        assert_eq!(cfg.chunking.chunk_overlap, 200);
        assert_eq!(cfg.chunking.separators[0], "\n\n");
        assert_eq!(cfg.top_k, 3);
        assert_eq!(cfg.reference_max_chars, 350);
        assert!(cfg.ollama_url.starts_with("http://127.0.0.1:"));
    }
}
