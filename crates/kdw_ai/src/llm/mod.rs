use kdw_core::error::AppError;

/// Text generation backend used to synthesize dataset questions.
pub trait Llm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;
}

pub mod ollama_llm;

pub use ollama_llm::OllamaLlm;
