pub mod dataset_builder;
pub mod embeddings;
pub mod fetch;
pub mod llm;
pub mod ollama;
pub mod passages;
pub mod retrieve;
pub mod session;
