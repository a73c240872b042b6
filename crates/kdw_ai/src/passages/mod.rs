pub mod chunking;
pub mod index;

pub use chunking::{chunk_corpus, PassageChunk, RecursiveSplitter};
pub use index::{PassageIndex, PassageIndexStatus};
