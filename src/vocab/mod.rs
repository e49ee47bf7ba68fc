//! Vocabulary tables built once during `fit` (or read back from disk) and
//! immutable afterwards, except the embedding caches.

mod chars;
mod embeddings;
mod text;
mod token;

pub use chars::CharVocab;
pub use embeddings::EmbeddingCache;
pub use text::TextVocab;
pub use token::{TokenVocab, UNK_TOKEN};
