//! Vocabulary building and integer encoding for neural response ranking.
//!
//! Builds lookup vocabularies (token <-> id, char <-> id, context/response
//! text -> token sequence) from training data, converts tokenized batches
//! into fixed-shape integer arrays for embedding lookup, draws negative
//! response candidates, and persists everything as flat files
//! (tab-delimited dictionaries plus `.npy` embedding caches).
//!
//! The tokenizer is injected; wrap any `Fn(&str) -> Vec<String>` in
//! [`FnTokenizer`] or implement [`Tokenizer`] directly.
//!
//! # Example
//!
//! ```
//! use vocabulario::{FitData, RankingVocab, RankingVocabConfig, WhitespaceTokenizer};
//!
//! fn example() -> vocabulario::Result<()> {
//!     let context = vec!["hi there".to_string()];
//!     let response = vec!["ok".to_string()];
//!     let pos_pool = vec![vec!["fine".to_string()]];
//!
//!     let config = RankingVocabConfig::new(16).with_seed(42);
//!     let mut vocab = RankingVocab::fit(
//!         config,
//!         WhitespaceTokenizer,
//!         FitData {
//!             context: &context,
//!             response: &response,
//!             pos_pool: &pos_pool,
//!             neg_pool: None,
//!         },
//!     )?;
//!
//!     let batch = vocab.encode(&context, &response, &pos_pool, None)?;
//!     assert_eq!(batch.context.batch_len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod io;
pub mod ranking;
pub mod sampling;
pub mod tokenizer;
pub mod vocab;

pub use config::{Padding, RankingVocabConfig};
pub use encode::EncodedBatch;
pub use error::{Result, VocabError};
pub use ranking::{FitData, RankingBatch, RankingVocab};
pub use tokenizer::{FnTokenizer, Tokenizer, WhitespaceTokenizer};
pub use vocab::{CharVocab, EmbeddingCache, TextVocab, TokenVocab, UNK_TOKEN};
