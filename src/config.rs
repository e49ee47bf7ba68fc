//! Configuration for vocabulary fitting and batch encoding.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VocabError};

/// Which side of a sequence padding or truncation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Pad/truncate at the start of the sequence.
    Pre,
    /// Pad/truncate at the end of the sequence.
    Post,
}

/// Ranking vocabulary configuration.
///
/// Controls which integer representations are produced (token-level,
/// character-level, or both), how batches are padded and truncated, and
/// how synthetic negative candidates are sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingVocabConfig {
    /// Maximum sequence length in tokens.
    pub max_sequence_length: usize,
    /// Maximum token length in characters. Required when `char_embeddings`
    /// is enabled.
    pub max_token_length: Option<usize>,
    /// Padding side for the token axis.
    pub padding: Padding,
    /// Truncation side for the token axis.
    pub truncating: Padding,
    /// Produce token-level integer encodings.
    pub token_embeddings: bool,
    /// Produce character-level integer encodings.
    pub char_embeddings: bool,
    /// Padding side for the character axis.
    pub char_pad: Padding,
    /// Truncation side for the character axis.
    pub char_trunc: Padding,
    /// Size the token axis to the longest sequence in the batch, capped by
    /// `max_sequence_length`.
    pub tok_dynamic_batch: bool,
    /// Size the character axis to the longest token in the batch, capped by
    /// `max_token_length`.
    pub char_dynamic_batch: bool,
    /// Maintain per-context / per-response embedding caches.
    pub update_embeddings: bool,
    /// Number of negative candidates drawn per positive pool.
    pub num_negative_samples: usize,
    /// Seed for the instance-owned RNG. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for RankingVocabConfig {
    fn default() -> Self {
        Self {
            max_sequence_length: 32,
            max_token_length: None,
            padding: Padding::Post,
            truncating: Padding::Post,
            token_embeddings: true,
            char_embeddings: false,
            char_pad: Padding::Post,
            char_trunc: Padding::Post,
            tok_dynamic_batch: false,
            char_dynamic_batch: false,
            update_embeddings: false,
            num_negative_samples: 10,
            seed: None,
        }
    }
}

impl RankingVocabConfig {
    /// Create a config with the given maximum sequence length.
    pub fn new(max_sequence_length: usize) -> Self {
        Self { max_sequence_length, ..Default::default() }
    }

    /// Set the maximum token length in characters.
    pub fn with_max_token_length(mut self, len: usize) -> Self {
        self.max_token_length = Some(len);
        self
    }

    /// Set padding and truncation sides for the token axis.
    pub fn with_token_sides(mut self, padding: Padding, truncating: Padding) -> Self {
        self.padding = padding;
        self.truncating = truncating;
        self
    }

    /// Set padding and truncation sides for the character axis.
    pub fn with_char_sides(mut self, char_pad: Padding, char_trunc: Padding) -> Self {
        self.char_pad = char_pad;
        self.char_trunc = char_trunc;
        self
    }

    /// Toggle token-level encodings.
    pub fn with_token_embeddings(mut self, enabled: bool) -> Self {
        self.token_embeddings = enabled;
        self
    }

    /// Toggle character-level encodings.
    pub fn with_char_embeddings(mut self, enabled: bool) -> Self {
        self.char_embeddings = enabled;
        self
    }

    /// Toggle dynamic batch sizing for the token and character axes.
    pub fn with_dynamic_batch(mut self, tok: bool, chars: bool) -> Self {
        self.tok_dynamic_batch = tok;
        self.char_dynamic_batch = chars;
        self
    }

    /// Toggle embedding cache maintenance.
    pub fn with_update_embeddings(mut self, enabled: bool) -> Self {
        self.update_embeddings = enabled;
        self
    }

    /// Set the number of negative samples drawn per positive pool.
    pub fn with_num_negative_samples(mut self, n: usize) -> Self {
        self.num_negative_samples = n;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<()> {
        if self.max_sequence_length == 0 {
            return Err(VocabError::config("max_sequence_length", "must be at least 1"));
        }
        if !self.token_embeddings && !self.char_embeddings {
            return Err(VocabError::config(
                "token_embeddings",
                "at least one of token_embeddings / char_embeddings must be enabled",
            ));
        }
        if self.char_embeddings && self.max_token_length.is_none() {
            return Err(VocabError::config(
                "max_token_length",
                "required when char_embeddings is enabled",
            ));
        }
        Ok(())
    }
}
