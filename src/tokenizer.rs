//! Tokenizer seam.
//!
//! The vocabulary never tokenizes text itself; callers inject anything that
//! can map a batch of raw texts to token sequences. [`FnTokenizer`] adapts a
//! plain closure, and [`WhitespaceTokenizer`] covers tests and simple
//! pipelines.

/// Maps raw texts to token sequences.
pub trait Tokenizer {
    /// Tokenize a batch of texts, one token sequence per input text.
    fn tokenize_batch(&self, texts: &[String]) -> Vec<Vec<String>>;
}

/// Adapts a `Fn(&str) -> Vec<String>` closure into a [`Tokenizer`].
#[derive(Debug, Clone, Copy)]
pub struct FnTokenizer<F>(pub F);

impl<F> Tokenizer for FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize_batch(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.iter().map(|t| (self.0)(t)).collect()
    }
}

/// Splits on unicode whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize_batch(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.iter().map(|t| t.split_whitespace().map(str::to_string).collect()).collect()
    }
}
