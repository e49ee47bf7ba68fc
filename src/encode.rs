//! Fixed-shape integer encoding of tokenized batches.
//!
//! Keras-style padding semantics: sequences longer than the target length
//! are truncated on the configured side, shorter ones are zero-padded on
//! the configured side. 0 is both the padding value and the unknown id.

use ndarray::{s, Array2, Array3};

use crate::config::Padding;
use crate::vocab::{CharVocab, TokenVocab};

/// One encoded batch, shaped by the `token_embeddings` / `char_embeddings`
/// toggles.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedBatch {
    /// `(batch, msl)` token ids.
    Tokens(Array2<u32>),
    /// `(batch, msl, mtl)` character ids.
    Chars(Array3<u32>),
    /// `(batch, msl, 1 + mtl)`: token id channel first, then character ids.
    TokensAndChars(Array3<u32>),
}

impl EncodedBatch {
    /// The token-level array, when this batch carries one.
    pub fn as_tokens(&self) -> Option<&Array2<u32>> {
        match self {
            Self::Tokens(arr) => Some(arr),
            _ => None,
        }
    }

    /// The 3-D array, when this batch carries one.
    pub fn as_chars(&self) -> Option<&Array3<u32>> {
        match self {
            Self::Chars(arr) | Self::TokensAndChars(arr) => Some(arr),
            Self::Tokens(_) => None,
        }
    }

    /// Number of rows in the batch.
    pub fn batch_len(&self) -> usize {
        match self {
            Self::Tokens(arr) => arr.nrows(),
            Self::Chars(arr) | Self::TokensAndChars(arr) => arr.dim().0,
        }
    }
}

fn truncated<T>(xs: &[T], cap: usize, side: Padding) -> &[T] {
    if xs.len() <= cap {
        xs
    } else {
        match side {
            Padding::Post => &xs[..cap],
            Padding::Pre => &xs[xs.len() - cap..],
        }
    }
}

fn pad_offset(kept: usize, target: usize, side: Padding) -> usize {
    match side {
        Padding::Post => 0,
        Padding::Pre => target - kept,
    }
}

/// Map sequences through the token vocabulary (unknown -> 0) and
/// pad/truncate to `(batch, msl)`.
pub(crate) fn token_ints(
    toks_li: &[Vec<String>],
    vocab: &TokenVocab,
    msl: usize,
    padding: Padding,
    truncating: Padding,
) -> Array2<u32> {
    let mut out = Array2::zeros((toks_li.len(), msl));
    for (i, toks) in toks_li.iter().enumerate() {
        let ids: Vec<u32> = toks.iter().map(|t| vocab.get(t)).collect();
        let kept = truncated(&ids, msl, truncating);
        let offset = pad_offset(kept.len(), msl, padding);
        for (j, &id) in kept.iter().enumerate() {
            out[[i, offset + j]] = id;
        }
    }
    out
}

/// Expand each token to character ids (unknown -> 0) in a
/// `(batch, msl, mtl)` array. The token axis follows `padding`/`truncating`,
/// the character axis follows `char_pad`/`char_trunc`.
pub(crate) fn char_ints(
    toks_li: &[Vec<String>],
    vocab: &CharVocab,
    msl: usize,
    mtl: usize,
    padding: Padding,
    truncating: Padding,
    char_pad: Padding,
    char_trunc: Padding,
) -> Array3<u32> {
    let mut out = Array3::zeros((toks_li.len(), msl, mtl));
    for (i, toks) in toks_li.iter().enumerate() {
        let kept = truncated(toks, msl, truncating);
        let row_offset = pad_offset(kept.len(), msl, padding);
        for (j, tok) in kept.iter().enumerate() {
            let ids: Vec<u32> = tok.chars().map(|c| vocab.get(c)).collect();
            let ids = truncated(&ids, mtl, char_trunc);
            let col_offset = pad_offset(ids.len(), mtl, char_pad);
            for (k, &id) in ids.iter().enumerate() {
                out[[i, row_offset + j, col_offset + k]] = id;
            }
        }
    }
    out
}

/// Concatenate token ids with a character array along the trailing axis,
/// token channel at index 0.
pub(crate) fn concat_channels(tok: &Array2<u32>, chars: &Array3<u32>) -> Array3<u32> {
    let (batch, msl) = tok.dim();
    let mtl = chars.dim().2;
    let mut out = Array3::zeros((batch, msl, 1 + mtl));
    out.slice_mut(s![.., .., 0]).assign(tok);
    out.slice_mut(s![.., .., 1..]).assign(chars);
    out
}
