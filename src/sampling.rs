//! Negative candidate sampling.

use rand::Rng;

use crate::error::{Result, VocabError};
use crate::vocab::TextVocab;

/// Uniform draws allowed per candidate before giving up. Bounds the
/// rejection loop when the response vocabulary is mostly covered by the
/// positive pool.
pub const MAX_SAMPLE_ATTEMPTS: usize = 1000;

/// Draw `n` token sequences uniformly at random (with replacement) from the
/// response vocabulary, rejecting any sequence present in `pos_pool`.
pub(crate) fn sample_negatives<R: Rng>(
    rng: &mut R,
    responses: &TextVocab,
    pos_pool: &[Vec<String>],
    n: usize,
) -> Result<Vec<Vec<String>>> {
    if responses.is_empty() {
        return Err(VocabError::SamplingExhausted { requested: n, drawn: 0 });
    }
    let seqs = responses.sequences();
    let mut candidates = Vec::with_capacity(n);
    for _ in 0..n {
        let mut accepted = None;
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = &seqs[rng.random_range(0..seqs.len())];
            if !pos_pool.contains(candidate) {
                accepted = Some(candidate.clone());
                break;
            }
        }
        match accepted {
            Some(candidate) => candidates.push(candidate),
            None => {
                return Err(VocabError::SamplingExhausted {
                    requested: n,
                    drawn: candidates.len(),
                })
            }
        }
    }
    Ok(candidates)
}
