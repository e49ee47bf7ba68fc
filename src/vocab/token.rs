//! Bidirectional token <-> integer mapping.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, VocabError};
use crate::io::dict::Record;

/// Placeholder stored at id 0; every out-of-vocabulary token encodes to 0.
pub const UNK_TOKEN: &str = "<UNK>";

/// Bidirectional mapping between tokens and integer ids.
///
/// Id 0 is reserved for [`UNK_TOKEN`]; the remaining ids are assigned by
/// iteration over the unique-token set, so they are not stable across
/// separate `fit` runs. Persist and reload the vocabulary when id stability
/// matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVocab {
    tok2int: HashMap<String, u32>,
    int2tok: Vec<String>,
}

impl TokenVocab {
    /// Build a vocabulary from a set of unique tokens.
    pub fn from_tokens(tokens: HashSet<String>) -> Self {
        let mut int2tok = Vec::with_capacity(tokens.len() + 1);
        int2tok.push(UNK_TOKEN.to_string());
        int2tok.extend(tokens);
        let tok2int =
            int2tok.iter().enumerate().map(|(id, tok)| (tok.clone(), id as u32)).collect();
        Self { tok2int, int2tok }
    }

    /// Rebuild a vocabulary from persisted dictionary records.
    ///
    /// Ids must form the contiguous range `0..len`; duplicates and
    /// out-of-range ids are parse errors.
    pub fn from_records(path: &std::path::Path, records: &[Record]) -> Result<Self> {
        let int2tok = dense_by_id(path, records, "token")?;
        let tok2int =
            int2tok.iter().enumerate().map(|(id, tok)| (tok.clone(), id as u32)).collect();
        Ok(Self { tok2int, int2tok })
    }

    /// Id for a token; unknown tokens map to 0.
    pub fn get(&self, token: &str) -> u32 {
        self.tok2int.get(token).copied().unwrap_or(0)
    }

    /// Token for an id, if the id is in range.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.int2tok.get(id as usize).map(String::as_str)
    }

    /// Number of entries, including the unknown placeholder.
    pub fn len(&self) -> usize {
        self.int2tok.len()
    }

    /// True when only the placeholder would remain. Never true in practice:
    /// the placeholder is always present.
    pub fn is_empty(&self) -> bool {
        self.int2tok.is_empty()
    }

    /// Tokens with id >= 1 (everything except the unknown placeholder).
    pub fn known_tokens(&self) -> impl Iterator<Item = &str> {
        self.int2tok.iter().skip(1).map(String::as_str)
    }

    /// `(id, value)` records in ascending id order, for persistence.
    pub fn records(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.int2tok.iter().enumerate().map(|(id, tok)| (id as u32, tok.clone()))
    }
}

/// Arrange records into a dense `Vec` indexed by id.
pub(crate) fn dense_by_id(
    path: &std::path::Path,
    records: &[Record],
    kind: &str,
) -> Result<Vec<String>> {
    let mut slots: Vec<Option<String>> = vec![None; records.len()];
    for rec in records {
        let idx = rec.id as usize;
        if idx >= slots.len() {
            return Err(VocabError::parse(
                path,
                rec.line,
                format!("{kind} id {} out of range for {} records", rec.id, records.len()),
            ));
        }
        if slots[idx].is_some() {
            return Err(VocabError::parse(path, rec.line, format!("duplicate {kind} id {}", rec.id)));
        }
        slots[idx] = Some(rec.value.clone());
    }
    // No duplicates and every id < len, so every slot is filled.
    Ok(slots.into_iter().flatten().collect())
}
