//! Integer id -> token-sequence vocabulary for contexts and responses.

use std::collections::HashSet;

use crate::error::Result;
use crate::io::dict::Record;
use crate::vocab::token::dense_by_id;

/// Maps contiguous ids `0..len` to token sequences.
///
/// Sequences are deduplicated by their space-joined form, so two text items
/// that tokenize identically share one id. Enumeration order over the
/// deduplicated set assigns the ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextVocab {
    seqs: Vec<Vec<String>>,
}

impl TextVocab {
    /// Build from tokenized text items, deduplicating identical sequences.
    pub fn from_sequences(seqs: impl IntoIterator<Item = Vec<String>>) -> Self {
        let joined: HashSet<String> = seqs.into_iter().map(|toks| toks.join(" ")).collect();
        let seqs = joined
            .into_iter()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect();
        Self { seqs }
    }

    /// Rebuild from persisted dictionary records.
    pub fn from_records(path: &std::path::Path, records: &[Record], kind: &str) -> Result<Self> {
        let values = dense_by_id(path, records, kind)?;
        let seqs = values
            .into_iter()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect();
        Ok(Self { seqs })
    }

    /// Token sequence for an id, if the id is in range.
    pub fn get(&self, id: u32) -> Option<&[String]> {
        self.seqs.get(id as usize).map(Vec::as_slice)
    }

    /// All sequences, indexed by id.
    pub fn sequences(&self) -> &[Vec<String>] {
        &self.seqs
    }

    /// Number of distinct sequences.
    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    /// True when no sequences are stored.
    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    /// `(id, space-joined sequence)` records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.seqs.iter().enumerate().map(|(id, toks)| (id as u32, toks.join(" ")))
    }
}
