//! Bidirectional character <-> integer mapping.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Result, VocabError};
use crate::io::dict::Record;

/// Bidirectional mapping between characters and integer ids.
///
/// Ids start at 1; no placeholder is stored — unknown characters encode to
/// 0 at encode time, which is also the padding value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharVocab {
    char2int: HashMap<char, u32>,
    int2char: BTreeMap<u32, char>,
}

impl CharVocab {
    /// Build the character inventory from fitted tokens.
    pub fn from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Self {
        let chars: HashSet<char> = tokens.flat_map(str::chars).collect();
        let int2char: BTreeMap<u32, char> =
            chars.into_iter().enumerate().map(|(i, c)| (i as u32 + 1, c)).collect();
        let char2int = int2char.iter().map(|(&id, &c)| (c, id)).collect();
        Self { char2int, int2char }
    }

    /// Rebuild from persisted dictionary records; each value must be a
    /// single character and ids must form the contiguous range `1..=len`.
    pub fn from_records(path: &std::path::Path, records: &[Record]) -> Result<Self> {
        let mut int2char = BTreeMap::new();
        for rec in records {
            let mut chars = rec.value.chars();
            let (c, rest) = (chars.next(), chars.next());
            let c = match (c, rest) {
                (Some(c), None) => c,
                _ => {
                    return Err(VocabError::parse(
                        path,
                        rec.line,
                        format!("expected a single character, got {:?}", rec.value),
                    ))
                }
            };
            if rec.id == 0 || rec.id as usize > records.len() {
                return Err(VocabError::parse(
                    path,
                    rec.line,
                    format!("character id {} out of range for {} records", rec.id, records.len()),
                ));
            }
            if int2char.insert(rec.id, c).is_some() {
                return Err(VocabError::parse(
                    path,
                    rec.line,
                    format!("duplicate character id {}", rec.id),
                ));
            }
        }
        let char2int = int2char.iter().map(|(&id, &c)| (c, id)).collect();
        Ok(Self { char2int, int2char })
    }

    /// Id for a character; unknown characters map to 0.
    pub fn get(&self, c: char) -> u32 {
        self.char2int.get(&c).copied().unwrap_or(0)
    }

    /// Number of known characters.
    pub fn len(&self) -> usize {
        self.int2char.len()
    }

    /// True when no characters are known.
    pub fn is_empty(&self) -> bool {
        self.int2char.is_empty()
    }

    /// `(id, value)` records in ascending id order, for persistence.
    pub fn records(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.int2char.iter().map(|(&id, &c)| (id, c.to_string()))
    }
}
