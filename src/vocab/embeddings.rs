//! Per-id embedding cache, populated externally after `fit`.

use ndarray::{Array1, Array2};

use crate::error::{Result, VocabError};

/// Dense-vector cache indexed by text-vocabulary id.
///
/// Created with one unset slot per id. Slots are filled by the embedding
/// producer through [`EmbeddingCache::set`]; stacking (and therefore saving)
/// requires every slot to be set and all rows to share one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingCache {
    kind: &'static str,
    slots: Vec<Option<Array1<f32>>>,
}

impl EmbeddingCache {
    /// Create a cache with `len` unset slots.
    pub fn new(kind: &'static str, len: usize) -> Self {
        Self { kind, slots: vec![None; len] }
    }

    /// Rebuild a fully-populated cache from a stacked array, row order = id.
    pub fn from_array(kind: &'static str, array: Array2<f32>) -> Self {
        let slots = array.rows().into_iter().map(|row| Some(row.to_owned())).collect();
        Self { kind, slots }
    }

    /// Set the embedding for an id.
    pub fn set(&mut self, id: u32, embedding: Array1<f32>) -> Result<()> {
        let kind = self.kind;
        match self.slots.get_mut(id as usize) {
            Some(slot) => {
                *slot = Some(embedding);
                Ok(())
            }
            None => Err(VocabError::MissingEntry { kind, id }),
        }
    }

    /// Embedding for an id, if set.
    pub fn get(&self, id: u32) -> Option<&Array1<f32>> {
        self.slots.get(id as usize).and_then(Option::as_ref)
    }

    /// Number of slots (set or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the cache has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stack all embeddings into one `(len, dim)` array in ascending id
    /// order. Fails on any unset slot or dimension mismatch.
    pub fn stack(&self) -> Result<Array2<f32>> {
        let mut rows = Vec::with_capacity(self.slots.len());
        for (id, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(row) => rows.push(row),
                None => {
                    return Err(VocabError::EmbeddingUnset { kind: self.kind, id: id as u32 })
                }
            }
        }
        let dim = rows.first().map_or(0, |r| r.len());
        let mut stacked = Array2::zeros((rows.len(), dim));
        for (id, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(VocabError::EmbeddingShape {
                    kind: self.kind,
                    id: id as u32,
                    expected: dim,
                    actual: row.len(),
                });
            }
            stacked.row_mut(id).assign(row);
        }
        Ok(stacked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_stack_requires_every_slot_set() {
        let mut cache = EmbeddingCache::new("response", 2);
        cache.set(0, array![1.0, 2.0]).unwrap();
        let err = cache.stack().unwrap_err();
        assert!(matches!(err, VocabError::EmbeddingUnset { id: 1, .. }));
    }

    #[test]
    fn test_stack_orders_rows_by_id() {
        let mut cache = EmbeddingCache::new("context", 2);
        cache.set(1, array![3.0, 4.0]).unwrap();
        cache.set(0, array![1.0, 2.0]).unwrap();
        let stacked = cache.stack().unwrap();
        assert_eq!(stacked, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_stack_rejects_ragged_rows() {
        let mut cache = EmbeddingCache::new("context", 2);
        cache.set(0, array![1.0, 2.0]).unwrap();
        cache.set(1, array![1.0]).unwrap();
        assert!(matches!(cache.stack(), Err(VocabError::EmbeddingShape { .. })));
    }

    #[test]
    fn test_set_out_of_range_id_fails() {
        let mut cache = EmbeddingCache::new("context", 1);
        assert!(cache.set(5, array![1.0]).is_err());
    }

    #[test]
    fn test_from_array_roundtrip() {
        let arr = array![[1.0f32, 2.0], [3.0, 4.0]];
        let cache = EmbeddingCache::from_array("response", arr.clone());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stack().unwrap(), arr);
    }

    #[test]
    fn test_empty_cache_stacks_to_empty_array() {
        let cache = EmbeddingCache::new("context", 0);
        let stacked = cache.stack().unwrap();
        assert_eq!(stacked.shape(), &[0, 0]);
    }
}
