//! Stacked embedding persistence as `.npy` arrays.

use std::fs::File;
use std::path::Path;

use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};

use crate::error::{Result, VocabError};
use crate::vocab::EmbeddingCache;

/// Stack a cache and write it to `path`, one row per id in ascending order.
///
/// Fails if any slot is unset or rows disagree on dimension.
pub fn write_embeddings(path: &Path, cache: &EmbeddingCache) -> Result<()> {
    let stacked = cache.stack()?;
    let file = File::create(path)
        .map_err(|e| VocabError::io(format!("creating {}", path.display()), e))?;
    stacked
        .write_npy(file)
        .map_err(|e| VocabError::Array(format!("writing {}: {e}", path.display())))
}

/// Read a stacked array from `path` and repopulate a cache, row order = id.
pub fn read_embeddings(path: &Path, kind: &'static str) -> Result<EmbeddingCache> {
    let file =
        File::open(path).map_err(|e| VocabError::io(format!("opening {}", path.display()), e))?;
    let stacked = Array2::<f32>::read_npy(file)
        .map_err(|e| VocabError::Array(format!("reading {}: {e}", path.display())))?;
    Ok(EmbeddingCache::from_array(kind, stacked))
}
