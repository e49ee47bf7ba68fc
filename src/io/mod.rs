//! Flat-file persistence: tab-delimited dictionaries and stacked `.npy`
//! embedding arrays.
//!
//! File names under a resolved save/load directory:
//!
//! | file | contents |
//! |---|---|
//! | `tok2int.dict`      | token vocabulary, `id<TAB>token` per line |
//! | `char2int.dict`     | character vocabulary, `id<TAB>char` per line |
//! | `cont2toks.dict`    | context vocabulary, `id<TAB>space-joined tokens` |
//! | `resp2toks.dict`    | response vocabulary, `id<TAB>space-joined tokens` |
//! | `context_embs.npy`  | stacked context embeddings, row-major by id |
//! | `response_embs.npy` | stacked response embeddings, row-major by id |

pub mod dict;
pub mod npy;

/// Character vocabulary file name.
pub const CHAR_DICT_FILE: &str = "char2int.dict";
/// Token vocabulary file name.
pub const TOK_DICT_FILE: &str = "tok2int.dict";
/// Context vocabulary file name.
pub const CONTEXT_DICT_FILE: &str = "cont2toks.dict";
/// Response vocabulary file name.
pub const RESPONSE_DICT_FILE: &str = "resp2toks.dict";
/// Context embedding cache file name.
pub const CONTEXT_EMB_FILE: &str = "context_embs.npy";
/// Response embedding cache file name.
pub const RESPONSE_EMB_FILE: &str = "response_embs.npy";
