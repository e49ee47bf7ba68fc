//! Ranking vocabulary: fit, load, save, and batch encoding.

use std::collections::HashSet;
use std::path::Path;

use log::info;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::RankingVocabConfig;
use crate::encode::{self, EncodedBatch};
use crate::error::{Result, VocabError};
use crate::io::{
    dict, npy, CHAR_DICT_FILE, CONTEXT_DICT_FILE, CONTEXT_EMB_FILE, RESPONSE_DICT_FILE,
    RESPONSE_EMB_FILE, TOK_DICT_FILE,
};
use crate::sampling;
use crate::tokenizer::Tokenizer;
use crate::vocab::{CharVocab, EmbeddingCache, TextVocab, TokenVocab};

/// Training data handed to [`RankingVocab::fit`].
///
/// `pos_pool` and `neg_pool` hold one pool of candidate texts per example.
/// An absent negative pool (`None`) means negatives are synthesized at
/// encode time by uniform sampling from the response vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FitData<'a> {
    pub context: &'a [String],
    pub response: &'a [String],
    pub pos_pool: &'a [Vec<String>],
    pub neg_pool: Option<&'a [Vec<String>]>,
}

/// One encoded training batch: context and response arrays plus per-example
/// positive and negative candidate arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingBatch {
    pub context: EncodedBatch,
    pub response: EncodedBatch,
    pub pos_pool: Vec<EncodedBatch>,
    pub neg_pool: Vec<EncodedBatch>,
}

/// Lookup vocabularies and encoder for a neural response-ranking model.
///
/// A value only exists fully built ("ready"): [`RankingVocab::fit`] builds
/// the tables from training data, [`RankingVocab::load`] reads them back
/// from disk, and both are fallible constructors. The tables are immutable
/// afterwards except the embedding caches, which the embedding producer
/// fills through [`RankingVocab::set_context_embedding`] /
/// [`RankingVocab::set_response_embedding`].
#[derive(Debug)]
pub struct RankingVocab<T: Tokenizer> {
    config: RankingVocabConfig,
    tokenizer: T,
    tokens: TokenVocab,
    chars: Option<CharVocab>,
    contexts: TextVocab,
    responses: TextVocab,
    context_embs: Option<EmbeddingCache>,
    response_embs: Option<EmbeddingCache>,
    rng: StdRng,
}

impl<T: Tokenizer> RankingVocab<T> {
    /// Build vocabularies from training data.
    ///
    /// The token vocabulary is the union of every token seen in the
    /// contexts, responses, positive pools, and (when present) negative
    /// pools. The response vocabulary likewise unions responses with both
    /// pools; the context vocabulary covers the contexts alone.
    pub fn fit(config: RankingVocabConfig, tokenizer: T, data: FitData<'_>) -> Result<Self> {
        config.validate()?;
        info!("initializing new ranking vocabulary from training data");

        let c_tok = tokenizer.tokenize_batch(data.context);
        let r_tok = tokenizer.tokenize_batch(data.response);
        let pos_tok: Vec<Vec<Vec<String>>> =
            data.pos_pool.iter().map(|pool| tokenizer.tokenize_batch(pool)).collect();
        let neg_tok: Option<Vec<Vec<Vec<String>>>> = data
            .neg_pool
            .map(|pools| pools.iter().map(|pool| tokenizer.tokenize_batch(pool)).collect());

        let mut unique: HashSet<String> = HashSet::new();
        unique.extend(c_tok.iter().flatten().cloned());
        unique.extend(r_tok.iter().flatten().cloned());
        unique.extend(pos_tok.iter().flatten().flatten().cloned());
        if let Some(neg) = &neg_tok {
            unique.extend(neg.iter().flatten().flatten().cloned());
        }
        let tokens = TokenVocab::from_tokens(unique);

        let chars = config.char_embeddings.then(|| CharVocab::from_tokens(tokens.known_tokens()));

        let contexts = TextVocab::from_sequences(c_tok.iter().cloned());
        let mut response_seqs: Vec<Vec<String>> = r_tok.clone();
        response_seqs.extend(pos_tok.iter().flatten().cloned());
        if let Some(neg) = &neg_tok {
            response_seqs.extend(neg.iter().flatten().cloned());
        }
        let responses = TextVocab::from_sequences(response_seqs);

        let context_embs =
            config.update_embeddings.then(|| EmbeddingCache::new("context", contexts.len()));
        let response_embs =
            config.update_embeddings.then(|| EmbeddingCache::new("response", responses.len()));

        let rng = Self::seeded_rng(&config);
        Ok(Self {
            config,
            tokenizer,
            tokens,
            chars,
            contexts,
            responses,
            context_embs,
            response_embs,
            rng,
        })
    }

    /// Load vocabularies previously written by [`RankingVocab::save`] from
    /// files under `dir`.
    pub fn load(config: RankingVocabConfig, tokenizer: T, dir: &Path) -> Result<Self> {
        config.validate()?;
        info!("initializing ranking vocabulary from {}", dir.display());

        let chars = if config.char_embeddings {
            let path = dir.join(CHAR_DICT_FILE);
            Some(CharVocab::from_records(&path, &dict::read_records(&path)?)?)
        } else {
            None
        };
        let tok_path = dir.join(TOK_DICT_FILE);
        let tokens = TokenVocab::from_records(&tok_path, &dict::read_records(&tok_path)?)?;
        let cont_path = dir.join(CONTEXT_DICT_FILE);
        let contexts =
            TextVocab::from_records(&cont_path, &dict::read_records(&cont_path)?, "context")?;
        let resp_path = dir.join(RESPONSE_DICT_FILE);
        let responses =
            TextVocab::from_records(&resp_path, &dict::read_records(&resp_path)?, "response")?;

        let (context_embs, response_embs) = if config.update_embeddings {
            let context_embs = npy::read_embeddings(&dir.join(CONTEXT_EMB_FILE), "context")?;
            if context_embs.len() != contexts.len() {
                return Err(VocabError::EmbeddingCount {
                    kind: "context",
                    expected: contexts.len(),
                    actual: context_embs.len(),
                });
            }
            let response_embs = npy::read_embeddings(&dir.join(RESPONSE_EMB_FILE), "response")?;
            if response_embs.len() != responses.len() {
                return Err(VocabError::EmbeddingCount {
                    kind: "response",
                    expected: responses.len(),
                    actual: response_embs.len(),
                });
            }
            (Some(context_embs), Some(response_embs))
        } else {
            (None, None)
        };

        let rng = Self::seeded_rng(&config);
        Ok(Self {
            config,
            tokenizer,
            tokens,
            chars,
            contexts,
            responses,
            context_embs,
            response_embs,
            rng,
        })
    }

    /// Write every vocabulary (and, with `update_embeddings`, both stacked
    /// embedding caches) to files under `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        info!("saving ranking vocabulary to {}", dir.display());
        if let Some(chars) = &self.chars {
            dict::write_records(&dir.join(CHAR_DICT_FILE), chars.records())?;
        }
        dict::write_records(&dir.join(TOK_DICT_FILE), self.tokens.records())?;
        dict::write_records(&dir.join(CONTEXT_DICT_FILE), self.contexts.records())?;
        dict::write_records(&dir.join(RESPONSE_DICT_FILE), self.responses.records())?;
        if let Some(cache) = &self.context_embs {
            npy::write_embeddings(&dir.join(CONTEXT_EMB_FILE), cache)?;
        }
        if let Some(cache) = &self.response_embs {
            npy::write_embeddings(&dir.join(RESPONSE_EMB_FILE), cache)?;
        }
        Ok(())
    }

    /// Encode one training batch.
    ///
    /// When `neg_pool` is `None`, each example's negatives are drawn from
    /// the response vocabulary, excluding that example's positive pool.
    pub fn encode(
        &mut self,
        context: &[String],
        response: &[String],
        pos_pool: &[Vec<String>],
        neg_pool: Option<&[Vec<String>]>,
    ) -> Result<RankingBatch> {
        let c_tok = self.tokenizer.tokenize_batch(context);
        let r_tok = self.tokenizer.tokenize_batch(response);
        let pos_tok: Vec<Vec<Vec<String>>> =
            pos_pool.iter().map(|pool| self.tokenizer.tokenize_batch(pool)).collect();

        let encoded_context = self.make_ints(&c_tok)?;
        let encoded_response = self.make_ints(&r_tok)?;
        let encoded_pos =
            pos_tok.iter().map(|pool| self.make_ints(pool)).collect::<Result<Vec<_>>>()?;

        let encoded_neg = match neg_pool {
            Some(pools) => {
                let mut out = Vec::with_capacity(pools.len());
                for pool in pools {
                    let toks = self.tokenizer.tokenize_batch(pool);
                    out.push(self.make_ints(&toks)?);
                }
                out
            }
            None => {
                let mut out = Vec::with_capacity(pos_tok.len());
                for pool in &pos_tok {
                    let items = sampling::sample_negatives(
                        &mut self.rng,
                        &self.responses,
                        pool,
                        self.config.num_negative_samples,
                    )?;
                    out.push(self.make_ints(&items)?);
                }
                out
            }
        };

        Ok(RankingBatch {
            context: encoded_context,
            response: encoded_response,
            pos_pool: encoded_pos,
            neg_pool: encoded_neg,
        })
    }

    /// Convert a batch of tokenized sequences into a fixed-shape integer
    /// array per the configured token/char toggles.
    pub fn make_ints(&self, toks_li: &[Vec<String>]) -> Result<EncodedBatch> {
        let cfg = &self.config;
        let msl = if cfg.tok_dynamic_batch {
            toks_li.iter().map(Vec::len).max().unwrap_or(0).min(cfg.max_sequence_length)
        } else {
            cfg.max_sequence_length
        };

        if !cfg.char_embeddings {
            let arr = encode::token_ints(toks_li, &self.tokens, msl, cfg.padding, cfg.truncating);
            return Ok(EncodedBatch::Tokens(arr));
        }

        let chars = self.chars.as_ref().ok_or_else(|| {
            VocabError::config("char_embeddings", "no character vocabulary was built")
        })?;
        let max_tok = cfg.max_token_length.ok_or_else(|| {
            VocabError::config("max_token_length", "required when char_embeddings is enabled")
        })?;
        let mtl = if cfg.char_dynamic_batch {
            toks_li
                .iter()
                .flat_map(|toks| toks.iter().map(|t| t.chars().count()))
                .max()
                .unwrap_or(0)
                .min(max_tok)
        } else {
            max_tok
        };

        let char_arr = encode::char_ints(
            toks_li,
            chars,
            msl,
            mtl,
            cfg.padding,
            cfg.truncating,
            cfg.char_pad,
            cfg.char_trunc,
        );
        if cfg.token_embeddings {
            let tok_arr =
                encode::token_ints(toks_li, &self.tokens, msl, cfg.padding, cfg.truncating);
            Ok(EncodedBatch::TokensAndChars(encode::concat_channels(&tok_arr, &char_arr)))
        } else {
            Ok(EncodedBatch::Chars(char_arr))
        }
    }

    /// Draw `num_negative_samples` response sequences not present in
    /// `pos_pool`.
    pub fn generate_items(&mut self, pos_pool: &[Vec<String>]) -> Result<Vec<Vec<String>>> {
        sampling::sample_negatives(
            &mut self.rng,
            &self.responses,
            pos_pool,
            self.config.num_negative_samples,
        )
    }

    /// Token sequences for a batch of context ids.
    pub fn conts2toks(&self, ids: &[u32]) -> Result<Vec<Vec<String>>> {
        ids.iter()
            .map(|&id| {
                self.contexts
                    .get(id)
                    .map(<[String]>::to_vec)
                    .ok_or(VocabError::MissingEntry { kind: "context", id })
            })
            .collect()
    }

    /// Token sequences for a batch of response ids.
    pub fn resps2toks(&self, ids: &[u32]) -> Result<Vec<Vec<String>>> {
        ids.iter()
            .map(|&id| {
                self.responses
                    .get(id)
                    .map(<[String]>::to_vec)
                    .ok_or(VocabError::MissingEntry { kind: "response", id })
            })
            .collect()
    }

    /// Store the embedding for a context id. Requires `update_embeddings`.
    pub fn set_context_embedding(&mut self, id: u32, embedding: Array1<f32>) -> Result<()> {
        match &mut self.context_embs {
            Some(cache) => cache.set(id, embedding),
            None => Err(VocabError::config(
                "update_embeddings",
                "embedding caches are disabled",
            )),
        }
    }

    /// Store the embedding for a response id. Requires `update_embeddings`.
    pub fn set_response_embedding(&mut self, id: u32, embedding: Array1<f32>) -> Result<()> {
        match &mut self.response_embs {
            Some(cache) => cache.set(id, embedding),
            None => Err(VocabError::config(
                "update_embeddings",
                "embedding caches are disabled",
            )),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RankingVocabConfig {
        &self.config
    }

    /// The fitted token vocabulary.
    pub fn tokens(&self) -> &TokenVocab {
        &self.tokens
    }

    /// The fitted character vocabulary, when `char_embeddings` is enabled.
    pub fn chars(&self) -> Option<&CharVocab> {
        self.chars.as_ref()
    }

    /// The fitted context vocabulary.
    pub fn contexts(&self) -> &TextVocab {
        &self.contexts
    }

    /// The fitted response vocabulary.
    pub fn responses(&self) -> &TextVocab {
        &self.responses
    }

    /// The cached embedding for a context id, if set.
    pub fn context_embedding(&self, id: u32) -> Option<&Array1<f32>> {
        self.context_embs.as_ref().and_then(|cache| cache.get(id))
    }

    /// The cached embedding for a response id, if set.
    pub fn response_embedding(&self, id: u32) -> Option<&Array1<f32>> {
        self.response_embs.as_ref().and_then(|cache| cache.get(id))
    }

    fn seeded_rng(config: &RankingVocabConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Padding;
    use crate::tokenizer::WhitespaceTokenizer;
    use crate::vocab::UNK_TOKEN;
    use ndarray::array;
    use tempfile::tempdir;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fit_basic(config: RankingVocabConfig) -> RankingVocab<WhitespaceTokenizer> {
        let context = texts(&["hi there"]);
        let response = texts(&["ok"]);
        let pos_pool = vec![texts(&["fine"])];
        RankingVocab::fit(
            config,
            WhitespaceTokenizer,
            FitData {
                context: &context,
                response: &response,
                pos_pool: &pos_pool,
                neg_pool: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_fit_builds_union_token_vocab() {
        let vocab = fit_basic(RankingVocabConfig::new(8).with_seed(3));
        assert_eq!(vocab.tokens().len(), 5);
        assert_eq!(vocab.tokens().token(0), Some(UNK_TOKEN));
        for tok in ["hi", "there", "ok", "fine"] {
            assert_ne!(vocab.tokens().get(tok), 0, "{tok} should be in the vocab");
        }
        assert_eq!(vocab.tokens().get("absent"), 0);
    }

    #[test]
    fn test_fit_builds_response_vocab_from_responses_and_pos_pool() {
        let vocab = fit_basic(RankingVocabConfig::new(8).with_seed(3));
        assert_eq!(vocab.responses().len(), 2);
        let joined: Vec<String> =
            vocab.responses().records().map(|(_, value)| value).collect();
        assert!(joined.contains(&"ok".to_string()));
        assert!(joined.contains(&"fine".to_string()));
        assert_eq!(vocab.contexts().len(), 1);
    }

    #[test]
    fn test_fit_includes_explicit_negative_pool_tokens() {
        let context = texts(&["hi"]);
        let response = texts(&["ok"]);
        let pos_pool = vec![texts(&["fine"])];
        let neg_pool = vec![texts(&["nope"])];
        let vocab = RankingVocab::fit(
            RankingVocabConfig::new(8).with_seed(3),
            WhitespaceTokenizer,
            FitData {
                context: &context,
                response: &response,
                pos_pool: &pos_pool,
                neg_pool: Some(&neg_pool),
            },
        )
        .unwrap();
        assert_ne!(vocab.tokens().get("nope"), 0);
        assert_eq!(vocab.responses().len(), 3);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let vocab = fit_basic(
            RankingVocabConfig::new(8)
                .with_char_embeddings(true)
                .with_max_token_length(6)
                .with_seed(3),
        );
        vocab.save(dir.path()).unwrap();

        let loaded = RankingVocab::load(
            vocab.config().clone(),
            WhitespaceTokenizer,
            dir.path(),
        )
        .unwrap();
        assert_eq!(loaded.tokens(), vocab.tokens());
        assert_eq!(loaded.chars(), vocab.chars());
        assert_eq!(loaded.contexts(), vocab.contexts());
        assert_eq!(loaded.responses(), vocab.responses());
    }

    #[test]
    fn test_embedding_caches_roundtrip() {
        let dir = tempdir().unwrap();
        let mut vocab =
            fit_basic(RankingVocabConfig::new(8).with_update_embeddings(true).with_seed(3));
        vocab.set_context_embedding(0, array![1.0, 2.0]).unwrap();
        for id in 0..vocab.responses().len() as u32 {
            vocab.set_response_embedding(id, array![id as f32, 0.5]).unwrap();
        }
        vocab.save(dir.path()).unwrap();

        let loaded = RankingVocab::load(
            vocab.config().clone(),
            WhitespaceTokenizer,
            dir.path(),
        )
        .unwrap();
        assert_eq!(loaded.context_embedding(0).unwrap(), &array![1.0, 2.0]);
        assert_eq!(loaded.response_embedding(1).unwrap(), &array![1.0, 0.5]);
    }

    #[test]
    fn test_load_rejects_embedding_row_count_mismatch() {
        let dir = tempdir().unwrap();
        let mut vocab =
            fit_basic(RankingVocabConfig::new(8).with_update_embeddings(true).with_seed(3));
        vocab.set_context_embedding(0, array![1.0, 2.0]).unwrap();
        for id in 0..vocab.responses().len() as u32 {
            vocab.set_response_embedding(id, array![id as f32, 0.5]).unwrap();
        }
        vocab.save(dir.path()).unwrap();

        // Overwrite the response cache with fewer rows than the response
        // vocabulary has ids.
        let mut short = EmbeddingCache::new("response", 1);
        short.set(0, array![9.0, 9.0]).unwrap();
        npy::write_embeddings(&dir.path().join(RESPONSE_EMB_FILE), &short).unwrap();

        let err = RankingVocab::load(
            vocab.config().clone(),
            WhitespaceTokenizer,
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VocabError::EmbeddingCount { kind: "response", expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_make_ints_char_dynamic_batch_sizes_to_longest_token() {
        let toks = vec![texts(&["hi", "there"])];

        // Longest token ("there", 5 chars) is under the cap, so it sets the
        // trailing width: 1 token channel + 5 char slots.
        let vocab = fit_basic(
            RankingVocabConfig::new(4)
                .with_char_embeddings(true)
                .with_max_token_length(10)
                .with_dynamic_batch(false, true)
                .with_seed(3),
        );
        let batch = vocab.make_ints(&toks).unwrap();
        assert_eq!(batch.as_chars().unwrap().shape(), &[1, 4, 6]);

        // With a smaller cap the longest token is truncated to it.
        let capped = fit_basic(
            RankingVocabConfig::new(4)
                .with_char_embeddings(true)
                .with_max_token_length(3)
                .with_dynamic_batch(false, true)
                .with_seed(3),
        );
        let batch = capped.make_ints(&toks).unwrap();
        assert_eq!(batch.as_chars().unwrap().shape(), &[1, 4, 4]);
    }

    #[test]
    fn test_save_with_unset_embedding_fails() {
        let dir = tempdir().unwrap();
        let vocab =
            fit_basic(RankingVocabConfig::new(8).with_update_embeddings(true).with_seed(3));
        let err = vocab.save(dir.path()).unwrap_err();
        assert!(matches!(err, VocabError::EmbeddingUnset { .. }));
    }

    #[test]
    fn test_set_embedding_without_caches_fails() {
        let mut vocab = fit_basic(RankingVocabConfig::new(8).with_seed(3));
        assert!(vocab.set_context_embedding(0, array![1.0]).is_err());
    }

    #[test]
    fn test_make_ints_token_mode_shapes_and_padding() {
        let vocab = fit_basic(
            RankingVocabConfig::new(4)
                .with_token_sides(Padding::Pre, Padding::Post)
                .with_seed(3),
        );
        let toks = vec![texts(&["hi"])];
        let batch = vocab.make_ints(&toks).unwrap();
        let arr = batch.as_tokens().unwrap();
        assert_eq!(arr.shape(), &[1, 4]);
        assert_eq!(arr[[0, 0]], 0);
        assert_eq!(arr[[0, 3]], vocab.tokens().get("hi"));
    }

    #[test]
    fn test_make_ints_dynamic_batch_caps_at_longest_sequence() {
        let vocab =
            fit_basic(RankingVocabConfig::new(10).with_dynamic_batch(true, false).with_seed(3));
        let toks = vec![texts(&["hi", "there"]), texts(&["ok"])];
        let batch = vocab.make_ints(&toks).unwrap();
        assert_eq!(batch.as_tokens().unwrap().shape(), &[2, 2]);
    }

    #[test]
    fn test_make_ints_combined_mode_has_token_channel() {
        let vocab = fit_basic(
            RankingVocabConfig::new(4)
                .with_char_embeddings(true)
                .with_max_token_length(5)
                .with_seed(3),
        );
        let toks = vec![texts(&["hi"])];
        let batch = vocab.make_ints(&toks).unwrap();
        let arr = batch.as_chars().unwrap();
        assert_eq!(arr.shape(), &[1, 4, 6]);
        assert_eq!(arr[[0, 0, 0]], vocab.tokens().get("hi"));
        let chars = vocab.chars().unwrap();
        assert_eq!(arr[[0, 0, 1]], chars.get('h'));
        assert_eq!(arr[[0, 0, 2]], chars.get('i'));
    }

    #[test]
    fn test_make_ints_empty_batch_degrades_to_empty_array() {
        let vocab = fit_basic(RankingVocabConfig::new(4).with_seed(3));
        let batch = vocab.make_ints(&[]).unwrap();
        assert_eq!(batch.batch_len(), 0);
    }

    #[test]
    fn test_encode_synthesizes_negatives_when_pool_absent() {
        let context = texts(&["hi there", "how are you"]);
        let response = texts(&["ok", "fine thanks"]);
        let pos_pool = vec![texts(&["ok"]), texts(&["fine thanks"])];
        let mut vocab = RankingVocab::fit(
            RankingVocabConfig::new(6).with_num_negative_samples(3).with_seed(9),
            WhitespaceTokenizer,
            FitData {
                context: &context,
                response: &response,
                pos_pool: &pos_pool,
                neg_pool: None,
            },
        )
        .unwrap();

        let batch = vocab.encode(&context, &response, &pos_pool, None).unwrap();
        assert_eq!(batch.context.batch_len(), 2);
        assert_eq!(batch.response.batch_len(), 2);
        assert_eq!(batch.pos_pool.len(), 2);
        assert_eq!(batch.neg_pool.len(), 2);
        for neg in &batch.neg_pool {
            assert_eq!(neg.batch_len(), 3);
        }
    }

    #[test]
    fn test_generate_items_excludes_positives() {
        let mut vocab = fit_basic(
            RankingVocabConfig::new(8).with_num_negative_samples(8).with_seed(5),
        );
        let pos = vec![vec!["ok".to_string()]];
        let items = vocab.generate_items(&pos).unwrap();
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|c| c == &vec!["fine".to_string()]));
    }

    #[test]
    fn test_lookup_by_unknown_id_fails() {
        let vocab = fit_basic(RankingVocabConfig::new(8).with_seed(3));
        let err = vocab.conts2toks(&[99]).unwrap_err();
        assert!(matches!(err, VocabError::MissingEntry { kind: "context", id: 99 }));
        assert!(vocab.resps2toks(&[0]).is_ok());
    }

    #[test]
    fn test_load_missing_files_is_io_error() {
        let dir = tempdir().unwrap();
        let err = RankingVocab::load(
            RankingVocabConfig::new(8),
            WhitespaceTokenizer,
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, VocabError::Io { .. }));
    }

    #[test]
    fn test_fit_rejects_invalid_config() {
        let context = texts(&["hi"]);
        let response = texts(&["ok"]);
        let pos_pool = vec![texts(&["fine"])];
        let err = RankingVocab::fit(
            RankingVocabConfig::new(8).with_char_embeddings(true),
            WhitespaceTokenizer,
            FitData {
                context: &context,
                response: &response,
                pos_pool: &pos_pool,
                neg_pool: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, VocabError::Config { .. }));
    }
}
