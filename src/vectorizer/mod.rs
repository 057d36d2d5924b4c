pub mod compare;
pub mod token;
pub mod vocabulary;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokenizer::{self, JiebaSegmenter, Segmenter};
use crate::vectorizer::{compare::{Compare, DefaultCompare}, token::TokenFrequency, vocabulary::Vocabulary};

/// 2文書の類似度計算エンジン
/// 状態を持たないので複数スレッドから同時に呼んでよい
///
/// `SimilarityEngine<S>` の `S` は分かち書きに使う Segmenter
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine<S = JiebaSegmenter>
where
    S: Segmenter,
{
    segmenter: S,
}

/// 1回の比較の結果と統計
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// コサイン類似度 (0.0 ~ 1.0)
    pub score: f64,
    /// original の token 数
    pub original_tokens: u64,
    /// candidate の token 数
    pub candidate_tokens: u64,
    /// 語彙 (和集合) のサイズ
    pub vocabulary_size: usize,
    /// 両方に出現する語の数
    pub shared_terms: usize,
}

impl SimilarityEngine<JiebaSegmenter> {
    /// jieba (精確モード, HMM有効) を使うエンジン
    pub fn new() -> Self {
        Self::with_segmenter(JiebaSegmenter::new())
    }
}

impl<S> SimilarityEngine<S>
where
    S: Segmenter,
{
    pub fn with_segmenter(segmenter: S) -> Self {
        Self { segmenter }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// text を token 列にする
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenizer::tokenize(&self.segmenter, text)
    }

    /// text の TokenFrequency を作る
    pub fn term_frequency(&self, text: &str) -> TokenFrequency {
        TokenFrequency::from_tokens(&self.tokenize(text))
    }

    /// original と candidate のコサイン類似度
    ///
    /// - 両方とも token が無い場合は 1.0
    /// - 片方だけ token が無い場合は 0.0
    ///
    /// どんな入力でも失敗しない
    ///
    /// # Arguments
    /// * `original` - 原文
    /// * `candidate` - 比較対象
    ///
    /// # Returns
    /// * `f64` - 0.0 ~ 1.0
    pub fn similarity(&self, original: &str, candidate: &str) -> f64 {
        let original = self.term_frequency(original);
        let candidate = self.term_frequency(candidate);
        let vocab = Vocabulary::union(&original, &candidate);
        Self::score(&original, &candidate, &vocab)
    }

    /// similarity と同じスコアに統計を付けて返す
    pub fn report(&self, original: &str, candidate: &str) -> SimilarityReport {
        let original = self.term_frequency(original);
        let candidate = self.term_frequency(candidate);
        let vocab = Vocabulary::union(&original, &candidate);
        let shared_terms = vocab
            .iter()
            .filter(|term| original.contains_token(term) && candidate.contains_token(term))
            .count();

        SimilarityReport {
            score: Self::score(&original, &candidate, &vocab),
            original_tokens: original.token_total_count(),
            candidate_tokens: candidate.token_total_count(),
            vocabulary_size: vocab.len(),
            shared_terms,
        }
    }

    /// 1つの原文に対して複数の候補を並列に比較する
    /// 原文の分かち書きは1回だけ
    /// 結果は candidates と同じ順序
    pub fn similarity_batch<T>(&self, original: &str, candidates: &[T]) -> Vec<f64>
    where
        T: AsRef<str> + Sync,
    {
        let original = self.term_frequency(original);
        candidates
            .par_iter()
            .map(|candidate| {
                let candidate = self.term_frequency(candidate.as_ref());
                let vocab = Vocabulary::union(&original, &candidate);
                Self::score(&original, &candidate, &vocab)
            })
            .collect()
    }

    /// 2つの TokenFrequency のコサイン類似度
    /// vocab は同じ2つから作った和集合であること
    fn score(original: &TokenFrequency, candidate: &TokenFrequency, vocab: &Vocabulary) -> f64 {
        match (original.is_empty(), candidate.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let original_vec = vocab.tf_vector(original);
        let candidate_vec = vocab.tf_vector(candidate);
        let score = <DefaultCompare as Compare<u32>>::cosine_similarity(&original_vec, &candidate_vec);

        debug!(
            original_tokens = original.token_total_count(),
            candidate_tokens = candidate.token_total_count(),
            vocabulary = vocab.len(),
            score,
            "compared term frequency vectors"
        );
        score
    }
}
