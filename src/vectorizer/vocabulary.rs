use indexmap::IndexSet;

use crate::vectorizer::token::TokenFrequency;

/// 2文書の語彙の和集合
/// 次元の順序は構築時に固定される
/// 先に original の初出順、その後 candidate にしか無い token
///
/// 同じ Vocabulary から作った TF ベクタ同士は
/// index i が同じ token を指す
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    terms: IndexSet<&'a str>,
}

impl<'a> Vocabulary<'a> {
    /// 2つの TokenFrequency から語彙を構築する
    pub fn union(original: &'a TokenFrequency, candidate: &'a TokenFrequency) -> Self {
        let mut terms = IndexSet::with_capacity(original.token_num() + candidate.token_num());
        terms.extend(original.iter().map(|(token, _)| token));
        terms.extend(candidate.iter().map(|(token, _)| token));
        Self { terms }
    }

    /// 語彙数
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.terms.iter().copied()
    }

    /// TokenFrequency をこの語彙の次元に射影した TF ベクタ
    /// 語彙に無い token は無視される
    ///
    /// # Arguments
    /// * `freq` - 射影する TokenFrequency
    ///
    /// # Returns
    /// * `Vec<u32>` - 長さ `self.len()` の出現回数ベクタ
    pub fn tf_vector(&self, freq: &TokenFrequency) -> Vec<u32> {
        self.terms.iter().map(|term| freq.token_count(term)).collect()
    }
}
