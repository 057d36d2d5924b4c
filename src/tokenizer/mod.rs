pub mod jieba;
pub mod whitespace;

pub use jieba::{CutMode, JiebaSegmenter};
pub use whitespace::WhitespaceSegmenter;

/// 分かち書きの能力
/// テキストを出現順の部分文字列に分割する
///
/// 実装は同じ入力に対して常に同じ結果を返すこと
/// (同じ文書の組が同じスコアになるため)
pub trait Segmenter: Send + Sync {
    /// text を分割する
    /// 空白だけの断片が含まれていてもよい (tokenize で捨てる)
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// ログ用の名前
    fn name(&self) -> &'static str;
}

impl<S> Segmenter for &S
where
    S: Segmenter + ?Sized,
{
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S> Segmenter for Box<S>
where
    S: Segmenter + ?Sized,
{
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// segmenter で text を token 列にする
/// 各断片の前後の空白を取り、空になったものは捨てる
/// 順序は分割順のまま
///
/// # Arguments
/// * `segmenter` - 分割に使う Segmenter
/// * `text` - 入力テキスト (空文字列可)
///
/// # Returns
/// * `Vec<&str>` - token 列 (空の可能性あり)
pub fn tokenize<'a, S>(segmenter: &S, text: &'a str) -> Vec<&'a str>
where
    S: Segmenter + ?Sized,
{
    segmenter
        .segment(text)
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
