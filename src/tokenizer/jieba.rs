use std::sync::OnceLock;

use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};

use super::Segmenter;

/// 既定辞書の Jieba (プロセス内で1回だけロード)
static JIEBA: OnceLock<Jieba> = OnceLock::new();

fn default_jieba() -> &'static Jieba {
    JIEBA.get_or_init(Jieba::new)
}

/// jieba の分割モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    /// 精確モード。文を最も自然な単語列に分ける
    #[default]
    Precise,
    /// 全モード。辞書にある単語をすべて列挙する (重なりあり)
    Full,
    /// 検索エンジンモード。精確モードの長い語をさらに細かく分ける
    Search,
}

/// jieba-rs による中国語の分かち書き
/// 辞書は共有なのでコピーは安い
#[derive(Clone, Copy)]
pub struct JiebaSegmenter {
    jieba: &'static Jieba,
    mode: CutMode,
    hmm: bool,
}

impl JiebaSegmenter {
    /// 精確モード + HMM 有効
    pub fn new() -> Self {
        Self::with_options(CutMode::Precise, true)
    }

    /// # Arguments
    /// * `mode` - 分割モード
    /// * `hmm` - 辞書にない語を HMM で見つけるか (Full では無視)
    pub fn with_options(mode: CutMode, hmm: bool) -> Self {
        Self {
            jieba: default_jieba(),
            mode,
            hmm,
        }
    }

    pub fn mode(&self) -> CutMode {
        self.mode
    }

    pub fn hmm(&self) -> bool {
        self.hmm
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("mode", &self.mode)
            .field("hmm", &self.hmm)
            .finish()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.mode {
            CutMode::Precise => self.jieba.cut(text, self.hmm),
            CutMode::Full => self.jieba.cut_all(text),
            CutMode::Search => self.jieba.cut_for_search(text, self.hmm),
        }
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}
