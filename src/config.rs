use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::tokenizer::CutMode;

pub const SEGMENTER_ENV: &str = "PAPER_CHECKER_SEGMENTER";
pub const CUT_MODE_ENV: &str = "PAPER_CHECKER_CUT_MODE";
pub const HMM_ENV: &str = "PAPER_CHECKER_HMM";

/// どの Segmenter で分かち書きするか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// jieba-rs (中国語向け)
    #[default]
    Jieba,
    /// 空白区切り
    Whitespace,
}

/// 実行時の設定
/// 環境変数から読み込む
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub segmenter: SegmenterKind,
    pub cut_mode: CutMode,
    pub hmm: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::Jieba,
            cut_mode: CutMode::Precise,
            hmm: true,
        }
    }
}

impl CheckerConfig {
    /// プロセスの環境変数から読み込む
    /// 未設定の項目は既定値
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の key -> value 関数から読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(SEGMENTER_ENV) {
            config.segmenter = parse_segmenter(&v)?;
        }
        if let Some(v) = lookup(CUT_MODE_ENV) {
            config.cut_mode = parse_cut_mode(&v)?;
        }
        if let Some(v) = lookup(HMM_ENV) {
            config.hmm = parse_bool(HMM_ENV, &v)?;
        }
        Ok(config)
    }
}

fn parse_segmenter(value: &str) -> Result<SegmenterKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "jieba" => Ok(SegmenterKind::Jieba),
        "whitespace" => Ok(SegmenterKind::Whitespace),
        other => Err(CheckError::Config(format!(
            "{SEGMENTER_ENV} must be `jieba` or `whitespace`, got `{other}`"
        ))),
    }
}

fn parse_cut_mode(value: &str) -> Result<CutMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "precise" => Ok(CutMode::Precise),
        "full" => Ok(CutMode::Full),
        "search" => Ok(CutMode::Search),
        other => Err(CheckError::Config(format!(
            "{CUT_MODE_ENV} must be `precise`, `full` or `search`, got `{other}`"
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CheckError::Config(format!("{key} must be a boolean, got `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<CheckerConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CheckerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), CheckerConfig::default());
        let config = CheckerConfig::default();
        assert_eq!(config.segmenter, SegmenterKind::Jieba);
        assert_eq!(config.cut_mode, CutMode::Precise);
        assert!(config.hmm);
    }

    #[test]
    fn values_are_case_insensitive_and_trimmed() {
        let config = load(&[
            (SEGMENTER_ENV, " Whitespace "),
            (CUT_MODE_ENV, "SEARCH"),
            (HMM_ENV, "off"),
        ])
        .unwrap();
        assert_eq!(config.segmenter, SegmenterKind::Whitespace);
        assert_eq!(config.cut_mode, CutMode::Search);
        assert!(!config.hmm);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(load(&[(SEGMENTER_ENV, "mecab")]), Err(CheckError::Config(_))));
        assert!(matches!(load(&[(CUT_MODE_ENV, "fast")]), Err(CheckError::Config(_))));
        let err = load(&[(HMM_ENV, "maybe")]).unwrap_err();
        assert!(err.to_string().contains(HMM_ENV));
    }

    #[test]
    fn serde_roundtrip_json() {
        let config = load(&[(CUT_MODE_ENV, "full")]).unwrap();
        let s = serde_json::to_string(&config).unwrap();
        assert!(s.contains("\"cut_mode\":\"full\""));
        let de: CheckerConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de, config);
    }
}
