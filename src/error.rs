use std::path::PathBuf;

use thiserror::Error;

/// 入出力と設定のエラー
/// 類似度の計算そのものは失敗しないのでここには無い
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write result to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
