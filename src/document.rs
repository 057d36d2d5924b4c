use std::{fs, io, path::Path};

use tracing::debug;

use crate::error::{CheckError, Result};

/// 文書ファイルを UTF-8 テキストとして読み込む
///
/// # Errors
/// * `CheckError::NotFound` - ファイルが存在しない
/// * `CheckError::Read` - 読めない、もしくは UTF-8 ではない
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read document");
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CheckError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CheckError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// スコアを小数点以下2桁の文字列にする
#[inline]
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// スコアを小数点以下2桁で書き込む
/// 既存の内容は上書き、末尾の改行は付けない
pub fn write_score<P: AsRef<Path>>(path: P, score: f64) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_score(score)).map_err(|source| CheckError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_score_uses_two_decimals() {
        assert_eq!(format_score(0.75), "0.75");
        assert_eq!(format_score(1.0), "1.00");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(0.7303), "0.73");
        assert_eq!(format_score(0.999), "1.00");
    }

    #[test]
    fn read_document_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orig.txt");
        fs::write(&path, "测试文件内容").unwrap();

        assert_eq!(read_document(&path).unwrap(), "测试文件内容");
    }

    #[test]
    fn read_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, CheckError::NotFound { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn read_document_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [0xff_u8, 0xfe, 0x00, 0x80]).unwrap();

        assert!(matches!(read_document(&path), Err(CheckError::Read { .. })));
    }

    #[test]
    fn write_score_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ans.txt");
        fs::write(&path, "old content that is longer").unwrap();

        write_score(&path, 0.75).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.75");
    }

    #[test]
    fn write_score_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("ans.txt");

        assert!(matches!(write_score(&path, 0.5), Err(CheckError::Write { .. })));
    }
}
