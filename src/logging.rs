//! ログ出力の初期化
//!
//! 端末は TUI が占有するため、ログはファイルにだけ書き出す。

use crate::env::{EnvVar, LOG_ENV};
use crate::error::{DlbError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// 既定のログレベル
const DEFAULT_LEVEL: &str = "info";

/// `log_file` が指定されていれば tracing の出力先として設定する
///
/// レベルは `DLB_LOG`（EnvFilter 構文）、未設定なら `info`。
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvVar::get(LOG_ENV)
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| DlbError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_log_file_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_log_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // ディレクトリはファイルとして開けない
        let err = init(Some(dir.path())).unwrap_err();
        assert!(matches!(err, DlbError::Io(_)));
    }
}
