/// 設定ファイルパスを指定する環境変数
pub const CONFIG_ENV: &str = "DLB_CONFIG";

/// ログレベルを指定する環境変数（EnvFilter 構文）
pub const LOG_ENV: &str = "DLB_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}
