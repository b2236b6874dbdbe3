use thiserror::Error;

/// DualListBox 統一エラー型
#[derive(Debug, Error)]
pub enum DlbError {
    #[error("DualListBox: {0} is undefined.")]
    MissingOption(String),

    #[error("DualListBox: invalid value for {key}: {message}")]
    InvalidOption { key: String, message: String },

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Duplicate item value: {0}")]
    DuplicateValue(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote source error: {uri} (status: {status})")]
    RemoteStatus { uri: String, status: u16 },

    #[error("Unexpected payload from {uri}: {message}")]
    UnexpectedPayload { uri: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DlbError>;

impl DlbError {
    /// 設定不足エラーを作成
    pub fn missing(key: &str) -> Self {
        DlbError::MissingOption(key.to_string())
    }

    /// 不正な設定値エラーを作成
    pub fn invalid(key: &str, message: impl Into<String>) -> Self {
        DlbError::InvalidOption {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            DlbError::Network(_) => true,
            DlbError::RemoteStatus { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }

    /// 設定起因のエラーかどうか（描画前に中断すべきもの）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DlbError::MissingOption(_) | DlbError::InvalidOption { .. } | DlbError::ConfigParse(_)
        )
    }
}
