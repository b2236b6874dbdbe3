//! 共通HTTPヘルパー

use crate::error::{DlbError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "dlb-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// スピナー付きで JSON を取得
///
/// 非 2xx ステータスは `RemoteStatus` エラーとして返す（成功扱いにしない）。
pub async fn get_json(client: &Client, url: &str) -> Result<serde_json::Value> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Fetching {msg}...")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(url.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fetch(client, url).await;
    pb.finish_and_clear();
    result
}

async fn fetch(client: &Client, url: &str) -> Result<serde_json::Value> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(DlbError::RemoteStatus {
            uri: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// URI が HTTP(S) で取得すべきものかどうか
pub fn is_remote_uri(uri: &str) -> bool {
    let lower = uri.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_default() {
        let config = HttpConfig::default();
        assert_eq!(config.user_agent, "dlb-cli");
        assert!(config.timeout.is_some());
    }

    #[test]
    fn test_is_remote_uri() {
        assert!(is_remote_uri("https://example.com/items.json"));
        assert!(is_remote_uri("HTTP://example.com/items.json"));
        assert!(!is_remote_uri("local.json"));
        assert!(!is_remote_uri("./data/https.json"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_success() {
        let client = HttpConfig {
            timeout: Some(Duration::from_millis(200)),
            ..HttpConfig::default()
        }
        .build_client();
        // 127.0.0.1:9 (discard) は通常接続を拒否する
        let result = get_json(&client, "http://127.0.0.1:9/items.json").await;
        assert!(result.is_err());
    }
}
