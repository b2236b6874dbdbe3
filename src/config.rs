//! ウィジェット設定
//!
//! 既定値 < 設定ファイル（TOML） < コマンドライン の順でレイヤーを重ね、
//! 最後に全項目が揃っているかを検証して [`Options`] を得る。

use crate::error::{DlbError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 「全件移動」確認ダイアログの既定メッセージ
pub const DEFAULT_CONFIRM_MESSAGE: &str =
    "Are you sure you want to move this many items? Doing so can make the interface unresponsive.";

/// テキストフィールド指定
///
/// `name` のような単一フィールド、または `first:last` のような複合指定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    fields: Vec<String>,
}

impl TextField {
    /// `a:b:c` 形式の指定をパース
    pub fn parse(raw: &str) -> Result<Self> {
        let fields: Vec<String> = raw.split(':').map(|s| s.trim().to_string()).collect();
        if fields.iter().any(|f| f.is_empty()) {
            return Err(DlbError::invalid(
                "text-field",
                format!("'{}' contains an empty field name", raw),
            ));
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// 複数フィールドから合成するかどうか
    pub fn is_composite(&self) -> bool {
        self.fields.len() > 1
    }
}

/// 未解決の設定レイヤー
///
/// どの項目も省略可能。複数レイヤーを [`RawOptions::merge`] で重ねる。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawOptions {
    pub source_uri: Option<String>,
    pub value_field: Option<String>,
    pub text_field: Option<String>,
    pub title: Option<String>,
    pub use_remote_source: Option<bool>,
    pub debounce_ms: Option<u64>,
    pub horizontal_layout: Option<bool>,
    pub max_display_text_length: Option<usize>,
    pub show_move_all_button: Option<bool>,
    pub move_all_confirm_threshold: Option<usize>,
    pub confirm_message: Option<String>,
}

impl RawOptions {
    /// 組み込みの既定値レイヤー
    pub fn defaults() -> Self {
        Self {
            source_uri: Some("local.json".to_string()),
            value_field: Some("id".to_string()),
            text_field: Some("name".to_string()),
            title: Some("Example".to_string()),
            use_remote_source: Some(true),
            debounce_ms: Some(500),
            horizontal_layout: Some(false),
            max_display_text_length: Some(45),
            show_move_all_button: Some(true),
            move_all_confirm_threshold: Some(500),
            confirm_message: Some(DEFAULT_CONFIRM_MESSAGE.to_string()),
        }
    }

    /// TOML 文字列からレイヤーを読み込む
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// TOML ファイルからレイヤーを読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `over` の値を優先して重ねる
    pub fn merge(self, over: RawOptions) -> RawOptions {
        RawOptions {
            source_uri: over.source_uri.or(self.source_uri),
            value_field: over.value_field.or(self.value_field),
            text_field: over.text_field.or(self.text_field),
            title: over.title.or(self.title),
            use_remote_source: over.use_remote_source.or(self.use_remote_source),
            debounce_ms: over.debounce_ms.or(self.debounce_ms),
            horizontal_layout: over.horizontal_layout.or(self.horizontal_layout),
            max_display_text_length: over
                .max_display_text_length
                .or(self.max_display_text_length),
            show_move_all_button: over.show_move_all_button.or(self.show_move_all_button),
            move_all_confirm_threshold: over
                .move_all_confirm_threshold
                .or(self.move_all_confirm_threshold),
            confirm_message: over.confirm_message.or(self.confirm_message),
        }
    }
}

/// 解決済みのウィジェット設定
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source_uri: String,
    pub value_field: String,
    pub text_field: TextField,
    pub title: String,
    pub use_remote_source: bool,
    pub debounce_ms: u64,
    pub horizontal_layout: bool,
    pub max_display_text_length: usize,
    pub show_move_all_button: bool,
    pub move_all_confirm_threshold: usize,
    pub confirm_message: String,
}

impl Options {
    /// 全項目が揃っていることを検証して解決する
    ///
    /// 欠けている項目があれば、その項目名を含む `MissingOption` を返す。
    pub fn resolve(raw: RawOptions) -> Result<Self> {
        let source_uri = raw.source_uri.ok_or_else(|| DlbError::missing("source-uri"))?;
        let value_field = raw
            .value_field
            .ok_or_else(|| DlbError::missing("value-field"))?;
        let text_field = raw.text_field.ok_or_else(|| DlbError::missing("text-field"))?;
        let title = raw.title.ok_or_else(|| DlbError::missing("title"))?;
        let use_remote_source = raw
            .use_remote_source
            .ok_or_else(|| DlbError::missing("use-remote-source"))?;
        let debounce_ms = raw
            .debounce_ms
            .ok_or_else(|| DlbError::missing("debounce-ms"))?;
        let horizontal_layout = raw
            .horizontal_layout
            .ok_or_else(|| DlbError::missing("horizontal-layout"))?;
        let max_display_text_length = raw
            .max_display_text_length
            .ok_or_else(|| DlbError::missing("max-display-text-length"))?;
        let show_move_all_button = raw
            .show_move_all_button
            .ok_or_else(|| DlbError::missing("show-move-all-button"))?;
        let move_all_confirm_threshold = raw
            .move_all_confirm_threshold
            .ok_or_else(|| DlbError::missing("move-all-confirm-threshold"))?;
        let confirm_message = raw
            .confirm_message
            .ok_or_else(|| DlbError::missing("confirm-message"))?;

        if value_field.trim().is_empty() {
            return Err(DlbError::invalid("value-field", "must not be empty"));
        }
        if max_display_text_length == 0 {
            return Err(DlbError::invalid(
                "max-display-text-length",
                "must be greater than zero",
            ));
        }
        let text_field = TextField::parse(&text_field)?;

        Ok(Self {
            source_uri,
            value_field,
            text_field,
            title,
            use_remote_source,
            debounce_ms,
            horizontal_layout,
            max_display_text_length,
            show_move_all_button,
            move_all_confirm_threshold,
            confirm_message,
        })
    }

    /// 既定値 < 設定ファイル < 上書き の順で重ねて解決する
    pub fn load(config_path: Option<&Path>, overrides: RawOptions) -> Result<Self> {
        let mut raw = RawOptions::defaults();
        if let Some(path) = config_path {
            raw = raw.merge(RawOptions::load_from(path)?);
        }
        Self::resolve(raw.merge(overrides))
    }

    /// フィルタ適用までの待ち時間
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Options {
    fn default() -> Self {
        // 既定値レイヤーは常に全項目を持つ
        match Self::resolve(RawOptions::defaults()) {
            Ok(options) => options,
            Err(e) => unreachable!("built-in defaults must resolve: {e}"),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
