use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

fn default_name() -> String {
    "selected".to_string()
}

/// 選択コントロールの一項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            selected: false,
        }
    }

    /// 選択状態を設定
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// 選択コントロール
///
/// ウィジェット構築時に所有権ごと取り込まれ、以後は直接参照されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectControl {
    /// 送信時のフィールド名
    #[serde(default = "default_name")]
    pub name: String,
    pub options: Vec<SelectOption>,
}

impl SelectControl {
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// JSON ファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 指定した値の項目を選択状態にする（既存の選択は維持）
    pub fn preselect(&mut self, values: &HashSet<String>) {
        for option in &mut self.options {
            if values.contains(&option.value) {
                option.selected = true;
            }
        }
    }
}
