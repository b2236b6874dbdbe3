//! 選択肢アイテム
//!
//! ウィジェットが保持する一件分のエントリ。生成後に変化するのは `visible` のみで、
//! 所属パーティションはウィジェット側が管理する。

/// 表示テキストを切り詰めたときの末尾
const ELLIPSIS: &str = "...";

/// 選択肢アイテム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 送信値（全アイテムで一意）
    pub value: String,
    /// 表示テキスト（長すぎる場合は切り詰め済み）
    pub display_text: String,
    /// 元のテキスト
    pub original_text: String,
    /// フィルタ結果の可視状態
    pub visible: bool,
}

impl Item {
    /// 新しいアイテムを作成
    ///
    /// `original_text` が `max_len` 文字を超える場合、先頭 `max_len` 文字に `...` を付けて表示する。
    pub fn new(value: impl Into<String>, text: impl Into<String>, max_len: usize) -> Self {
        let original_text = text.into();
        let display_text = truncate(&original_text, max_len);
        Self {
            value: value.into(),
            display_text,
            original_text,
            visible: true,
        }
    }

    /// 表示テキストが切り詰められているかどうか
    pub fn is_truncated(&self) -> bool {
        self.display_text != self.original_text
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((end, _)) => format!("{}{}", &text[..end], ELLIPSIS),
        None => text.to_string(),
    }
}
