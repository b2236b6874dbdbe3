//! フィルタロジック
//!
//! パーティション内のアイテムをフィルタテキストで絞り込む。

use regex::{Regex, RegexBuilder};

/// コンパイル済みのフィルタ
#[derive(Debug, Clone)]
pub enum Matcher {
    /// 空パターン: 全件一致
    All,
    /// case-insensitive な正規表現
    Pattern(Regex),
    /// 不正なパターン: 一件も一致しない
    Nothing,
}

impl Matcher {
    /// フィルタテキストをコンパイルする
    ///
    /// - 前後の空白は除去する
    /// - 空なら全件一致
    /// - 正規表現として不正なら「一致なし」に落とす（エラーにはしない）
    pub fn compile(pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Matcher::All;
        }

        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Matcher::Pattern(re),
            Err(e) => {
                tracing::debug!(pattern, error = %e, "invalid filter pattern, matching nothing");
                Matcher::Nothing
            }
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Nothing => false,
        }
    }

    /// パターンが不正だったかどうか
    pub fn is_invalid(&self) -> bool {
        matches!(self, Matcher::Nothing)
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
