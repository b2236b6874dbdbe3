//! デュアルリストボックス
//!
//! ## モジュール構成
//!
//! - `model`: ウィジェット状態（アイテムストア・パーティション・フィルタ）
//! - `app`: フォーカスとメッセージ、`update`
//! - `view`: 画面描画
//! - `filter` / `debounce`: フィルタのコンパイルと遅延適用

mod app;
mod common;
mod debounce;
mod filter;
mod model;
mod partition;
mod view;

pub use app::{update, App, Control, Focus, Msg, Outcome};
pub use debounce::Debouncer;
pub use filter::Matcher;
pub use model::{DualListBox, MoveAllOutcome, PartitionReport, Submission};
pub use partition::Partition;
pub use view::view;
