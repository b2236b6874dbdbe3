//! データソース
//!
//! ウィジェットの初期データを用意する。
//!
//! - `control`: 既存の選択コントロール（JSON ファイル）
//! - `records`: 取得したレコード列から選択肢への変換
//! - `remote`: `source-uri` からのレコード取得

mod control;
mod records;
mod remote;

pub use control::{SelectControl, SelectOption};
pub use records::records_to_options;
pub use remote::{fetch_records, load_control};
