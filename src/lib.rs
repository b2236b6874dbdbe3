//! デュアルリストボックス
//!
//! 「選択可能」と「選択済み」の 2 つのリスト間でアイテムを移動するウィジェット。
//! 状態は [`widget::DualListBox`] が持ち、端末描画は [`tui`] が担う。

pub mod config;
pub mod env;
pub mod error;
pub mod http;
pub mod item;
pub mod logging;
pub mod source;
pub mod tui;
pub mod widget;
