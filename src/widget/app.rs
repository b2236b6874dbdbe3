//! DualListBox TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `App`: ウィジェット状態 + フォーカス + 終了結果
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: 全メッセージを 1 か所で処理する状態更新関数

use super::model::{DualListBox, MoveAllOutcome, Submission};
use super::partition::Partition;
use crossterm::event::KeyCode;
use std::time::Instant;

// ============================================================================
// Control（移動ボタン）
// ============================================================================

/// 移動ボタン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// 選択分を右（Selected）へ
    MoveSelectedRight,
    /// 全件を右へ
    MoveAllRight,
    /// 選択分を左（Available）へ
    MoveSelectedLeft,
    /// 全件を左へ
    MoveAllLeft,
}

impl Control {
    /// 設定に応じて表示するボタン一覧
    pub fn visible(show_move_all: bool) -> Vec<Control> {
        if show_move_all {
            vec![
                Control::MoveAllRight,
                Control::MoveSelectedRight,
                Control::MoveSelectedLeft,
                Control::MoveAllLeft,
            ]
        } else {
            vec![Control::MoveSelectedRight, Control::MoveSelectedLeft]
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::MoveSelectedRight => " > ",
            Control::MoveAllRight => " >> ",
            Control::MoveSelectedLeft => " < ",
            Control::MoveAllLeft => " << ",
        }
    }

    /// 移動元のパーティション
    pub fn source(&self) -> Partition {
        match self {
            Control::MoveSelectedRight | Control::MoveAllRight => Partition::Available,
            Control::MoveSelectedLeft | Control::MoveAllLeft => Partition::Selected,
        }
    }

    pub fn is_move_all(&self) -> bool {
        matches!(self, Control::MoveAllRight | Control::MoveAllLeft)
    }

    /// 現在の状態でボタンが有効か
    pub fn enabled(&self, widget: &DualListBox) -> bool {
        let report = widget.recompute(self.source());
        if self.is_move_all() {
            report.move_all_enabled
        } else {
            report.move_selected_enabled
        }
    }

    fn to_msg(self) -> Msg {
        if self.is_move_all() {
            Msg::MoveAll(self.source())
        } else {
            Msg::MoveSelected(self.source())
        }
    }
}

// ============================================================================
// Focus
// ============================================================================

/// フォーカス位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// リスト
    List(Partition),
    /// フィルタ入力欄
    Filter(Partition),
    /// 移動ボタン列（表示中ボタンのインデックス）
    Controls(usize),
}

/// 終了結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(Submission),
    Cancelled,
}

// ============================================================================
// Msg
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 次の領域へフォーカス
    FocusNext,
    /// 前の領域へフォーカス
    FocusPrev,
    Up,
    Down,
    /// カーソル位置のマーク切替（選択変更）
    ToggleMark,
    /// フィルタにフォーカス移動
    FilterFocus,
    /// フィルタからフォーカス解除（リストへ戻る）
    FilterUnfocus,
    /// フィルタ文字入力
    FilterInput(char),
    /// フィルタ文字削除
    FilterBackspace,
    /// フィルタクリア
    FilterClear,
    /// 選択分を移動（移動元）
    MoveSelected(Partition),
    /// 全件移動（移動元）
    MoveAll(Partition),
    /// フォーカス中のボタンを実行
    Activate,
    /// 確認ダイアログへの応答
    Confirm(bool),
    /// タイマー（遅延フィルタの適用）
    Tick,
    /// 送信
    Submit,
    /// キャンセル
    Cancel,
}

// ============================================================================
// App
// ============================================================================

/// アプリケーション全体の状態
pub struct App {
    pub widget: DualListBox,
    pub focus: Focus,
    /// 直近の操作結果（フッター表示用）
    pub status: Option<String>,
    pub outcome: Option<Outcome>,
}

impl App {
    pub fn new(widget: DualListBox) -> Self {
        Self {
            widget,
            focus: Focus::List(Partition::Available),
            status: None,
            outcome: None,
        }
    }

    /// 表示中のボタン一覧
    pub fn controls(&self) -> Vec<Control> {
        Control::visible(self.widget.options().show_move_all_button)
    }

    /// フォーカス中（またはフィルタ入力中）のパーティション
    pub fn focused_partition(&self) -> Option<Partition> {
        match self.focus {
            Focus::List(p) | Focus::Filter(p) => Some(p),
            Focus::Controls(_) => None,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.widget.pending_confirmation().is_some() {
            // 確認ダイアログ表示中は y/n のみ
            return match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(Msg::Confirm(true))
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Msg::Confirm(false))
                }
                _ => None,
            };
        }

        match self.focus {
            Focus::Filter(p) => match key {
                KeyCode::Esc if !self.widget.filter_input(p).is_empty() => Some(Msg::FilterClear),
                KeyCode::Esc | KeyCode::Down | KeyCode::Enter => Some(Msg::FilterUnfocus),
                KeyCode::Tab => Some(Msg::FocusNext),
                KeyCode::BackTab => Some(Msg::FocusPrev),
                KeyCode::Backspace => Some(Msg::FilterBackspace),
                KeyCode::Char(c) => Some(Msg::FilterInput(c)),
                _ => None,
            },
            Focus::List(_) | Focus::Controls(_) => match key {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Cancel),
                KeyCode::Char('s') => Some(Msg::Submit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::FocusNext),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::FocusPrev),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Char(' ') => Some(Msg::ToggleMark),
                KeyCode::Char('/') => Some(Msg::FilterFocus),
                KeyCode::Enter => Some(Msg::Activate),
                KeyCode::Char('>') => Some(Msg::MoveSelected(Partition::Available)),
                KeyCode::Char('<') => Some(Msg::MoveSelected(Partition::Selected)),
                KeyCode::Char(']') => Some(Msg::MoveAll(Partition::Available)),
                KeyCode::Char('[') => Some(Msg::MoveAll(Partition::Selected)),
                _ => None,
            },
        }
    }

    fn focus_order(&self) -> [Focus; 3] {
        [
            Focus::List(Partition::Available),
            Focus::Controls(0),
            Focus::List(Partition::Selected),
        ]
    }

    fn focus_slot(&self) -> usize {
        match self.focus {
            Focus::List(Partition::Available) | Focus::Filter(Partition::Available) => 0,
            Focus::Controls(_) => 1,
            Focus::List(Partition::Selected) | Focus::Filter(Partition::Selected) => 2,
        }
    }
}

// ============================================================================
// update
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(app: &mut App, msg: Msg, now: Instant) {
    match msg {
        Msg::FocusNext => {
            let order = app.focus_order();
            app.focus = order[(app.focus_slot() + 1) % order.len()];
        }
        Msg::FocusPrev => {
            let order = app.focus_order();
            app.focus = order[(app.focus_slot() + order.len() - 1) % order.len()];
        }
        Msg::Up => move_focus_cursor(app, -1),
        Msg::Down => move_focus_cursor(app, 1),
        Msg::ToggleMark => {
            if let Focus::List(p) = app.focus {
                app.widget.toggle_mark_at_cursor(p);
            }
        }
        Msg::FilterFocus => {
            if let Focus::List(p) = app.focus {
                app.focus = Focus::Filter(p);
            }
        }
        Msg::FilterUnfocus => {
            if let Focus::Filter(p) = app.focus {
                app.focus = Focus::List(p);
            }
        }
        Msg::FilterInput(c) => edit_filter(app, now, |text| text.push(c)),
        Msg::FilterBackspace => edit_filter(app, now, |text| {
            text.pop();
        }),
        Msg::FilterClear => edit_filter(app, now, String::clear),
        Msg::MoveSelected(source) => {
            let moved = app.widget.move_selected(source);
            if moved > 0 {
                app.status = Some(moved_status(moved, source.opposite()));
            }
        }
        Msg::MoveAll(source) => match app.widget.request_move_all(source) {
            MoveAllOutcome::Moved(moved) => {
                app.status = Some(moved_status(moved, source.opposite()));
            }
            MoveAllOutcome::NeedsConfirmation | MoveAllOutcome::Disabled => {}
        },
        Msg::Activate => {
            if let Focus::Controls(idx) = app.focus {
                if let Some(control) = app.controls().get(idx).copied() {
                    if control.enabled(&app.widget) {
                        update(app, control.to_msg(), now);
                    }
                }
            }
        }
        Msg::Confirm(accepted) => {
            let Some(source) = app.widget.pending_confirmation() else {
                return;
            };
            let moved = app.widget.confirm_move_all(accepted);
            app.status = Some(if accepted {
                moved_status(moved, source.opposite())
            } else {
                "Move cancelled".to_string()
            });
        }
        Msg::Tick => {
            app.widget.tick(now);
        }
        Msg::Submit => {
            let submission = app.widget.submit();
            tracing::info!(count = submission.values.len(), "submitted");
            app.outcome = Some(Outcome::Submitted(submission));
        }
        Msg::Cancel => {
            app.outcome = Some(Outcome::Cancelled);
        }
    }
}

fn move_focus_cursor(app: &mut App, delta: isize) {
    match app.focus {
        Focus::List(p) => app.widget.move_cursor(p, delta),
        Focus::Controls(idx) => {
            let len = app.controls().len();
            if len > 0 {
                let next = idx.saturating_add_signed(delta).min(len - 1);
                app.focus = Focus::Controls(next);
            }
        }
        Focus::Filter(_) => {}
    }
}

fn edit_filter(app: &mut App, now: Instant, edit: impl FnOnce(&mut String)) {
    let Focus::Filter(p) = app.focus else {
        return;
    };
    let mut text = app.widget.filter_input(p).to_string();
    edit(&mut text);
    app.widget.set_filter_input(p, text, now);
}

fn moved_status(moved: usize, target: Partition) -> String {
    format!("Moved {} item(s) to {}", moved, target.label())
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
