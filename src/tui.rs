//! TUI (Terminal User Interface) の実行
//!
//! ratatui/crossterm でウィジェットを描画し、キー入力とフィルタの遅延タイマーを
//! メッセージとして `update` に流す。

use crate::error::{DlbError, Result};
use crate::widget::{update, view, App, DualListBox, Msg, Outcome};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

/// 予約がないときの入力待ち時間
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI を実行し、送信またはキャンセルの結果を返す
pub fn run(widget: DualListBox) -> Result<Outcome> {
    // ターミナル設定
    terminal::enable_raw_mode().map_err(|e| DlbError::Terminal(e.to_string()))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| DlbError::Terminal(e.to_string()))?;

    let backend = CrosstermBackend::new(stdout());
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => {
            let mut app = App::new(widget);
            event_loop(&mut terminal, &mut app)
        }
        Err(e) => Err(DlbError::Terminal(e.to_string())),
    };

    // ターミナルを復元（ループがエラーでも必ず行う）
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<Outcome> {
    loop {
        terminal.draw(|f| view(f, app))?;

        let timeout = app
            .widget
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = app.key_to_msg(key.code) {
                        update(app, msg, Instant::now());
                    }
                }
            }
        }
        update(app, Msg::Tick, Instant::now());

        if let Some(outcome) = app.outcome.take() {
            return Ok(outcome);
        }
    }
}
