use super::*;
use crate::config::{Options, RawOptions};
use crate::source::{SelectControl, SelectOption};
use std::time::Duration;

fn make_app(threshold: usize, show_move_all: bool) -> App {
    let overrides = RawOptions {
        move_all_confirm_threshold: Some(threshold),
        show_move_all_button: Some(show_move_all),
        debounce_ms: Some(300),
        ..RawOptions::default()
    };
    let options = Options::load(None, overrides).unwrap();
    let control = SelectControl::new(
        "fruits",
        vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", "Banana"),
            SelectOption::new("3", "cherry"),
        ],
    );
    App::new(DualListBox::new(control, options).unwrap())
}

fn send(app: &mut App, key: KeyCode, now: Instant) {
    if let Some(msg) = app.key_to_msg(key) {
        update(app, msg, now);
    }
}

// ============================================================================
// フォーカス
// ============================================================================

#[test]
fn focus_cycles_through_list_controls_list() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    assert_eq!(app.focus, Focus::List(Partition::Available));
    send(&mut app, KeyCode::Tab, now);
    assert_eq!(app.focus, Focus::Controls(0));
    send(&mut app, KeyCode::Tab, now);
    assert_eq!(app.focus, Focus::List(Partition::Selected));
    send(&mut app, KeyCode::Tab, now);
    assert_eq!(app.focus, Focus::List(Partition::Available));
    send(&mut app, KeyCode::BackTab, now);
    assert_eq!(app.focus, Focus::List(Partition::Selected));
}

#[test]
fn slash_focuses_filter_and_esc_returns() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Char('/'), now);
    assert_eq!(app.focus, Focus::Filter(Partition::Available));
    send(&mut app, KeyCode::Esc, now);
    assert_eq!(app.focus, Focus::List(Partition::Available));
}

// ============================================================================
// フィルタ
// ============================================================================

#[test]
fn typing_in_filter_is_debounced() {
    let mut app = make_app(500, true);
    let start = Instant::now();

    send(&mut app, KeyCode::Char('/'), start);
    for (i, c) in "app".chars().enumerate() {
        send(&mut app, KeyCode::Char(c), start + Duration::from_millis(i as u64 * 50));
    }
    assert_eq!(app.widget.filter_input(Partition::Available), "app");

    update(&mut app, Msg::Tick, start + Duration::from_millis(200));
    assert_eq!(app.widget.visible_items(Partition::Available).len(), 3);

    update(&mut app, Msg::Tick, start + Duration::from_millis(400));
    assert_eq!(app.widget.visible_items(Partition::Available).len(), 1);
}

#[test]
fn esc_in_filter_clears_text_first() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Char('/'), now);
    send(&mut app, KeyCode::Char('b'), now);
    send(&mut app, KeyCode::Esc, now);

    assert_eq!(app.focus, Focus::Filter(Partition::Available));
    assert_eq!(app.widget.filter_input(Partition::Available), "");
}

#[test]
fn q_typed_in_filter_does_not_cancel() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Char('/'), now);
    send(&mut app, KeyCode::Char('q'), now);

    assert!(app.outcome.is_none());
    assert_eq!(app.widget.filter_input(Partition::Available), "q");
}

// ============================================================================
// 移動
// ============================================================================

#[test]
fn space_then_arrow_moves_marked_item() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Down, now);
    send(&mut app, KeyCode::Char(' '), now);
    send(&mut app, KeyCode::Char('>'), now);

    assert_eq!(app.widget.values_in(Partition::Selected), vec!["2"]);
    assert_eq!(app.status.as_deref(), Some("Moved 1 item(s) to Selected"));
}

#[test]
fn activate_disabled_control_is_noop() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    // Controls(1) = MoveSelectedRight（選択変更前は無効）
    app.focus = Focus::Controls(1);
    send(&mut app, KeyCode::Enter, now);

    assert_eq!(app.widget.values_in(Partition::Available).len(), 3);
}

#[test]
fn activate_move_all_control() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    app.focus = Focus::Controls(0);
    send(&mut app, KeyCode::Enter, now);

    assert!(app.widget.values_in(Partition::Available).is_empty());
    assert_eq!(app.widget.values_in(Partition::Selected).len(), 3);
}

#[test]
fn move_all_confirmation_flow_declined() {
    let mut app = make_app(2, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Char(']'), now);
    assert_eq!(app.widget.pending_confirmation(), Some(Partition::Available));

    // 確認中は他のキーを受け付けない
    assert_eq!(app.key_to_msg(KeyCode::Char('s')), None);

    send(&mut app, KeyCode::Char('n'), now);
    assert_eq!(app.widget.pending_confirmation(), None);
    assert_eq!(app.widget.values_in(Partition::Available).len(), 3);
    assert_eq!(app.status.as_deref(), Some("Move cancelled"));
}

#[test]
fn move_all_confirmation_flow_accepted() {
    let mut app = make_app(2, true);
    let now = Instant::now();

    send(&mut app, KeyCode::Char(']'), now);
    send(&mut app, KeyCode::Char('y'), now);

    assert_eq!(app.widget.values_in(Partition::Selected), vec!["1", "2", "3"]);
    assert_eq!(app.status.as_deref(), Some("Moved 3 item(s) to Selected"));
}

#[test]
fn controls_without_move_all_button() {
    let app = make_app(500, false);
    assert_eq!(
        app.controls(),
        vec![Control::MoveSelectedRight, Control::MoveSelectedLeft]
    );
}

#[test]
fn control_cursor_clamps() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    app.focus = Focus::Controls(0);
    for _ in 0..10 {
        send(&mut app, KeyCode::Down, now);
    }
    assert_eq!(app.focus, Focus::Controls(3));
    send(&mut app, KeyCode::Up, now);
    assert_eq!(app.focus, Focus::Controls(2));
}

// ============================================================================
// 送信・キャンセル
// ============================================================================

#[test]
fn submit_returns_selected_values() {
    let mut app = make_app(500, true);
    let now = Instant::now();

    app.widget.move_partition(["3"], Partition::Selected);
    send(&mut app, KeyCode::Char('s'), now);

    assert_eq!(
        app.outcome,
        Some(Outcome::Submitted(Submission {
            name: "fruits".to_string(),
            values: vec!["3".to_string()],
        }))
    );
}

#[test]
fn q_cancels() {
    let mut app = make_app(500, true);
    send(&mut app, KeyCode::Char('q'), Instant::now());
    assert_eq!(app.outcome, Some(Outcome::Cancelled));
}
