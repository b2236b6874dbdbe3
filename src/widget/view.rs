//! DualListBox の view（描画）

use super::app::{App, Control, Focus};
use super::common::dialog_rect;
use super::partition::Partition;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

/// ボタン列の幅
const CONTROL_COLUMN_WIDTH: u16 = 8;

/// 画面を描画
pub fn view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // リスト
            Constraint::Length(1), // 詳細 / ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    if app.widget.options().horizontal_layout {
        view_horizontal(f, app, chunks[0]);
    } else {
        view_vertical(f, app, chunks[0]);
    }

    view_footer(f, app, chunks[1]);

    let help = Paragraph::new(
        " Tab: focus | j/k: move | Space: mark | /: filter | > < ] [: move | s: submit | q: cancel",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);

    if app.widget.pending_confirmation().is_some() {
        view_confirm(f, app);
    }
}

/// 左右にリスト、中央に縦並びのボタン列
fn view_vertical(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(CONTROL_COLUMN_WIDTH),
            Constraint::Fill(1),
        ])
        .split(area);

    view_partition(f, app, Partition::Available, columns[0], &[]);

    let controls = app.controls();
    let mut constraints = vec![Constraint::Fill(1)];
    constraints.extend(controls.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Fill(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(columns[1]);
    for (i, control) in controls.iter().enumerate() {
        view_control(f, app, *control, i, rows[i + 1]);
    }

    view_partition(f, app, Partition::Selected, columns[2], &[]);
}

/// 各リストの上にボタン行
fn view_horizontal(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(1)])
        .split(area);

    for (partition, column) in Partition::all().into_iter().zip(columns.iter()) {
        let controls: Vec<(usize, Control)> = app
            .controls()
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.source() == partition)
            .collect();
        view_partition(f, app, partition, *column, &controls);
    }
}

/// パーティション 1 つ分（タイトル・フィルタ・ボタン行・リスト）
fn view_partition(
    f: &mut Frame,
    app: &App,
    partition: Partition,
    area: Rect,
    controls: &[(usize, Control)],
) {
    let widget = &app.widget;
    let report = widget.recompute(partition);

    let mut constraints = vec![
        Constraint::Length(1), // タイトル
        Constraint::Length(3), // フィルタ
    ];
    if !controls.is_empty() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(3));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // タイトル
    let title = Line::from(vec![
        Span::styled(
            format!("{} {}", partition.label(), widget.options().title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" - showing {}", report.visible_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), rows[0]);

    // フィルタ
    let filter_focused = app.focus == Focus::Filter(partition);
    let filter_text = if filter_focused {
        format!("{}_", widget.filter_input(partition))
    } else if widget.filter_input(partition).is_empty() {
        "Filter".to_string()
    } else {
        widget.filter_input(partition).to_string()
    };
    let filter_style = if filter_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let filter = Paragraph::new(filter_text)
        .block(Block::default().borders(Borders::ALL).border_style(filter_style));
    f.render_widget(filter, rows[1]);

    // ボタン行（横並びレイアウト時のみ）
    let list_area = if controls.is_empty() {
        rows[2]
    } else {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(controls.iter().map(|_| Constraint::Fill(1)))
            .split(rows[2]);
        for ((idx, control), cell) in controls.iter().zip(cells.iter()) {
            view_control(f, app, *control, *idx, *cell);
        }
        rows[3]
    };

    // リスト
    let items: Vec<ListItem> = widget
        .visible_items(partition)
        .into_iter()
        .map(|item| {
            let mark = if widget.is_marked(partition, &item.value) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(format!("{} {}", mark, item.display_text))
        })
        .collect();

    let list_focused = app.focus == Focus::List(partition);
    let border_style = if list_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if list_focused {
        state.select(widget.cursor(partition));
    }
    f.render_stateful_widget(list, list_area, &mut state);
}

/// 移動ボタン
fn view_control(f: &mut Frame, app: &App, control: Control, index: usize, area: Rect) {
    let enabled = control.enabled(&app.widget);
    let focused = app.focus == Focus::Controls(index);

    let mut style = if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let button = Paragraph::new(control.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

/// 切り詰めたテキストの全文、または直近の操作結果
fn view_footer(f: &mut Frame, app: &App, area: Rect) {
    let full_text = app
        .focused_partition()
        .and_then(|p| app.widget.cursor_item(p))
        .filter(|item| item.is_truncated())
        .map(|item| item.original_text.clone());

    let line = match (full_text, &app.status) {
        (Some(text), _) => Paragraph::new(format!(" {}", text)),
        (None, Some(status)) => {
            Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Cyan))
        }
        (None, None) => Paragraph::new(""),
    };
    f.render_widget(line, area);
}

/// 「全件移動」の確認ダイアログ
fn view_confirm(f: &mut Frame, app: &App) {
    let area = dialog_rect(60, 7, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(app.widget.options().confirm_message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[y] Yes   [n] No",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let dialog = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Options, RawOptions};
    use crate::source::{SelectControl, SelectOption};
    use crate::widget::model::DualListBox;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_app(horizontal: bool, threshold: usize) -> App {
        let overrides = RawOptions {
            title: Some("Fruits".to_string()),
            horizontal_layout: Some(horizontal),
            move_all_confirm_threshold: Some(threshold),
            ..RawOptions::default()
        };
        let options = Options::load(None, overrides).unwrap();
        let control = SelectControl::new(
            "fruits",
            vec![
                SelectOption::new("1", "Apple"),
                SelectOption::new("2", "Banana").with_selected(true),
            ],
        );
        App::new(DualListBox::new(control, options).unwrap())
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| view(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_vertical_layout_shows_titles_and_counts() {
        let screen = render(&make_app(false, 500));
        assert!(screen.contains("Available Fruits - showing 1"));
        assert!(screen.contains("Selected Fruits - showing 1"));
        assert!(screen.contains("[ ] Apple"));
        assert!(screen.contains("[ ] Banana"));
        assert!(screen.contains(">>"));
    }

    #[test]
    fn test_horizontal_layout_renders_buttons() {
        let screen = render(&make_app(true, 500));
        assert!(screen.contains("Available Fruits"));
        assert!(screen.contains("<<"));
    }

    #[test]
    fn test_confirm_dialog_rendered() {
        let mut app = make_app(false, 0);
        app.widget.request_move_all(Partition::Available);
        let screen = render(&app);
        assert!(screen.contains("Confirm"));
        assert!(screen.contains("[y] Yes"));
    }
}
