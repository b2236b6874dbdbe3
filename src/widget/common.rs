//! 共通 UI ユーティリティ

use ratatui::prelude::Rect;

/// 画面中央に配置したダイアログ領域を計算
pub fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
