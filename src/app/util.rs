use ratatui::layout::Rect;

/// `width_percent` of the area wide, `height` rows tall, centred.
pub(super) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let width = width.max(30.min(area.width)).min(area.width);
    let height = height.max(3.min(area.height)).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

/// Moves `scroll` the least amount so that `pos` falls inside `[scroll, scroll + span)`.
pub(super) fn scroll_to_show(scroll: usize, pos: usize, span: usize) -> usize {
    if span == 0 || pos < scroll {
        pos
    } else if pos >= scroll + span {
        pos + 1 - span
    } else {
        scroll
    }
}
