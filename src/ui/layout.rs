use crate::app::state::STATUS_ROWS;
use crate::deck::Bounds;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub table: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),              // Table
            Constraint::Length(STATUS_ROWS), // Status bar
        ])
        .split(area);

    AppLayout {
        table: chunks[0],
        status_bar: chunks[1],
    }
}

/// The part of `bounds` that falls inside `area`, if any.
pub fn clip(bounds: Bounds, area: Rect) -> Option<Rect> {
    let left = bounds.x.max(i32::from(area.x));
    let top = bounds.y.max(i32::from(area.y));
    let right = bounds.right().min(i32::from(area.right()));
    let bottom = bounds.bottom().min(i32::from(area.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// A one-row rect of `width` centred in `area`, `dy` rows below its middle.
pub fn centered_row(area: Rect, width: u16, dy: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = (area.y + area.height / 2 + dy).min(area.bottom().saturating_sub(1));
    Rect::new(x, y, width, 1)
}
