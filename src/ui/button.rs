use crate::app::button::{Button, ButtonStyle};
use crate::ui::layout::clip;
use crate::ui::theme::{blend, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, button: &Button, hovered: bool) {
    let Some(rect) = clip(button.area, area) else {
        return;
    };

    let (bg, fg) = match button.style {
        ButtonStyle::Primary => (Theme::PRIMARY_BG, Theme::PRIMARY_FG),
        ButtonStyle::Secondary => (Theme::SECONDARY_BG, Theme::SECONDARY_FG),
    };
    let bg = blend(bg, Theme::TABLE, button.opacity);
    let fg = blend(fg, Theme::TABLE, button.opacity);
    let edge = if hovered && button.enabled {
        Theme::HOVER_EDGE
    } else {
        bg
    };

    let mut label = Style::default().fg(fg).bg(bg);
    if button.style == ButtonStyle::Primary {
        label = label.add_modifier(Modifier::BOLD);
    }
    if !button.enabled {
        label = label.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(edge).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(Span::styled(button.label, label))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, rect);
}
