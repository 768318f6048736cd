use crate::app::button::{ButtonId, Cursor};
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEYS: &str = "[Space] reveal  [r] restart  [q] quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![
        Span::styled(
            " cardflip ",
            Style::default()
                .fg(Color::Green)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()),
    ];

    if let Some(hint) = hover_hint(state) {
        parts.push(Span::styled(format!("| {} ", hint), Theme::status_hint()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + KEYS.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", KEYS), Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn hover_hint(state: &AppState) -> Option<&'static str> {
    let id = state.hovered?;
    let button = state.table()?.button(id);
    Some(match (id, button.cursor) {
        (ButtonId::Reveal, Cursor::Pointer) => "Click to reveal the next card",
        (ButtonId::Reveal, Cursor::NotAllowed) => "Nothing to reveal right now",
        (ButtonId::Restart, Cursor::Pointer) => "Click to deal a new hand",
        (ButtonId::Restart, Cursor::NotAllowed) => "Reveal every card first",
    })
}
