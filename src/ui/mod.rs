mod button;
mod card;
mod layout;
mod status_bar;
mod theme;

use crate::app::button::ButtonId;
use crate::app::state::{AppState, Screen, Table};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::TABLE)),
        app_layout.table,
    );

    match &state.screen {
        Screen::Loading(message) => {
            render_message(frame, app_layout.table, message, Theme::loading(), None);
        }
        Screen::Failed { message, detail } => {
            render_message(
                frame,
                app_layout.table,
                message,
                Theme::error(),
                Some(detail.as_str()),
            );
        }
        Screen::Table(table) => render_table(frame, app_layout.table, table, state.hovered),
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_table(frame: &mut Frame, area: Rect, table: &Table, hovered: Option<ButtonId>) {
    for view in table.deck.draw_order() {
        card::render(frame, area, &table.deck, view, &table.assets);
    }
    for control in table.buttons() {
        button::render(frame, area, control, hovered == Some(control.id));
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style, detail: Option<&str>) {
    let row = layout::centered_row(area, Span::raw(message).width() as u16, 0);
    frame.render_widget(Paragraph::new(Span::styled(message, style)), row);

    if let Some(detail) = detail {
        let row = layout::centered_row(area, Span::raw(detail).width() as u16, 2);
        frame.render_widget(
            Paragraph::new(Span::styled(detail, Theme::error_detail())),
            row,
        );
    }
}
