use crate::app::action::Action;
use crate::app::button::ButtonId;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::AssetsLoaded(result) => {
            state.on_assets_loaded(result);
            vec![]
        }
        AppEvent::Tick { elapsed } => {
            state.on_tick(elapsed);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => vec![Action::Quit],
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => vec![Action::Quit],
        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => state.press(ButtonId::Reveal),
        (KeyCode::Char('r'), _) => state.press(ButtonId::Restart),
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match state.button_at(mouse.column, mouse.row) {
                Some(id) => state.press(id),
                None => vec![],
            }
        }
        MouseEventKind::Moved => {
            state.hover(mouse.column, mouse.row);
            vec![]
        }
        _ => vec![],
    }
}
