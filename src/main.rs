mod app;
mod assets;
mod config;
mod deck;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    match result {
        Ok(state) => {
            // Load failures were only shown on the alternate screen
            if let Some(detail) = state.load_failure() {
                eprintln!("Error: {}", detail);
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<AppState> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let size = terminal.size()?;
    let mut state = AppState::new(cfg.clone(), size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn frame clock
    let tick_tx = event_tx.clone();
    let period = Duration::from_secs_f64(1.0 / f64::from(cfg.animation.fps.max(1)));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        let mut last = interval.tick().await;
        loop {
            let now = interval.tick().await;
            let elapsed = now.duration_since(last);
            last = now;
            if tick_tx.send(AppEvent::Tick { elapsed }).is_err() {
                break;
            }
        }
    });

    // Load assets off the event loop; the loading screen shows meanwhile
    let asset_tx = event_tx.clone();
    let asset_cfg = cfg.assets.clone();
    tokio::spawn(async move {
        let result = assets::load(&asset_cfg).await;
        let _ = asset_tx.send(AppEvent::AssetsLoaded(result));
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::PlaySound(id) => {
                    if let Some(sound) = state.sound(id) {
                        let bells = vec![b'\x07'; usize::from(sound.bells)];
                        let _ = io::stdout().write_all(&bells);
                        let _ = io::stdout().flush();
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(state)
}
