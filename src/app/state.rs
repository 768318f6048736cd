use crate::app::action::Action;
use crate::app::button::{layout_pair, Button, ButtonId, ButtonStyle, BUTTON_HEIGHT};
use crate::assets::{AssetError, Assets, Sound, SoundId};
use crate::config::AppConfig;
use crate::deck::card::Rates;
use crate::deck::ticker::{frames, Ticker};
use crate::deck::{CardDeck, FanLayout, RevealNext, Viewport};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::time::Duration;

/// Rows at the bottom of the terminal taken by the status bar.
pub const STATUS_ROWS: u16 = 1;

pub const LOADING_MESSAGE: &str = "Loading assets...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load assets";

/// Everything that exists once assets are loaded.
#[derive(Debug)]
pub struct Table {
    pub assets: Assets,
    pub deck: CardDeck,
    pub reveal: Button,
    pub restart: Button,
}

impl Table {
    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::Reveal => &self.reveal,
            ButtonId::Restart => &self.restart,
        }
    }

    pub fn buttons(&self) -> [&Button; 2] {
        [&self.reveal, &self.restart]
    }

    /// Reveal is usable while cards remain and none is animating; Restart
    /// only once every card is revealed.
    fn settle_buttons(&mut self) {
        let exhausted = self.deck.is_exhausted();
        self.reveal.set_enabled(!exhausted && !self.deck.is_revealing());
        self.restart.set_enabled(exhausted);
    }
}

#[derive(Debug)]
pub enum Screen {
    Loading(String),
    Failed { message: String, detail: String },
    Table(Box<Table>),
}

pub struct AppState {
    pub config: AppConfig,
    pub viewport: Viewport,
    pub screen: Screen,
    pub ticker: Ticker,
    pub hovered: Option<ButtonId>,
    pub should_quit: bool,
    pub dirty: bool,
    rng: StdRng,
}

impl AppState {
    /// Starts on the loading screen; assets arrive through
    /// [`AppState::on_assets_loaded`].
    pub fn new(config: AppConfig, width: u16, height: u16) -> Self {
        let seed = config.game.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(seed, "deck seed");
        Self {
            config,
            viewport: viewport_for(width, height),
            screen: Screen::Loading(LOADING_MESSAGE.to_string()),
            ticker: Ticker::new(),
            hovered: None,
            should_quit: false,
            dirty: true,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.screen {
            Screen::Table(table) => Some(table.as_ref()),
            _ => None,
        }
    }

    pub fn on_assets_loaded(&mut self, result: Result<Assets, AssetError>) {
        match result {
            Ok(assets) => self.setup_table(assets),
            Err(err) => self.show_error(err),
        }
        self.dirty = true;
    }

    fn setup_table(&mut self, assets: Assets) {
        tracing::info!(frames = assets.atlas.len(), "assets loaded");
        let deck = self.create_deck(&assets);
        let (reveal, restart) = self.create_buttons(&deck);
        self.screen = Screen::Table(Box::new(Table {
            assets,
            deck,
            reveal,
            restart,
        }));
    }

    fn show_error(&mut self, err: AssetError) {
        tracing::error!(error = %err, "asset loading failed");
        self.screen = Screen::Failed {
            message: LOAD_FAILED_MESSAGE.to_string(),
            detail: err.to_string(),
        };
    }

    /// Deal a fresh deck for the current viewport. Any running animation
    /// belonged to the old deck and is dropped.
    fn create_deck(&mut self, assets: &Assets) -> CardDeck {
        self.ticker.clear();
        let layout = FanLayout::new(&self.config.layout, self.button_band());
        let deck = CardDeck::new(
            &assets.atlas,
            self.viewport,
            layout,
            Rates::from(&self.config.animation),
            self.config.animation.base_scale,
            &mut self.rng,
        );
        tracing::info!(cards = deck.len(), "deck created");
        deck
    }

    fn create_buttons(&self, deck: &CardDeck) -> (Button, Button) {
        let mut reveal = Button::new(ButtonId::Reveal, "Reveal", ButtonStyle::Primary);
        let mut restart = Button::new(ButtonId::Restart, "Restart", ButtonStyle::Secondary);
        reveal.set_enabled(!deck.is_exhausted());
        restart.set_enabled(false);
        self.layout_buttons(deck, &mut reveal, &mut restart);
        (reveal, restart)
    }

    fn layout_buttons(&self, deck: &CardDeck, reveal: &mut Button, restart: &mut Button) {
        layout_pair(
            reveal,
            restart,
            deck.bounds(),
            self.viewport,
            self.config.layout.button_spacing,
            self.config.layout.button_gap,
        );
    }

    fn button_band(&self) -> u16 {
        BUTTON_HEIGHT + self.config.layout.button_spacing
    }

    pub fn press(&mut self, id: ButtonId) -> Vec<Action> {
        match id {
            ButtonId::Reveal => self.press_reveal(),
            ButtonId::Restart => self.press_restart(),
        }
    }

    fn press_reveal(&mut self) -> Vec<Action> {
        let Screen::Table(table) = &mut self.screen else {
            return vec![];
        };
        if !table.reveal.enabled || table.deck.is_exhausted() {
            return vec![];
        }
        table.reveal.set_enabled(false);
        let actions = vec![Action::PlaySound(SoundId::Flip)];
        match table.deck.reveal_next(&mut self.ticker) {
            RevealNext::Started(index) => {
                tracing::info!(index, card = table.deck.cards()[index].key(), "revealing card");
            }
            RevealNext::InFlight | RevealNext::Exhausted => {
                table.settle_buttons();
            }
        }
        self.dirty = true;
        actions
    }

    fn press_restart(&mut self) -> Vec<Action> {
        let enabled = self.table().is_some_and(|t| t.restart.enabled);
        if !enabled {
            return vec![];
        }
        let Screen::Table(table) = std::mem::replace(&mut self.screen, Screen::Loading(String::new()))
        else {
            return vec![];
        };
        let Table { assets, .. } = *table;
        tracing::info!("restarting");
        self.setup_table(assets);
        self.dirty = true;
        vec![Action::PlaySound(SoundId::Button)]
    }

    /// Advance running animations by the wall-clock time since the last tick.
    pub fn on_tick(&mut self, elapsed: Duration) {
        let Screen::Table(table) = &mut self.screen else {
            return;
        };
        if self.ticker.is_idle() {
            return;
        }
        self.dirty = true;
        if let Some(index) = table.deck.advance(&mut self.ticker, frames(elapsed)) {
            tracing::info!(index, remaining = table.deck.remaining(), "card revealed");
            table.settle_buttons();
        }
    }

    /// `width` and `height` are the full terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = viewport_for(width, height);
        if let Screen::Table(table) = &mut self.screen {
            table.deck.relayout(self.viewport);
            layout_pair(
                &mut table.reveal,
                &mut table.restart,
                table.deck.bounds(),
                self.viewport,
                self.config.layout.button_spacing,
                self.config.layout.button_gap,
            );
        }
        self.dirty = true;
    }

    /// Enabled button under the pointer, if any.
    pub fn button_at(&self, col: u16, row: u16) -> Option<ButtonId> {
        self.table()?
            .buttons()
            .into_iter()
            .find(|b| b.enabled && b.contains(col, row))
            .map(|b| b.id)
    }

    pub fn hover(&mut self, col: u16, row: u16) {
        let hovered = self.table().and_then(|t| {
            t.buttons()
                .into_iter()
                .find(|b| b.contains(col, row))
                .map(|b| b.id)
        });
        if hovered != self.hovered {
            self.hovered = hovered;
            self.dirty = true;
        }
    }

    /// The bell pattern for a sound effect, unless sound is muted.
    pub fn sound(&self, id: SoundId) -> Option<Sound> {
        if !self.config.sound.enabled {
            return None;
        }
        self.table().map(|t| t.assets.sounds.get(id))
    }

    /// Why assets failed to load, if the failure screen is showing.
    pub fn load_failure(&self) -> Option<String> {
        match &self.screen {
            Screen::Failed { message, detail } => Some(format!("{message}: {detail}")),
            _ => None,
        }
    }

    pub fn status_line(&self) -> String {
        match &self.screen {
            Screen::Loading(_) => "Loading...".to_string(),
            Screen::Failed { .. } => "Press q to quit".to_string(),
            Screen::Table(table) => {
                let deck = &table.deck;
                format!("Cards left: {}/{}", deck.remaining(), deck.len())
            }
        }
    }
}

fn viewport_for(width: u16, height: u16) -> Viewport {
    Viewport {
        width,
        height: height.saturating_sub(STATUS_ROWS),
    }
}
