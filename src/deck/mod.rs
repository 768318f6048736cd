//! A fanned hand of face-down cards, revealed one at a time.

pub mod card;
pub mod ticker;

use crate::assets::Atlas;
use crate::config::LayoutConfig;
use card::{CardView, Rates, Reveal};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use ticker::{Animated, AnimationId, Step, Ticker};

/// Number of cards dealt into a deck.
pub const HAND_SIZE: usize = 5;

/// Drawable area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// An axis-aligned box in cells. May extend past the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Bounds {
            x,
            y,
            width: (right - x).clamp(0, i32::from(u16::MAX)) as u16,
            height: (bottom - y).clamp(0, i32::from(u16::MAX)) as u16,
        }
    }
}

/// How the fan is arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanLayout {
    pub card_width: u16,
    pub card_height: u16,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Rows kept free under the fan's centre line.
    pub reserve_bottom: u16,
}

impl FanLayout {
    pub fn new(config: &LayoutConfig, reserve_bottom: u16) -> Self {
        Self {
            card_width: config.card_width,
            card_height: config.card_height,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
            reserve_bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealNext {
    /// The card at this index started animating.
    Started(usize),
    /// A reveal is still animating.
    InFlight,
    Exhausted,
}

#[derive(Debug)]
pub struct CardDeck {
    /// Reveal order. The first card is drawn on top.
    cards: Vec<CardView>,
    current_index: usize,
    in_flight: Option<usize>,
    layout: FanLayout,
    rates: Rates,
}

impl CardDeck {
    /// Deal up to [`HAND_SIZE`] distinct cards from `atlas` and fan them
    /// around the centre of `viewport`.
    pub fn new(
        atlas: &Atlas,
        viewport: Viewport,
        layout: FanLayout,
        rates: Rates,
        base_scale: f32,
        rng: &mut StdRng,
    ) -> Self {
        let mut keys: Vec<&str> = atlas.names().collect();
        keys.shuffle(rng);
        keys.truncate(HAND_SIZE);

        let mut cards: Vec<CardView> = keys
            .into_iter()
            .map(|key| CardView::new(key, base_scale))
            .collect();
        place(&mut cards, viewport, &layout);
        // Dealt last means drawn last, so it is revealed first.
        cards.reverse();

        tracing::debug!(
            cards = ?cards.iter().map(CardView::key).collect::<Vec<_>>(),
            "dealt deck"
        );

        Self {
            cards,
            current_index: 0,
            in_flight: None,
            layout,
            rates,
        }
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Cards bottom-most first.
    pub fn draw_order(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.cards.len()
    }

    pub fn is_revealing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }

    /// Start revealing the next card and register it with `ticker`. The
    /// index advances once [`CardDeck::advance`] sees it complete.
    pub fn reveal_next(&mut self, ticker: &mut Ticker) -> RevealNext {
        if self.is_exhausted() {
            return RevealNext::Exhausted;
        }
        if self.in_flight.is_some() {
            return RevealNext::InFlight;
        }
        // Cards at or past the index have not been revealed while nothing is in flight.
        let index = self.current_index;
        let started = self.cards[index].reveal();
        debug_assert_eq!(started, Reveal::Started);
        self.in_flight = Some(index);
        ticker.add(index);
        tracing::debug!(index, card = self.cards[index].key(), "reveal started");
        RevealNext::Started(index)
    }

    /// Step running animations by `delta` frames. Returns the index of the
    /// card whose reveal finished on this tick, if any.
    pub fn advance(&mut self, ticker: &mut Ticker, delta: f32) -> Option<usize> {
        let mut finished = None;
        for id in ticker.tick(self, delta) {
            if self.in_flight == Some(id) {
                self.in_flight = None;
                self.current_index += 1;
                tracing::debug!(index = id, "reveal completed");
                finished = Some(id);
            }
        }
        finished
    }

    /// Re-centre the fan after the viewport changed size.
    pub fn relayout(&mut self, viewport: Viewport) {
        self.cards.reverse();
        place(&mut self.cards, viewport, &self.layout);
        self.cards.reverse();
    }

    /// Where a card is drawn, narrowed to its current flip scale.
    pub fn card_bounds(&self, card: &CardView) -> Bounds {
        let width = (f32::from(self.layout.card_width) * card.motion().width_fraction()).round();
        let width = width as u16;
        let height = self.layout.card_height;
        Bounds {
            x: card.x - i32::from(width) / 2,
            y: card.y - i32::from(height) / 2,
            width,
            height,
        }
    }

    /// Box covering the whole fan at rest.
    pub fn bounds(&self) -> Option<Bounds> {
        self.cards
            .iter()
            .map(|card| Bounds {
                x: card.x - i32::from(self.layout.card_width) / 2,
                y: card.y - i32::from(self.layout.card_height) / 2,
                width: self.layout.card_width,
                height: self.layout.card_height,
            })
            .reduce(|a, b| a.union(&b))
    }
}

impl Animated for CardDeck {
    fn step(&mut self, id: AnimationId, delta: f32) -> Step {
        let rates = self.rates;
        // Ids only come from this deck's reveal_next, and the ticker is
        // cleared whenever a deck is replaced.
        match self.cards.get_mut(id) {
            Some(card) => card.step(delta, &rates),
            None => Step::Completed,
        }
    }
}

/// Position cards in dealing order: card `i` sits at
/// `centre + (i - n/2) * offset` on each axis.
fn place(cards: &mut [CardView], viewport: Viewport, layout: &FanLayout) {
    let n = cards.len() as f32;
    let centre_x = i32::from(viewport.width) / 2;
    let centre_y = i32::from(viewport.height.saturating_sub(layout.reserve_bottom)) / 2;
    for (i, card) in cards.iter_mut().enumerate() {
        let slot = i as f32 - n / 2.0;
        card.x = centre_x + (slot * layout.offset_x as f32).floor() as i32;
        card.y = centre_y + (slot * layout.offset_y as f32).floor() as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::card::Face;
    use super::*;
    use crate::assets::builtin;
    use crate::assets::CardArt;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const VIEWPORT: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    fn layout() -> FanLayout {
        FanLayout::new(&LayoutConfig::default(), 4)
    }

    fn deal(atlas: &Atlas, seed: u64) -> CardDeck {
        let mut rng = StdRng::seed_from_u64(seed);
        CardDeck::new(atlas, VIEWPORT, layout(), Rates::default(), 0.5, &mut rng)
    }

    fn small_atlas(n: usize) -> Atlas {
        Atlas::from_frames((0..n).map(|i| (format!("card{i}"), CardArt::from_text("x"))))
    }

    /// Drive the ticker with fixed deltas until the in-flight reveal ends.
    fn finish_reveal(deck: &mut CardDeck, ticker: &mut Ticker, delta: f32) -> usize {
        for _ in 0..10_000 {
            if let Some(index) = deck.advance(ticker, delta) {
                return index;
            }
        }
        panic!("reveal never finished");
    }

    #[test]
    fn test_deals_five_distinct_cards() {
        let atlas = builtin::atlas();
        for seed in 0..20 {
            let deck = deal(&atlas, seed);
            let keys: HashSet<&str> = deck.cards().iter().map(CardView::key).collect();
            assert_eq!(deck.len(), HAND_SIZE);
            assert_eq!(keys.len(), HAND_SIZE);
            assert!(keys.iter().all(|k| atlas.get(k).is_some()));
        }
    }

    #[test]
    fn test_small_atlas_deals_everything() {
        let deck = deal(&small_atlas(3), 1);
        assert_eq!(deck.len(), 3);
        let deck = deal(&small_atlas(0), 1);
        assert!(deck.cards().is_empty());
        assert!(deck.is_exhausted());
        assert!(deck.bounds().is_none());
    }

    #[test]
    fn test_same_seed_same_hand() {
        let atlas = builtin::atlas();
        let a: Vec<String> = deal(&atlas, 9).cards().iter().map(|c| c.key().to_string()).collect();
        let b: Vec<String> = deal(&atlas, 9).cards().iter().map(|c| c.key().to_string()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fan_positions() {
        let deck = deal(&small_atlas(5), 3);
        // Dealing order is the reverse of reveal order.
        let xs: Vec<i32> = deck.draw_order().map(|c| c.x).collect();
        let ys: Vec<i32> = deck.draw_order().map(|c| c.y).collect();
        assert_eq!(xs, vec![50, 46, 42, 38, 34]);
        assert_eq!(ys, vec![7, 8, 9, 10, 11]);
        // The top card is the first to be revealed.
        assert_eq!(deck.cards()[0].x, 34);
    }

    #[test]
    fn test_reveal_all_in_order() {
        let mut deck = deal(&builtin::atlas(), 5);
        let mut ticker = Ticker::new();

        for expected in 0..HAND_SIZE {
            assert_eq!(deck.reveal_next(&mut ticker), RevealNext::Started(expected));
            assert!(deck.is_revealing());
            assert_eq!(finish_reveal(&mut deck, &mut ticker, 3.0), expected);
            assert_eq!(deck.current_index(), expected + 1);
            assert!(ticker.is_idle());
        }

        assert_eq!(deck.current_index(), HAND_SIZE);
        for card in deck.cards() {
            assert!(card.is_revealed());
            assert_eq!(card.face(), Face::Front);
            assert!(!card.is_visible());
        }
        assert_eq!(deck.reveal_next(&mut ticker), RevealNext::Exhausted);
        assert_eq!(deck.current_index(), HAND_SIZE);
        assert!(ticker.is_idle());
    }

    #[test]
    fn test_reveal_while_in_flight_is_ignored() {
        let mut deck = deal(&builtin::atlas(), 5);
        let mut ticker = Ticker::new();
        deck.reveal_next(&mut ticker);
        assert_eq!(deck.reveal_next(&mut ticker), RevealNext::InFlight);
        assert_eq!(ticker.len(), 1);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_index_waits_for_completion() {
        let mut deck = deal(&builtin::atlas(), 5);
        let mut ticker = Ticker::new();
        deck.reveal_next(&mut ticker);
        assert_eq!(deck.advance(&mut ticker, 1.0), None);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.cards()[1].face(), Face::Back);
    }

    #[test]
    fn test_card_bounds_shrink_while_flipping() {
        let mut deck = deal(&small_atlas(5), 3);
        let mut ticker = Ticker::new();
        let top = deck.card_bounds(&deck.cards()[0]);
        assert_eq!(top.width, 13);

        deck.reveal_next(&mut ticker);
        deck.advance(&mut ticker, 2.5);
        let narrowed = deck.card_bounds(&deck.cards()[0]);
        assert!(narrowed.width < top.width);
        assert_eq!(narrowed.height, top.height);
    }

    #[test]
    fn test_bounds_cover_fan() {
        let deck = deal(&small_atlas(5), 3);
        let bounds = deck.bounds().unwrap();
        assert_eq!(bounds.x, 28);
        assert_eq!(bounds.right(), 57);
        assert_eq!(bounds.y, 3);
        assert_eq!(bounds.bottom(), 16);
    }

    #[test]
    fn test_relayout_keeps_reveal_order() {
        let mut deck = deal(&small_atlas(5), 3);
        let first = deck.cards()[0].key().to_string();
        deck.relayout(Viewport {
            width: 120,
            height: 40,
        });
        assert_eq!(deck.cards()[0].key(), first);
        assert_eq!(deck.cards()[0].x, 54);
    }
}
