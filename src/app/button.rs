use crate::deck::{Bounds, Viewport};
use unicode_width::UnicodeWidthStr;

/// Buttons are one text row between two border rows.
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Reveal,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Large, bold, dark blue.
    Primary,
    /// Compact, yellow text on slate.
    Secondary,
}

impl ButtonStyle {
    fn padding(self) -> u16 {
        match self {
            ButtonStyle::Primary => 3,
            ButtonStyle::Secondary => 2,
        }
    }
}

/// What the pointer should look like over a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub id: ButtonId,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub enabled: bool,
    pub opacity: f32,
    pub cursor: Cursor,
    pub area: Bounds,
}

impl Button {
    pub fn new(id: ButtonId, label: &'static str, style: ButtonStyle) -> Self {
        let width = label.width() as u16 + style.padding() * 2 + 2;
        Self {
            id,
            label,
            style,
            enabled: true,
            opacity: 1.0,
            cursor: Cursor::Pointer,
            area: Bounds {
                x: 0,
                y: 0,
                width,
                height: BUTTON_HEIGHT,
            },
        }
    }

    /// Enabling controls interactivity, opacity and cursor together.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.opacity = if enabled { 1.0 } else { 0.5 };
        self.cursor = if enabled {
            Cursor::Pointer
        } else {
            Cursor::NotAllowed
        };
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(i32::from(col), i32::from(row))
    }
}

/// Place the two buttons side by side, centred horizontally, `spacing` rows
/// under `deck` and `gap` columns apart. The row is kept on screen.
pub fn layout_pair(
    left: &mut Button,
    right: &mut Button,
    deck: Option<Bounds>,
    viewport: Viewport,
    spacing: u16,
    gap: u16,
) {
    let total = i32::from(left.area.width) + i32::from(gap) + i32::from(right.area.width);
    let x = (i32::from(viewport.width) - total) / 2;
    let below_deck = deck.map_or(i32::from(viewport.height) / 2, |b| b.bottom()) + i32::from(spacing);
    let tallest = i32::from(left.area.height.max(right.area.height));
    let y = below_deck.min(i32::from(viewport.height) - tallest).max(0);

    left.area.x = x.max(0);
    left.area.y = y;
    right.area.x = left.area.right() + i32::from(gap);
    right.area.y = y + (i32::from(left.area.height) - i32::from(right.area.height)) / 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    #[test]
    fn test_styles_have_distinct_sizes() {
        let reveal = Button::new(ButtonId::Reveal, "Reveal", ButtonStyle::Primary);
        let restart = Button::new(ButtonId::Restart, "Restart", ButtonStyle::Secondary);
        assert_eq!(reveal.area.width, 6 + 6 + 2);
        assert_eq!(restart.area.width, 7 + 4 + 2);
        assert_eq!(reveal.area.height, BUTTON_HEIGHT);
    }

    #[test]
    fn test_set_enabled_dims() {
        let mut button = Button::new(ButtonId::Restart, "Restart", ButtonStyle::Secondary);
        button.set_enabled(false);
        assert!(!button.enabled);
        assert_eq!(button.opacity, 0.5);
        assert_eq!(button.cursor, Cursor::NotAllowed);
        button.set_enabled(true);
        assert_eq!(button.opacity, 1.0);
        assert_eq!(button.cursor, Cursor::Pointer);
    }

    #[test]
    fn test_layout_below_deck() {
        let mut reveal = Button::new(ButtonId::Reveal, "Reveal", ButtonStyle::Primary);
        let mut restart = Button::new(ButtonId::Restart, "Restart", ButtonStyle::Secondary);
        let deck = Bounds {
            x: 28,
            y: 3,
            width: 29,
            height: 13,
        };
        layout_pair(&mut reveal, &mut restart, Some(deck), VIEWPORT, 1, 2);

        assert_eq!(reveal.area.y, 17);
        assert_eq!(restart.area.y, 17);
        assert_eq!(reveal.area.x, (80 - (14 + 2 + 13)) / 2);
        assert_eq!(restart.area.x, reveal.area.right() + 2);
        assert!(reveal.contains(reveal.area.x as u16, 18));
        assert!(!reveal.contains(restart.area.x as u16, 18));
    }

    #[test]
    fn test_layout_stays_on_screen() {
        let mut reveal = Button::new(ButtonId::Reveal, "Reveal", ButtonStyle::Primary);
        let mut restart = Button::new(ButtonId::Restart, "Restart", ButtonStyle::Secondary);
        let deck = Bounds {
            x: 0,
            y: 10,
            width: 10,
            height: 20,
        };
        layout_pair(&mut reveal, &mut restart, Some(deck), VIEWPORT, 1, 2);
        assert_eq!(reveal.area.bottom(), 24);
    }
}
