use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const TABLE: Color = Color::Rgb(0x96, 0xd1, 0xe3);
    pub const CARD_FACE: Color = Color::Rgb(0xfa, 0xf7, 0xee);
    pub const CARD_BACK: Color = Color::Rgb(0x8b, 0x1e, 0x3f);
    pub const CARD_BACK_INK: Color = Color::Rgb(0xe8, 0xc5, 0x6b);
    pub const CARD_EDGE: Color = Color::Rgb(0x33, 0x33, 0x33);
    pub const INK_BLACK: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
    pub const INK_RED: Color = Color::Rgb(0xc0, 0x1c, 0x28);

    pub const PRIMARY_BG: Color = Color::Rgb(0x17, 0x41, 0x6a);
    pub const PRIMARY_FG: Color = Color::Rgb(0xff, 0xff, 0xff);
    pub const SECONDARY_BG: Color = Color::Rgb(0x59, 0x75, 0x92);
    pub const SECONDARY_FG: Color = Color::Rgb(0xff, 0xcc, 0x00);
    pub const HOVER_EDGE: Color = Color::Rgb(0xff, 0xff, 0xff);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::TABLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Color::Rgb(0xff, 0x00, 0x00))
            .bg(Self::TABLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_detail() -> Style {
        Style::default().fg(Color::Rgb(0x80, 0x00, 0x00)).bg(Self::TABLE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}

/// Mix `fg` over `bg` at `alpha` (0 = all `bg`, 1 = all `fg`). Only RGB
/// colours blend; named colours snap at half opacity.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| {
                (f32::from(b) + (f32::from(f) - f32::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}
