use crate::assets::{Assets, CardArt};
use crate::deck::card::{CardView, Face};
use crate::deck::CardDeck;
use crate::ui::layout::clip;
use crate::ui::theme::{blend, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, deck: &CardDeck, card: &CardView, assets: &Assets) {
    if !card.is_visible() {
        return;
    }
    let Some(rect) = clip(deck.card_bounds(card), area) else {
        return;
    };

    let alpha = card.motion().alpha;
    let (art, paper, ink) = match card.face() {
        Face::Back => (Some(&assets.back), Theme::CARD_BACK, Theme::CARD_BACK_INK),
        Face::Front => {
            let art = assets.atlas.get(card.key());
            let ink = if art.is_some_and(CardArt::is_red) {
                Theme::INK_RED
            } else {
                Theme::INK_BLACK
            };
            (art, Theme::CARD_FACE, ink)
        }
    };
    let paper = blend(paper, Theme::TABLE, alpha);
    let ink = blend(ink, Theme::TABLE, alpha);
    let edge = blend(Theme::CARD_EDGE, Theme::TABLE, alpha);
    let base = Style::default().bg(paper);

    frame.render_widget(Clear, rect);

    // Nearly edge-on: no room for a border.
    if rect.width < 3 {
        frame.render_widget(Block::default().style(base), rect);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(edge).bg(paper))
        .style(base);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let Some(art) = art else {
        return;
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Centre the art; when the card is narrower than the art, show its
    // middle columns.
    let art_width = art.width();
    let shown = art_width.min(usize::from(inner.width));
    let skip = (art_width - shown) / 2;
    let pad_x = (usize::from(inner.width) - shown) / 2;
    let pad_y = usize::from(inner.height).saturating_sub(art.height()) / 2;

    let lines: Vec<Line> = art
        .lines()
        .iter()
        .map(|line| Line::from(crop(line, skip, shown)))
        .collect();
    let target = Rect::new(
        inner.x + pad_x as u16,
        inner.y + pad_y as u16,
        shown as u16,
        inner.height - pad_y as u16,
    );
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(ink).bg(paper)),
        target,
    );
}

/// Columns `skip..skip + width` of `line`, padded with spaces to `width`.
/// Wide characters straddling either edge are dropped.
fn crop(line: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0;
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if col >= skip && col + w <= skip + width {
            out.push(ch);
            used += w;
        }
        col += w;
        if col >= skip + width {
            break;
        }
    }
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
