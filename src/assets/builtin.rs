//! The standard 52-card atlas used when no manifest is configured.

use super::atlas::{Atlas, CardArt, SoundBank};
use super::Assets;

const RANKS: &[(&str, &str)] = &[
    ("ace", "A"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("jack", "J"),
    ("queen", "Q"),
    ("king", "K"),
];

const SUITS: &[(&str, char)] = &[
    ("spades", '♠'),
    ("hearts", '♥'),
    ("diamonds", '♦'),
    ("clubs", '♣'),
];

const BACK: &str = "\
╲╱╲╱╲╱╲╱╲╱╲
╱╲╱╲╱╲╱╲╱╲╱
╲╱╲╱╲╱╲╱╲╱╲
╱╲╱╲╱╲╱╲╱╲╱
╲╱╲╱╲╱╲╱╲╱╲
╱╲╱╲╱╲╱╲╱╲╱
╲╱╲╱╲╱╲╱╲╱╲";

/// Eleven columns by seven rows: rank and suit in opposite corners with a
/// large pip in the middle.
fn face(rank: &str, suit: char) -> String {
    let corner = format!("{rank}{suit}");
    [
        format!("{corner:<11}"),
        String::new(),
        String::new(),
        format!("{:^11}", suit),
        String::new(),
        String::new(),
        format!("{corner:>11}"),
    ]
    .join("\n")
}

pub fn atlas() -> Atlas {
    Atlas::from_frames(SUITS.iter().flat_map(|&(suit_name, suit)| {
        RANKS.iter().map(move |&(rank_name, rank)| {
            (
                format!("{rank_name}_of_{suit_name}"),
                CardArt::from_text(&face(rank, suit)),
            )
        })
    }))
}

pub fn assets() -> Assets {
    Assets {
        atlas: atlas(),
        back: CardArt::from_text(BACK),
        sounds: SoundBank::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_atlas_has_full_deck() {
        let atlas = atlas();
        assert_eq!(atlas.len(), 52);
        assert!(atlas.get("queen_of_hearts").is_some());
        assert!(atlas.get("ten_of_clubs").is_some());
    }

    #[test]
    fn test_builtin_faces_fit_the_default_card() {
        let atlas = atlas();
        for name in atlas.names() {
            let art = atlas.get(name).unwrap();
            assert!(art.width() <= 11, "{name} is {} wide", art.width());
            assert_eq!(art.height(), 7, "{name}");
        }
        let back = assets().back;
        assert_eq!(back.width(), 11);
        assert_eq!(back.height(), 7);
    }

    #[test]
    fn test_red_suits() {
        let atlas = atlas();
        assert!(atlas.get("ace_of_diamonds").unwrap().is_red());
        assert!(!atlas.get("ace_of_spades").unwrap().is_red());
    }
}
