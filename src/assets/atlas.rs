//! Card art and the atlas manifest format.
//!
//! A manifest is a TOML file:
//!
//! ```toml
//! back = "back.txt"          # relative to the manifest
//!
//! [sounds]
//! flip = 1                   # terminal bells per effect
//! button = 2
//!
//! [frames]
//! the_fool = """
//! 0
//!  THE FOOL
//! """
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// A block of text art drawn on one face of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArt {
    lines: Vec<String>,
}

impl CardArt {
    /// Leading and trailing blank lines are dropped, and so is trailing
    /// whitespace on each line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        Self {
            lines: lines[first..last].to_vec(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Red-suited art is inked red when drawn.
    pub fn is_red(&self) -> bool {
        self.lines.iter().any(|l| l.contains('♥') || l.contains('♦'))
    }
}

/// Front-face art keyed by card name. Ordered so that a seeded shuffle
/// picks the same cards on every run.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    frames: BTreeMap<String, CardArt>,
}

impl Atlas {
    pub fn from_frames(frames: impl IntoIterator<Item = (String, CardArt)>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CardArt> {
        self.frames.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// A sound effect, played as a run of terminal bells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Sound {
    pub bells: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Flip,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SoundBank {
    #[serde(default = "default_flip")]
    pub flip: Sound,
    #[serde(default = "default_button")]
    pub button: Sound,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            flip: default_flip(),
            button: default_button(),
        }
    }
}

impl SoundBank {
    pub fn get(&self, id: SoundId) -> Sound {
        match id {
            SoundId::Flip => self.flip,
            SoundId::Button => self.button,
        }
    }
}

fn default_flip() -> Sound {
    Sound { bells: 1 }
}

fn default_button() -> Sound {
    Sound { bells: 2 }
}

/// On-disk manifest layout.
#[derive(Debug, Deserialize)]
pub(crate) struct Manifest {
    pub back: PathBuf,
    #[serde(default)]
    pub sounds: SoundBank,
    #[serde(default)]
    pub frames: BTreeMap<String, String>,
}
