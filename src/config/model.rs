//! Configuration data model.
//!
//! Every field has a sensible default so the game runs without a config file.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetConfig {
    /// Atlas manifest. The built-in 52-card deck is used when unset.
    #[serde(default)]
    pub atlas: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    /// Tick rate of the frame scheduler.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Horizontal scale change per 60 Hz frame while flipping.
    #[serde(default = "default_flip_rate")]
    pub flip_rate: f32,
    /// Opacity change per 60 Hz frame while fading.
    #[serde(default = "default_fade_rate")]
    pub fade_rate: f32,
    #[serde(default = "default_base_scale")]
    pub base_scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            flip_rate: default_flip_rate(),
            fade_rate: default_fade_rate(),
            base_scale: default_base_scale(),
        }
    }
}

impl AnimationConfig {
    /// Rates and scale must be positive or a reveal never finishes.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            bail!("fps must be greater than 0");
        }
        for (name, value) in [
            ("flip_rate", self.flip_rate),
            ("fade_rate", self.fade_rate),
            ("base_scale", self.base_scale),
        ] {
            if value.is_nan() || value <= 0.0 {
                bail!("{name} must be greater than 0, got {value}");
            }
        }
        Ok(())
    }
}

fn default_fps() -> u32 {
    30
}

fn default_flip_rate() -> f32 {
    0.1
}

fn default_fade_rate() -> f32 {
    0.02
}

fn default_base_scale() -> f32 {
    0.5
}

/// Sizes and offsets in terminal cells.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    #[serde(default = "default_card_height")]
    pub card_height: u16,
    /// Shift between successive cards of the fan.
    #[serde(default = "default_offset_x")]
    pub offset_x: i32,
    #[serde(default = "default_offset_y")]
    pub offset_y: i32,
    /// Columns between the two buttons.
    #[serde(default = "default_button_gap")]
    pub button_gap: u16,
    /// Rows between the deck and the buttons.
    #[serde(default = "default_button_spacing")]
    pub button_spacing: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            card_height: default_card_height(),
            offset_x: default_offset_x(),
            offset_y: default_offset_y(),
            button_gap: default_button_gap(),
            button_spacing: default_button_spacing(),
        }
    }
}

fn default_card_width() -> u16 {
    13
}

fn default_card_height() -> u16 {
    9
}

fn default_offset_x() -> i32 {
    -4
}

fn default_offset_y() -> i32 {
    1
}

fn default_button_gap() -> u16 {
    2
}

fn default_button_spacing() -> u16 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfig {
    /// Fixed seed for deck selection; random per run when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardflip")
        .join("cardflip.log")
}

fn default_log_level() -> String {
    "info".into()
}
