//! Card art, back face and sound effects, loaded once at startup.

pub mod atlas;
pub mod builtin;
pub mod error;

use crate::config::AssetConfig;
use std::path::Path;

pub use atlas::{Atlas, CardArt, Sound, SoundBank, SoundId};
pub use error::AssetError;

#[derive(Debug, Clone)]
pub struct Assets {
    pub atlas: Atlas,
    pub back: CardArt,
    pub sounds: SoundBank,
}

/// Load the configured atlas, or the built-in deck when none is set.
pub async fn load(config: &AssetConfig) -> Result<Assets, AssetError> {
    match &config.atlas {
        Some(path) => load_manifest(path).await,
        None => Ok(builtin::assets()),
    }
}

/// Read a manifest and the back face it points at. The back path is taken
/// relative to the manifest's directory.
pub async fn load_manifest(path: &Path) -> Result<Assets, AssetError> {
    let text = read(path).await?;
    let manifest: atlas::Manifest = toml::from_str(&text).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let atlas = Atlas::from_frames(
        manifest
            .frames
            .into_iter()
            .map(|(name, art)| (name, CardArt::from_text(&art))),
    );
    if atlas.is_empty() {
        return Err(AssetError::EmptyAtlas {
            path: path.to_path_buf(),
        });
    }

    let back_path = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&manifest.back);
    let back = read(&back_path).await?;
    tracing::info!(
        manifest = %path.display(),
        frames = atlas.len(),
        "loaded card atlas"
    );

    Ok(Assets {
        atlas,
        back: CardArt::from_text(&back),
        sounds: manifest.sounds,
    })
}

async fn read(path: &Path) -> Result<String, AssetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })
}
