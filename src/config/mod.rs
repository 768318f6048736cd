pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AnimationConfig, AppConfig, AssetConfig, LayoutConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardflip")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents, &path)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .animation
        .validate()
        .with_context(|| format!("Invalid [animation] section in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_accepts_defaults() {
        let cfg = parse_config("", Path::new("config.toml")).unwrap();
        assert_eq!(cfg.animation.fps, 30);
    }

    #[test]
    fn test_parse_config_rejects_zero_flip_rate() {
        let err = parse_config("[animation]\nflip_rate = 0.0\n", Path::new("config.toml"))
            .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("config.toml"));
        assert!(chain.contains("flip_rate"));
    }

    #[test]
    fn test_parse_config_rejects_negative_base_scale() {
        let err = parse_config("[animation]\nbase_scale = -0.5\n", Path::new("config.toml"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("base_scale"));
    }
}
