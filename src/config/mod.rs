pub mod model;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

pub use model::{is_valid_timestamp_format, AppConfig, LoggingConfig, DEFAULT_TIMESTAMP_FORMAT};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mylist")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    if !is_valid_timestamp_format(&config.ui.timestamp_format) {
        bail!(
            "Invalid ui.timestamp_format {:?} in {}",
            config.ui.timestamp_format,
            path.display()
        );
    }
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mylist-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let config = load_config_from(&dir.join("config.toml")).unwrap();
        assert_eq!(config.props.global_title.as_deref(), Some("My List"));
        assert_eq!(config.ui.palette.len(), 4);
    }

    #[test]
    fn test_save_then_load_keeps_props() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.props.buttons_color = Some("blue".to_string());
        config.props.global_title = Some("Chores".to_string());
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        let props = loaded.props.to_props().unwrap();
        assert_eq!(props.buttons_color.as_deref(), Some("blue"));
        assert_eq!(props.global_title, "Chores");
        assert_eq!(props.list_items, config.props.to_props().unwrap().list_items);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_toml_names_the_file() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[props\nglobal_title = ").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{}", err).contains("config.toml"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_timestamp_format_is_rejected() {
        let dir = scratch_dir("timestamp");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[ui]\ntimestamp_format = \"%Q\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("timestamp_format"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
