use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Console configuration loaded from a TOML file
///
/// ```toml
/// log_filter = "todo_manager=info"
/// prompt = "> "
/// show_banner = false
/// seed_file = "tasks.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Prompt printed before each command
    pub prompt: String,
    /// Print the welcome banner on startup
    pub show_banner: bool,
    /// Task records to import on startup
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "todo_manager=warn".to_string(),
            prompt: "todo> ".to_string(),
            show_banner: true,
            seed_file: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`
    ///
    /// A missing file yields the default configuration. A relative
    /// `seed_file` is resolved against the directory holding the config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(seed) = &config.seed_file
            && seed.is_relative()
            && let Some(dir) = path.parent()
        {
            config.seed_file = Some(dir.join(seed));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(r#"prompt = "> ""#).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_filter, "todo_manager=warn");
        assert!(config.show_banner);
        assert_eq!(config.seed_file, None);
    }
}
