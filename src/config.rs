use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `access_key` from the file
pub const ACCESS_KEY_ENV: &str = "IMGSEARCH_ACCESS_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_per_page() -> u32 {
    12
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

impl Config {
    /// Parse YAML and apply the environment override and range clamps
    pub fn from_yaml(text: &str, env_access_key: Option<String>) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(text).context("Invalid config file")?;

        if let Some(key) = env_access_key.filter(|k| !k.trim().is_empty()) {
            config.access_key = key;
        }

        if config.access_key.trim().is_empty() {
            anyhow::bail!(
                "No API access key configured. Set `access_key` in the config file or {}.",
                ACCESS_KEY_ENV
            );
        }

        // Unsplash caps per_page at 30
        config.per_page = config.per_page.clamp(1, 30);

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text, std::env::var(ACCESS_KEY_ENV).ok())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Determine the config file path with fallback logic
pub fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("imgsearch").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = dirs::config_dir()
        .map(|dir| dir.join("imgsearch").join("config.yaml").display().to_string())
        .unwrap_or_else(|| "~/.config/imgsearch/config.yaml".to_string());

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml("access_key: abc123\n", None).unwrap();
        assert_eq!(config.access_key, "abc123");
        assert_eq!(config.base_url, "https://api.unsplash.com");
        assert_eq!(config.per_page, 12);
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(config.image_preview_enabled);
        assert_eq!(config.image_protocol, "auto");
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_env_key_overrides_file() {
        let config = Config::from_yaml("access_key: from-file\n", Some("from-env".to_string())).unwrap();
        assert_eq!(config.access_key, "from-env");
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let config = Config::from_yaml("access_key: from-file\n", Some("  ".to_string())).unwrap();
        assert_eq!(config.access_key, "from-file");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = Config::from_yaml("per_page: 10\n", None).unwrap_err();
        assert!(err.to_string().contains(ACCESS_KEY_ENV));
    }

    #[test]
    fn test_env_key_alone_is_enough() {
        let config = Config::from_yaml("vim_mode: true\n", Some("k".to_string())).unwrap();
        assert_eq!(config.access_key, "k");
        assert!(config.vim_mode);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let config = Config::from_yaml("access_key: k\nper_page: 500\n", None).unwrap();
        assert_eq!(config.per_page, 30);

        let config = Config::from_yaml("access_key: k\nper_page: 0\n", None).unwrap();
        assert_eq!(config.per_page, 1);
    }

    #[test]
    fn test_missing_cli_path_is_an_error() {
        let err = get_config_path(Some("/definitely/not/here.yaml".to_string())).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
