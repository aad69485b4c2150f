use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::QueryCodec;

/// How absent components are shown by front ends (`[display]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Placeholder printed for a component the URL does not have.
    pub missing: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            missing: "-".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Query codec policy; missing keys fall back to the codec defaults.
    #[serde(default)]
    pub query: QueryCodec,
    #[serde(default)]
    pub display: DisplayConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlkitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = UrlkitConfig::default();
        assert!(cfg.query.strip_leading_question_mark);
        assert!(cfg.query.encode_values);
        assert_eq!(cfg.display.missing, "-");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlkitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: UrlkitConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UrlkitConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [query]
            encode_values = false

            [display]
            missing = "<none>"
        "#;
        let cfg: UrlkitConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.query.encode_values);
        assert!(cfg.query.strip_leading_question_mark);
        assert_eq!(cfg.display.missing, "<none>");
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[query]\nstrip_leading_question_mark = false\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(!cfg.query.strip_leading_question_mark);
        assert_eq!(cfg.display, DisplayConfig::default());
    }

    #[test]
    fn load_from_invalid_file_names_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[query\n").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
