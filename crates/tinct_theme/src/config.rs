//! Controller configuration (tinct.toml)

use crate::accent::AccentOverride;
use crate::apply::DEFAULT_ATTRIBUTE;
use crate::error::{Result, ThemeError};
use crate::store::{PanelPosition, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options supplied when a controller is constructed
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme shown when nothing is persisted
    pub default_theme: String,
    /// Persistence namespace
    pub storage_key: String,
    /// Whether consumers should render the floating switcher
    pub enable_floating_switcher: bool,
    /// Floating panel corner used until the user moves it
    pub float_position: PanelPosition,
    /// Follow the OS/browser light-dark preference
    pub enable_system: bool,
    /// Suppress CSS transitions while a theme is written
    pub disable_transition_on_change: bool,
    /// Root attribute stamped with the active theme id
    pub attribute: String,
    /// Custom catalog file replacing the built-in presets
    pub themes: Option<PathBuf>,
    /// Accent used before the user picks one
    pub default_custom_accent: AccentOverride,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "dark".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            enable_floating_switcher: true,
            float_position: PanelPosition::BottomRight,
            enable_system: false,
            disable_transition_on_change: false,
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            themes: None,
            default_custom_accent: AccentOverride::default(),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load a config file. Relative `themes` paths resolve against the
    /// file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&src)?;

        if let (Some(themes), Some(dir)) = (config.themes.as_mut(), path.parent()) {
            if themes.is_relative() {
                *themes = dir.join(&*themes);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let src = r#"
default_theme = "nord"
storage_key = "app-theme"
enable_floating_switcher = false
float_position = "top-left"
enable_system = true
disable_transition_on_change = true
attribute = "data-mode"
themes = "brand.toml"

[default_custom_accent]
hue = 120
chroma = 0.1
"#;
        let config = ThemeConfig::from_toml_str(src).unwrap();
        assert_eq!(config.default_theme, "nord");
        assert_eq!(config.storage_key, "app-theme");
        assert!(!config.enable_floating_switcher);
        assert_eq!(config.float_position, PanelPosition::TopLeft);
        assert!(config.enable_system);
        assert!(config.disable_transition_on_change);
        assert_eq!(config.attribute, "data-mode");
        assert_eq!(config.themes, Some(PathBuf::from("brand.toml")));
        assert_eq!(config.default_custom_accent, AccentOverride::new(120.0, 0.1));
    }

    #[test]
    fn rejects_unknown_position() {
        assert!(ThemeConfig::from_toml_str("float_position = \"middle\"").is_err());
    }
}
