//! Theme definitions and color schemes

use crate::error::ThemeError;
use crate::tokens::{ColorToken, ThemeTokens};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A complete named assignment of color values to every token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThemeDefinition", rename_all = "camelCase")]
pub struct ThemeDefinition {
    /// Display name
    pub name: String,
    /// Stable id, used as the persisted value and the root class name
    #[serde(rename = "value")]
    pub id: String,
    /// Display description
    pub description: String,
    /// Swatch colors, display only
    pub preview_colors: Vec<String>,
    /// Token values
    pub tokens: ThemeTokens,
}

impl ThemeDefinition {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        description: impl Into<String>,
        preview_colors: Vec<String>,
        tokens: ThemeTokens,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            description: description.into(),
            preview_colors,
            tokens,
        }
    }

    /// Value of a single token
    pub fn token(&self, token: ColorToken) -> &str {
        self.tokens.get(token)
    }
}

/// Wire shape of a theme before its tokens are validated.
///
/// Accepts the flat form (`previewColors`, `tokens`) and the nested form
/// (`colors.preview`, `colors.tokens`); flat fields win when both appear.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThemeDefinition {
    name: String,
    #[serde(alias = "id")]
    value: String,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "preview")]
    preview_colors: Option<Vec<String>>,
    #[serde(default)]
    tokens: Option<BTreeMap<String, String>>,
    #[serde(default)]
    colors: Option<RawThemeColors>,
}

#[derive(Deserialize, Default)]
struct RawThemeColors {
    #[serde(default)]
    preview: Vec<String>,
    #[serde(default)]
    tokens: BTreeMap<String, String>,
}

impl TryFrom<RawThemeDefinition> for ThemeDefinition {
    type Error = ThemeError;

    fn try_from(raw: RawThemeDefinition) -> Result<Self, Self::Error> {
        let colors = raw.colors.unwrap_or_default();
        let pairs = raw.tokens.unwrap_or(colors.tokens);
        let tokens = ThemeTokens::from_pairs(&raw.value, pairs)?;
        Ok(Self {
            name: raw.name,
            id: raw.value,
            description: raw.description,
            preview_colors: raw.preview_colors.unwrap_or(colors.preview),
            tokens,
        })
    }
}

/// Light or dark preference reported by the OS/browser
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// Catalog id resolved for this scheme under system detection
    pub fn id(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme `{other}` (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_json() -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = ColorToken::all()
            .map(|t| (t.key().to_string(), "oklch(0.5 0.1 120)".into()))
            .collect();
        serde_json::Value::Object(map)
    }

    #[test]
    fn deserializes_value_as_id() {
        let json = serde_json::json!({
            "name": "Demo",
            "value": "demo",
            "description": "A demo theme",
            "previewColors": ["#000", "#fff"],
            "tokens": token_json(),
        });

        let theme: ThemeDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(theme.id, "demo");
        assert_eq!(theme.preview_colors.len(), 2);
        assert_eq!(theme.token(ColorToken::Ring), "oklch(0.5 0.1 120)");
    }

    #[test]
    fn accepts_nested_colors_block() {
        let json = serde_json::json!({
            "name": "Demo",
            "value": "demo",
            "colors": {
                "preview": ["#111", "#222", "#333"],
                "tokens": token_json(),
            },
        });

        let theme: ThemeDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(theme.preview_colors, vec!["#111", "#222", "#333"]);
        assert_eq!(theme.token(ColorToken::Primary), "oklch(0.5 0.1 120)");
    }

    #[test]
    fn theme_without_tokens_is_rejected() {
        let json = serde_json::json!({ "name": "Demo", "value": "demo", "colors": {} });
        assert!(serde_json::from_value::<ThemeDefinition>(json).is_err());
    }

    #[test]
    fn rejects_incomplete_tokens() {
        let mut tokens = token_json();
        tokens.as_object_mut().unwrap().remove("primary");
        let json = serde_json::json!({ "name": "Demo", "value": "demo", "tokens": tokens });

        let err = serde_json::from_value::<ThemeDefinition>(json).unwrap_err();
        assert!(err.to_string().contains("primary"), "{err}");
    }

    #[test]
    fn color_scheme_parses_and_toggles() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert!("dim".parse::<ColorScheme>().is_err());
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
    }
}
