//! Color tokens for theming
//!
//! The token set is closed: every theme supplies a value for each
//! [`ColorToken`], and every token maps to exactly one CSS custom property
//! through a static table. Token keys coming from user data are resolved
//! against that table when a catalog is built, so nothing is converted or
//! guessed at apply time.

use crate::error::ThemeError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Semantic color token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorToken {
    // Surfaces
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // Brand colors
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,

    // Chrome
    Border,
    Input,
    Ring,

    // Sidebar
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,
}

/// (token, camel-case key, CSS variable) in declaration order.
const TOKEN_TABLE: [(ColorToken, &str, &str); ColorToken::COUNT] = [
    (ColorToken::Background, "background", "--background"),
    (ColorToken::Foreground, "foreground", "--foreground"),
    (ColorToken::Card, "card", "--card"),
    (ColorToken::CardForeground, "cardForeground", "--card-foreground"),
    (ColorToken::Popover, "popover", "--popover"),
    (ColorToken::PopoverForeground, "popoverForeground", "--popover-foreground"),
    (ColorToken::Primary, "primary", "--primary"),
    (ColorToken::PrimaryForeground, "primaryForeground", "--primary-foreground"),
    (ColorToken::Secondary, "secondary", "--secondary"),
    (ColorToken::SecondaryForeground, "secondaryForeground", "--secondary-foreground"),
    (ColorToken::Muted, "muted", "--muted"),
    (ColorToken::MutedForeground, "mutedForeground", "--muted-foreground"),
    (ColorToken::Accent, "accent", "--accent"),
    (ColorToken::AccentForeground, "accentForeground", "--accent-foreground"),
    (ColorToken::Destructive, "destructive", "--destructive"),
    (ColorToken::DestructiveForeground, "destructiveForeground", "--destructive-foreground"),
    (ColorToken::Border, "border", "--border"),
    (ColorToken::Input, "input", "--input"),
    (ColorToken::Ring, "ring", "--ring"),
    (ColorToken::Sidebar, "sidebar", "--sidebar"),
    (ColorToken::SidebarForeground, "sidebarForeground", "--sidebar-foreground"),
    (ColorToken::SidebarPrimary, "sidebarPrimary", "--sidebar-primary"),
    (ColorToken::SidebarPrimaryForeground, "sidebarPrimaryForeground", "--sidebar-primary-foreground"),
    (ColorToken::SidebarAccent, "sidebarAccent", "--sidebar-accent"),
    (ColorToken::SidebarAccentForeground, "sidebarAccentForeground", "--sidebar-accent-foreground"),
    (ColorToken::SidebarBorder, "sidebarBorder", "--sidebar-border"),
    (ColorToken::SidebarRing, "sidebarRing", "--sidebar-ring"),
];

impl ColorToken {
    /// Number of tokens in the fixed set
    pub const COUNT: usize = 27;

    /// All tokens in declaration order
    pub fn all() -> impl ExactSizeIterator<Item = ColorToken> {
        TOKEN_TABLE.iter().map(|(token, _, _)| *token)
    }

    /// Camel-case key used in theme data (`cardForeground`)
    pub fn key(self) -> &'static str {
        TOKEN_TABLE[self as usize].1
    }

    /// CSS custom property name (`--card-foreground`)
    pub fn css_var(self) -> &'static str {
        TOKEN_TABLE[self as usize].2
    }

    /// Look up a token by its camel-case key
    pub fn from_key(key: &str) -> Option<ColorToken> {
        TOKEN_TABLE
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(token, _, _)| *token)
    }

    /// Whether custom accents re-tint this token
    pub fn is_accent_bearing(self) -> bool {
        crate::accent::ACCENT_TOKENS.contains(&self)
    }
}

impl Display for ColorToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of color values, one per [`ColorToken`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    values: [String; ColorToken::COUNT],
}

impl ThemeTokens {
    /// Build a token set by computing each value
    pub fn from_fn(mut f: impl FnMut(ColorToken) -> String) -> Self {
        let mut tokens = ColorToken::all();
        Self {
            values: std::array::from_fn(|_| {
                // `all()` yields exactly COUNT tokens
                let token = tokens.next().unwrap_or(ColorToken::Background);
                f(token)
            }),
        }
    }

    /// Build a token set from camel-case keyed pairs.
    ///
    /// Rejects keys outside the fixed set and reports the first token (in
    /// declaration order) left without a value.
    pub fn from_pairs<I, K, V>(theme: &str, pairs: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut slots: [Option<String>; ColorToken::COUNT] = std::array::from_fn(|_| None);

        for (key, value) in pairs {
            let key = key.as_ref();
            let token = ColorToken::from_key(key).ok_or_else(|| ThemeError::UnknownToken {
                theme: theme.to_string(),
                token: key.to_string(),
            })?;
            slots[token as usize] = Some(value.into());
        }

        if let Some(token) = ColorToken::all().find(|t| slots[*t as usize].is_none()) {
            return Err(ThemeError::MissingToken {
                theme: theme.to_string(),
                token: token.key(),
            });
        }

        Ok(Self {
            values: slots.map(Option::unwrap_or_default),
        })
    }

    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &str {
        &self.values[token as usize]
    }

    /// Replace a single value
    pub fn set(&mut self, token: ColorToken, value: impl Into<String>) {
        self.values[token as usize] = value.into();
    }

    /// Iterate `(token, value)` pairs in declaration order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ColorToken, &str)> + '_ {
        ColorToken::all().map(move |token| (token, self.get(token)))
    }
}

impl Serialize for ThemeTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorToken::COUNT))?;
        for (token, value) in self.iter() {
            map.serialize_entry(token.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kebab(key: &str) -> String {
        let mut out = String::from("--");
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn table_matches_declaration_order() {
        for (index, (token, _, _)) in TOKEN_TABLE.iter().enumerate() {
            assert_eq!(*token as usize, index, "{token:?} is out of place");
        }
        assert_eq!(ColorToken::all().len(), ColorToken::COUNT);
    }

    #[test]
    fn css_vars_follow_kebab_case_of_keys() {
        for token in ColorToken::all() {
            assert_eq!(token.css_var(), kebab(token.key()));
        }
        assert_eq!(ColorToken::CardForeground.css_var(), "--card-foreground");
        assert_eq!(
            ColorToken::SidebarPrimaryForeground.css_var(),
            "--sidebar-primary-foreground"
        );
    }

    #[test]
    fn from_key_round_trips() {
        for token in ColorToken::all() {
            assert_eq!(ColorToken::from_key(token.key()), Some(token));
        }
        assert_eq!(ColorToken::from_key("card-foreground"), None);
    }

    #[test]
    fn from_pairs_rejects_unknown_keys() {
        let mut pairs: Vec<(String, String)> = ColorToken::all()
            .map(|t| (t.key().to_string(), "oklch(0.5 0.1 200)".to_string()))
            .collect();
        pairs.push(("brand".to_string(), "red".to_string()));

        let err = ThemeTokens::from_pairs("demo", pairs).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { ref token, .. } if token == "brand"));
    }

    #[test]
    fn from_pairs_reports_missing_token() {
        let pairs: Vec<(&str, &str)> = ColorToken::all()
            .filter(|t| *t != ColorToken::SidebarRing)
            .map(|t| (t.key(), "#000"))
            .collect();

        let err = ThemeTokens::from_pairs("demo", pairs).unwrap_err();
        assert!(matches!(err, ThemeError::MissingToken { token: "sidebarRing", .. }));
    }

    #[test]
    fn serializes_as_camel_case_map() {
        let tokens = ThemeTokens::from_fn(|t| format!("v-{}", t.key()));
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json["cardForeground"], "v-cardForeground");
        assert_eq!(json.as_object().unwrap().len(), ColorToken::COUNT);
    }
}
