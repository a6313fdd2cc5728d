//! Custom accent overrides
//!
//! An accent is a user-chosen `(hue, chroma)` pair layered over whichever
//! theme is active. Only the accent-bearing tokens are re-tinted, and each
//! keeps the lightness of the theme's own value so contrast against the
//! theme's surfaces is preserved.

use crate::tokens::ColorToken;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Tokens re-tinted by a custom accent
pub const ACCENT_TOKENS: [ColorToken; 4] = [
    ColorToken::Primary,
    ColorToken::Ring,
    ColorToken::SidebarPrimary,
    ColorToken::SidebarRing,
];

/// Lightness used when a token value carries no parseable `oklch(` lightness
pub const DEFAULT_LIGHTNESS: &str = "0.65";

/// Upper bound of the documented hue range
pub const MAX_HUE: f64 = 360.0;

/// Upper bound of the documented chroma range
pub const MAX_CHROMA: f64 = 0.4;

/// User-chosen hue/chroma pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccentOverride {
    /// Hue angle, documented range `[0, 360]`
    pub hue: f64,
    /// Chroma, documented range `[0, 0.4]`
    pub chroma: f64,
}

impl Default for AccentOverride {
    fn default() -> Self {
        Self {
            hue: 265.0,
            chroma: 0.25,
        }
    }
}

impl AccentOverride {
    pub fn new(hue: f64, chroma: f64) -> Self {
        Self { hue, chroma }
    }

    /// Copy with both channels forced into their documented ranges.
    ///
    /// The controller never calls this; consumers that mirror slider bounds do.
    pub fn clamped(self) -> Self {
        Self {
            hue: clamp_channel(self.hue, MAX_HUE),
            chroma: clamp_channel(self.chroma, MAX_CHROMA),
        }
    }
}

fn clamp_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Lightness is ASCII digits and dots only
fn lightness_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"oklch\(([0-9.]+)").expect("lightness pattern is valid"))
}

/// Lightness text of the first `oklch(` group in `value`, verbatim
pub fn extract_lightness(value: &str) -> Option<&str> {
    lightness_pattern()
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Re-tint a single color value, keeping its lightness
pub fn accent_value(original: &str, accent: AccentOverride) -> String {
    let lightness = extract_lightness(original).unwrap_or(DEFAULT_LIGHTNESS);
    format!("oklch({} {} {})", lightness, accent.chroma, accent.hue)
}
