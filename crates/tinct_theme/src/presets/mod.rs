//! Built-in theme presets.
//!
//! Each preset is described by a compact base palette; the popover, sidebar
//! and foreground-on-color tokens are filled in from it so every preset
//! supplies the full token set.

use crate::theme::ThemeDefinition;
use crate::tokens::{ColorToken, ThemeTokens};

/// Foreground used on destructive surfaces across all presets.
const DESTRUCTIVE_FOREGROUND: &str = "oklch(0.985 0 0)";

#[derive(Clone, Copy)]
struct BasePalette {
    background: &'static str,
    foreground: &'static str,
    card: &'static str,
    primary: &'static str,
    primary_foreground: &'static str,
    secondary: &'static str,
    muted: &'static str,
    muted_foreground: &'static str,
    accent: &'static str,
    destructive: &'static str,
    border: &'static str,
    ring: &'static str,
}

struct PresetSpec {
    name: &'static str,
    id: &'static str,
    description: &'static str,
    palette: BasePalette,
}

/// Build every built-in preset, in catalog order.
pub(crate) fn builtin_themes() -> Vec<ThemeDefinition> {
    PRESETS.iter().map(build_theme).collect()
}

/// Ids of the built-in presets, in catalog order.
pub fn preset_ids() -> impl ExactSizeIterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}

fn build_theme(spec: &PresetSpec) -> ThemeDefinition {
    let base = spec.palette;
    ThemeDefinition::new(
        spec.name,
        spec.id,
        spec.description,
        vec![
            base.background.to_string(),
            base.primary.to_string(),
            base.accent.to_string(),
            base.foreground.to_string(),
        ],
        build_tokens(base),
    )
}

fn build_tokens(base: BasePalette) -> ThemeTokens {
    ThemeTokens::from_fn(|token| {
        let value = match token {
            ColorToken::Background => base.background,
            ColorToken::Foreground
            | ColorToken::CardForeground
            | ColorToken::PopoverForeground
            | ColorToken::SecondaryForeground
            | ColorToken::AccentForeground
            | ColorToken::SidebarForeground
            | ColorToken::SidebarAccentForeground => base.foreground,
            ColorToken::Card | ColorToken::Popover | ColorToken::Sidebar => base.card,
            ColorToken::Primary | ColorToken::SidebarPrimary => base.primary,
            ColorToken::PrimaryForeground | ColorToken::SidebarPrimaryForeground => {
                base.primary_foreground
            }
            ColorToken::Secondary => base.secondary,
            ColorToken::Muted => base.muted,
            ColorToken::MutedForeground => base.muted_foreground,
            ColorToken::Accent | ColorToken::SidebarAccent => base.accent,
            ColorToken::Destructive => base.destructive,
            ColorToken::DestructiveForeground => DESTRUCTIVE_FOREGROUND,
            ColorToken::Border | ColorToken::Input | ColorToken::SidebarBorder => base.border,
            ColorToken::Ring | ColorToken::SidebarRing => base.ring,
        };
        value.to_string()
    })
}

const PRESETS: &[PresetSpec] = &[
    PresetSpec {
        name: "Dark",
        id: "dark",
        description: "Neutral dark theme with an indigo accent",
        palette: BasePalette {
            background: "oklch(0.145 0 0)",
            foreground: "oklch(0.985 0 0)",
            card: "oklch(0.205 0 0)",
            primary: "oklch(0.65 0.25 265)",
            primary_foreground: "oklch(0.985 0 0)",
            secondary: "oklch(0.269 0 0)",
            muted: "oklch(0.269 0 0)",
            muted_foreground: "oklch(0.708 0 0)",
            accent: "oklch(0.269 0 0)",
            destructive: "oklch(0.704 0.191 22.216)",
            border: "oklch(0.275 0 0)",
            ring: "oklch(0.65 0.25 265)",
        },
    },
    PresetSpec {
        name: "Light",
        id: "light",
        description: "Clean light theme with an indigo accent",
        palette: BasePalette {
            background: "oklch(1 0 0)",
            foreground: "oklch(0.145 0 0)",
            card: "oklch(1 0 0)",
            primary: "oklch(0.55 0.22 265)",
            primary_foreground: "oklch(0.985 0 0)",
            secondary: "oklch(0.97 0 0)",
            muted: "oklch(0.97 0 0)",
            muted_foreground: "oklch(0.556 0 0)",
            accent: "oklch(0.97 0 0)",
            destructive: "oklch(0.577 0.245 27.325)",
            border: "oklch(0.922 0 0)",
            ring: "oklch(0.55 0.22 265)",
        },
    },
    PresetSpec {
        name: "Midnight",
        id: "midnight",
        description: "Deep blue-black surfaces for late sessions",
        palette: BasePalette {
            background: "oklch(0.13 0.03 270)",
            foreground: "oklch(0.95 0.01 270)",
            card: "oklch(0.17 0.04 270)",
            primary: "oklch(0.6 0.2 280)",
            primary_foreground: "oklch(0.98 0 0)",
            secondary: "oklch(0.24 0.05 270)",
            muted: "oklch(0.22 0.04 270)",
            muted_foreground: "oklch(0.68 0.04 270)",
            accent: "oklch(0.28 0.08 280)",
            destructive: "oklch(0.62 0.22 25)",
            border: "oklch(0.26 0.05 270)",
            ring: "oklch(0.6 0.2 280)",
        },
    },
    PresetSpec {
        name: "Ocean",
        id: "ocean",
        description: "Cool teal and navy tones",
        palette: BasePalette {
            background: "oklch(0.16 0.04 230)",
            foreground: "oklch(0.95 0.02 220)",
            card: "oklch(0.2 0.05 230)",
            primary: "oklch(0.68 0.15 220)",
            primary_foreground: "oklch(0.15 0.04 230)",
            secondary: "oklch(0.27 0.06 230)",
            muted: "oklch(0.25 0.05 230)",
            muted_foreground: "oklch(0.7 0.05 220)",
            accent: "oklch(0.3 0.08 200)",
            destructive: "oklch(0.63 0.22 25)",
            border: "oklch(0.3 0.06 230)",
            ring: "oklch(0.68 0.15 220)",
        },
    },
    PresetSpec {
        name: "Forest",
        id: "forest",
        description: "Earthy greens with soft contrast",
        palette: BasePalette {
            background: "oklch(0.17 0.03 150)",
            foreground: "oklch(0.94 0.02 140)",
            card: "oklch(0.21 0.04 150)",
            primary: "oklch(0.65 0.17 145)",
            primary_foreground: "oklch(0.15 0.03 150)",
            secondary: "oklch(0.27 0.05 150)",
            muted: "oklch(0.25 0.04 150)",
            muted_foreground: "oklch(0.7 0.05 145)",
            accent: "oklch(0.3 0.07 130)",
            destructive: "oklch(0.62 0.21 27)",
            border: "oklch(0.3 0.05 150)",
            ring: "oklch(0.65 0.17 145)",
        },
    },
    PresetSpec {
        name: "Sunset",
        id: "sunset",
        description: "Warm orange highlights over dusky surfaces",
        palette: BasePalette {
            background: "oklch(0.18 0.04 30)",
            foreground: "oklch(0.96 0.02 60)",
            card: "oklch(0.22 0.05 30)",
            primary: "oklch(0.7 0.19 45)",
            primary_foreground: "oklch(0.17 0.04 30)",
            secondary: "oklch(0.28 0.06 30)",
            muted: "oklch(0.26 0.05 30)",
            muted_foreground: "oklch(0.72 0.06 50)",
            accent: "oklch(0.34 0.1 350)",
            destructive: "oklch(0.6 0.23 25)",
            border: "oklch(0.31 0.06 30)",
            ring: "oklch(0.7 0.19 45)",
        },
    },
    PresetSpec {
        name: "Rose",
        id: "rose",
        description: "Muted rose surfaces with a pink accent",
        palette: BasePalette {
            background: "oklch(0.17 0.03 350)",
            foreground: "oklch(0.96 0.02 350)",
            card: "oklch(0.21 0.04 350)",
            primary: "oklch(0.68 0.2 5)",
            primary_foreground: "oklch(0.98 0.01 350)",
            secondary: "oklch(0.27 0.05 350)",
            muted: "oklch(0.25 0.04 350)",
            muted_foreground: "oklch(0.72 0.05 350)",
            accent: "oklch(0.3 0.08 0)",
            destructive: "oklch(0.62 0.23 27)",
            border: "oklch(0.3 0.05 350)",
            ring: "oklch(0.68 0.2 5)",
        },
    },
    PresetSpec {
        name: "Amber",
        id: "amber",
        description: "Golden amber accent on warm charcoal",
        palette: BasePalette {
            background: "oklch(0.17 0.02 70)",
            foreground: "oklch(0.96 0.02 85)",
            card: "oklch(0.21 0.03 70)",
            primary: "oklch(0.77 0.16 70)",
            primary_foreground: "oklch(0.2 0.04 60)",
            secondary: "oklch(0.27 0.04 70)",
            muted: "oklch(0.25 0.03 70)",
            muted_foreground: "oklch(0.72 0.05 80)",
            accent: "oklch(0.32 0.07 70)",
            destructive: "oklch(0.6 0.22 27)",
            border: "oklch(0.3 0.04 70)",
            ring: "oklch(0.77 0.16 70)",
        },
    },
    PresetSpec {
        name: "Violet",
        id: "violet",
        description: "Saturated violet with deep purple surfaces",
        palette: BasePalette {
            background: "oklch(0.16 0.04 295)",
            foreground: "oklch(0.96 0.02 300)",
            card: "oklch(0.2 0.05 295)",
            primary: "oklch(0.62 0.23 295)",
            primary_foreground: "oklch(0.98 0.01 300)",
            secondary: "oklch(0.26 0.06 295)",
            muted: "oklch(0.24 0.05 295)",
            muted_foreground: "oklch(0.7 0.06 300)",
            accent: "oklch(0.3 0.1 310)",
            destructive: "oklch(0.62 0.23 25)",
            border: "oklch(0.29 0.06 295)",
            ring: "oklch(0.62 0.23 295)",
        },
    },
    PresetSpec {
        name: "Slate",
        id: "slate",
        description: "Understated blue-grey for focused work",
        palette: BasePalette {
            background: "oklch(0.2 0.02 255)",
            foreground: "oklch(0.97 0.01 250)",
            card: "oklch(0.24 0.03 255)",
            primary: "oklch(0.72 0.08 250)",
            primary_foreground: "oklch(0.2 0.02 255)",
            secondary: "oklch(0.3 0.03 255)",
            muted: "oklch(0.28 0.03 255)",
            muted_foreground: "oklch(0.71 0.03 250)",
            accent: "oklch(0.33 0.04 255)",
            destructive: "oklch(0.6 0.2 25)",
            border: "oklch(0.32 0.03 255)",
            ring: "oklch(0.72 0.08 250)",
        },
    },
    PresetSpec {
        name: "Emerald",
        id: "emerald",
        description: "Bright emerald accent on green-tinted darks",
        palette: BasePalette {
            background: "oklch(0.16 0.03 165)",
            foreground: "oklch(0.96 0.02 165)",
            card: "oklch(0.2 0.04 165)",
            primary: "oklch(0.7 0.15 162)",
            primary_foreground: "oklch(0.16 0.03 165)",
            secondary: "oklch(0.26 0.05 165)",
            muted: "oklch(0.24 0.04 165)",
            muted_foreground: "oklch(0.71 0.05 165)",
            accent: "oklch(0.3 0.07 170)",
            destructive: "oklch(0.62 0.22 25)",
            border: "oklch(0.29 0.05 165)",
            ring: "oklch(0.7 0.15 162)",
        },
    },
    PresetSpec {
        name: "Sky",
        id: "sky",
        description: "Airy light theme with a sky blue accent",
        palette: BasePalette {
            background: "oklch(0.98 0.01 230)",
            foreground: "oklch(0.2 0.03 240)",
            card: "oklch(1 0 0)",
            primary: "oklch(0.68 0.15 235)",
            primary_foreground: "oklch(0.98 0.01 230)",
            secondary: "oklch(0.94 0.02 230)",
            muted: "oklch(0.95 0.02 230)",
            muted_foreground: "oklch(0.5 0.04 240)",
            accent: "oklch(0.92 0.04 220)",
            destructive: "oklch(0.58 0.23 27)",
            border: "oklch(0.9 0.02 230)",
            ring: "oklch(0.68 0.15 235)",
        },
    },
    PresetSpec {
        name: "Crimson",
        id: "crimson",
        description: "Bold crimson accent over dark red surfaces",
        palette: BasePalette {
            background: "oklch(0.15 0.03 20)",
            foreground: "oklch(0.96 0.01 20)",
            card: "oklch(0.19 0.04 20)",
            primary: "oklch(0.58 0.23 25)",
            primary_foreground: "oklch(0.98 0.01 20)",
            secondary: "oklch(0.25 0.05 20)",
            muted: "oklch(0.23 0.04 20)",
            muted_foreground: "oklch(0.7 0.04 20)",
            accent: "oklch(0.3 0.09 20)",
            destructive: "oklch(0.65 0.24 30)",
            border: "oklch(0.28 0.05 20)",
            ring: "oklch(0.58 0.23 25)",
        },
    },
    PresetSpec {
        name: "VS Code",
        id: "vscode",
        description: "Editor greys with the familiar blue accent",
        palette: BasePalette {
            background: "oklch(0.19 0 0)",
            foreground: "oklch(0.86 0 0)",
            card: "oklch(0.22 0 0)",
            primary: "oklch(0.6 0.16 245)",
            primary_foreground: "oklch(0.98 0 0)",
            secondary: "oklch(0.27 0 0)",
            muted: "oklch(0.25 0 0)",
            muted_foreground: "oklch(0.65 0 0)",
            accent: "oklch(0.32 0.05 245)",
            destructive: "oklch(0.6 0.2 25)",
            border: "oklch(0.3 0 0)",
            ring: "oklch(0.6 0.16 245)",
        },
    },
    PresetSpec {
        name: "Slack",
        id: "slack",
        description: "Light workspace theme with aubergine primary",
        palette: BasePalette {
            background: "oklch(0.99 0 0)",
            foreground: "oklch(0.22 0.02 320)",
            card: "oklch(1 0 0)",
            primary: "oklch(0.33 0.1 330)",
            primary_foreground: "oklch(0.98 0 0)",
            secondary: "oklch(0.95 0.01 320)",
            muted: "oklch(0.96 0.01 320)",
            muted_foreground: "oklch(0.52 0.02 320)",
            accent: "oklch(0.76 0.14 210)",
            destructive: "oklch(0.58 0.22 20)",
            border: "oklch(0.9 0.01 320)",
            ring: "oklch(0.33 0.1 330)",
        },
    },
    PresetSpec {
        name: "X (Twitter)",
        id: "twitter",
        description: "True black with a bright blue accent",
        palette: BasePalette {
            background: "oklch(0 0 0)",
            foreground: "oklch(0.93 0.01 250)",
            card: "oklch(0.16 0.01 250)",
            primary: "oklch(0.66 0.16 240)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.22 0.01 250)",
            muted: "oklch(0.2 0.01 250)",
            muted_foreground: "oklch(0.62 0.02 250)",
            accent: "oklch(0.25 0.03 240)",
            destructive: "oklch(0.6 0.22 15)",
            border: "oklch(0.27 0.01 250)",
            ring: "oklch(0.66 0.16 240)",
        },
    },
    PresetSpec {
        name: "GitHub Dark",
        id: "github-dark",
        description: "Dimmed blue-grey with green actions",
        palette: BasePalette {
            background: "oklch(0.18 0.02 260)",
            foreground: "oklch(0.92 0.01 250)",
            card: "oklch(0.21 0.02 260)",
            primary: "oklch(0.62 0.17 145)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.27 0.02 260)",
            muted: "oklch(0.25 0.02 260)",
            muted_foreground: "oklch(0.66 0.02 250)",
            accent: "oklch(0.65 0.15 250)",
            destructive: "oklch(0.6 0.2 25)",
            border: "oklch(0.3 0.02 260)",
            ring: "oklch(0.65 0.15 250)",
        },
    },
    PresetSpec {
        name: "GitHub Light",
        id: "github-light",
        description: "Crisp white surfaces with green actions",
        palette: BasePalette {
            background: "oklch(1 0 0)",
            foreground: "oklch(0.24 0.02 260)",
            card: "oklch(0.98 0.005 260)",
            primary: "oklch(0.55 0.15 150)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.96 0.005 260)",
            muted: "oklch(0.96 0.005 260)",
            muted_foreground: "oklch(0.52 0.02 260)",
            accent: "oklch(0.55 0.18 255)",
            destructive: "oklch(0.55 0.2 25)",
            border: "oklch(0.9 0.01 260)",
            ring: "oklch(0.55 0.18 255)",
        },
    },
    PresetSpec {
        name: "Discord",
        id: "discord",
        description: "Soft charcoal with blurple accent",
        palette: BasePalette {
            background: "oklch(0.27 0.01 270)",
            foreground: "oklch(0.94 0.01 270)",
            card: "oklch(0.3 0.01 270)",
            primary: "oklch(0.6 0.19 275)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.33 0.01 270)",
            muted: "oklch(0.31 0.01 270)",
            muted_foreground: "oklch(0.7 0.02 270)",
            accent: "oklch(0.35 0.03 275)",
            destructive: "oklch(0.62 0.21 22)",
            border: "oklch(0.36 0.01 270)",
            ring: "oklch(0.6 0.19 275)",
        },
    },
    PresetSpec {
        name: "Notion",
        id: "notion",
        description: "Paper white with ink primary",
        palette: BasePalette {
            background: "oklch(1 0 0)",
            foreground: "oklch(0.25 0.005 60)",
            card: "oklch(0.99 0.002 60)",
            primary: "oklch(0.25 0.005 60)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.96 0.003 60)",
            muted: "oklch(0.96 0.003 60)",
            muted_foreground: "oklch(0.55 0.005 60)",
            accent: "oklch(0.94 0.005 60)",
            destructive: "oklch(0.58 0.2 27)",
            border: "oklch(0.92 0.003 60)",
            ring: "oklch(0.6 0.12 240)",
        },
    },
    PresetSpec {
        name: "Linear",
        id: "linear",
        description: "Low-contrast darks with a lavender accent",
        palette: BasePalette {
            background: "oklch(0.16 0.01 270)",
            foreground: "oklch(0.95 0.005 270)",
            card: "oklch(0.19 0.01 270)",
            primary: "oklch(0.6 0.17 275)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.24 0.01 270)",
            muted: "oklch(0.22 0.01 270)",
            muted_foreground: "oklch(0.66 0.02 270)",
            accent: "oklch(0.27 0.03 275)",
            destructive: "oklch(0.62 0.21 25)",
            border: "oklch(0.26 0.01 270)",
            ring: "oklch(0.6 0.17 275)",
        },
    },
    PresetSpec {
        name: "Spotify",
        id: "spotify",
        description: "Near-black surfaces with vivid green",
        palette: BasePalette {
            background: "oklch(0.15 0 0)",
            foreground: "oklch(0.98 0 0)",
            card: "oklch(0.2 0 0)",
            primary: "oklch(0.72 0.2 150)",
            primary_foreground: "oklch(0.15 0 0)",
            secondary: "oklch(0.27 0 0)",
            muted: "oklch(0.25 0 0)",
            muted_foreground: "oklch(0.7 0 0)",
            accent: "oklch(0.3 0.04 150)",
            destructive: "oklch(0.62 0.22 25)",
            border: "oklch(0.3 0 0)",
            ring: "oklch(0.72 0.2 150)",
        },
    },
    PresetSpec {
        name: "Dracula",
        id: "dracula",
        description: "Purple-grey base with neon pink and purple",
        palette: BasePalette {
            background: "oklch(0.29 0.02 278)",
            foreground: "oklch(0.98 0.007 107)",
            card: "oklch(0.33 0.03 278)",
            primary: "oklch(0.74 0.15 300)",
            primary_foreground: "oklch(0.29 0.02 278)",
            secondary: "oklch(0.4 0.03 278)",
            muted: "oklch(0.37 0.03 278)",
            muted_foreground: "oklch(0.6 0.07 270)",
            accent: "oklch(0.73 0.18 350)",
            destructive: "oklch(0.68 0.21 25)",
            border: "oklch(0.42 0.03 278)",
            ring: "oklch(0.74 0.15 300)",
        },
    },
    PresetSpec {
        name: "Nord",
        id: "nord",
        description: "Arctic polar night with frost blue",
        palette: BasePalette {
            background: "oklch(0.32 0.02 265)",
            foreground: "oklch(0.95 0.01 250)",
            card: "oklch(0.36 0.02 265)",
            primary: "oklch(0.77 0.06 220)",
            primary_foreground: "oklch(0.32 0.02 265)",
            secondary: "oklch(0.42 0.03 265)",
            muted: "oklch(0.4 0.03 265)",
            muted_foreground: "oklch(0.75 0.03 250)",
            accent: "oklch(0.7 0.06 230)",
            destructive: "oklch(0.62 0.12 20)",
            border: "oklch(0.44 0.03 265)",
            ring: "oklch(0.77 0.06 220)",
        },
    },
    PresetSpec {
        name: "Solarized Light",
        id: "solarized-light",
        description: "Warm cream base with precise accents",
        palette: BasePalette {
            background: "oklch(0.97 0.03 95)",
            foreground: "oklch(0.52 0.03 220)",
            card: "oklch(0.93 0.03 95)",
            primary: "oklch(0.6 0.13 240)",
            primary_foreground: "oklch(0.97 0.03 95)",
            secondary: "oklch(0.92 0.03 95)",
            muted: "oklch(0.9 0.03 95)",
            muted_foreground: "oklch(0.6 0.02 220)",
            accent: "oklch(0.65 0.14 185)",
            destructive: "oklch(0.58 0.2 30)",
            border: "oklch(0.88 0.03 95)",
            ring: "oklch(0.6 0.13 240)",
        },
    },
    PresetSpec {
        name: "Monokai",
        id: "monokai",
        description: "Olive-black with lime and magenta",
        palette: BasePalette {
            background: "oklch(0.27 0.01 110)",
            foreground: "oklch(0.97 0.01 110)",
            card: "oklch(0.3 0.01 110)",
            primary: "oklch(0.83 0.2 125)",
            primary_foreground: "oklch(0.27 0.01 110)",
            secondary: "oklch(0.36 0.01 110)",
            muted: "oklch(0.33 0.01 110)",
            muted_foreground: "oklch(0.66 0.02 110)",
            accent: "oklch(0.65 0.24 0)",
            destructive: "oklch(0.63 0.24 15)",
            border: "oklch(0.38 0.01 110)",
            ring: "oklch(0.83 0.2 125)",
        },
    },
    PresetSpec {
        name: "Jira Dark",
        id: "jira-dark",
        description: "Blue-grey tracker surfaces with a bright blue",
        palette: BasePalette {
            background: "oklch(0.2 0.01 250)",
            foreground: "oklch(0.9 0.01 250)",
            card: "oklch(0.24 0.015 250)",
            primary: "oklch(0.6 0.18 255)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.29 0.015 250)",
            muted: "oklch(0.27 0.015 250)",
            muted_foreground: "oklch(0.68 0.02 250)",
            accent: "oklch(0.32 0.05 255)",
            destructive: "oklch(0.6 0.2 25)",
            border: "oklch(0.31 0.015 250)",
            ring: "oklch(0.6 0.18 255)",
        },
    },
    PresetSpec {
        name: "Trello Dark",
        id: "trello-dark",
        description: "Board-style navy with a sky accent",
        palette: BasePalette {
            background: "oklch(0.22 0.02 250)",
            foreground: "oklch(0.92 0.01 250)",
            card: "oklch(0.26 0.02 250)",
            primary: "oklch(0.62 0.16 245)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.3 0.02 250)",
            muted: "oklch(0.28 0.02 250)",
            muted_foreground: "oklch(0.7 0.02 250)",
            accent: "oklch(0.34 0.05 245)",
            destructive: "oklch(0.62 0.2 25)",
            border: "oklch(0.33 0.02 250)",
            ring: "oklch(0.62 0.16 245)",
        },
    },
    PresetSpec {
        name: "YouTube Dark",
        id: "youtube-dark",
        description: "Neutral darks with signature red",
        palette: BasePalette {
            background: "oklch(0.18 0 0)",
            foreground: "oklch(0.98 0 0)",
            card: "oklch(0.22 0 0)",
            primary: "oklch(0.63 0.25 29)",
            primary_foreground: "oklch(0.99 0 0)",
            secondary: "oklch(0.27 0 0)",
            muted: "oklch(0.25 0 0)",
            muted_foreground: "oklch(0.7 0 0)",
            accent: "oklch(0.3 0 0)",
            destructive: "oklch(0.63 0.25 29)",
            border: "oklch(0.3 0 0)",
            ring: "oklch(0.63 0.25 29)",
        },
    },
    PresetSpec {
        name: "Google Dark",
        id: "google-dark",
        description: "Material greys with a calm blue",
        palette: BasePalette {
            background: "oklch(0.2 0.005 265)",
            foreground: "oklch(0.93 0.005 265)",
            card: "oklch(0.24 0.005 265)",
            primary: "oklch(0.7 0.13 255)",
            primary_foreground: "oklch(0.2 0.005 265)",
            secondary: "oklch(0.29 0.005 265)",
            muted: "oklch(0.27 0.005 265)",
            muted_foreground: "oklch(0.7 0.01 265)",
            accent: "oklch(0.32 0.03 255)",
            destructive: "oklch(0.68 0.16 25)",
            border: "oklch(0.32 0.005 265)",
            ring: "oklch(0.7 0.13 255)",
        },
    },
    PresetSpec {
        name: "WhatsApp Dark",
        id: "whatsapp-dark",
        description: "Teal-tinted darks with chat green",
        palette: BasePalette {
            background: "oklch(0.2 0.02 230)",
            foreground: "oklch(0.93 0.01 230)",
            card: "oklch(0.24 0.02 230)",
            primary: "oklch(0.72 0.17 155)",
            primary_foreground: "oklch(0.2 0.02 230)",
            secondary: "oklch(0.28 0.02 230)",
            muted: "oklch(0.27 0.02 230)",
            muted_foreground: "oklch(0.68 0.02 230)",
            accent: "oklch(0.36 0.06 170)",
            destructive: "oklch(0.62 0.2 25)",
            border: "oklch(0.31 0.02 230)",
            ring: "oklch(0.72 0.17 155)",
        },
    },
];
