//! Subcommand handlers
//!
//! Each handler returns the text to print so the dispatch in `main` stays
//! the only place that touches stdout.

use anyhow::{bail, Result};
use std::fmt::Write;
use tinct_theme::{
    AccentOverride, ColorScheme, ColorToken, KeyValueStore, MemoryStyleSink, PanelPosition,
    ThemeApplier, ThemeConfig, ThemeController, ThemeDefinition,
};
use tracing::{info, warn};

pub type Themes<K> = ThemeController<MemoryStyleSink, K>;

/// Build a controller over an in-memory root scope
pub fn open_controller<K: KeyValueStore>(
    config: ThemeConfig,
    backend: K,
    prefers: Option<ColorScheme>,
) -> Themes<K> {
    ThemeController::builder(config)
        .system_scheme(prefers)
        .on_theme_change(|id| info!("active theme -> {id}"))
        .build(MemoryStyleSink::new(), backend)
}

pub fn list<K: KeyValueStore>(themes: &Themes<K>) -> Result<String> {
    let active = themes.active_theme_id();
    let width = themes.themes().ids().map(str::len).max().unwrap_or(0);

    let mut out = String::new();
    for theme in themes.themes().list() {
        let marker = if theme.id == active { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<width$}  {:<18} {}",
            theme.id, theme.name, theme.description
        )?;
    }
    Ok(out)
}

pub fn show<K: KeyValueStore>(themes: &Themes<K>, id: &str) -> Result<String> {
    let Some(theme) = themes.themes().find(id) else {
        bail!("unknown theme `{id}`");
    };
    describe(theme)
}

fn describe(theme: &ThemeDefinition) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{} ({})", theme.name, theme.id)?;
    writeln!(out, "{}", theme.description)?;
    writeln!(out, "preview: {}", theme.preview_colors.join(", "))?;
    writeln!(out)?;

    let width = ColorToken::all().map(|t| t.key().len()).max().unwrap_or(0);
    for token in ColorToken::all() {
        writeln!(out, "  {:<width$}  {}", token.key(), theme.token(token))?;
    }
    Ok(out)
}

/// CSS for the active selection, or for `id` rendered on a scratch scope.
///
/// An explicit accent is layered on without touching persisted state.
pub fn css<K: KeyValueStore>(
    themes: &Themes<K>,
    id: Option<&str>,
    accent: Option<(f64, f64)>,
) -> Result<String> {
    if id.is_none() && accent.is_none() {
        if themes.active_theme_definition().is_none() {
            bail!("active theme `{}` is not in the catalog", themes.active_theme_id());
        }
        return Ok(themes.sink().to_css());
    }

    let id = id.unwrap_or_else(|| themes.active_theme_id());
    let Some(theme) = themes.themes().find(id) else {
        bail!("unknown theme `{id}`");
    };

    let applier = ThemeApplier::new(themes.config().attribute.clone(), false);
    let mut scratch = MemoryStyleSink::new();
    match accent {
        Some((hue, chroma)) => {
            applier.apply_with_accent(&mut scratch, theme, AccentOverride::new(hue, chroma))
        }
        None => applier.apply(&mut scratch, theme),
    }
    Ok(scratch.to_css())
}

pub fn set<K: KeyValueStore>(themes: &mut Themes<K>, id: &str) -> Result<String> {
    if !themes.set_theme(id) {
        bail!("unknown theme `{id}` (run `tinct list`)");
    }
    Ok(format!("theme set to {id}\n"))
}

/// Apply an accent with slider bounds enforced
pub fn accent<K: KeyValueStore>(themes: &mut Themes<K>, hue: f64, chroma: f64) -> Result<String> {
    let requested = AccentOverride::new(hue, chroma);
    let accent = requested.clamped();
    if accent != requested {
        warn!(
            "accent clamped from ({}, {}) to ({}, {})",
            requested.hue, requested.chroma, accent.hue, accent.chroma
        );
    }

    if !themes.apply_custom_accent(accent.hue, accent.chroma) {
        bail!("active theme `{}` is not in the catalog", themes.active_theme_id());
    }
    Ok(format!(
        "accent hue {} chroma {} applied over {}\n",
        accent.hue,
        accent.chroma,
        themes.active_theme_id()
    ))
}

pub fn reset<K: KeyValueStore>(themes: &mut Themes<K>) -> Result<String> {
    if !themes.reset_custom_accent() {
        bail!("active theme `{}` is not in the catalog", themes.active_theme_id());
    }
    Ok(format!("custom accent cleared on {}\n", themes.active_theme_id()))
}

pub fn status<K: KeyValueStore>(themes: &Themes<K>) -> Result<String> {
    let selection = themes.selection();
    let name = themes
        .active_theme_definition()
        .map(|t| t.name.as_str())
        .unwrap_or("(missing)");

    let mut out = String::new();
    writeln!(out, "theme:     {} ({name})", selection.active_theme_id)?;
    if selection.is_custom_accent_active {
        writeln!(
            out,
            "accent:    hue {} chroma {}",
            selection.accent.hue, selection.accent.chroma
        )?;
    } else {
        writeln!(out, "accent:    default")?;
    }
    writeln!(out, "position:  {}", themes.position())?;
    writeln!(
        out,
        "switcher:  {}",
        if themes.floating_switcher_enabled() { "floating" } else { "hidden" }
    )?;
    match (themes.config().enable_system, themes.system_scheme()) {
        (false, _) => writeln!(out, "system:    off")?,
        (true, Some(scheme)) => writeln!(out, "system:    {scheme}")?,
        (true, None) => writeln!(out, "system:    unknown")?,
    }
    Ok(out)
}

pub fn position<K: KeyValueStore>(
    themes: &mut Themes<K>,
    corner: Option<PanelPosition>,
) -> Result<String> {
    if let Some(corner) = corner {
        themes.set_position(corner);
    }
    Ok(format!("{}\n", themes.position()))
}

pub fn system<K: KeyValueStore>(themes: &mut Themes<K>, scheme: ColorScheme) -> Result<String> {
    if !themes.config().enable_system {
        bail!("system detection is disabled (set `enable_system = true`)");
    }
    if !themes.on_system_scheme_changed(scheme) {
        bail!("no `{}` theme in the catalog", scheme.id());
    }
    Ok(format!("following system: {}\n", themes.active_theme_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinct_theme::MemoryStore;

    fn themes(config: ThemeConfig) -> Themes<MemoryStore> {
        open_controller(config, MemoryStore::new(), None)
    }

    #[test]
    fn list_marks_the_active_theme() {
        let mut themes = themes(ThemeConfig::default());
        set(&mut themes, "nord").unwrap();

        let out = list(&themes).unwrap();
        let marked: Vec<&str> = out.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("nord"));
        assert_eq!(out.lines().count(), themes.themes().len());
    }

    #[test]
    fn show_prints_every_token() {
        let themes = themes(ThemeConfig::default());
        let out = show(&themes, "dark").unwrap();
        assert!(out.contains("primary"));
        assert!(out.contains("oklch(0.65 0.25 265)"));
        assert!(show(&themes, "nope").is_err());
    }

    #[test]
    fn css_for_other_theme_leaves_selection_alone() {
        let themes = themes(ThemeConfig::default());
        let out = css(&themes, Some("ocean"), Some((280.0, 0.18))).unwrap();

        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("  --primary: oklch(0.68 0.18 280);\n"));
        assert_eq!(themes.active_theme_id(), "dark");
        assert!(themes.store().backend().is_empty());
    }

    #[test]
    fn accent_is_clamped_to_slider_bounds() {
        let mut themes = themes(ThemeConfig::default());
        accent(&mut themes, 400.0, 0.9).unwrap();

        let selection = themes.selection();
        assert!(selection.is_custom_accent_active);
        assert_eq!(selection.accent, AccentOverride::new(360.0, 0.4));
        assert_eq!(
            themes.sink().property("--primary"),
            Some("oklch(0.65 0.4 360)")
        );
    }

    #[test]
    fn reset_reports_default_accent() {
        let mut themes = themes(ThemeConfig::default());
        accent(&mut themes, 120.0, 0.2).unwrap();
        reset(&mut themes).unwrap();

        let out = status(&themes).unwrap();
        assert!(out.contains("accent:    default"));
    }

    #[test]
    fn system_requires_detection() {
        let mut off = themes(ThemeConfig::default());
        assert!(system(&mut off, ColorScheme::Light).is_err());

        let mut on = themes(ThemeConfig {
            enable_system: true,
            ..ThemeConfig::default()
        });
        assert_eq!(
            system(&mut on, ColorScheme::Light).unwrap(),
            "following system: light\n"
        );
    }

    #[test]
    fn position_moves_and_reports() {
        let mut themes = themes(ThemeConfig::default());
        assert_eq!(position(&mut themes, None).unwrap(), "bottom-right\n");
        assert_eq!(
            position(&mut themes, Some(PanelPosition::TopLeft)).unwrap(),
            "top-left\n"
        );
    }
}
