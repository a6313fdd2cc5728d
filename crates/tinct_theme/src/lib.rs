//! Tinct Theme Engine
//!
//! Headless theming over CSS custom properties: color-token presets, token
//! application, custom accent derivation and a persisted, observable
//! selection.
//!
//! # Overview
//!
//! - **Catalog**: ordered, immutable [`ThemeDefinition`]s; 31 built-in presets
//!   or a custom TOML catalog
//! - **Applier**: writes one `--kebab-case` variable per [`ColorToken`] and
//!   stamps the active theme id on the root
//! - **Accent**: re-tints `primary`, `ring`, `sidebarPrimary` and
//!   `sidebarRing` with a user hue/chroma while keeping each theme's lightness
//! - **Store**: namespaced persistence over any [`KeyValueStore`]
//! - **Controller**: resolves the selection at startup and exposes the
//!   operations consumers call
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tinct_theme::{MemoryStore, MemoryStyleSink, ThemeConfig, ThemeController};
//!
//! let mut themes = ThemeController::new(
//!     ThemeConfig::default(),
//!     MemoryStyleSink::new(),
//!     MemoryStore::new(),
//! );
//!
//! themes.set_theme("dracula");
//! themes.apply_custom_accent(310.0, 0.12);
//! println!("{}", themes.sink().to_css());
//! ```
//!
//! # Capabilities
//!
//! The engine never touches a document or storage directly. Hosts provide a
//! [`StyleSink`] (the root style scope) and a [`KeyValueStore`]; both have
//! in-memory implementations for tests and headless use.

pub mod accent;
pub mod apply;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod presets;
pub mod store;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use accent::{accent_value, extract_lightness, AccentOverride, ACCENT_TOKENS, DEFAULT_LIGHTNESS};
pub use apply::{
    css_variables, css_variables_with_accent, CssVariable, MemoryStyleSink, StyleSink,
    ThemeApplier,
};
pub use catalog::Catalog;
pub use config::ThemeConfig;
pub use controller::{
    AccentMode, SubscriptionId, ThemeController, ThemeControllerBuilder, ThemeEvent,
    ThemeSelection,
};
pub use error::{StoreError, ThemeError};
pub use store::{
    FileStore, KeyValueStore, MemoryStore, PanelPosition, ThemeField, ThemeStore, POSITION_KEY,
};
pub use theme::{ColorScheme, ThemeDefinition};
pub use tokens::{ColorToken, ThemeTokens};
