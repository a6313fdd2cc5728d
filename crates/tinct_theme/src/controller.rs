//! Theme state controller
//!
//! Owns the active selection, renders it into a [`StyleSink`] and persists
//! it through a [`ThemeStore`]. Consumers never mutate the selection
//! directly; they call the operations below and observe the result through
//! [`ThemeController::subscribe`] or the change callback.
//!
//! # Startup
//!
//! The initial selection is resolved once, in order:
//!
//! 1. System detection enabled and no persisted theme: the catalog theme
//!    for the current system scheme.
//! 2. A persisted theme present in the catalog, with its custom accent when
//!    the stored flag is `"true"` and both accent numbers load.
//! 3. The configured default theme. This is a display default and is not
//!    persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use tinct_theme::{MemoryStore, MemoryStyleSink, ThemeConfig, ThemeController};
//!
//! let mut themes = ThemeController::builder(ThemeConfig::default())
//!     .on_theme_change(|id| println!("theme -> {id}"))
//!     .build(MemoryStyleSink::new(), MemoryStore::new());
//!
//! themes.set_theme("nord");
//! themes.apply_custom_accent(280.0, 0.18);
//! ```

use crate::accent::AccentOverride;
use crate::apply::{StyleSink, ThemeApplier};
use crate::catalog::Catalog;
use crate::config::ThemeConfig;
use crate::store::{KeyValueStore, PanelPosition, ThemeField, ThemeStore};
use crate::theme::{ColorScheme, ThemeDefinition};
use slotmap::{new_key_type, SlotMap};
use std::borrow::Cow;
use tracing::{debug, warn};

new_key_type! {
    /// Handle returned by [`ThemeController::subscribe`]
    pub struct SubscriptionId;
}

/// Whether a custom accent is layered over the active theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccentMode {
    Default,
    CustomAccent,
}

/// The controller's owned selection
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSelection {
    pub active_theme_id: String,
    pub is_custom_accent_active: bool,
    /// Last accent used; only rendered while the custom flag is set
    pub accent: AccentOverride,
}

impl ThemeSelection {
    pub fn mode(&self) -> AccentMode {
        if self.is_custom_accent_active {
            AccentMode::CustomAccent
        } else {
            AccentMode::Default
        }
    }
}

/// State transitions reported to subscribers
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeEvent {
    /// The user selected a theme
    ThemeChanged { id: String },
    /// A custom accent was applied over `id`
    AccentApplied { id: String, accent: AccentOverride },
    /// The custom accent was turned off
    AccentReset { id: String },
    /// The system scheme changed and its theme replaced the selection
    SystemSchemeChanged { scheme: ColorScheme, id: String },
    /// The floating panel moved
    PositionChanged(PanelPosition),
}

type Listener = Box<dyn FnMut(&ThemeEvent)>;
type ChangeCallback = Box<dyn FnMut(&str)>;

/// Builder for [`ThemeController`]
pub struct ThemeControllerBuilder {
    config: ThemeConfig,
    catalog: Option<Catalog>,
    system_scheme: Option<ColorScheme>,
    on_theme_change: Option<ChangeCallback>,
}

impl ThemeControllerBuilder {
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            config,
            catalog: None,
            system_scheme: None,
            on_theme_change: None,
        }
    }

    /// Use a custom catalog instead of the built-in presets
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Current OS/browser light-dark preference, if known
    pub fn system_scheme(mut self, scheme: impl Into<Option<ColorScheme>>) -> Self {
        self.system_scheme = scheme.into();
        self
    }

    /// Called with the new id whenever the active theme changes
    pub fn on_theme_change<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.on_theme_change = Some(Box::new(callback));
        self
    }

    /// Build the controller and resolve the initial selection.
    ///
    /// A `themes` file named in the config is loaded when no catalog was
    /// given; if it cannot be loaded the built-in presets are used.
    pub fn build<S: StyleSink, K: KeyValueStore>(self, sink: S, backend: K) -> ThemeController<S, K> {
        let catalog = match (self.catalog, &self.config.themes) {
            (Some(catalog), _) => Cow::Owned(catalog),
            (None, Some(path)) => match Catalog::from_toml_file(path) {
                Ok(catalog) => Cow::Owned(catalog),
                Err(err) => {
                    warn!("falling back to built-in themes: {}", err);
                    Cow::Borrowed(Catalog::builtin())
                }
            },
            (None, None) => Cow::Borrowed(Catalog::builtin()),
        };

        let store = ThemeStore::new(self.config.storage_key.clone(), backend);
        let position = store
            .load_position()
            .unwrap_or(self.config.float_position);

        let mut controller = ThemeController {
            applier: ThemeApplier::new(
                self.config.attribute.clone(),
                self.config.disable_transition_on_change,
            ),
            selection: ThemeSelection {
                active_theme_id: self.config.default_theme.clone(),
                is_custom_accent_active: false,
                accent: self.config.default_custom_accent,
            },
            config: self.config,
            catalog,
            sink,
            store,
            position,
            system_scheme: self.system_scheme,
            on_theme_change: self.on_theme_change,
            listeners: SlotMap::with_key(),
        };
        controller.restore();
        controller
    }
}

/// Stateful theme selection over a style sink and a key/value store
pub struct ThemeController<S, K> {
    config: ThemeConfig,
    catalog: Cow<'static, Catalog>,
    applier: ThemeApplier,
    sink: S,
    store: ThemeStore<K>,
    selection: ThemeSelection,
    position: PanelPosition,
    system_scheme: Option<ColorScheme>,
    on_theme_change: Option<ChangeCallback>,
    listeners: SlotMap<SubscriptionId, Listener>,
}

impl ThemeController<(), ()> {
    pub fn builder(config: ThemeConfig) -> ThemeControllerBuilder {
        ThemeControllerBuilder::new(config)
    }
}

impl<S: StyleSink, K: KeyValueStore> ThemeController<S, K> {
    /// Controller over the built-in catalog with no system signal
    pub fn new(config: ThemeConfig, sink: S, backend: K) -> Self {
        ThemeControllerBuilder::new(config).build(sink, backend)
    }

    fn restore(&mut self) {
        let saved = self.store.load(ThemeField::ActiveTheme);

        if self.config.enable_system && saved.is_none() {
            match self.system_scheme {
                Some(scheme) if self.catalog.contains(scheme.id()) => {
                    debug!("startup: following system scheme {}", scheme);
                    self.selection.active_theme_id = scheme.id().to_string();
                    self.render();
                    return;
                }
                Some(scheme) => debug!("startup: no `{}` theme for system scheme", scheme.id()),
                None => debug!("startup: system scheme unknown"),
            }
        }

        if let Some(saved) = saved {
            if self.catalog.contains(&saved) {
                self.selection.active_theme_id = saved;
                if self.store.load_is_custom() {
                    match self.store.load_accent() {
                        Some(accent) => {
                            self.selection.accent = accent;
                            self.selection.is_custom_accent_active = true;
                        }
                        None => debug!("startup: custom flag set but accent incomplete"),
                    }
                }
                debug!(
                    "startup: restored `{}` ({:?})",
                    self.selection.active_theme_id,
                    self.selection.mode()
                );
                self.render();
                return;
            }
            warn!("startup: persisted theme `{}` is not in the catalog", saved);
        }

        self.selection.active_theme_id = self.config.default_theme.clone();
        if !self.render() {
            warn!(
                "startup: default theme `{}` is not in the catalog",
                self.config.default_theme
            );
        }
    }

    /// Write the current selection to the sink. Returns false when the
    /// active id is not in the catalog.
    fn render(&mut self) -> bool {
        let Some(theme) = self.catalog.find(&self.selection.active_theme_id) else {
            return false;
        };
        if self.selection.is_custom_accent_active {
            self.applier
                .apply_with_accent(&mut self.sink, theme, self.selection.accent);
        } else {
            self.applier.apply(&mut self.sink, theme);
        }
        true
    }

    fn emit(&mut self, event: ThemeEvent) {
        for listener in self.listeners.values_mut() {
            listener(&event);
        }
    }

    fn notify_theme_change(&mut self) {
        if let Some(callback) = self.on_theme_change.as_mut() {
            callback(self.selection.active_theme_id.as_str());
        }
    }

    // ========== Operations ==========

    /// Switch to a catalog theme, keeping any custom accent.
    ///
    /// Unknown ids are ignored and return `false`.
    pub fn set_theme(&mut self, id: &str) -> bool {
        if !self.catalog.contains(id) {
            debug!("set_theme: `{}` is not in the catalog", id);
            return false;
        }

        self.selection.active_theme_id = id.to_string();
        self.render();
        self.store.save(ThemeField::ActiveTheme, id);

        self.notify_theme_change();
        self.emit(ThemeEvent::ThemeChanged { id: id.to_string() });
        true
    }

    /// Layer a custom accent over the active theme.
    ///
    /// Values are not clamped. Returns `false` without changes when the
    /// active theme is not in the catalog.
    pub fn apply_custom_accent(&mut self, hue: f64, chroma: f64) -> bool {
        if !self.catalog.contains(&self.selection.active_theme_id) {
            debug!("apply_custom_accent: no active theme");
            return false;
        }

        let accent = AccentOverride::new(hue, chroma);
        self.selection.accent = accent;
        self.selection.is_custom_accent_active = true;
        self.render();

        self.store.save_accent(accent);
        self.store.save_is_custom(true);

        self.emit(ThemeEvent::AccentApplied {
            id: self.selection.active_theme_id.clone(),
            accent,
        });
        true
    }

    /// Drop the custom accent and render the plain theme.
    ///
    /// The stored hue and chroma are kept; only the flag is cleared.
    pub fn reset_custom_accent(&mut self) -> bool {
        if !self.catalog.contains(&self.selection.active_theme_id) {
            debug!("reset_custom_accent: no active theme");
            return false;
        }

        self.selection.is_custom_accent_active = false;
        self.render();
        self.store.save_is_custom(false);

        self.emit(ThemeEvent::AccentReset {
            id: self.selection.active_theme_id.clone(),
        });
        true
    }

    /// React to an OS/browser light-dark change.
    ///
    /// Only honoured with system detection enabled. The scheme's theme
    /// replaces the selection and any custom accent; nothing is persisted.
    pub fn on_system_scheme_changed(&mut self, scheme: ColorScheme) -> bool {
        if !self.config.enable_system {
            return false;
        }
        self.system_scheme = Some(scheme);

        let id = scheme.id();
        if !self.catalog.contains(id) {
            debug!("system scheme {}: no matching theme", scheme);
            return false;
        }

        debug!("system scheme changed to {}", scheme);
        self.selection.active_theme_id = id.to_string();
        self.selection.is_custom_accent_active = false;
        self.render();

        self.notify_theme_change();
        self.emit(ThemeEvent::SystemSchemeChanged {
            scheme,
            id: id.to_string(),
        });
        true
    }

    /// Move the floating panel and persist the corner
    pub fn set_position(&mut self, position: PanelPosition) {
        let changed = self.position != position;
        self.position = position;
        self.store.save_position(position);
        if changed {
            self.emit(ThemeEvent::PositionChanged(position));
        }
    }

    // ========== Observers ==========

    /// Register a listener for state transitions
    pub fn subscribe<F: FnMut(&ThemeEvent) + 'static>(&mut self, listener: F) -> SubscriptionId {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    // ========== Accessors ==========

    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    pub fn mode(&self) -> AccentMode {
        self.selection.mode()
    }

    pub fn active_theme_id(&self) -> &str {
        &self.selection.active_theme_id
    }

    /// Definition of the active theme, if the catalog still has it
    pub fn active_theme_definition(&self) -> Option<&ThemeDefinition> {
        self.catalog.find(&self.selection.active_theme_id)
    }

    pub fn themes(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn floating_switcher_enabled(&self) -> bool {
        self.config.enable_floating_switcher
    }

    /// Last system scheme seen, from startup or a change notification
    pub fn system_scheme(&self) -> Option<ColorScheme> {
        self.system_scheme
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn store(&self) -> &ThemeStore<K> {
        &self.store
    }

    /// Tear down into the sink and storage backend
    pub fn into_parts(self) -> (S, K) {
        (self.sink, self.store.into_backend())
    }
}
