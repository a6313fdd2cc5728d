//! CSS variable generation and application
//!
//! Turning a theme into variables is pure ([`css_variables`],
//! [`css_variables_with_accent`]). Writing them goes through a [`StyleSink`],
//! the document root's style scope as seen by this crate. A browser binding
//! implements the sink over `documentElement`; [`MemoryStyleSink`] keeps
//! everything in memory for headless use and tests.

use crate::accent::{accent_value, AccentOverride};
use crate::theme::ThemeDefinition;
use crate::tokens::ColorToken;
use std::borrow::Cow;
use std::fmt::Write as _;

/// Property written while transitions are suppressed
pub const TRANSITION_PROPERTY: &str = "transition";

/// Default attribute stamped with the active theme id
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Write-only view of the root style scope
pub trait StyleSink {
    /// Set a style property (custom properties include the leading `--`)
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove a style property
    fn remove_property(&mut self, name: &str);

    /// Set an attribute on the root element
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Replace the root element's class list
    fn set_class(&mut self, class: &str);

    /// Disable transitions before a batch of writes
    fn suppress_transitions(&mut self) {
        self.set_property(TRANSITION_PROPERTY, "none");
    }

    /// Re-enable transitions after a batch of writes.
    ///
    /// Browser sinks should defer this to the next frame so the new values
    /// land without animating.
    fn restore_transitions(&mut self) {
        self.remove_property(TRANSITION_PROPERTY);
    }
}

/// One custom property ready to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssVariable<'a> {
    pub token: ColorToken,
    pub value: Cow<'a, str>,
}

impl CssVariable<'_> {
    /// Custom property name, e.g. `--card-foreground`
    pub fn name(&self) -> &'static str {
        self.token.css_var()
    }
}

/// Variables for a theme, one per token, values passed through
pub fn css_variables(theme: &ThemeDefinition) -> Vec<CssVariable<'_>> {
    theme
        .tokens
        .iter()
        .map(|(token, value)| CssVariable {
            token,
            value: Cow::Borrowed(value),
        })
        .collect()
}

/// Variables for a theme with the accent-bearing tokens re-tinted
pub fn css_variables_with_accent(
    theme: &ThemeDefinition,
    accent: AccentOverride,
) -> Vec<CssVariable<'_>> {
    theme
        .tokens
        .iter()
        .map(|(token, value)| CssVariable {
            token,
            value: if token.is_accent_bearing() {
                Cow::Owned(accent_value(value, accent))
            } else {
                Cow::Borrowed(value)
            },
        })
        .collect()
}

/// Writes theme variables and the active-theme marker to a sink
#[derive(Clone, Debug)]
pub struct ThemeApplier {
    attribute: String,
    disable_transition_on_change: bool,
}

impl Default for ThemeApplier {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE, false)
    }
}

impl ThemeApplier {
    pub fn new(attribute: impl Into<String>, disable_transition_on_change: bool) -> Self {
        Self {
            attribute: attribute.into(),
            disable_transition_on_change,
        }
    }

    /// Attribute stamped with the active theme id
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Write a theme's tokens as-is
    pub fn apply<S: StyleSink + ?Sized>(&self, sink: &mut S, theme: &ThemeDefinition) {
        self.write(sink, theme, &css_variables(theme));
    }

    /// Write a theme's tokens with a custom accent layered on
    pub fn apply_with_accent<S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        theme: &ThemeDefinition,
        accent: AccentOverride,
    ) {
        self.write(sink, theme, &css_variables_with_accent(theme, accent));
    }

    fn write<S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        theme: &ThemeDefinition,
        variables: &[CssVariable<'_>],
    ) {
        if self.disable_transition_on_change {
            sink.suppress_transitions();
        }

        for variable in variables {
            tracing::trace!("{}: {}", variable.name(), variable.value);
            sink.set_property(variable.name(), &variable.value);
        }

        if !self.attribute.is_empty() {
            sink.set_attribute(&self.attribute, &theme.id);
        }
        sink.set_class(&theme.id);

        if self.disable_transition_on_change {
            sink.restore_transitions();
        }
    }
}

/// In-memory root style scope
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStyleSink {
    properties: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
    class: Option<String>,
    writes: usize,
}

impl MemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All properties in first-write order
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Number of property writes seen so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Render the scope as a `:root` rule
    pub fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push('}');
        out.push('\n');
        out
    }
}

impl StyleSink for MemoryStyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.retain(|(n, _)| n != name);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn set_class(&mut self, class: &str) {
        self.class = Some(class.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ThemeTokens;
    use pretty_assertions::assert_eq;

    fn sample() -> ThemeDefinition {
        let tokens = ThemeTokens::from_fn(|token| match token {
            ColorToken::Primary => "oklch(0.65 0.25 265)".to_string(),
            ColorToken::SidebarRing => "#336699".to_string(),
            _ => format!("oklch(0.5 0.01 {})", token as usize),
        });
        ThemeDefinition::new("Sample", "sample", "", Vec::new(), tokens)
    }

    /// Sink that records every call in order
    #[derive(Default)]
    struct RecordingSink(Vec<String>);

    impl StyleSink for RecordingSink {
        fn set_property(&mut self, name: &str, value: &str) {
            self.0.push(format!("set {name}={value}"));
        }
        fn remove_property(&mut self, name: &str) {
            self.0.push(format!("remove {name}"));
        }
        fn set_attribute(&mut self, name: &str, value: &str) {
            self.0.push(format!("attr {name}={value}"));
        }
        fn set_class(&mut self, class: &str) {
            self.0.push(format!("class {class}"));
        }
    }

    #[test]
    fn writes_every_token_then_marker() {
        let theme = sample();
        let mut sink = MemoryStyleSink::new();
        ThemeApplier::default().apply(&mut sink, &theme);

        assert_eq!(sink.properties().len(), ColorToken::COUNT);
        assert_eq!(sink.property("--primary"), Some("oklch(0.65 0.25 265)"));
        assert_eq!(sink.property("--card-foreground"), Some("oklch(0.5 0.01 3)"));
        assert_eq!(sink.attribute("data-theme"), Some("sample"));
        assert_eq!(sink.class(), Some("sample"));
    }

    #[test]
    fn apply_is_idempotent() {
        let theme = sample();
        let applier = ThemeApplier::default();

        let mut once = MemoryStyleSink::new();
        applier.apply(&mut once, &theme);

        let mut twice = MemoryStyleSink::new();
        applier.apply(&mut twice, &theme);
        applier.apply(&mut twice, &theme);

        assert_eq!(once.properties(), twice.properties());
        assert_eq!(once.to_css(), twice.to_css());
    }

    #[test]
    fn accent_only_touches_accent_tokens() {
        let theme = sample();
        let plain = css_variables(&theme);
        let tinted = css_variables_with_accent(&theme, AccentOverride::new(100.0, 0.3));

        for (a, b) in plain.iter().zip(&tinted) {
            if a.token.is_accent_bearing() {
                continue;
            }
            assert_eq!(a, b);
        }
        let value = |token| tinted.iter().find(|v| v.token == token).unwrap().value.clone();
        assert_eq!(value(ColorToken::Primary), "oklch(0.65 0.3 100)");
        assert_eq!(value(ColorToken::SidebarRing), "oklch(0.65 0.3 100)");
    }

    #[test]
    fn transition_suppression_wraps_writes() {
        let theme = sample();
        let mut sink = RecordingSink::default();
        ThemeApplier::new("data-mode", true).apply(&mut sink, &theme);

        assert_eq!(sink.0.first().map(String::as_str), Some("set transition=none"));
        assert_eq!(sink.0.last().map(String::as_str), Some("remove transition"));
        assert!(sink.0.contains(&"attr data-mode=sample".to_string()));
    }

    #[test]
    fn empty_attribute_only_sets_class() {
        let theme = sample();
        let mut sink = RecordingSink::default();
        ThemeApplier::new("", false).apply(&mut sink, &theme);

        assert!(!sink.0.iter().any(|call| call.starts_with("attr")));
        assert_eq!(sink.0.last().map(String::as_str), Some("class sample"));
    }

    #[test]
    fn renders_root_rule() {
        let mut sink = MemoryStyleSink::new();
        sink.set_property("--background", "oklch(1 0 0)");
        assert_eq!(sink.to_css(), ":root {\n  --background: oklch(1 0 0);\n}\n");
    }
}
