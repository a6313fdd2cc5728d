//! Theme catalog
//!
//! An ordered, immutable list of [`ThemeDefinition`]s with an id index.
//! The built-in catalog is constructed once on first use; custom catalogs
//! can be loaded from TOML and replace it wholesale.

use crate::error::{Result, ThemeError};
use crate::presets::builtin_themes;
use crate::theme::ThemeDefinition;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Global built-in catalog instance
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Ordered collection of themes keyed by id
#[derive(Clone, Debug)]
pub struct Catalog {
    themes: Vec<ThemeDefinition>,
    index: FxHashMap<String, usize>,
}

#[derive(Deserialize)]
struct CatalogFile {
    themes: Vec<ThemeDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(themes: Vec<ThemeDefinition>) -> Result<Self> {
        if themes.is_empty() {
            return Err(ThemeError::EmptyCatalog);
        }

        let mut index = FxHashMap::default();
        for (position, theme) in themes.iter().enumerate() {
            if index.insert(theme.id.clone(), position).is_some() {
                return Err(ThemeError::DuplicateThemeId(theme.id.clone()));
            }
        }

        Ok(Self { themes, index })
    }

    /// The built-in preset catalog
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let catalog = Catalog::new(builtin_themes())
                .expect("built-in presets are non-empty with unique ids");
            tracing::debug!("built-in theme catalog ready ({} themes)", catalog.len());
            catalog
        })
    }

    /// Parse a catalog from TOML (`[[themes]]` tables)
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::new(file.themes)
    }

    /// Read and parse a TOML catalog file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// All themes in catalog order
    pub fn list(&self) -> &[ThemeDefinition] {
        &self.themes
    }

    /// Find a theme by id
    pub fn find(&self, id: &str) -> Option<&ThemeDefinition> {
        self.index.get(id).map(|&position| &self.themes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Theme ids in catalog order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.themes.iter().map(|t| t.id.as_str())
    }

    /// Theme display names in catalog order
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{ColorToken, ThemeTokens};

    fn theme(id: &str) -> ThemeDefinition {
        ThemeDefinition::new(
            id.to_uppercase(),
            id,
            "",
            Vec::new(),
            ThemeTokens::from_fn(|_| "oklch(0.5 0 0)".to_string()),
        )
    }

    fn toml_theme(id: &str) -> String {
        let mut out = format!("[[themes]]\nname = \"{id}\"\nvalue = \"{id}\"\n[themes.tokens]\n");
        for token in ColorToken::all() {
            out.push_str(&format!("{} = \"oklch(0.4 0.1 {})\"\n", token.key(), token as usize));
        }
        out
    }

    #[test]
    fn loads_nested_colors_tables() {
        let mut src = String::from(
            "[[themes]]\nname = \"Paper\"\nvalue = \"paper\"\n\
             [themes.colors]\npreview = [\"#fff\", \"#000\"]\n[themes.colors.tokens]\n",
        );
        for token in ColorToken::all() {
            src.push_str(&format!("{} = \"oklch(0.9 0 0)\"\n", token.key()));
        }

        let catalog = Catalog::from_toml_str(&src).unwrap();
        let paper = catalog.find("paper").unwrap();
        assert_eq!(paper.preview_colors, vec!["#fff", "#000"]);
        assert_eq!(paper.token(ColorToken::Ring), "oklch(0.9 0 0)");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![theme("a"), theme("b"), theme("a")]).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateThemeId(ref id) if id == "a"));
    }

    #[test]
    fn builtin_presets_pass_validation() {
        let catalog = Catalog::new(builtin_themes()).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::new(Vec::new()), Err(ThemeError::EmptyCatalog)));
    }

    #[test]
    fn preserves_order() {
        let catalog = Catalog::new(vec![theme("b"), theme("a")]).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn loads_toml_catalog() {
        let src = format!("{}\n{}", toml_theme("paper"), toml_theme("ink"));
        let catalog = Catalog::from_toml_str(&src).unwrap();

        assert_eq!(catalog.len(), 2);
        let ink = catalog.find("ink").unwrap();
        assert_eq!(ink.token(ColorToken::Ring), "oklch(0.4 0.1 18)");
    }

    #[test]
    fn toml_catalog_with_unknown_token_fails() {
        let src = format!("{}brandColor = \"red\"\n", toml_theme("paper"));
        let err = Catalog::from_toml_str(&src).unwrap_err();
        assert!(err.to_string().contains("brandColor"), "{err}");
    }
}
