//! Content store: the bilingual data file behind the whole site.
//!
//! `content.json` holds everything the pages say — shop metadata, the hero
//! block, the category list, the product entries, footer contact info, and
//! UI strings — each in every supported language. It is loaded once per
//! invocation and never mutated.
//!
//! ## Shape
//!
//! ```json
//! {
//!   "shopName": { "es": "...", "en": "..." },
//!   "hero": { "title": {...}, "subtitle1": {...}, "subtitle2": {...}, "authors": {...} },
//!   "filter": { "label": {...} },
//!   "categories": {
//!     "es": ["Todos", "Tortas", "Cupcakes"],
//!     "en": ["All", "Cakes", "Cupcakes"],
//!     "slugs": ["all", "tortas", "cupcakes"]
//!   },
//!   "pastries": [
//!     { "id": 1, "slug": "torta-de-chocolate", "image": "/images/torta.webp",
//!       "title": {...}, "description": {...}, "category": {...} }
//!   ],
//!   "footer": { ... },
//!   "ui": { ... }
//! }
//! ```
//!
//! The three category arrays are positionally aligned: index `i` is the same
//! category in every language, and `slugs[i]` is its language-independent
//! URL identifier. Index 0 is reserved for the "show all" pseudo-category.
//!
//! ## Validation
//!
//! [`Content::validate`] enforces the structural rules the rest of the
//! pipeline relies on: parallel category arrays of equal non-zero length,
//! unique category and pastry slugs, and every pastry label matching a known
//! category. The pure selection/filter functions stay total regardless —
//! validation exists so `check` and `build` fail early with a clear message
//! instead of generating a silently broken site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("category arrays must be parallel: {0} es, {1} en, {2} slugs")]
    MismatchedCategories(usize, usize, usize),
    #[error("category list is empty (index 0 must be the \"all\" pseudo-category)")]
    NoCategories,
    #[error("duplicate category slug: {0}")]
    DuplicateCategorySlug(String),
    #[error("duplicate pastry slug: {0}")]
    DuplicatePastrySlug(String),
    #[error("pastry '{slug}' has unknown {lang} category label: {label}")]
    UnknownCategoryLabel {
        slug: String,
        lang: Lang,
        label: String,
    },
}

/// A supported site language.
///
/// The set is closed: content records carry exactly one variant per language,
/// and every page is generated once per language. Spanish is the site
/// default, matching the shop's home market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Label shown on the language picker button ("ES" / "EN").
    pub fn display(self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }

    /// Native name of the language, for accessible labels.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Es => "Español",
            Lang::En => "English",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A string with one variant per language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Localized {
    pub es: String,
    pub en: String,
}

impl Localized {
    pub fn new(es: &str, en: &str) -> Self {
        Self {
            es: es.to_string(),
            en: en.to_string(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }
}

/// The ordered category lists, positionally aligned across languages.
///
/// `es[i]`, `en[i]` and `slugs[i]` all describe the same category. Index 0
/// is the "show all" pseudo-category ("Todos"/"All").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categories {
    pub es: Vec<String>,
    pub en: Vec<String>,
    pub slugs: Vec<String>,
}

impl Categories {
    /// Number of categories, including the "all" pseudo-category.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Display labels for one language.
    pub fn labels(&self, lang: Lang) -> &[String] {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }

    /// Display label at a position, if in range.
    pub fn label(&self, lang: Lang, index: usize) -> Option<&str> {
        self.labels(lang).get(index).map(String::as_str)
    }

    /// Slug at a position, if in range.
    pub fn slug(&self, index: usize) -> Option<&str> {
        self.slugs.get(index).map(String::as_str)
    }

    /// Position of a slug in the slug list.
    pub fn position_of_slug(&self, slug: &str) -> Option<usize> {
        self.slugs.iter().position(|s| s == slug)
    }

    /// Position of a display label in one language's label list.
    pub fn position_of_label(&self, lang: Lang, label: &str) -> Option<usize> {
        self.labels(lang).iter().position(|l| l == label)
    }
}

/// One product entry. Immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pastry {
    pub id: u32,
    /// URL-safe identifier, unique within the product set, stable across
    /// languages.
    pub slug: String,
    /// Image path, relative to the assets root (served as-is; image
    /// processing is out of scope).
    pub image: String,
    pub title: Localized,
    pub description: Localized,
    pub category: Localized,
}

/// The hero block at the top of the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    pub title: Localized,
    pub subtitle1: Localized,
    pub subtitle2: Localized,
    pub authors: Localized,
}

/// Label above the category filter row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterStrings {
    pub label: Localized,
}

/// Footer and contact information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterInfo {
    pub address: Localized,
    pub address_link: String,
    pub phone: String,
    pub email: String,
    pub hours: Localized,
    /// Instagram handle as displayed (e.g. `@tentaciones`).
    pub instagram: String,
    pub instagram_url: String,
    pub credit: Localized,
}

/// Miscellaneous UI strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub home: Localized,
    pub contact: Localized,
    pub order_or_inquiry: Localized,
    pub see_more_instagram: Localized,
    pub on_instagram: Localized,
}

/// The full content store, loaded once from `content.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub shop_name: Localized,
    pub hero: Hero,
    pub filter: FilterStrings,
    pub categories: Categories,
    pub pastries: Vec<Pastry>,
    pub footer: FooterInfo,
    pub ui: UiStrings,
}

impl Content {
    /// Structural validation. See the module docs for the enforced rules.
    pub fn validate(&self) -> Result<(), ContentError> {
        let (es, en, slugs) = (
            self.categories.es.len(),
            self.categories.en.len(),
            self.categories.slugs.len(),
        );
        if es != en || en != slugs {
            return Err(ContentError::MismatchedCategories(es, en, slugs));
        }
        if self.categories.is_empty() {
            return Err(ContentError::NoCategories);
        }
        if let Some(dup) = first_duplicate(&self.categories.slugs) {
            return Err(ContentError::DuplicateCategorySlug(dup.to_string()));
        }
        let pastry_slugs: Vec<String> = self.pastries.iter().map(|p| p.slug.clone()).collect();
        if let Some(dup) = first_duplicate(&pastry_slugs) {
            return Err(ContentError::DuplicatePastrySlug(dup.to_string()));
        }
        for pastry in &self.pastries {
            for lang in Lang::ALL {
                let label = pastry.category.get(lang);
                if self.categories.position_of_label(lang, label).is_none() {
                    return Err(ContentError::UnknownCategoryLabel {
                        slug: pastry.slug.clone(),
                        lang,
                        label: label.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve a pastry's category to its language-independent slug.
    ///
    /// Looks the Spanish label up positionally; languages are aligned, so
    /// either language gives the same position. `None` only for unvalidated
    /// content.
    pub fn category_slug_of(&self, pastry: &Pastry) -> Option<&str> {
        let pos = self
            .categories
            .position_of_label(Lang::Es, pastry.category.get(Lang::Es))?;
        self.categories.slug(pos)
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    for (i, item) in items.iter().enumerate() {
        if items[..i].contains(item) {
            return Some(item);
        }
    }
    None
}

/// Load and validate `content.json` from the source directory.
pub fn load_content(source: &Path) -> Result<Content, ContentError> {
    let raw = fs::read_to_string(source.join("content.json"))?;
    let content: Content = serde_json::from_str(&raw)?;
    content.validate()?;
    Ok(content)
}

/// Returns a stock `content.json` with every key populated.
///
/// Used by the `gen-content` CLI command as a starting point for a new site.
pub fn stock_content_json() -> &'static str {
    include_str!("../static/content.stock.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_content;

    #[test]
    fn lang_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn default_lang_is_spanish() {
        assert_eq!(Lang::default(), Lang::Es);
    }

    #[test]
    fn localized_get_selects_variant() {
        let l = Localized::new("Hola", "Hello");
        assert_eq!(l.get(Lang::Es), "Hola");
        assert_eq!(l.get(Lang::En), "Hello");
    }

    #[test]
    fn categories_positional_lookups() {
        let content = sample_content();
        assert_eq!(content.categories.position_of_slug("cupcakes"), Some(2));
        assert_eq!(content.categories.position_of_slug("nope"), None);
        assert_eq!(
            content.categories.position_of_label(Lang::Es, "Tortas"),
            Some(1)
        );
        assert_eq!(content.categories.label(Lang::En, 1), Some("Cakes"));
        assert_eq!(content.categories.slug(0), Some("all"));
        assert_eq!(content.categories.label(Lang::Es, 99), None);
    }

    #[test]
    fn sample_content_is_valid() {
        sample_content().validate().unwrap();
    }

    #[test]
    fn validate_rejects_mismatched_category_arrays() {
        let mut content = sample_content();
        content.categories.en.pop();
        assert!(matches!(
            content.validate(),
            Err(ContentError::MismatchedCategories(_, _, _))
        ));
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let mut content = sample_content();
        content.categories = Categories::default();
        assert!(matches!(content.validate(), Err(ContentError::NoCategories)));
    }

    #[test]
    fn validate_rejects_duplicate_category_slug() {
        let mut content = sample_content();
        content.categories.es.push("Otra".to_string());
        content.categories.en.push("Other".to_string());
        content.categories.slugs.push("tortas".to_string());
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateCategorySlug(s)) if s == "tortas"
        ));
    }

    #[test]
    fn validate_rejects_duplicate_pastry_slug() {
        let mut content = sample_content();
        let mut dup = content.pastries[0].clone();
        dup.id = 999;
        content.pastries.push(dup);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicatePastrySlug(_))
        ));
    }

    #[test]
    fn validate_rejects_unknown_category_label() {
        let mut content = sample_content();
        content.pastries[0].category.en = "Bread".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownCategoryLabel { lang: Lang::En, .. })
        ));
    }

    #[test]
    fn category_slug_of_resolves_positionally() {
        let content = sample_content();
        let torta = content
            .pastries
            .iter()
            .find(|p| p.category.es == "Tortas")
            .unwrap();
        assert_eq!(content.category_slug_of(torta), Some("tortas"));
    }

    #[test]
    fn stock_content_parses_and_validates() {
        let content: Content = serde_json::from_str(stock_content_json()).unwrap();
        content.validate().unwrap();
        assert_eq!(content.categories.slug(0), Some("all"));
        assert!(!content.pastries.is_empty());
    }

    #[test]
    fn content_json_round_trips() {
        let content = sample_content();
        let json = serde_json::to_string(&content).unwrap();
        // Field names must stay camelCase for compatibility with existing
        // content files.
        assert!(json.contains("\"shopName\""));
        assert!(json.contains("\"addressLink\""));
        let back: Content = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
    }
}
