//! Gallery selection state and its URL projection.
//!
//! The entire derived UI state of the home page is one tuple: language,
//! selected category (positional index, 0 = "show all"), and the optionally
//! open product modal (an index into the *currently filtered* product list).
//! Two URL query parameters project that tuple: `category` (a category slug)
//! and `product` (a pastry slug).
//!
//! Everything here is pure. [`Selection::resolve`] maps query parameters to
//! a new state, [`Selection::to_params`] maps state back to parameters, and
//! [`Selection::apply`] is the reducer for the four user interactions. The
//! generator uses these functions to build every category link it emits, and
//! the embedded `gallery.js` mirrors the same semantics in the browser — a
//! single source of truth for the URL contract, testable without a browser.
//!
//! ## Fallback policy
//!
//! Unknown slugs never error. An unrecognized `category` slug keeps the
//! *current* category: at initial load that is the default "all", on a later
//! navigation it is whatever was already selected. An unrecognized `product`
//! slug simply clears the modal.

use crate::content::{Content, Lang, Pastry};

/// The two query parameters carrying the selection, as read from or written
/// to the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// `category` — a category slug.
    pub category: Option<String>,
    /// `product` — a pastry slug.
    pub product: Option<String>,
}

impl QueryParams {
    pub fn new(category: Option<&str>, product: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            product: product.map(str::to_string),
        }
    }

    /// Parse a query string (with or without the leading `?`).
    ///
    /// Empty values count as absent, unknown keys are ignored, and the first
    /// occurrence of a key wins — the same reading `URLSearchParams.get`
    /// gives the browser-side mirror. Slugs are URL-safe by contract, so no
    /// percent-decoding is needed.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if value.is_empty() {
                continue;
            }
            match key {
                "category" if params.category.is_none() => {
                    params.category = Some(value.to_string());
                }
                "product" if params.product.is_none() => {
                    params.product = Some(value.to_string());
                }
                _ => {}
            }
        }
        params
    }

    /// Render as a query string, leading `?` included. Empty when neither
    /// parameter is set.
    pub fn to_query_string(&self) -> String {
        match (&self.category, &self.product) {
            (Some(c), Some(p)) => format!("?category={c}&product={p}"),
            (Some(c), None) => format!("?category={c}"),
            (None, Some(p)) => format!("?product={p}"),
            (None, None) => String::new(),
        }
    }
}

/// Filter the product list by a category position under one language.
///
/// Position 0 is the "show all" pseudo-category and returns the full list.
/// Any other position selects exactly the pastries whose category label in
/// `lang` equals that position's label, preserving original order. An
/// out-of-range position has no label, so it matches nothing. Pure and
/// total.
pub fn filtered_pastries(content: &Content, lang: Lang, category: usize) -> Vec<&Pastry> {
    if category == 0 {
        return content.pastries.iter().collect();
    }
    match content.categories.label(lang, category) {
        Some(label) => content
            .pastries
            .iter()
            .filter(|p| p.category.get(lang) == label)
            .collect(),
        None => Vec::new(),
    }
}

/// A user interaction that produces a new selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A category filter button or menu link was clicked.
    SelectCategory(usize),
    /// A gallery card was clicked; the index is into the filtered list.
    SelectProduct(usize),
    /// The modal close button was clicked.
    CloseModal,
    /// The language picker was used.
    SwitchLanguage(Lang),
}

/// The selection tuple: the entire derived UI state of the home page.
///
/// Invariant: `product`, when `Some(i)`, is a valid index into
/// `filtered_pastries(content, lang, category)`. [`Selection::resolve`] and
/// [`Selection::apply`] only ever produce states honoring this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub lang: Lang,
    /// Positional category index; 0 is "show all".
    pub category: usize,
    /// Open modal, as an index into the currently filtered list.
    pub product: Option<usize>,
}

impl Selection {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            category: 0,
            product: None,
        }
    }

    /// Reading direction: derive the next state from query parameters.
    ///
    /// The category slug is resolved positionally; absent or unrecognized
    /// slugs keep the current category (see the module docs on the fallback
    /// asymmetry). The product slug is searched linearly in the list
    /// filtered by the *resolved* category; absent or not found clears the
    /// modal.
    pub fn resolve(self, params: &QueryParams, content: &Content) -> Self {
        let category = params
            .category
            .as_deref()
            .and_then(|slug| content.categories.position_of_slug(slug))
            .unwrap_or(self.category);

        let filtered = filtered_pastries(content, self.lang, category);
        let product = params
            .product
            .as_deref()
            .and_then(|slug| filtered.iter().position(|p| p.slug == slug));

        Self {
            lang: self.lang,
            category,
            product,
        }
    }

    /// Writing direction: project the state onto query parameters.
    ///
    /// The category slug is always emitted, including the "all" slug at
    /// position 0. The product slug is emitted only while a modal is open.
    pub fn to_params(self, content: &Content) -> QueryParams {
        let category = content.categories.slug(self.category).map(str::to_string);
        let product = self.product.and_then(|i| {
            filtered_pastries(content, self.lang, self.category)
                .get(i)
                .map(|p| p.slug.clone())
        });
        QueryParams { category, product }
    }

    /// Reducer: apply one user interaction, producing a new immutable state.
    pub fn apply(self, action: Action, content: &Content) -> Self {
        match action {
            Action::SelectCategory(index) => Self {
                lang: self.lang,
                category: index,
                product: None,
            },
            Action::SelectProduct(index) => {
                let in_range = index < filtered_pastries(content, self.lang, self.category).len();
                Self {
                    product: in_range.then_some(index),
                    ..self
                }
            }
            Action::CloseModal => Self {
                product: None,
                ..self
            },
            // Categories are positionally aligned across languages, so the
            // filtered list holds the same pastries in the same order: both
            // indices stay meaningful.
            Action::SwitchLanguage(lang) => Self { lang, ..self },
        }
    }

    /// The selected category's display label under the current language.
    pub fn category_label<'a>(&self, content: &'a Content) -> Option<&'a str> {
        content.categories.label(self.lang, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_content;

    fn slugs(pastries: &[&Pastry]) -> Vec<String> {
        pastries.iter().map(|p| p.slug.clone()).collect()
    }

    // =========================================================================
    // QueryParams
    // =========================================================================

    #[test]
    fn parse_both_params() {
        let p = QueryParams::parse("?category=tortas&product=torta-de-chocolate");
        assert_eq!(p.category.as_deref(), Some("tortas"));
        assert_eq!(p.product.as_deref(), Some("torta-de-chocolate"));
    }

    #[test]
    fn parse_without_leading_question_mark() {
        let p = QueryParams::parse("category=cupcakes");
        assert_eq!(p.category.as_deref(), Some("cupcakes"));
        assert_eq!(p.product, None);
    }

    #[test]
    fn parse_empty_and_missing_values_are_absent() {
        assert_eq!(QueryParams::parse(""), QueryParams::default());
        assert_eq!(QueryParams::parse("?category="), QueryParams::default());
        assert_eq!(QueryParams::parse("?category"), QueryParams::default());
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let p = QueryParams::parse("?utm_source=ig&category=tortas");
        assert_eq!(p.category.as_deref(), Some("tortas"));
    }

    #[test]
    fn parse_first_occurrence_wins() {
        let p = QueryParams::parse("?category=tortas&category=cupcakes");
        assert_eq!(p.category.as_deref(), Some("tortas"));
    }

    #[test]
    fn query_string_forms() {
        assert_eq!(QueryParams::default().to_query_string(), "");
        assert_eq!(
            QueryParams::new(Some("all"), None).to_query_string(),
            "?category=all"
        );
        assert_eq!(
            QueryParams::new(Some("tortas"), Some("x")).to_query_string(),
            "?category=tortas&product=x"
        );
    }

    #[test]
    fn query_string_parse_round_trip() {
        let p = QueryParams::new(Some("cupcakes"), Some("cupcake-de-vainilla"));
        assert_eq!(QueryParams::parse(&p.to_query_string()), p);
    }

    // =========================================================================
    // Category filter
    // =========================================================================

    #[test]
    fn all_category_returns_full_list_in_order() {
        let content = sample_content();
        for lang in Lang::ALL {
            let filtered = filtered_pastries(&content, lang, 0);
            assert_eq!(
                slugs(&filtered),
                content
                    .pastries
                    .iter()
                    .map(|p| p.slug.clone())
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn filter_is_exact_per_language() {
        let content = sample_content();
        for lang in Lang::ALL {
            for index in 1..content.categories.len() {
                let label = content.categories.label(lang, index).unwrap();
                let filtered = filtered_pastries(&content, lang, index);
                assert!(filtered.iter().all(|p| p.category.get(lang) == label));
                let excluded = content
                    .pastries
                    .iter()
                    .filter(|p| p.category.get(lang) != label)
                    .count();
                assert_eq!(filtered.len() + excluded, content.pastries.len());
            }
        }
    }

    #[test]
    fn filter_preserves_original_order() {
        let content = sample_content();
        let filtered = filtered_pastries(&content, Lang::Es, 1);
        let expected: Vec<String> = content
            .pastries
            .iter()
            .filter(|p| p.category.es == "Tortas")
            .map(|p| p.slug.clone())
            .collect();
        assert_eq!(slugs(&filtered), expected);
        assert!(filtered.len() >= 2, "fixture needs two cakes to test order");
    }

    #[test]
    fn filter_out_of_range_category_matches_nothing() {
        let content = sample_content();
        assert!(filtered_pastries(&content, Lang::Es, 99).is_empty());
    }

    #[test]
    fn cupcakes_slug_filters_on_spanish_label() {
        // ?category=cupcakes selects position 2 ("Cupcakes") and filters on
        // the Spanish label.
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .resolve(&QueryParams::parse("?category=cupcakes"), &content);
        assert_eq!(state.category_label(&content), Some("Cupcakes"));
        let filtered = filtered_pastries(&content, Lang::Es, state.category);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|p| p.category.es == "Cupcakes"));
    }

    // =========================================================================
    // Resolve (params → state)
    // =========================================================================

    #[test]
    fn resolve_category_slug_positionally() {
        let content = sample_content();
        let state =
            Selection::new(Lang::Es).resolve(&QueryParams::parse("?category=tortas"), &content);
        assert_eq!(state.category, 1);
        assert_eq!(state.product, None);
    }

    #[test]
    fn resolve_unknown_category_defaults_to_all_at_initial_load() {
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .resolve(&QueryParams::parse("?category=doesnotexist"), &content);
        assert_eq!(state.category, 0);
    }

    #[test]
    fn resolve_unknown_category_keeps_previous_selection_later() {
        // Deliberate asymmetry: after a category is selected, an
        // unrecognized slug on a subsequent navigation retains it.
        let content = sample_content();
        let state =
            Selection::new(Lang::Es).resolve(&QueryParams::parse("?category=tortas"), &content);
        let state = state.resolve(&QueryParams::parse("?category=doesnotexist"), &content);
        assert_eq!(state.category, 1);
    }

    #[test]
    fn resolve_product_within_filtered_list() {
        let content = sample_content();
        let filtered = filtered_pastries(&content, Lang::Es, 1);
        let target = filtered[1].slug.clone();
        let params = QueryParams::new(Some("tortas"), Some(&target));
        let state = Selection::new(Lang::Es).resolve(&params, &content);
        assert_eq!(state.product, Some(1));
    }

    #[test]
    fn resolve_product_outside_filtered_list_clears_selection() {
        // A cupcake slug under the cakes filter is "not present in the
        // filtered list": selection resolves to none.
        let content = sample_content();
        let cupcake = content
            .pastries
            .iter()
            .find(|p| p.category.es == "Cupcakes")
            .unwrap();
        let params = QueryParams::new(Some("tortas"), Some(&cupcake.slug));
        let state = Selection::new(Lang::Es).resolve(&params, &content);
        assert_eq!(state.category, 1);
        assert_eq!(state.product, None);
    }

    #[test]
    fn resolve_unknown_product_clears_modal_without_error() {
        let content = sample_content();
        let params = QueryParams::new(Some("tortas"), Some("doesnotexist"));
        let state = Selection::new(Lang::Es).resolve(&params, &content);
        assert_eq!(state.product, None);
    }

    #[test]
    fn resolve_absent_product_clears_open_modal() {
        let content = sample_content();
        let mut state = Selection::new(Lang::Es);
        state.product = Some(0);
        let state = state.resolve(&QueryParams::parse("?category=all"), &content);
        assert_eq!(state.product, None);
    }

    // =========================================================================
    // Round trips (state → params → state)
    // =========================================================================

    #[test]
    fn category_round_trips_for_every_category() {
        let content = sample_content();
        for lang in Lang::ALL {
            for index in 0..content.categories.len() {
                let state = Selection::new(lang).apply(Action::SelectCategory(index), &content);
                let query = state.to_params(&content).to_query_string();
                let back = Selection::new(lang).resolve(&QueryParams::parse(&query), &content);
                assert_eq!(back.category, index, "category {index} under {lang}");
            }
        }
    }

    #[test]
    fn product_round_trips_within_filtered_list() {
        let content = sample_content();
        for lang in Lang::ALL {
            for category in 0..content.categories.len() {
                let count = filtered_pastries(&content, lang, category).len();
                for product in 0..count {
                    let state = Selection::new(lang)
                        .apply(Action::SelectCategory(category), &content)
                        .apply(Action::SelectProduct(product), &content);
                    let query = state.to_params(&content).to_query_string();
                    let back = Selection::new(lang).resolve(&QueryParams::parse(&query), &content);
                    assert_eq!(back, state);
                }
            }
        }
    }

    #[test]
    fn all_category_emits_its_slug() {
        let content = sample_content();
        let params = Selection::new(Lang::Es).to_params(&content);
        assert_eq!(params.category.as_deref(), Some("all"));
        assert_eq!(params.product, None);
    }

    // =========================================================================
    // Reducer
    // =========================================================================

    #[test]
    fn select_category_clears_product() {
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .apply(Action::SelectProduct(0), &content)
            .apply(Action::SelectCategory(2), &content);
        assert_eq!(state.category, 2);
        assert_eq!(state.product, None);
    }

    #[test]
    fn select_product_rejects_out_of_range_index() {
        let content = sample_content();
        let state = Selection::new(Lang::Es).apply(Action::SelectProduct(999), &content);
        assert_eq!(state.product, None);
    }

    #[test]
    fn close_modal_clears_product_only() {
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .apply(Action::SelectCategory(1), &content)
            .apply(Action::SelectProduct(0), &content)
            .apply(Action::CloseModal, &content);
        assert_eq!(state.category, 1);
        assert_eq!(state.product, None);
    }

    #[test]
    fn switch_language_preserves_positional_category() {
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .apply(Action::SelectCategory(2), &content)
            .apply(Action::SwitchLanguage(Lang::En), &content);
        assert_eq!(state.category, 2);
        assert_eq!(state.category_label(&content), Some("Cupcakes"));

        let back = state.apply(Action::SwitchLanguage(Lang::Es), &content);
        assert_eq!(back.category_label(&content), Some("Cupcakes"));
    }

    #[test]
    fn switch_language_keeps_open_modal_on_same_pastry() {
        let content = sample_content();
        let state = Selection::new(Lang::Es)
            .apply(Action::SelectCategory(1), &content)
            .apply(Action::SelectProduct(1), &content);
        let before = filtered_pastries(&content, Lang::Es, 1)[1].slug.clone();

        let switched = state.apply(Action::SwitchLanguage(Lang::En), &content);
        let after = filtered_pastries(&content, Lang::En, 1)[switched.product.unwrap()]
            .slug
            .clone();
        assert_eq!(before, after);
    }
}
