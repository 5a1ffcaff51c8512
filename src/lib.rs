//! # Vitrina
//!
//! A minimal static site generator for bilingual product showcase sites —
//! built for a bakery storefront, usable by any small shop with a
//! filterable product gallery. Two JSON files are the data source:
//! `content.json` (everything the pages say, in every language) and
//! `style.json` (color tokens). The output is plain HTML you can drop on
//! any file server.
//!
//! # Architecture: Load, Resolve, Render
//!
//! ```text
//! 1. Load      content.json + style.json + config.toml  →  typed stores
//! 2. Resolve   selection logic: category filter, URL ↔ state mapping
//! 3. Render    maud templates  →  dist/  (one home page per language)
//! ```
//!
//! The interesting part is stage 2. The home page has exactly one piece of
//! state — the selection tuple (language, category, open product) — and it
//! is projected onto two URL query parameters, `category` and `product`.
//! [`selection`] implements that projection as pure functions in both
//! directions plus a reducer for the four user interactions, so the whole
//! URL contract is unit-testable without a browser. The generator feeds
//! every category link it emits through the same functions, and the small
//! embedded `gallery.js` mirrors them client-side.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Bilingual content store — types, loading, validation |
//! | [`style`] | Theme store — color tokens and CSS custom property generation |
//! | [`selection`] | Category filter, selection tuple, URL/state synchronizer |
//! | [`config`] | `config.toml` loading, merging, validation |
//! | [`generate`] | Renders the final HTML site with Maud |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## URL as the Source of Truth
//!
//! The selection tuple is never stored anywhere; it is *derived* from the
//! query string on every navigation (including back/forward) by
//! [`selection::Selection::resolve`], and every user interaction writes a
//! new query string through [`selection::Selection::to_params`]. One source
//! of truth, no dual-state bugs, and deep links to any category or product
//! work for free.
//!
//! ## Positional Categories
//!
//! Category labels per language and their language-independent slugs are
//! parallel arrays: index `i` is the same category everywhere, index 0 is
//! "show all". Switching language is therefore just changing the language
//! field — the positional selection carries over untouched.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Images Are Someone Else's Job
//!
//! Product images are referenced by path and copied verbatim from
//! `assets/`. No resizing, no format conversion — hosting-side image
//! optimization does this better, and leaving it out keeps the binary
//! dependency-free and instant.
//!
//! ## The "Forever Stack"
//!
//! The output is plain HTML, established CSS, and one small vanilla
//! JavaScript file (which the site degrades gracefully without: filter
//! links become page loads, modals open via `:target`). No Node, no PHP,
//! no database. If a browser can render HTML, it can sell your cakes.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod selection;
pub mod style;

#[cfg(test)]
pub(crate) mod test_helpers;
