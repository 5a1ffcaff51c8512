//! CLI output formatting for the `check` and `build` commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. `check` prints a
//! content inventory — categories with per-category product counts (as the
//! filter computes them) and the product list — so a content editor can
//! read it as a table of what the site will show. `build` prints the pages
//! written and the asset count.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 Todos / All (4 products)
//! 002 Tortas / Cakes (2 products)
//! 003 Cupcakes / Cupcakes (2 products)
//!
//! Pastries
//! 001 Torta de Chocolate
//!     Slug: torta-de-chocolate
//! 002 Cupcake de Vainilla
//!     Slug: cupcake-de-vainilla
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html
//! en/index.html
//! instagram/index.html
//! Copied 12 asset files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::content::{Content, Lang};
use crate::generate::SiteReport;
use crate::selection::filtered_pastries;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the `check` inventory: categories with filter-derived product
/// counts, then the product list.
pub fn format_check_output(content: &Content) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Categories".to_string());
    for index in 0..content.categories.len() {
        let count = filtered_pastries(content, Lang::Es, index).len();
        let es = content.categories.label(Lang::Es, index).unwrap_or("?");
        let en = content.categories.label(Lang::En, index).unwrap_or("?");
        lines.push(format!(
            "{} {} / {} ({} products)",
            format_index(index + 1),
            es,
            en,
            count
        ));
    }

    lines.push(String::new());
    lines.push("Pastries".to_string());
    for (pos, pastry) in content.pastries.iter().enumerate() {
        lines.push(format!(
            "{} {}",
            format_index(pos + 1),
            pastry.title.get(Lang::Es)
        ));
        lines.push(format!("    Slug: {}", pastry.slug));
    }

    lines
}

/// Format the `build` summary: generated pages and copied assets.
pub fn format_build_output(report: &SiteReport) -> Vec<String> {
    let mut lines: Vec<String> = report.pages.clone();
    lines.push(format!("Copied {} asset files", report.assets_copied));
    lines
}

pub fn print_check_output(content: &Content) {
    for line in format_check_output(content) {
        println!("{}", line);
    }
}

pub fn print_build_output(report: &SiteReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
