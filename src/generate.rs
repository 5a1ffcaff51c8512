//! HTML site generation.
//!
//! Final stage of the vitrina build: takes the loaded content, style, and
//! config stores and writes the static site.
//!
//! ## Generated Pages
//!
//! - **Home pages** (`/index.html`, `/en/index.html`): hero, category
//!   filter, gallery grid, per-product modals, menu overlay, footer — one
//!   complete page per language
//! - **Instagram page** (`/instagram/index.html`): embedded posts from config
//! - **About page** (`/about.html`): optional markdown content, when
//!   `about.md` exists in the source directory
//!
//! ## Selection state in static HTML
//!
//! The home page is rendered in the default selection state (category
//! "all", no modal). Everything the client needs to re-derive any other
//! state is baked into the markup by the same pure functions the tests
//! exercise:
//!
//! - every category link href comes from [`Selection::to_params`], so the
//!   emitted URLs *are* the synchronizer's writing direction;
//! - every gallery card carries `data-slug` and `data-category` (the
//!   language-independent category slug, resolved positionally);
//! - every product modal is present but hidden, addressable by slug.
//!
//! The embedded `gallery.js` then mirrors [`Selection::resolve`] in the
//! browser: it reads `?category`/`?product`, hides non-matching cards,
//! opens the matching modal, and pushes history entries without scroll
//! resets. Without JavaScript the page still works — filter links reload
//! the page and modals open via `:target` anchors.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout (color tokens injected from style.json)
//! - `static/gallery.js`: the client half of the URL/state synchronizer
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{self, Content, ContentError, Lang, Pastry};
use crate::selection::{Action, Selection};
use crate::style::{self, StyleError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Style error: {0}")]
    Style(#[from] StyleError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// What a build produced, for CLI reporting.
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Output-relative paths of generated HTML pages, in generation order.
    pub pages: Vec<String>,
    /// Number of asset files copied to the output root.
    pub assets_copied: usize,
}

/// Optional markdown page loaded from `about.md`.
#[derive(Debug, Clone)]
pub struct AboutPage {
    /// First `# heading`, or "About" when none.
    pub title: String,
    /// Raw markdown body.
    pub body: String,
}

/// Generate the full site from a source directory into an output directory.
pub fn generate(source: &Path, output: &Path) -> Result<SiteReport, GenerateError> {
    let content = content::load_content(source)?;
    let stylesheet = style::load_style(source)?;
    let site_config = config::load_config(source)?;

    let css = format!(
        "{}\n\n{}",
        style::generate_color_css(&stylesheet.colors),
        CSS_STATIC
    );

    fs::create_dir_all(output)?;
    let mut report = SiteReport::default();

    for lang in Lang::ALL {
        let page = render_home(&content, &site_config, lang, &css);
        let rel = match lang {
            Lang::Es => "index.html".to_string(),
            lang => format!("{}/index.html", lang.code()),
        };
        write_page(output, &rel, page)?;
        report.pages.push(rel);
    }

    let instagram = render_instagram(&content, &site_config, &css);
    write_page(output, "instagram/index.html", instagram)?;
    report.pages.push("instagram/index.html".to_string());

    if let Some(about) = load_about(source)? {
        let page = render_about(&about, &content, &site_config, &css);
        write_page(output, "about.html", page)?;
        report.pages.push("about.html".to_string());
    }

    report.assets_copied = copy_assets(&source.join("assets"), output)?;

    Ok(report)
}

fn write_page(output: &Path, rel: &str, page: Markup) -> Result<(), GenerateError> {
    let path = output.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page.into_string())?;
    Ok(())
}

/// Copy the source `assets/` directory verbatim into the output root.
///
/// Images are referenced, never processed. Returns the number of files
/// copied; a missing assets directory is fine (zero).
fn copy_assets(assets: &Path, output: &Path) -> Result<usize, GenerateError> {
    if !assets.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in walkdir::WalkDir::new(assets) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(rel) = entry.path().strip_prefix(assets) else {
            continue;
        };
        let dst = output.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Load `about.md` from the source directory, if present.
pub fn load_about(source: &Path) -> Result<Option<AboutPage>, GenerateError> {
    let path = source.join("about.md");
    if !path.exists() {
        return Ok(None);
    }
    let body = fs::read_to_string(&path)?;
    let title = body
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .unwrap_or_else(|| "About".to_string());
    Ok(Some(AboutPage { title, body }))
}

/// Root path of a language's home page.
fn home_href(lang: Lang) -> &'static str {
    match lang {
        Lang::Es => "/",
        Lang::En => "/en/",
    }
}

/// Href for selecting a category on a language's home page.
///
/// Built through the synchronizer's writing direction so emitted links and
/// the client logic can never disagree about the URL contract.
fn category_href(content: &Content, lang: Lang, index: usize) -> String {
    let query = Selection::new(lang)
        .apply(Action::SelectCategory(index), content)
        .to_params(content)
        .to_query_string();
    format!("{}{}", home_href(lang), query)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(
    title: &str,
    lang: Lang,
    config: &SiteConfig,
    css: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !config.site.description.is_empty() {
                    meta name="description" content=(config.site.description);
                }
                meta property="og:title" content=(title);
                meta property="og:locale" content=(config.site.locale);
                meta property="og:type" content="website";
                @if let Some(tag) = &config.analytics.google_tag {
                    (analytics_snippet(tag))
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Google tag snippet, emitted only when a tag is configured.
fn analytics_snippet(tag: &str) -> Markup {
    let inline = format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{tag}');"
    );
    html! {
        script async src={ "https://www.googletagmanager.com/gtag/js?id=" (tag) } {}
        script { (PreEscaped(inline)) }
    }
}

/// Renders the full-screen menu overlay (checkbox toggle, no JS required).
///
/// Home link, one link per category, contact anchor, language picker, and
/// the contact block. Category links are written by the synchronizer so the
/// overlay and the filter row agree on every URL.
pub fn render_menu(content: &Content, lang: Lang) -> Markup {
    html! {
        input.menu-toggle type="checkbox" id="menu-toggle";
        label.menu-open for="menu-toggle" { span { "Menu" } }
        div.menu-overlay {
            label.menu-close for="menu-toggle" { "\u{00d7}" }
            div.menu-inner {
                nav.menu-nav {
                    a href=(home_href(lang)) { (content.ui.home.get(lang)) }
                    @for (index, label) in content.categories.labels(lang).iter().enumerate() {
                        a href=(category_href(content, lang, index)) { (label) }
                    }
                    a href="#contacto" { (content.ui.contact.get(lang)) }
                }
                div.menu-langs {
                    @for option in Lang::ALL {
                        a.lang-btn
                            .active[option == lang]
                            href=(home_href(option))
                            lang=(option.code())
                            aria-label=(option.native_name()) {
                            (option.display())
                        }
                    }
                }
                div.menu-contact {
                    p { a href=(content.footer.address_link) target="_blank" rel="noopener noreferrer" {
                        (content.footer.address.get(lang))
                    } }
                    p { a href={ "tel:" (content.footer.phone) } { (content.footer.phone) } }
                    p { a href={ "mailto:" (content.footer.email) } { (content.footer.email) } }
                    p.menu-instagram { a href=(content.footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                        (instagram_line(content, lang))
                    } }
                }
            }
        }
    }
}

/// "See more … @handle … on Instagram", assembled per language.
fn instagram_line(content: &Content, lang: Lang) -> String {
    format!(
        "{} {} {}",
        content.ui.see_more_instagram.get(lang),
        content.footer.instagram,
        content.ui.on_instagram.get(lang)
    )
}

/// Renders the hero block: logo, title, split-accent subtitle, authors.
fn render_hero(content: &Content, config: &SiteConfig, lang: Lang) -> Markup {
    // First word of subtitle1 carries the accent color, as designed.
    let subtitle1 = content.hero.subtitle1.get(lang);
    let (accent, rest) = subtitle1.split_once(' ').unwrap_or((subtitle1, ""));
    html! {
        div.hero id="top" {
            img.hero-logo src=(config.site.logo) alt=(content.shop_name.get(lang)) width="520" height="320";
            h1 { (content.hero.title.get(lang)) }
            p.hero-subtitle {
                span.accent { (accent) }
                @if !rest.is_empty() { " " (rest) }
            }
            p.hero-subtitle { (content.hero.subtitle2.get(lang)) }
            p.hero-authors { (content.hero.authors.get(lang)) }
        }
    }
}

/// Renders the category filter row.
///
/// The "all" button (index 0) starts active; `gallery.js` moves the active
/// class when the query string selects another category.
fn render_filter(content: &Content, lang: Lang) -> Markup {
    html! {
        div.filter {
            p.filter-label { (content.filter.label.get(lang)) }
            div.filter-row {
                @for (index, label) in content.categories.labels(lang).iter().enumerate() {
                    a.filter-btn
                        .active[index == 0]
                        data-index=(index)
                        href=(category_href(content, lang, index)) {
                        (label)
                    }
                }
            }
        }
    }
}

/// Renders the skeleton placeholder grid shown while the reveal timer runs.
fn render_skeleton() -> Markup {
    html! {
        div.skeleton-grid hidden {
            @for _ in 0..6 {
                div.skeleton-tile { div.shimmer {} }
            }
        }
    }
}

/// Renders the gallery grid with one card per pastry.
///
/// Cards carry `data-slug` and `data-category` (the language-independent
/// category slug, resolved positionally from the pastry's label) so the
/// client filter never has to know about display labels. The no-JS
/// fallback opens modals through `:target` anchors.
pub fn render_gallery(content: &Content, config: &SiteConfig, lang: Lang) -> Markup {
    html! {
        div.gallery data-reveal-delay=(config.gallery.reveal_delay_ms) {
            (render_skeleton())
            div.gallery-grid {
                @for (index, pastry) in content.pastries.iter().enumerate() {
                    a.card
                        data-slug=(pastry.slug)
                        data-category=(content.category_slug_of(pastry).unwrap_or_default())
                        href={ "#modal-" (pastry.slug) } {
                        img src=(pastry.image)
                            alt=(pastry.title.get(lang))
                            width="400" height="400"
                            loading=(if index < 2 { "eager" } else { "lazy" });
                        div.card-overlay { h3 { (pastry.title.get(lang)) } }
                    }
                }
            }
        }
    }
}

/// Renders one hidden full-screen modal per pastry.
fn render_modals(content: &Content, lang: Lang) -> Markup {
    html! {
        @for pastry in &content.pastries {
            (render_modal(content, pastry, lang))
        }
    }
}

/// Renders a single product modal: image, category label, title,
/// description, and the order/contact block.
pub fn render_modal(content: &Content, pastry: &Pastry, lang: Lang) -> Markup {
    html! {
        div.modal id={ "modal-" (pastry.slug) } data-slug=(pastry.slug) {
            a.modal-close href=(home_href(lang)) aria-label="Close" { "\u{00d7}" }
            div.modal-grid {
                div.modal-image {
                    img src=(pastry.image) alt=(pastry.title.get(lang)) width="800" height="800";
                }
                div.modal-info {
                    p.modal-category { (pastry.category.get(lang)) }
                    h2 { (pastry.title.get(lang)) }
                    p.modal-description { (pastry.description.get(lang)) }
                    div.modal-contact {
                        h3 { (content.ui.order_or_inquiry.get(lang)) }
                        p { a href=(content.footer.address_link) target="_blank" rel="noopener noreferrer" {
                            (content.footer.address.get(lang))
                        } }
                        p { a href={ "tel:" (content.footer.phone) } { (content.footer.phone) } }
                        p { a href={ "mailto:" (content.footer.email) } { (content.footer.email) } }
                        p.modal-instagram { a href=(content.footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                            (instagram_line(content, lang))
                        } }
                    }
                }
            }
        }
    }
}

/// Renders the footer: contact block, hours, category links, Instagram
/// line, credit. The category links skip the "all" pseudo-category.
pub fn render_footer(content: &Content, lang: Lang) -> Markup {
    html! {
        footer id="contacto" {
            p { a href=(content.footer.address_link) target="_blank" rel="noopener noreferrer" {
                (content.footer.address.get(lang))
            } }
            p {
                a href={ "tel:" (content.footer.phone) } { (content.footer.phone) }
                " - "
                a href={ "mailto:" (content.footer.email) } { (content.footer.email) }
            }
            p.footer-hours { (content.footer.hours.get(lang)) }
            div.footer-categories {
                @for (index, label) in content.categories.labels(lang).iter().enumerate().skip(1) {
                    a href=(category_href(content, lang, index)) { (label) }
                }
            }
            p.footer-instagram { a href=(content.footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                (instagram_line(content, lang))
            } }
            p.footer-credit { (content.footer.credit.get(lang)) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a complete home page for one language.
pub fn render_home(content: &Content, config: &SiteConfig, lang: Lang, css: &str) -> Markup {
    let body = html! {
        main {
            div.shop-name-vertical { (content.shop_name.get(lang)) }
            header.top-bar {
                span.shop-name { (content.shop_name.get(lang)) }
                (render_menu(content, lang))
            }
            (render_hero(content, config, lang))
            (render_filter(content, lang))
            (render_gallery(content, config, lang))
            (render_modals(content, lang))
            (render_footer(content, lang))
        }
        script { (PreEscaped(JS)) }
    };
    base_document(&config.site.title, lang, config, css, body)
}

/// Renders the Instagram embed page. Spanish only, matching the original
/// site.
pub fn render_instagram(content: &Content, config: &SiteConfig, css: &str) -> Markup {
    let lang = Lang::Es;
    let body = html! {
        main.instagram-page {
            header.instagram-header {
                h1 { (content.footer.instagram) }
                a.close-link href="/" aria-label="Close" { "\u{00d7}" }
            }
            div.instagram-body {
                h2 { "Nuestro Instagram" }
                p { "Síguenos en Instagram para ver nuestras últimas creaciones" }
                a.follow-btn href=(content.footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                    "SEGUIR EN INSTAGRAM"
                }
                @if config.instagram.posts.is_empty() {
                    p.instagram-hint {
                        "Para mostrar posts aquí, añade sus URLs bajo [instagram] en config.toml."
                    }
                } @else {
                    div.instagram-grid {
                        @for post in &config.instagram.posts {
                            iframe src={ (post) "embed/" } loading="lazy" allow="encrypted-media" {}
                        }
                    }
                }
                p.instagram-more { a href=(content.footer.instagram_url) target="_blank" rel="noopener noreferrer" {
                    (instagram_line(content, lang)) " \u{2192}"
                } }
            }
        }
    };
    base_document(&config.site.title, lang, config, css, body)
}

/// Renders the about page from markdown content.
pub fn render_about(about: &AboutPage, content: &Content, config: &SiteConfig, css: &str) -> Markup {
    let parser = Parser::new(&about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let lang = Lang::Es;
    let body = html! {
        main.about-page {
            header.instagram-header {
                h1 { (content.shop_name.get(lang)) }
                a.close-link href="/" aria-label="Close" { "\u{00d7}" }
            }
            article.about-content {
                (PreEscaped(body_html))
            }
        }
    };
    base_document(&about.title, lang, config, css, body)
}

// ============================================================================
// Tests
// ============================================================================
