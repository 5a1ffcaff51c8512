//! Shared test fixtures for the vitrina test suite.
//!
//! [`sample_content`] is the canonical fixture: three categories (with the
//! "all" pseudo-category at index 0) and four pastries whose categories
//! interleave, so order-preservation bugs in the filter can't hide.

use crate::content::{
    Categories, Content, FilterStrings, FooterInfo, Hero, Localized, Pastry, UiStrings,
};

fn pastry(id: u32, slug: &str, title_es: &str, title_en: &str, cat_es: &str, cat_en: &str) -> Pastry {
    Pastry {
        id,
        slug: slug.to_string(),
        image: format!("/images/{slug}.webp"),
        title: Localized::new(title_es, title_en),
        description: Localized::new(
            &format!("Descripción de {title_es}"),
            &format!("Description of {title_en}"),
        ),
        category: Localized::new(cat_es, cat_en),
    }
}

/// A small, valid content store: categories ["Todos","Tortas","Cupcakes"]
/// with slugs ["all","tortas","cupcakes"], and four pastries in
/// interleaved category order.
pub fn sample_content() -> Content {
    Content {
        shop_name: Localized::new("Tentaciones por Sandili", "Tentaciones by Sandili"),
        hero: Hero {
            title: Localized::new(
                "Pastelería artesanal personalizada",
                "Personalized artisanal bakery",
            ),
            subtitle1: Localized::new("Tentaciones hechas a mano", "Temptations made by hand"),
            subtitle2: Localized::new("desde 2005", "since 2005"),
            authors: Localized::new("Por Sandra y Lili", "By Sandra and Lili"),
        },
        filter: FilterStrings {
            label: Localized::new("Explora por categoría", "Browse by category"),
        },
        categories: Categories {
            es: vec![
                "Todos".to_string(),
                "Tortas".to_string(),
                "Cupcakes".to_string(),
            ],
            en: vec![
                "All".to_string(),
                "Cakes".to_string(),
                "Cupcakes".to_string(),
            ],
            slugs: vec![
                "all".to_string(),
                "tortas".to_string(),
                "cupcakes".to_string(),
            ],
        },
        pastries: vec![
            pastry(
                1,
                "torta-de-chocolate",
                "Torta de Chocolate",
                "Chocolate Cake",
                "Tortas",
                "Cakes",
            ),
            pastry(
                2,
                "cupcake-de-vainilla",
                "Cupcake de Vainilla",
                "Vanilla Cupcake",
                "Cupcakes",
                "Cupcakes",
            ),
            pastry(
                3,
                "torta-de-frutilla",
                "Torta de Frutilla",
                "Strawberry Cake",
                "Tortas",
                "Cakes",
            ),
            pastry(
                4,
                "cupcake-de-chocolate",
                "Cupcake de Chocolate",
                "Chocolate Cupcake",
                "Cupcakes",
                "Cupcakes",
            ),
        ],
        footer: FooterInfo {
            address: Localized::new("Calle Falsa 123, La Paz", "123 Fake St, La Paz"),
            address_link: "https://maps.example.com/tentaciones".to_string(),
            phone: "+591 700 00000".to_string(),
            email: "hola@tentaciones.example".to_string(),
            hours: Localized::new("Lun-Sáb 9:00-19:00", "Mon-Sat 9:00-19:00"),
            instagram: "@tentaciones".to_string(),
            instagram_url: "https://www.instagram.com/tentaciones/".to_string(),
            credit: Localized::new("Hecho con cariño", "Made with care"),
        },
        ui: UiStrings {
            home: Localized::new("Inicio", "Home"),
            contact: Localized::new("Contacto", "Contact"),
            order_or_inquiry: Localized::new("Pedidos y consultas", "Orders and inquiries"),
            see_more_instagram: Localized::new("Mira más en", "See more at"),
            on_instagram: Localized::new("en Instagram", "on Instagram"),
        },
    }
}
