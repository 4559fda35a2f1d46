//! Catalog reference data. Products are immutable at runtime; orders snapshot
//! the fields they need at purchase time.

use serde::Serialize;

/// Price is whole rupees. The catalog never carries fractional amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
    pub short_description: &'static str,
    pub highlights: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub image: &'static str,
    pub theme_color: &'static str,
    pub accent_color: &'static str,
}

pub const CATALOG: &[Product] = &[
    Product {
        id: "assam-tea",
        name: "VELAR",
        price: 205,
        description: "Bold, malty Assam tea grown in the lush valleys of India's Northeast. \
                      Strong in flavor, aromatic, and deeply rooted in India's tea-drinking heritage.",
        short_description: "Bold, malty richness from India's Northeast valleys.",
        highlights: &[
            "100% natural, full-leaf tea",
            "Handpicked for strength and aroma",
            "Rich in antioxidants",
            "Perfect morning brew",
        ],
        ingredients: &["Organic Assam tea leaves", "Natural flavors"],
        image: "/uploads/assam-tea-aura-velar.png",
        theme_color: "#8B0000",
        accent_color: "#D4AF37",
    },
    Product {
        id: "ooty-tea",
        name: "ELIX",
        price: 199,
        description: "A refreshing escape in every sip. Smooth, floral Nilgiri tea with a \
                      light golden hue that soothes and uplifts.",
        short_description: "Refreshing, smooth tea with floral notes from the misty Nilgiris.",
        highlights: &[
            "High-elevation tea",
            "Delicate yet rich flavor",
            "Best for afternoon refreshment",
            "Sustainably sourced",
        ],
        ingredients: &["Nilgiri tea leaves", "Natural mountain herbs"],
        image: "/uploads/ooty-tea-aura-elix.png",
        theme_color: "#006400",
        accent_color: "#C0C0C0",
    },
    Product {
        id: "premium-combo",
        name: "Premium Combo",
        price: 749,
        description: "The ultimate tea ritual: robust Assam, fragrant Ooty, and a handcrafted \
                      glass tea cup with a golden handle, encased in a royal blue box.",
        short_description: "The ultimate tea gift set with both teas and an elegant glass teacup.",
        highlights: &[
            "Complete tea experience",
            "Handcrafted glass teacup with gold handle",
            "Perfect gift option",
            "Luxurious packaging",
        ],
        ingredients: &["Assam tea (200g)", "Ooty tea (200g)", "Handcrafted glass teacup"],
        image: "/uploads/premium-combo-aura.png",
        theme_color: "#191970",
        accent_color: "#D4AF37",
    },
];

pub fn get_product(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn get_product_finds_known_slug() {
        let p = get_product("assam-tea").expect("assam-tea should exist");
        assert_eq!(p.name, "VELAR");
        assert_eq!(p.price, 205);
    }

    #[test]
    fn get_product_returns_none_for_unknown_slug() {
        assert!(get_product("green-tea").is_none());
    }
}
