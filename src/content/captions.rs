use std::fmt::Write as _;

use crate::catalog::product::Product;
use crate::render::format;

/// Hook lines rotated deterministically by product id, so the same product
/// always gets the same caption.
const HOOKS: &[&str] = &[
    "Obsessed with this one ✨",
    "Your routine is missing this",
    "POV: you finally found it",
    "Low-key the best thing in my cart",
    "This one sold me at first swatch",
];

const GENERIC_TAGS: &[&str] = &["#beautyfinds", "#amazonfinds", "#founditonamazon"];

fn category_tags(category: &str) -> &'static [&'static str] {
    match category.to_ascii_lowercase().as_str() {
        "skincare" => &["#skincare", "#skincareroutine", "#glowup"],
        "makeup" => &["#makeup", "#makeuplover", "#beautytips"],
        "hair" => &["#haircare", "#hairgoals", "#healthyhair"],
        "fragrance" => &["#fragrance", "#perfumetok", "#scentoftheday"],
        _ => &["#beauty", "#selfcare"],
    }
}

/// One social caption: hook, price line, call to action, hashtag block.
pub fn caption_for(product: &Product) -> String {
    let hook = HOOKS[(product.id as usize) % HOOKS.len()];
    let mut out = String::with_capacity(256);
    writeln!(out, "{hook}").ok();
    writeln!(out).ok();
    write!(out, "{} — {}", product.title, format::price(product.price)).ok();
    if let Some(percent) = format::discount_percent(product) {
        write!(out, " ({percent}% off right now)").ok();
    }
    writeln!(out).ok();
    writeln!(out, "Link in bio 🛒").ok();
    writeln!(out).ok();
    let mut tags: Vec<&str> = category_tags(&product.category).to_vec();
    tags.extend_from_slice(GENERIC_TAGS);
    writeln!(out, "{}", tags.join(" ")).ok();
    out
}

/// Captions for the whole catalog, separated so the block per product can
/// be copied out as a unit.
pub fn captions(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        writeln!(out, "--- #{} {} ---", product.id, product.title).ok();
        out.push_str(&caption_for(product));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            category: category.to_string(),
            subcategory: None,
            price: 15.0,
            original_price: Some(20.0),
            rating: 4.5,
            review_count: 10,
            badge: None,
            featured: false,
            date_added: None,
            affiliate_url: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn captions_are_deterministic_per_product() {
        let p = product(3, "Skincare");
        assert_eq!(caption_for(&p), caption_for(&p));
    }

    #[test]
    fn hook_rotation_is_keyed_by_id() {
        let a = caption_for(&product(1, "Skincare"));
        let b = caption_for(&product(1 + HOOKS.len() as u64, "Skincare"));
        assert_eq!(
            a.lines().next(),
            b.lines().next(),
            "ids a full rotation apart share a hook"
        );
        let c = caption_for(&product(2, "Skincare"));
        assert_ne!(a.lines().next(), c.lines().next());
    }

    #[test]
    fn caption_carries_price_discount_and_tags() {
        let text = caption_for(&product(1, "Makeup"));
        assert!(text.contains("$15.00"));
        assert!(text.contains("25% off"));
        assert!(text.contains("#makeup"));
        assert!(text.contains("#amazonfinds"));
    }

    #[test]
    fn unknown_categories_get_generic_tags() {
        let text = caption_for(&product(1, "Tools"));
        assert!(text.contains("#beauty"));
    }

    #[test]
    fn whole_catalog_output_is_sectioned_per_product() {
        let products = vec![product(1, "Skincare"), product(2, "Makeup")];
        let text = captions(&products);
        assert!(text.contains("--- #1 Product 1 ---"));
        assert!(text.contains("--- #2 Product 2 ---"));
    }
}
