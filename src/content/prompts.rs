use std::fmt::Write as _;

use crate::catalog::product::Product;

/// Scene settings rotated by product id; paired with per-category surface
/// descriptions to keep prompts varied but reproducible.
const SETTINGS: &[&str] = &[
    "on a sunlit marble vanity with soft morning shadows",
    "against a blush-pink seamless backdrop with floating petals",
    "on a glass shelf with warm golden-hour light",
    "surrounded by eucalyptus sprigs on linen",
];

fn category_scene(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "skincare" => "dewy texture smear beside the bottle, water droplets on glass",
        "makeup" => "bold swatch strokes across paper, brushes out of focus",
        "hair" => "a silky strand of hair draped near the product, soft bokeh",
        "fragrance" => "mist frozen mid-spray, light refracting through the bottle",
        _ => "clean product arrangement with minimal props",
    }
}

/// Three slideshow scene prompts for one product: hero, texture, lifestyle.
pub fn prompts_for(product: &Product) -> String {
    let setting = SETTINGS[(product.id as usize) % SETTINGS.len()];
    let mut out = String::with_capacity(512);
    writeln!(
        out,
        "1. Hero shot: {title} {setting}, product label crisp and centered.",
        title = product.title
    )
    .ok();
    writeln!(
        out,
        "2. Texture shot: {}, styled for {category}.",
        category_scene(&product.category),
        category = product.category
    )
    .ok();
    writeln!(
        out,
        "3. Lifestyle shot: hands reaching for {title} {setting}, shallow depth of field.",
        title = product.title
    )
    .ok();
    out
}

/// Prompt blocks for the whole catalog.
pub fn prompts(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        writeln!(out, "--- #{} {} ---", product.id, product.title).ok();
        out.push_str(&prompts_for(product));
        out.push('\n');
    }
    out
}
