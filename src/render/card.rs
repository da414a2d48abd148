use std::fmt::Write as _;

use crate::catalog::product::{badge_label, Product};
use crate::images::placeholder_url;
use crate::render::{escape, format, stars};

/// One product card for a listing grid. Pure projection: same product in,
/// same markup out. `root` is the relative prefix back to the site root,
/// matching the prefix the enclosing page shell was rendered with.
pub fn render_card(product: &Product, root: &str) -> String {
    let mut out = String::with_capacity(1024);
    let title = escape(&product.title);
    let fallback = escape(&placeholder_url(&product.title));
    let image = if product.image.is_empty() {
        fallback.clone()
    } else {
        escape(&product.image)
    };

    writeln!(out, r#"<article class="product-card" data-id="{}">"#, product.id).ok();
    writeln!(out, r#"  <div class="card-media">"#).ok();
    // Broken images swap to the deterministic placeholder instead of a
    // browser broken-image glyph.
    writeln!(
        out,
        r#"    <img src="{image}" alt="{title}" loading="lazy" onerror="this.onerror=null;this.src='{fallback}'">"#
    )
    .ok();
    if let Some(badge) = &product.badge {
        writeln!(
            out,
            r#"    <span class="badge badge-{}">{}</span>"#,
            escape(&badge.to_ascii_lowercase()),
            escape(&badge_label(badge))
        )
        .ok();
    }
    writeln!(out, "  </div>").ok();
    writeln!(
        out,
        r#"  <p class="card-category">{}</p>"#,
        escape(&product.category)
    )
    .ok();
    writeln!(
        out,
        r#"  <h3 class="card-title"><a href="{root}products/{}.html">{title}</a></h3>"#,
        product.id
    )
    .ok();
    writeln!(
        out,
        r#"  <p class="card-rating"><span class="stars">{}</span> <span class="review-count">({})</span></p>"#,
        stars::whole(product.rating),
        product.review_count
    )
    .ok();

    out.push_str("  <p class=\"card-price\">");
    write!(out, r#"<span class="price">{}</span>"#, format::price(product.price)).ok();
    if let Some(original) = product.original_price {
        if let Some(percent) = format::discount_percent(product) {
            write!(
                out,
                r#" <s class="original-price">{}</s> <span class="discount">-{}%</span>"#,
                format::price(original),
                percent
            )
            .ok();
        }
    }
    out.push_str("</p>\n");

    writeln!(
        out,
        r#"  <a class="shop-link" href="{}" target="_blank" rel="sponsored nofollow noopener noreferrer">Shop now</a>"#,
        escape(&product.affiliate_url)
    )
    .ok();
    out.push_str("</article>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 7,
            title: "Rose Serum".into(),
            description: "Hydrating facial serum".into(),
            category: "Skincare".into(),
            subcategory: Some("Serums".into()),
            price: 15.0,
            original_price: Some(20.0),
            rating: 4.2,
            review_count: 100,
            badge: Some("bestseller".into()),
            featured: true,
            date_added: Some("2025-01-15".into()),
            affiliate_url: "https://www.amazon.com/dp/B0EXAMPLE1?tag=glowcart-20".into(),
            image: "https://m.media-amazon.com/images/I/abc.jpg".into(),
        }
    }

    #[test]
    fn card_carries_the_display_contract() {
        let html = render_card(&sample(), "");
        assert!(html.contains("Rose Serum"));
        assert!(html.contains("Skincare"));
        assert!(html.contains("★★★★☆"));
        assert!(html.contains("$15.00"));
        assert!(html.contains("$20.00"));
        assert!(html.contains("-25%"));
        assert!(html.contains("Bestseller"));
        assert!(html.contains(r#"rel="sponsored nofollow noopener noreferrer""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn broken_image_falls_back_to_placeholder() {
        let html = render_card(&sample(), "");
        assert!(html.contains("placehold.co"));

        let mut missing = sample();
        missing.image = String::new();
        let html = render_card(&missing, "");
        assert!(html.contains(r#"src="https://placehold.co"#));
    }

    #[test]
    fn detail_link_respects_the_root_prefix() {
        let top = render_card(&sample(), "");
        assert!(top.contains(r#"href="products/7.html""#));
        let nested = render_card(&sample(), "../");
        assert!(nested.contains(r#"href="../products/7.html""#));
    }

    #[test]
    fn undiscounted_card_has_no_struck_price() {
        let mut p = sample();
        p.original_price = None;
        let html = render_card(&p, "");
        assert!(!html.contains("original-price"));
        assert!(!html.contains("discount"));
    }

    #[test]
    fn titles_are_escaped() {
        let mut p = sample();
        p.title = r#"Rose "Gold" <Serum>"#.into();
        let html = render_card(&p, "");
        assert!(html.contains("&quot;Gold&quot;"));
        assert!(!html.contains("<Serum>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = sample();
        assert_eq!(render_card(&p, ""), render_card(&p, ""));
    }
}
