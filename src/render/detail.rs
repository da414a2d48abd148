use std::fmt::Write as _;

use chrono::Utc;
use serde_json::json;

use crate::catalog::product::{badge_label, Product};
use crate::config::SiteConfig;
use crate::images::placeholder_url;
use crate::render::{escape, format, stars};

/// Machine-readable product metadata for search engines, embedded into the
/// detail page as JSON-LD. Pure function of the product.
pub fn json_ld(product: &Product, cfg: &SiteConfig) -> serde_json::Value {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.title,
        "description": product.description,
        "category": product.category,
        "image": product.image,
        "url": format!("{}/products/{}.html", cfg.base_url.trim_end_matches('/'), product.id),
        "offers": {
            "@type": "Offer",
            "price": format!("{:.2}", product.price),
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "url": product.affiliate_url,
        },
    });
    if product.review_count > 0 {
        value["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{:.1}", product.rating),
            "reviewCount": product.review_count,
        });
    }
    value
}

/// Detail view body for a resolved product. The caller looks the id up
/// against the FULL store, never the filtered working set.
pub fn render_detail(product: &Product, cfg: &SiteConfig) -> String {
    let mut out = String::with_capacity(2048);
    let title = escape(&product.title);
    let fallback = escape(&placeholder_url(&product.title));
    let image = if product.image.is_empty() {
        fallback.clone()
    } else {
        escape(&product.image)
    };

    writeln!(out, r#"<article class="product-detail" data-id="{}">"#, product.id).ok();
    writeln!(
        out,
        r#"  <nav class="breadcrumbs"><a href="../index.html">Home</a> / <span>{}</span> / <span>{title}</span></nav>"#,
        escape(&product.category)
    )
    .ok();
    writeln!(out, r#"  <div class="detail-media">"#).ok();
    writeln!(
        out,
        r#"    <img src="{image}" alt="{title}" onerror="this.onerror=null;this.src='{fallback}'">"#
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
    writeln!(out, r#"  <h1>{title}</h1>"#).ok();
    writeln!(
        out,
        r#"  <p class="detail-rating"><span class="stars">{}</span> {:.1} · {} reviews</p>"#,
        stars::whole(product.rating),
        product.rating,
        product.review_count
    )
    .ok();

    out.push_str("  <p class=\"detail-price\">");
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

    if !product.description.is_empty() {
        writeln!(out, r#"  <p class="detail-description">{}</p>"#, escape(&product.description)).ok();
    }
    if let Some(added) = format::relative_date(product.date_added.as_deref(), Utc::now().date_naive())
    {
        writeln!(out, r#"  <p class="detail-added">{added}</p>"#).ok();
    }
    writeln!(
        out,
        r#"  <a class="shop-link shop-link-primary" href="{}" target="_blank" rel="sponsored nofollow noopener noreferrer">Shop on Amazon</a>"#,
        escape(&product.affiliate_url)
    )
    .ok();
    writeln!(out, "</article>").ok();
    writeln!(
        out,
        "<script type=\"application/ld+json\">\n{}\n</script>",
        serde_json::to_string_pretty(&json_ld(product, cfg)).unwrap_or_default()
    )
    .ok();
    out
}

/// Explicit empty state for an id that resolves to nothing. A missing
/// product is a rendered page, not a failure.
pub fn render_not_found() -> String {
    concat!(
        "<section class=\"product-not-found\">\n",
        "  <h1>Product not found</h1>\n",
        "  <p>The product you are looking for is no longer in our catalog.</p>\n",
        "  <a href=\"../index.html\">Back to all products</a>\n",
        "</section>\n"
    )
    .to_string()
}
