//! The `stats` subcommand: a catalog health report. Read-only; everything
//! it flags (duplicate ids, near-duplicate titles, placeholder images) is
//! reported, never fixed.

use std::collections::HashSet;
use std::fmt::Write as _;

use anyhow::Result;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::catalog::product::{badge_label, Product};
use crate::catalog::store::CatalogStore;
use crate::config::SiteConfig;
use crate::images;

/// Same similarity floor the writer uses to refuse appends; here it only
/// surfaces pairs that predate the check.
const NEAR_DUPLICATE_THRESHOLD: f64 = 0.92;

pub fn run(cfg: &SiteConfig) -> Result<()> {
    let store = CatalogStore::load_from(cfg);
    print!("{}", report(store.products()));
    Ok(())
}

pub fn report(products: &[Product]) -> String {
    let mut out = String::new();
    writeln!(out, "CATALOG SUMMARY:").ok();
    writeln!(out, "products: {}", products.len()).ok();
    if products.is_empty() {
        return out;
    }

    let featured = products.iter().filter(|p| p.featured).count();
    let discounted = products.iter().filter(|p| p.is_discounted()).count();
    writeln!(out, "featured: {featured}").ok();
    writeln!(out, "discounted: {discounted}").ok();

    // Categories in catalog order.
    let mut by_category: IndexMap<&str, usize> = IndexMap::new();
    for p in products {
        *by_category.entry(p.category.as_str()).or_default() += 1;
    }
    writeln!(out, "categories:").ok();
    for (category, count) in &by_category {
        writeln!(out, "  {category}: {count}").ok();
    }

    let mut by_badge: IndexMap<String, usize> = IndexMap::new();
    for p in products {
        if let Some(badge) = &p.badge {
            *by_badge.entry(badge_label(badge)).or_default() += 1;
        }
    }
    if !by_badge.is_empty() {
        writeln!(out, "badges:").ok();
        for (label, count) in &by_badge {
            writeln!(out, "  {label}: {count}").ok();
        }
    }

    let rated = products.iter().filter(|p| p.review_count > 0).count();
    let rating_sum: f64 = products
        .iter()
        .filter(|p| p.review_count > 0)
        .map(|p| p.rating)
        .sum();
    if rated > 0 {
        writeln!(
            out,
            "rating coverage: {rated}/{} (avg {:.2})",
            products.len(),
            rating_sum / rated as f64
        )
        .ok();
    } else {
        writeln!(out, "rating coverage: 0/{} (no reviewed products)", products.len()).ok();
    }

    let placeholders = products
        .iter()
        .filter(|p| images::is_placeholder(&p.image))
        .count();
    writeln!(out, "placeholder images: {placeholders}").ok();

    if let Some(newest) = products.iter().filter_map(|p| p.date_added.as_deref()).max() {
        writeln!(out, "newest dateAdded: {newest}").ok();
    }

    let issues = integrity_issues(products);
    if issues.is_empty() {
        writeln!(out, "integrity: ok").ok();
    } else {
        writeln!(out, "integrity issues:").ok();
        for issue in issues {
            writeln!(out, "  {issue}").ok();
        }
    }
    out
}

/// Duplicate ids, exact duplicate titles and near-duplicate title pairs.
fn integrity_issues(products: &[Product]) -> Vec<String> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for p in products {
        if !seen.insert(p.id) {
            issues.push(format!("duplicate id #{} ({})", p.id, p.title));
        }
    }

    for (a, b) in products.iter().tuple_combinations() {
        let left = a.title.to_lowercase();
        let right = b.title.to_lowercase();
        if left == right {
            issues.push(format!("duplicate title #{} / #{}: {:?}", a.id, b.id, a.title));
        } else if strsim::jaro_winkler(&left, &right) >= NEAR_DUPLICATE_THRESHOLD {
            issues.push(format!(
                "near-duplicate titles #{} {:?} / #{} {:?}",
                a.id, a.title, b.id, b.title
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            subcategory: None,
            price: 12.0,
            original_price: None,
            rating: 4.0,
            review_count: 20,
            badge: None,
            featured: false,
            date_added: Some("2025-03-01".into()),
            affiliate_url: String::new(),
            image: "https://m.media-amazon.com/images/I/abc.jpg".into(),
        }
    }

    #[test]
    fn report_counts_categories_in_catalog_order() {
        let products = vec![
            product(1, "Rose Serum", "Skincare"),
            product(2, "Matte Lipstick", "Makeup"),
            product(3, "Night Cream", "Skincare"),
        ];
        let text = report(&products);
        assert!(text.contains("products: 3"));
        let skincare = text.find("Skincare: 2").expect("skincare line");
        let makeup = text.find("Makeup: 1").expect("makeup line");
        assert!(skincare < makeup, "catalog order preserved");
        assert!(text.contains("integrity: ok"));
    }

    #[test]
    fn duplicate_ids_and_titles_are_flagged() {
        let products = vec![
            product(1, "Rose Serum", "Skincare"),
            product(1, "rose serum", "Skincare"),
        ];
        let text = report(&products);
        assert!(text.contains("duplicate id #1"));
        assert!(text.contains("duplicate title #1 / #1"));
    }

    #[test]
    fn near_duplicate_titles_are_flagged() {
        let products = vec![
            product(1, "Vitamin C Brightening Serum 30ml", "Skincare"),
            product(2, "Vitamin C Brightening Serum 30 ml", "Skincare"),
        ];
        let text = report(&products);
        assert!(text.contains("near-duplicate titles"));
    }

    #[test]
    fn placeholder_images_are_counted() {
        let mut missing = product(1, "Rose Serum", "Skincare");
        missing.image = crate::images::placeholder_url("Rose Serum");
        let ok = product(2, "Matte Lipstick", "Makeup");
        let text = report(&[missing, ok]);
        assert!(text.contains("placeholder images: 1"));
    }

    #[test]
    fn empty_catalog_reports_just_the_count() {
        let text = report(&[]);
        assert!(text.contains("products: 0"));
        assert!(!text.contains("categories"));
    }
}
