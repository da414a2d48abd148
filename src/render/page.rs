use std::fmt::Write as _;

use crate::catalog::product::Product;
use crate::config::SiteConfig;
use crate::render::{card, escape, stars};

/// Stylesheet written once per build; every page links it relative to the
/// site root via the page's own prefix.
pub const STYLESHEET: &str = include_str!("style.css");

/// Wrap a page body in the shared document shell. `root` is the relative
/// prefix back to the site root ("" for top-level pages, "../" for pages
/// one level down) so the same shell works at every nesting depth.
pub fn shell(title: &str, body: &str, root: &str, cfg: &SiteConfig) -> String {
    let mut out = String::with_capacity(body.len() + 1024);
    writeln!(out, "<!DOCTYPE html>").ok();
    writeln!(out, r#"<html lang="en">"#).ok();
    writeln!(out, "<head>").ok();
    writeln!(out, r#"  <meta charset="utf-8">"#).ok();
    writeln!(
        out,
        r#"  <meta name="viewport" content="width=device-width, initial-scale=1">"#
    )
    .ok();
    writeln!(out, "  <title>{} · {}</title>", escape(title), escape(&cfg.site_name)).ok();
    writeln!(out, r#"  <link rel="stylesheet" href="{root}assets/style.css">"#).ok();
    writeln!(out, "</head>").ok();
    writeln!(out, "<body>").ok();
    writeln!(out, r#"<header class="site-header">"#).ok();
    writeln!(
        out,
        r#"  <a class="site-name" href="{root}index.html">{}</a>"#,
        escape(&cfg.site_name)
    )
    .ok();
    writeln!(out, "</header>").ok();
    writeln!(out, r#"<main class="site-main">"#).ok();
    out.push_str(body);
    writeln!(out, "</main>").ok();
    writeln!(out, r#"<footer class="site-footer">"#).ok();
    writeln!(
        out,
        "  <p>As an Amazon Associate we earn from qualifying purchases.</p>"
    )
    .ok();
    writeln!(out, "</footer>").ok();
    writeln!(out, "</body>").ok();
    writeln!(out, "</html>").ok();
    out
}

/// A listing grid: the currently visible slice of a working set, plus a
/// load-more control only when more items remain unmaterialized. `root`
/// must match the prefix the page shell is rendered with.
pub fn listing(heading: &str, visible: &[&Product], has_more: bool, root: &str) -> String {
    let mut out = String::with_capacity(visible.len() * 1024 + 512);
    writeln!(out, "<h1>{}</h1>", escape(heading)).ok();
    if visible.is_empty() {
        writeln!(
            out,
            r#"<p class="empty-state">No products here yet. Check back soon.</p>"#
        )
        .ok();
        return out;
    }
    writeln!(out, r#"<section class="product-grid">"#).ok();
    for product in visible {
        out.push_str(&card::render_card(product, root));
    }
    writeln!(out, "</section>").ok();
    if has_more {
        writeln!(
            out,
            r#"<button class="load-more" type="button">Load more</button>"#
        )
        .ok();
    }
    out
}

/// Home page body: a hero spotlighting the top-rated featured pick, then
/// the featured strip. The hero keeps the half-star rating rule.
pub fn home(featured: &[&Product], cfg: &SiteConfig) -> String {
    let mut out = String::with_capacity(featured.len() * 1024 + 512);
    writeln!(out, r#"<section class="hero">"#).ok();
    writeln!(out, "  <h1>{}</h1>", escape(&cfg.site_name)).ok();
    writeln!(
        out,
        "  <p>Hand-picked beauty finds, updated all the time.</p>"
    )
    .ok();
    if let Some(top) = featured
        .iter()
        .max_by(|a, b| a.rating.total_cmp(&b.rating))
    {
        writeln!(
            out,
            r#"  <p class="hero-pick"><span class="stars">{}</span> <a href="products/{}.html">{}</a></p>"#,
            stars::half(top.rating),
            top.id,
            escape(&top.title)
        )
        .ok();
    }
    writeln!(out, "</section>").ok();
    writeln!(out, "<h2>Featured picks</h2>").ok();
    if featured.is_empty() {
        writeln!(
            out,
            r#"<p class="empty-state">No products here yet. Check back soon.</p>"#
        )
        .ok();
        return out;
    }
    writeln!(out, r#"<section class="product-grid">"#).ok();
    for product in featured {
        out.push_str(&card::render_card(product, ""));
    }
    writeln!(out, "</section>").ok();
    out
}
