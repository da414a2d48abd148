//! The `build` subcommand: render the whole catalog into a static site.
//!
//! Layout of the output directory:
//!   index.html            home page with the featured strip
//!   products.html         full listing (first page materialized)
//!   category/<slug>.html  one listing per category, catalog order
//!   products/<id>.html    one detail page per product
//!   assets/style.css      shared stylesheet
//!   data/products.json    catalog snapshot the pages were built from

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::info;

use crate::catalog::product::Product;
use crate::catalog::store::{write_catalog, CatalogStore};
use crate::config::SiteConfig;
use crate::render::{detail, page};
use crate::view::{FilterMode, SortKey, ViewState, ALL_CATEGORIES};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory, overriding SITE_OUT_DIR.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Listing page size, overriding SITE_PAGE_SIZE.
    #[arg(long)]
    pub page_size: Option<usize>,
}

pub fn run(cfg: &SiteConfig, args: BuildArgs) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(out) = args.out {
        cfg.out_dir = out;
    }
    if let Some(size) = args.page_size {
        cfg.page_size = size.max(1);
    }

    let store = CatalogStore::load_from(&cfg);
    build_site(&cfg, &store)?;
    println!(
        "built {} product page(s) into {}",
        store.len(),
        cfg.out_dir.display()
    );
    Ok(())
}

/// Render every page of the site. An empty store still produces a complete
/// site with empty states.
pub fn build_site(cfg: &SiteConfig, store: &CatalogStore) -> Result<()> {
    let out = &cfg.out_dir;
    fs::create_dir_all(out.join("assets"))
        .with_context(|| format!("creating {}", out.display()))?;
    fs::create_dir_all(out.join("category")).context("creating category dir")?;
    fs::create_dir_all(out.join("products")).context("creating products dir")?;

    fs::write(out.join("assets/style.css"), page::STYLESHEET).context("writing stylesheet")?;
    write_catalog(&out.join("data/products.json"), store.products())?;

    write_home(cfg, store, out)?;
    write_listing_pages(cfg, store, out)?;
    write_detail_pages(cfg, store, out)?;

    info!(out = %out.display(), products = store.len(), "site build complete");
    Ok(())
}

fn write_home(cfg: &SiteConfig, store: &CatalogStore, out: &Path) -> Result<()> {
    let featured: Vec<&Product> = store.products().iter().filter(|p| p.featured).collect();
    let body = page::home(&featured, cfg);
    fs::write(out.join("index.html"), page::shell("Home", &body, "", cfg))
        .context("writing index.html")
}

fn write_listing_pages(cfg: &SiteConfig, store: &CatalogStore, out: &Path) -> Result<()> {
    // Full listing, default sort, first page materialized.
    let mut state = ViewState::with_page_size(FilterMode::Category, cfg.page_size);
    state.set_sort(SortKey::Featured);
    state.set_filter(ALL_CATEGORIES);
    let (visible, has_more) = state.visible(store.products());
    let body = page::listing("All Products", &visible, has_more, "");
    fs::write(
        out.join("products.html"),
        page::shell("All Products", &body, "", cfg),
    )
    .context("writing products.html")?;

    // One page per category, categories kept in catalog order.
    let categories: IndexSet<&str> = store
        .products()
        .iter()
        .map(|p| p.category.as_str())
        .collect();
    for category in categories {
        let mut state = ViewState::with_page_size(FilterMode::Category, cfg.page_size);
        state.set_filter(category);
        let (visible, has_more) = state.visible(store.products());
        let body = page::listing(category, &visible, has_more, "../");
        let path = out.join("category").join(format!("{}.html", slug(category)));
        fs::write(&path, page::shell(category, &body, "../", cfg))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn write_detail_pages(cfg: &SiteConfig, store: &CatalogStore, out: &Path) -> Result<()> {
    store.products().par_iter().try_for_each(|product| {
        let body = detail::render_detail(product, cfg);
        let path = out.join("products").join(format!("{}.html", product.id));
        fs::write(&path, page::shell(&product.title, &body, "../", cfg))
            .with_context(|| format!("writing {}", path.display()))
    })
}

/// Filesystem/URL-safe category slug: lowercase, runs of non-alphanumerics
/// collapsed to a single dash.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
