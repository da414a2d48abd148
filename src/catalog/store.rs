use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::product::Product;

/// In-memory ordered product sequence, loaded once and read-only afterwards.
///
/// Load failures degrade to an empty store: for a storefront, rendering
/// nothing beats failing the whole build. The only diagnostic is a warn log.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct WrappedCatalog {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Try candidate paths in order; the first readable file wins and its
    /// body must parse (bare array or `{ "products": [...] }`). No readable
    /// candidate, or a winning body that fails to parse, yields an empty
    /// store.
    pub fn load(candidates: &[PathBuf]) -> CatalogStore {
        for path in candidates {
            let body = match fs::read_to_string(path) {
                Ok(body) => body,
                Err(_) => continue,
            };
            match parse_catalog(&body) {
                Ok(products) => {
                    info!(path = %path.display(), count = products.len(), "catalog loaded");
                    return CatalogStore { products };
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "catalog body unparseable; serving empty catalog");
                    return CatalogStore::default();
                }
            }
        }
        warn!(
            tried = candidates.len(),
            "no catalog candidate readable; serving empty catalog"
        );
        CatalogStore::default()
    }

    /// Load through a `SiteConfig`'s candidate list.
    pub fn load_from(cfg: &crate::config::SiteConfig) -> CatalogStore {
        Self::load(&cfg.catalog_candidates())
    }

    pub fn from_products(products: Vec<Product>) -> CatalogStore {
        CatalogStore { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact-id lookup against the full store (never the filtered working
    /// set); this is what detail pages resolve through.
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Accepts either a bare JSON array of products or an object with a
/// `products` field holding the array.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>> {
    if let Ok(products) = serde_json::from_str::<Vec<Product>>(body) {
        return Ok(products);
    }
    let wrapped: WrappedCatalog =
        serde_json::from_str(body).context("catalog is neither a product array nor {products}")?;
    Ok(wrapped.products)
}

/// Persist a product list in the canonical `{ "products": [...] }` form.
pub fn write_catalog(path: &Path, products: &[Product]) -> Result<()> {
    let body = serde_json::to_string_pretty(&serde_json::json!({ "products": products }))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
