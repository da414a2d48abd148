use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::catalog::product::Product;
use crate::catalog::store::{parse_catalog, write_catalog};

/// Similarity floor above which two titles are treated as the same product.
const NEAR_DUPLICATE_THRESHOLD: f64 = 0.92;

/// Draft record for a new catalog entry. The repository assigns the id,
/// synthesizes the affiliate link and defaults the date.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u64,
    pub badge: Option<String>,
    pub featured: bool,
    /// Amazon product identifier the shop link is synthesized from.
    pub asin: String,
    pub image: Option<String>,
}

/// The single write interface over the catalog resource. Every tool that
/// mutates the catalog (add, image fixers) goes through here, so id
/// assignment and duplicate detection exist exactly once.
#[derive(Debug)]
pub struct CatalogRepository {
    path: PathBuf,
    products: Vec<Product>,
}

impl CatalogRepository {
    /// Open the catalog for writing. A missing file starts an empty catalog;
    /// an unreadable or unparseable existing file is a hard error — a writer
    /// must never clobber data it cannot read.
    pub fn open(path: impl Into<PathBuf>) -> Result<CatalogRepository> {
        let path = path.into();
        let products = match fs::read_to_string(&path) {
            Ok(body) => parse_catalog(&body)
                .with_context(|| format!("refusing to overwrite unparseable {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "catalog missing; starting empty");
                Vec::new()
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        Ok(CatalogRepository { path, products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Next unused id: max + 1, starting at 1 for an empty catalog.
    pub fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Case-insensitive exact title match.
    pub fn exists_by_title(&self, title: &str) -> bool {
        self.products
            .iter()
            .any(|p| p.title.eq_ignore_ascii_case(title.trim()))
    }

    /// Fuzzy title match for catch-the-typo duplicates ("Rose Serum 30ml"
    /// vs "Rose Serum 30 ml").
    pub fn near_duplicate(&self, title: &str) -> Option<&Product> {
        let wanted = title.trim().to_lowercase();
        self.products.iter().find(|p| {
            strsim::jaro_winkler(&p.title.to_lowercase(), &wanted) >= NEAR_DUPLICATE_THRESHOLD
        })
    }

    /// Validate a draft, assign the next id, synthesize the affiliate link
    /// and append. Returns the stored record.
    pub fn append(&mut self, draft: ProductDraft, affiliate_tag: &str) -> Result<&Product> {
        let title = draft.title.trim();
        if title.is_empty() {
            bail!("product title must not be empty");
        }
        if draft.category.trim().is_empty() {
            bail!("product category must not be empty");
        }
        if draft.price < 0.0 {
            bail!("price must be non-negative (got {})", draft.price);
        }
        if !(0.0..=5.0).contains(&draft.rating) {
            bail!("rating must be within 0-5 (got {})", draft.rating);
        }
        if let Some(orig) = draft.original_price {
            if orig < draft.price {
                bail!(
                    "originalPrice {} must not undercut price {}",
                    orig,
                    draft.price
                );
            }
        }
        if self.exists_by_title(title) {
            bail!("a product titled {title:?} already exists");
        }
        if let Some(existing) = self.near_duplicate(title) {
            bail!(
                "title {title:?} is nearly identical to existing #{} {:?}",
                existing.id,
                existing.title
            );
        }

        let id = self.next_id();
        let image = draft
            .image
            .clone()
            .unwrap_or_else(|| crate::images::placeholder_url(title));
        let product = Product {
            id,
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category.trim().to_string(),
            subcategory: draft.subcategory.map(|s| s.trim().to_string()),
            price: draft.price,
            original_price: draft.original_price,
            rating: draft.rating,
            review_count: draft.review_count,
            badge: draft.badge,
            featured: draft.featured,
            date_added: Some(Utc::now().date_naive().format("%Y-%m-%d").to_string()),
            affiliate_url: affiliate_url(&draft.asin, affiliate_tag)?,
            image,
        };
        info!(id, title = %product.title, category = %product.category, "product appended");
        self.products.push(product);
        Ok(self.products.last().expect("just pushed"))
    }

    /// Point a product at a new image URL. Returns false when the id is
    /// unknown (callers log and move on; the image fixer must not abort a
    /// whole run over one stale id).
    pub fn set_image(&mut self, id: u64, url: &str) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.image = url.to_string();
                true
            }
            None => false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        write_catalog(&self.path, &self.products)
    }
}

/// Synthesize an outbound affiliate URL from an ASIN plus the tracking tag.
pub fn affiliate_url(asin: &str, tag: &str) -> Result<String> {
    let asin = asin.trim();
    if asin.is_empty() {
        bail!("an ASIN is required to synthesize the affiliate link");
    }
    if asin.len() != 10 || !asin.chars().all(|c| c.is_ascii_alphanumeric()) {
        bail!("ASIN must be 10 alphanumeric characters (got {asin:?})");
    }
    let mut out = url::Url::parse("https://www.amazon.com/")?;
    out.set_path(&format!("/dp/{}", asin.to_ascii_uppercase()));
    out.query_pairs_mut().append_pair("tag", tag);
    Ok(out.to_string())
}
