//! The `add` subcommand: validate a draft and append it to the catalog.

use anyhow::Result;
use clap::Args;

use crate::catalog::repository::{CatalogRepository, ProductDraft};
use crate::config::SiteConfig;
use crate::render::format;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product title; refused when an identical or near-identical title
    /// already exists.
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Category as shown on the site (e.g. "Skincare").
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub subcategory: Option<String>,

    #[arg(long)]
    pub price: f64,

    /// Pre-discount price; must not undercut --price.
    #[arg(long)]
    pub original_price: Option<f64>,

    /// Star rating, 0 to 5.
    #[arg(long, default_value_t = 0.0)]
    pub rating: f64,

    #[arg(long, default_value_t = 0)]
    pub review_count: u64,

    /// Badge key (bestseller, new, sale).
    #[arg(long)]
    pub badge: Option<String>,

    #[arg(long)]
    pub featured: bool,

    /// Amazon product id the shop link is synthesized from.
    #[arg(long)]
    pub asin: String,

    /// Image URL; omitted means a generated placeholder.
    #[arg(long)]
    pub image: Option<String>,
}

pub fn run(cfg: &SiteConfig, args: AddArgs) -> Result<()> {
    let mut repo = CatalogRepository::open(cfg.catalog_write_path())?;
    let draft = ProductDraft {
        title: args.title,
        description: args.description,
        category: args.category,
        subcategory: args.subcategory,
        price: args.price,
        original_price: args.original_price,
        rating: args.rating,
        review_count: args.review_count,
        badge: args.badge,
        featured: args.featured,
        asin: args.asin,
        image: args.image,
    };
    let added = repo.append(draft, &cfg.affiliate_tag)?;
    println!(
        "added #{} {} [{}] {} -> {}",
        added.id,
        added.title,
        added.category,
        format::price(added.price),
        added.affiliate_url
    );
    repo.save()?;
    Ok(())
}
