//! Command-line surface. Every subcommand resolves a [`SiteConfig`] from
//! the environment first, then layers the global CLI overrides on top, so
//! `--catalog` behaves identically across all of them.

pub mod add;
pub mod build;
pub mod stats;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::catalog::repository::CatalogRepository;
use crate::catalog::store::CatalogStore;
use crate::config::SiteConfig;
use crate::{content, images, view};

#[derive(Debug, Parser)]
#[command(
    name = "glowcart",
    about = "Static affiliate storefront generator and catalog toolkit",
    version
)]
pub struct Cli {
    /// Catalog JSON path, overriding CATALOG_PATH and the default candidates.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only log warnings and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full static site into the output directory.
    Build(build::BuildArgs),
    /// Append a new product to the catalog.
    Add(add::AddArgs),
    /// Search the catalog the way the site search box does.
    Search {
        /// Query string; fewer than two characters returns nothing.
        query: String,
        /// Emit matches as JSON instead of text lines.
        #[arg(long)]
        json: bool,
    },
    /// Print a catalog health report.
    Stats,
    /// Generate social captions for every product.
    Captions,
    /// Generate image/slideshow prompts for every product.
    Prompts,
    /// Fetch real product images for entries stuck on placeholders.
    Images {
        /// Fix at most this many products.
        #[arg(long)]
        limit: Option<usize>,
        /// Report what would change without writing the catalog.
        #[arg(long)]
        dry_run: bool,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut cfg = SiteConfig::from_env();
    if let Some(path) = cli.catalog {
        cfg.catalog_path = Some(path);
    }

    match cli.command {
        Command::Build(args) => build::run(&cfg, args),
        Command::Add(args) => add::run(&cfg, args),
        Command::Search { query, json } => run_search(&cfg, &query, json),
        Command::Stats => stats::run(&cfg),
        Command::Captions => {
            let store = CatalogStore::load_from(&cfg);
            print!("{}", content::captions::captions(store.products()));
            Ok(())
        }
        Command::Prompts => {
            let store = CatalogStore::load_from(&cfg);
            print!("{}", content::prompts::prompts(store.products()));
            Ok(())
        }
        Command::Images { limit, dry_run } => run_images(&cfg, limit, dry_run).await,
    }
}

fn run_search(cfg: &SiteConfig, query: &str, json: bool) -> Result<()> {
    let store = CatalogStore::load_from(cfg);
    let matches = view::search(store.products(), query);
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    if matches.is_empty() {
        println!("no matches for {query:?}");
        return Ok(());
    }
    for p in &matches {
        println!("#{} {} [{}] {}", p.id, p.title, p.category, crate::render::format::price(p.price));
    }
    Ok(())
}

async fn run_images(cfg: &SiteConfig, limit: Option<usize>, dry_run: bool) -> Result<()> {
    let mut repo = CatalogRepository::open(cfg.catalog_write_path())?;
    let report = images::fill_missing(&mut repo, limit, dry_run).await?;
    info!(path = %repo.path().display(), "image fill finished");
    println!(
        "examined {} product(s): {} updated, {} placeholder(s), {} failed{}",
        report.examined,
        report.updated,
        report.placeholders,
        report.failed,
        if dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}
