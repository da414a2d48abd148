//! Product image tooling: resolve real storefront images for catalog
//! entries and fall back to a deterministic placeholder when nothing can
//! be found. This is the crate's only network consumer; every failure here
//! degrades (placeholder, log line) instead of aborting a run.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::{stream, StreamExt};
use rand::Rng;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::catalog::repository::CatalogRepository;

/// Parallel in-flight page fetches.
const FETCH_CONCURRENCY: usize = 4;
/// Politeness floor between requests, plus jitter.
const FETCH_DELAY_MS: u64 = 250;

fn asin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("static pattern"))
}

/// Main-image URL patterns, tried in order against the product page HTML.
fn image_res() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r#"data-old-hires="(https://m\.media-amazon\.com/images/I/[^"]+)""#)
                .expect("static pattern"),
            Regex::new(r#""hiRes":\s*"(https://m\.media-amazon\.com/images/I/[^"]+)""#)
                .expect("static pattern"),
            Regex::new(r#""large":\s*"(https://m\.media-amazon\.com/images/I/[^"]+)""#)
                .expect("static pattern"),
        ]
    })
}

/// Pull the ASIN out of an affiliate URL.
pub fn extract_asin(affiliate_url: &str) -> Option<String> {
    asin_re()
        .captures(affiliate_url)
        .map(|caps| caps[1].to_string())
}

/// Deterministic placeholder for a product with no usable image: first 50
/// title characters (apostrophes dropped) over the site palette.
pub fn placeholder_url(title: &str) -> String {
    let cleaned: String = title.chars().filter(|c| *c != '\'').take(50).collect();
    format!(
        "https://placehold.co/400x400/f8f4f0/8b5e83?text={}&font=playfair-display",
        urlencoding::encode(cleaned.trim())
    )
}

/// Whether a stored image URL is "missing" for fixing purposes.
pub fn is_placeholder(url: &str) -> bool {
    url.trim().is_empty() || url.contains("placehold.co")
}

/// Browser-like client; storefronts serve stripped pages to default UAs.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        )
        .timeout(Duration::from_secs(15))
        .build()
        .context("building http client")
}

/// Fetch the product page and scrape the main image URL. `Ok(None)` means
/// the page loaded but no pattern matched; transport errors bubble up for
/// the caller to log.
pub async fn fetch_image(client: &reqwest::Client, asin: &str) -> Result<Option<String>> {
    let url = format!("https://www.amazon.com/dp/{asin}");
    let body = client
        .get(&url)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("fetching {url}"))?
        .text()
        .await
        .context("reading product page body")?;

    for re in image_res() {
        if let Some(caps) = re.captures(&body) {
            return Ok(Some(caps[1].to_string()));
        }
    }
    debug!(asin, "no image pattern matched in product page");
    Ok(None)
}

/// Outcome counts for an image-fill run.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct FillReport {
    pub examined: usize,
    pub updated: usize,
    pub placeholders: usize,
    pub failed: usize,
}

/// Fill in every product whose image is empty or a placeholder: scrape a
/// real image where possible, otherwise (re)write the deterministic
/// placeholder. Network failures are logged per product and the run keeps
/// going — a half-fixed catalog is better than an aborted one.
pub async fn fill_missing(
    repo: &mut CatalogRepository,
    limit: Option<usize>,
    dry_run: bool,
) -> Result<FillReport> {
    let targets: Vec<(u64, String, Option<String>)> = repo
        .products()
        .iter()
        .filter(|p| is_placeholder(&p.image))
        .take(limit.unwrap_or(usize::MAX))
        .map(|p| (p.id, p.title.clone(), extract_asin(&p.affiliate_url)))
        .collect();

    let mut report = FillReport {
        examined: targets.len(),
        ..FillReport::default()
    };
    if targets.is_empty() {
        info!("no products need images");
        return Ok(report);
    }

    let client = http_client()?;
    let results: Vec<(u64, String, Result<Option<String>>)> = stream::iter(targets)
        .map(|(id, title, asin)| {
            let client = client.clone();
            async move {
                let fetched = match asin {
                    Some(asin) => {
                        let jitter = rand::thread_rng().gen_range(0..FETCH_DELAY_MS);
                        tokio::time::sleep(Duration::from_millis(FETCH_DELAY_MS + jitter)).await;
                        fetch_image(&client, &asin).await
                    }
                    // No ASIN to scrape from; treat as a clean miss.
                    None => Ok(None),
                };
                (id, title, fetched)
            }
        })
        .buffer_unordered(FETCH_CONCURRENCY)
        .collect()
        .await;

    for (id, title, fetched) in results {
        let new_url = match fetched {
            Ok(Some(url)) => {
                report.updated += 1;
                url
            }
            Ok(None) => {
                report.placeholders += 1;
                placeholder_url(&title)
            }
            Err(err) => {
                warn!(id, title = %title, error = %err, "image fetch failed; keeping placeholder");
                report.failed += 1;
                placeholder_url(&title)
            }
        };
        if !dry_run {
            repo.set_image(id, &new_url);
        }
    }

    if !dry_run {
        repo.save()?;
    }
    info!(
        examined = report.examined,
        updated = report.updated,
        placeholders = report.placeholders,
        failed = report.failed,
        dry_run,
        "image fill complete"
    );
    Ok(report)
}
