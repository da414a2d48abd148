use std::path::PathBuf;

use crate::util::env::{env_opt, env_parse};

/// Items materialized per "page" of a listing before a load-more step.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Site-level configuration, resolved env-first with CLI overrides on top.
///
/// Every knob has a working default so `glowcart build` runs out of the box
/// against a checkout with `data/products.json` present.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Display name used in page titles and the header.
    pub site_name: String,
    /// Canonical base URL, used for JSON-LD and outbound link context.
    pub base_url: String,
    /// Affiliate tracking tag appended to synthesized shop links.
    pub affiliate_tag: String,
    /// Explicit catalog path; when set it is the only candidate tried.
    pub catalog_path: Option<PathBuf>,
    /// Directory the static site is written into.
    pub out_dir: PathBuf,
    /// Listing page size (spec default 12).
    pub page_size: usize,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            site_name: env_opt("SITE_NAME").unwrap_or_else(|| "Glowcart".to_string()),
            base_url: env_opt("SITE_BASE_URL")
                .unwrap_or_else(|| "https://glowcart.example".to_string()),
            affiliate_tag: env_opt("AFFILIATE_TAG").unwrap_or_else(|| "glowcart-20".to_string()),
            catalog_path: env_opt("CATALOG_PATH").map(PathBuf::from),
            out_dir: env_opt("SITE_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("site")),
            page_size: env_parse("SITE_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Ordered catalog path candidates. The relative fallbacks tolerate being
    /// invoked from the repo root or from one directory down, mirroring how
    /// the generated pages themselves resolve the catalog at different
    /// nesting depths.
    pub fn catalog_candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.catalog_path {
            return vec![path.clone()];
        }
        ["data/products.json", "products.json", "../data/products.json"]
            .iter()
            .map(PathBuf::from)
            .collect()
    }

    /// Path a catalog writer should persist to: the explicit override when
    /// set, else the first candidate that already exists, else the primary
    /// default location.
    pub fn catalog_write_path(&self) -> PathBuf {
        if let Some(path) = &self.catalog_path {
            return path.clone();
        }
        self.catalog_candidates()
            .into_iter()
            .find(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from("data/products.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_catalog_path_is_sole_candidate() {
        let cfg = SiteConfig {
            catalog_path: Some(PathBuf::from("/tmp/custom.json")),
            ..SiteConfig::from_env()
        };
        assert_eq!(cfg.catalog_candidates(), vec![PathBuf::from("/tmp/custom.json")]);
        assert_eq!(cfg.catalog_write_path(), PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn default_candidates_cover_nesting_depths() {
        let cfg = SiteConfig {
            catalog_path: None,
            ..SiteConfig::from_env()
        };
        let candidates = cfg.catalog_candidates();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], PathBuf::from("data/products.json"));
    }
}
