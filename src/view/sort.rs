use std::str::FromStr;

use crate::catalog::product::Product;

/// The six recognized orderings. Unrecognized keys fall back to `Featured`,
/// which is also the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
    Newest,
    #[default]
    Featured,
}

impl SortKey {
    pub fn parse(raw: &str) -> SortKey {
        match raw {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "reviews" => SortKey::Reviews,
            "newest" => SortKey::Newest,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Newest => "newest",
            SortKey::Featured => "featured",
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(raw))
    }
}

/// Total-order the working set. Stable (ties keep their filtered order) and
/// by construction never mutates the source sequence: callers hand over the
/// derived `Vec` of references produced by the filter step.
pub fn sort(mut items: Vec<&Product>, key: SortKey) -> Vec<&Product> {
    match key {
        SortKey::PriceLow => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => items.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        // Lexical compare over the raw date string; missing dates key as ""
        // and therefore land last under descending order.
        SortKey::Newest => items.sort_by(|a, b| b.date_key().cmp(a.date_key())),
        // true > false, so reversing the operands floats featured items up.
        SortKey::Featured => items.sort_by(|a, b| b.featured.cmp(&a.featured)),
    }
    items
}
