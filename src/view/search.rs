use crate::catalog::product::Product;

/// Queries shorter than this yield no results (and clear the display).
pub const MIN_QUERY_LEN: usize = 2;
/// Hard cap on returned hits.
pub const MAX_RESULTS: usize = 8;

/// Case-insensitive substring match over title OR category OR description.
///
/// Always runs over the full catalog, never the filtered working set —
/// search deliberately escapes the active filter context.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str, description: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            subcategory: None,
            price: 10.0,
            original_price: None,
            rating: 4.0,
            review_count: 1,
            badge: None,
            featured: false,
            date_added: None,
            affiliate_url: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn short_queries_yield_nothing() {
        let products = vec![product(1, "Rose Serum", "Skincare", "")];
        assert!(search(&products, "").is_empty());
        assert!(search(&products, "r").is_empty());
        assert!(search(&products, " r ").is_empty());
    }

    #[test]
    fn matches_any_of_title_category_description() {
        let products = vec![
            product(1, "Rose Serum", "Skincare", "hydrating"),
            product(2, "Matte Lipstick", "Makeup", "long-wear rose tint"),
            product(3, "Hair Oil", "Hair", "argan"),
        ];
        let hits: Vec<u64> = search(&products, "ROSE").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![1, 2]);

        let hits: Vec<u64> = search(&products, "hair").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn results_are_capped_at_eight() {
        let products: Vec<Product> = (1..=20)
            .map(|id| product(id, &format!("Serum {id}"), "Skincare", ""))
            .collect();
        let hits = search(&products, "serum");
        assert_eq!(hits.len(), MAX_RESULTS);
        // First matches in catalog order, not a relevance reshuffle.
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn every_hit_contains_the_query_somewhere() {
        let products = vec![
            product(1, "Rose Serum", "Skincare", ""),
            product(2, "Clay Mask", "Skincare", "detox"),
        ];
        for hit in search(&products, "sk") {
            let q = "sk";
            assert!(
                hit.title.to_lowercase().contains(q)
                    || hit.category.to_lowercase().contains(q)
                    || hit.description.to_lowercase().contains(q)
            );
        }
    }
}
