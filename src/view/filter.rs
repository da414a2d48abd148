use crate::catalog::product::Product;

/// Sentinel meaning "no filter". Case-sensitive by contract: `"All"` is an
/// ordinary (unknown) category and yields an empty result set.
pub const ALL_CATEGORIES: &str = "all";

/// How a page interprets the user-selectable filter. The two modes are
/// mutually exclusive per page and fixed by the page's own bootstrap, never
/// by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    /// The filter control selects a `category`.
    Category,
    /// A category-specific page: the primary category is fixed by the page
    /// and the filter control narrows by `subcategory` instead.
    Subcategory { page_category: String },
}

/// Derive the working subset. Order is preserved; the source sequence is
/// never touched. Unknown category or subcategory values return empty
/// rather than erroring.
pub fn filter<'a>(products: &'a [Product], mode: &FilterMode, selected: &str) -> Vec<&'a Product> {
    match mode {
        FilterMode::Category => {
            if selected == ALL_CATEGORIES {
                return products.iter().collect();
            }
            products
                .iter()
                .filter(|p| p.category.eq_ignore_ascii_case(selected))
                .collect()
        }
        FilterMode::Subcategory { page_category } => {
            let scoped = products
                .iter()
                .filter(|p| p.category.eq_ignore_ascii_case(page_category));
            if selected == ALL_CATEGORIES {
                return scoped.collect();
            }
            scoped
                .filter(|p| {
                    p.subcategory
                        .as_deref()
                        .map(|s| s.eq_ignore_ascii_case(selected))
                        .unwrap_or(false)
                })
                .collect()
        }
    }
}
