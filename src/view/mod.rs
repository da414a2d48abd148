//! The catalog view engine: load once, then filter -> sort -> paginate ->
//! render, with search running orthogonally over the full store.
//!
//! All state lives in an explicit [`ViewState`] (one per page/session)
//! instead of module globals, so the same logic is independently testable
//! and instantiable.

pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;

pub use filter::{FilterMode, ALL_CATEGORIES};
pub use paginate::Pager;
pub use search::{search, MAX_RESULTS, MIN_QUERY_LEN};
pub use sort::SortKey;

use crate::catalog::product::Product;

/// Which render path a page bootstraps into. Replaces the original's
/// probe-the-document dispatch with a statically known page kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Detail,
    HomeFeatured,
}

/// Per-page UI state: the active filter selection, sort key and pagination
/// cursor. Derived sequences are recomputed on demand and never cached.
#[derive(Debug, Clone)]
pub struct ViewState {
    mode: FilterMode,
    selected: String,
    sort: SortKey,
    pager: Pager,
}

impl ViewState {
    pub fn new(mode: FilterMode) -> ViewState {
        ViewState {
            mode,
            selected: ALL_CATEGORIES.to_string(),
            sort: SortKey::default(),
            pager: Pager::new(),
        }
    }

    pub fn with_page_size(mode: FilterMode, page_size: usize) -> ViewState {
        ViewState {
            pager: Pager::with_page_size(page_size),
            ..ViewState::new(mode)
        }
    }

    /// Switch the active filter. Always restarts from page one.
    pub fn set_filter(&mut self, selected: impl Into<String>) {
        self.selected = selected.into();
        self.pager.reset();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Materialize one more page of the working set.
    pub fn load_more(&mut self) {
        self.pager.advance();
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The full filtered + sorted working set, order-stable, source
    /// untouched.
    pub fn working_set<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let subset = filter::filter(products, &self.mode, &self.selected);
        sort::sort(subset, self.sort)
    }

    /// The currently materialized slice of the working set plus whether a
    /// load-more control should be offered.
    pub fn visible<'a>(&self, products: &'a [Product]) -> (Vec<&'a Product>, bool) {
        let working = self.working_set(products);
        let has_more = self.pager.has_more(working.len());
        let visible_len = self.pager.visible_len(working.len());
        let mut page = working;
        page.truncate(visible_len);
        (page, has_more)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::Product;

    fn product(id: u64, category: &str, featured: bool) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            category: category.to_string(),
            subcategory: None,
            price: id as f64,
            original_price: None,
            rating: 4.0,
            review_count: 10,
            badge: None,
            featured,
            date_added: None,
            affiliate_url: String::new(),
            image: String::new(),
        }
    }

    fn catalog(n: u64) -> Vec<Product> {
        (1..=n).map(|id| product(id, "Skincare", false)).collect()
    }

    #[test]
    fn filter_switch_resets_pagination() {
        let products = catalog(30);
        let mut state = ViewState::new(FilterMode::Category);
        state.load_more();
        assert_eq!(state.pager().display_count(), 24);

        state.set_filter("Skincare");
        assert_eq!(state.pager().display_count(), Pager::PAGE_SIZE);
        let (page, has_more) = state.visible(&products);
        assert_eq!(page.len(), 12);
        assert!(has_more);
    }

    #[test]
    fn visible_never_exceeds_working_set() {
        let products = catalog(5);
        let mut state = ViewState::new(FilterMode::Category);
        state.load_more();
        state.load_more();
        let (page, has_more) = state.visible(&products);
        assert_eq!(page.len(), 5);
        assert!(!has_more);
    }

    #[test]
    fn empty_catalog_renders_zero_with_no_load_more() {
        let state = ViewState::new(FilterMode::Category);
        let (page, has_more) = state.visible(&[]);
        assert!(page.is_empty());
        assert!(!has_more);
    }

    #[test]
    fn working_set_applies_filter_then_sort() {
        let mut products = catalog(3);
        products.push(product(4, "Makeup", true));
        products.push(product(5, "Skincare", true));

        let mut state = ViewState::new(FilterMode::Category);
        state.set_filter("skincare");
        let working = state.working_set(&products);
        // Featured-first default sort within the filtered subset.
        let ids: Vec<u64> = working.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 1, 2, 3]);
    }
}
