use super::product::Product;

/// Paged catalog listing: the items of the requested page plus the total
/// match count across all pages.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ProductListResponse {
    items: Vec<Product>,
    total: u64,
}

impl ProductListResponse {
    pub fn items(&self) -> &[Product] { &self.items }
    pub fn total(&self) -> u64 { self.total }
    pub fn into_items(self) -> Vec<Product> { self.items }

    /// Number of pages the listing spans at the given page size, never
    /// less than one so pagination strips always render.
    #[must_use]
    pub fn page_count(&self, limit: u64) -> u64 {
        if limit == 0 {
            return 1;
        }
        self.total.div_ceil(limit).max(1)
    }
}
