use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::product_list::ProductListResponse;
use strum_macros::Display;
use url::form_urlencoded;

/// Orderings the catalog listing endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Query surface of the catalog listing endpoint. Unset fields are left
/// out of the query string entirely, so the backend applies its own
/// defaults.
#[derive(Debug, Default, Clone)]
pub struct ProductQuery {
    q: Option<String>,
    category: Option<String>,
    sort: Option<SortOrder>,
    page: Option<u32>,
    limit: Option<u32>,
    featured: Option<bool>,
}

impl ProductQuery {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn search(mut self, q: &str) -> Self {
        self.q = Some(String::from(q));
        self
    }

    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(String::from(category));
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Percent-encoded query string, without the leading `?`. Empty when
    /// no field is set.
    fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(q) = &self.q {
            serializer.append_pair("q", q);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(sort) = self.sort {
            serializer.append_pair("sort", &sort.to_string());
        }
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(featured) = self.featured {
            serializer.append_pair("featured", if featured { "true" } else { "false" });
        }
        serializer.finish()
    }
}

/// Catalog listing request, the data source behind both the featured strip
/// and the filterable product grid.
#[derive(Debug, Default)]
pub struct ProductListRequest {
    query: ProductQuery,
}

impl ProductListRequest {
    #[must_use]
    pub fn new(query: ProductQuery) -> Self { Self { query } }
}

impl NoBodyHTTPRequestType for ProductListRequest {}

impl HTTPRequestType for ProductListRequest {
    type Response = ProductListResponse;

    fn endpoint(&self) -> String {
        let query = self.query.query_string();
        if query.is_empty() {
            String::from("/api/products")
        } else {
            format!("/api/products?{query}")
        }
    }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_question_mark() {
        let request = ProductListRequest::new(ProductQuery::new());
        assert_eq!(request.endpoint(), "/api/products");
    }

    #[test]
    fn test_full_query_assembles_all_pairs() {
        let query = ProductQuery::new()
            .search("linen shirt")
            .category("tops")
            .sort(SortOrder::PriceAsc)
            .page(2)
            .limit(12)
            .featured(true);
        let request = ProductListRequest::new(query);
        assert_eq!(
            request.endpoint(),
            "/api/products?q=linen+shirt&category=tops&sort=price_asc&page=2&limit=12&featured=true"
        );
    }

    #[test]
    fn test_sort_orders_render_snake_case() {
        assert_eq!(SortOrder::Newest.to_string(), "newest");
        assert_eq!(SortOrder::PriceAsc.to_string(), "price_asc");
        assert_eq!(SortOrder::PriceDesc.to_string(), "price_desc");
    }

    #[test]
    fn test_search_text_is_percent_encoded() {
        let request = ProductListRequest::new(ProductQuery::new().search("50% off & more"));
        assert_eq!(request.endpoint(), "/api/products?q=50%25+off+%26+more");
    }
}
