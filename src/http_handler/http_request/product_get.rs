use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::product::Product;

/// Product detail lookup by slug, or by numeric id for products without
/// one (see `Product::route_key`).
#[derive(Debug)]
pub struct ProductRequest {
    slug: String,
}

impl ProductRequest {
    #[must_use]
    pub fn new(slug: &str) -> Self {
        Self { slug: String::from(slug) }
    }
}

impl NoBodyHTTPRequestType for ProductRequest {}

impl HTTPRequestType for ProductRequest {
    type Response = Product;

    fn endpoint(&self) -> String {
        format!("/api/products/{}", self.slug)
    }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
