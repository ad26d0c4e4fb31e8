use fashionflow_client::http_handler::http_client::HTTPClient;
use fashionflow_client::http_handler::http_request::product_get::ProductRequest;
use fashionflow_client::http_handler::http_request::product_list_get::{
    ProductListRequest, ProductQuery, SortOrder,
};
use fashionflow_client::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use fashionflow_client::{error, info, warn};

/// Read-only smoke run against a live backend: fetch the featured strip,
/// then the detail view of the first product. A missing backend degrades
/// to an empty listing, the same convention the storefront pages follow.
#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let client = HTTPClient::from_env();
    info!("Querying storefront backend at {}", client.url());

    let featured =
        ProductListRequest::new(ProductQuery::new().featured(true).limit(8).sort(SortOrder::Newest));
    let listing = match featured.send_request(&client).await {
        Ok(listing) => listing,
        Err(e) => {
            warn!("Catalog unavailable: {e}");
            return;
        }
    };
    info!("Featured: {} of {} products", listing.items().len(), listing.total());
    for product in listing.items() {
        info!("  {} (${:.2})", product.title(), product.price());
    }

    if let Some(first) = listing.items().first() {
        match ProductRequest::new(&first.route_key()).send_request(&client).await {
            Ok(detail) => info!(
                "Detail for {}: {}",
                detail.title(),
                detail.description().unwrap_or("(no description)")
            ),
            Err(e) => error!("Product detail failed: {e}"),
        }
    }
}
