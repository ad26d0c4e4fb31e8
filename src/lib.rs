//! A typed asynchronous HTTP client for the FashionFlow storefront API.
//!
//! The crate wraps the backend's REST surface (catalog listing, product
//! detail, authentication, asset upload) behind per-endpoint request types
//! that all funnel through a single [`HTTPClient`] with a configured base
//! address. Every call is an independent request/response pair: the client
//! keeps no session, cache, or retry state.
//!
//! [`HTTPClient`]: http_handler::http_client::HTTPClient

pub mod http_handler;
mod logger;
