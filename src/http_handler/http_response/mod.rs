pub mod auth;
pub mod product;
pub mod product_list;
pub mod response_common;
pub mod upload;
