pub mod login_post;
pub mod product_get;
pub mod product_image_post;
pub mod product_list_get;
pub mod register_post;
pub mod request_common;
