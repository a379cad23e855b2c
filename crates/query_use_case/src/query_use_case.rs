pub mod list_products;
pub mod port;
