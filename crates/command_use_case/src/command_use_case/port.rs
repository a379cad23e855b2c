pub mod product_repository;

pub use self::product_repository::{HasProductRepository, ProductRepository};
