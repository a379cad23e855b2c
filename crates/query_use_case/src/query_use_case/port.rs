pub mod product_reader;

pub use self::product_reader::{HasProductReader, ProductQueryData, ProductReader};
