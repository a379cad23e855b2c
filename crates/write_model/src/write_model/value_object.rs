pub mod product_id;
pub mod product_name;
pub mod quantity;
pub mod stock;
pub mod version;

pub use self::product_id::ProductId;
pub use self::product_name::ProductName;
pub use self::quantity::Quantity;
pub use self::stock::Stock;
pub use self::version::Version;
