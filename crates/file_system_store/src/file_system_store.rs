mod file_system_product_store;

pub use self::file_system_product_store::FileSystemProductStore;
