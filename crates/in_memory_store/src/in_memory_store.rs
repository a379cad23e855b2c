mod in_memory_product_store;

pub use self::in_memory_product_store::InMemoryProductStore;
