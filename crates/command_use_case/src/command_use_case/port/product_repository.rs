use std::sync::Arc;

use write_model::{
    aggregate::Product,
    value_object::{ProductId, Version},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stored version differs from the expected one.
    #[error("conflict (id = {0})")]
    Conflict(ProductId),
    #[error(transparent)]
    Unknown(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait::async_trait]
pub trait ProductRepository {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, Error>;

    /// Stores `product`, replacing the whole record with the same id.
    ///
    /// `current` is the version the caller read. `None` requires that no product with the id
    /// exists yet. `Some(version)` requires that the stored product still has `version`.
    /// Otherwise nothing is written and `Error::Conflict` is returned. The check and the write
    /// happen atomically.
    async fn put(&self, current: Option<Version>, product: Product) -> Result<Product, Error>;
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ProductRepository {}

    #[async_trait::async_trait]
    impl ProductRepository for ProductRepository {
        async fn get(&self, id: ProductId) -> Result<Option<Product>, Error>;
        async fn put(&self, current: Option<Version>, product: Product) -> Result<Product, Error>;
    }
}

pub trait HasProductRepository {
    fn product_repository(&self) -> Arc<dyn ProductRepository + Send + Sync>;
}
