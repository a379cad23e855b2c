use std::sync::Arc;

use write_model::value_object::{ProductId, ProductName, Stock};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductQueryData {
    pub id: ProductId,
    pub name: ProductName,
    pub stock: Stock,
}

#[async_trait::async_trait]
pub trait ProductReader {
    async fn list(&self)
        -> Result<Vec<ProductQueryData>, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ProductReader {}

    #[async_trait::async_trait]
    impl ProductReader for ProductReader {
        async fn list(&self)
            -> Result<Vec<ProductQueryData>, Box<dyn std::error::Error + Send + Sync>>;
    }
}

pub trait HasProductReader {
    fn product_reader(&self) -> Arc<dyn ProductReader + Send + Sync>;
}
