use std::sync::Arc;

use crate::port::{HasProductReader, ProductQueryData, ProductReader};

#[derive(Debug)]
pub struct Input;

#[derive(Debug)]
pub struct Output(pub Vec<Product>);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub stock: u64,
}

impl From<ProductQueryData> for Product {
    fn from(ProductQueryData { id, name, stock }: ProductQueryData) -> Self {
        Self {
            id: i64::from(id),
            name: String::from(name),
            stock: u64::from(stock),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("product list")]
    ProductList(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait::async_trait]
pub trait ListProducts: HasProductReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), skip(self))]
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        let product_reader = self.product_reader();
        product_reader
            .list()
            .await
            .map(|products| Output(products.into_iter().map(Product::from).collect()))
            .map_err(Error::ProductList)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ListProducts {}

    impl HasProductReader for ListProducts {
        fn product_reader(&self) -> Arc<dyn ProductReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ListProducts for ListProducts {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasListProducts {
    fn list_products(&self) -> Arc<dyn ListProducts + Send + Sync>;
}
