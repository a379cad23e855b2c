use std::sync::Arc;

use write_model::aggregate::{product, Product};

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::ProductRepository;
use crate::{
    constraint_violation::{validate_id_and_quantity, ConstraintViolations},
    port::{product_repository, HasProductRepository},
};

#[derive(Debug)]
pub struct Input {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    pub id: i64,
    pub name: String,
    pub stock: u64,
}

impl From<Product> for Output {
    fn from(product: Product) -> Self {
        Self {
            id: i64::from(product.id()),
            name: product.name().to_string(),
            stock: u64::from(product.stock()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ConstraintViolation(ConstraintViolations),
    #[error("product get")]
    ProductGet(#[source] product_repository::Error),
    #[error("Product not found")]
    ProductNotFound(write_model::value_object::ProductId),
    #[error("product put")]
    ProductPut(#[source] product_repository::Error),
    #[error("product restock")]
    ProductRestock(#[source] product::Error),
}

#[async_trait::async_trait]
pub trait RestockProduct: HasProductRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let (product_id, quantity) =
            validate_id_and_quantity("addToStock", input.product_id, input.quantity)
                .map_err(Error::ConstraintViolation)?;
        let product_repository = self.product_repository();
        loop {
            let current = product_repository
                .get(product_id)
                .await
                .map_err(Error::ProductGet)?
                .ok_or(Error::ProductNotFound(product_id))?;
            let restocked = current.restock(quantity).map_err(Error::ProductRestock)?;
            match product_repository
                .put(Some(current.version()), restocked)
                .await
            {
                Ok(stored) => return Ok(Output::from(stored)),
                Err(product_repository::Error::Conflict(_)) => {
                    tracing::debug!(%product_id, "product changed concurrently, retrying");
                }
                Err(e) => return Err(Error::ProductPut(e)),
            }
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub RestockProduct {}

    impl HasProductRepository for RestockProduct {
        fn product_repository(&self) -> Arc<dyn ProductRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl RestockProduct for RestockProduct {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasRestockProduct {
    fn restock_product(&self) -> Arc<dyn RestockProduct + Send + Sync>;
}
