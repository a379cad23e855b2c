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
    #[error("Product has not enough stock for your order")]
    InsufficientStock(#[source] product::Error),
    #[error("product get")]
    ProductGet(#[source] product_repository::Error),
    #[error("Product not found")]
    ProductNotFound(write_model::value_object::ProductId),
    #[error("product order")]
    ProductOrder(#[source] product::Error),
    #[error("product put")]
    ProductPut(#[source] product_repository::Error),
}

#[async_trait::async_trait]
pub trait OrderProduct: HasProductRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let (product_id, quantity) =
            validate_id_and_quantity("order", input.product_id, input.quantity)
                .map_err(Error::ConstraintViolation)?;
        let product_repository = self.product_repository();
        loop {
            let current = product_repository
                .get(product_id)
                .await
                .map_err(Error::ProductGet)?
                .ok_or(Error::ProductNotFound(product_id))?;
            let ordered = current.order(quantity).map_err(|e| match e {
                product::Error::InsufficientStock { .. } => Error::InsufficientStock(e),
                _ => Error::ProductOrder(e),
            })?;
            match product_repository
                .put(Some(current.version()), ordered)
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
    pub OrderProduct {}

    impl HasProductRepository for OrderProduct {
        fn product_repository(&self) -> Arc<dyn ProductRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl OrderProduct for OrderProduct {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasOrderProduct {
    fn order_product(&self) -> Arc<dyn OrderProduct + Send + Sync>;
}
