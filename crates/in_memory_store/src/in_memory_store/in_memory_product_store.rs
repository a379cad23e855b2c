use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::product_repository;
use tokio::sync::Mutex;
use write_model::{
    aggregate::Product,
    value_object::{ProductId, Version},
};

#[derive(Clone)]
pub struct InMemoryProductStore {
    data: Arc<Mutex<BTreeMap<ProductId, Product>>>,
}

impl InMemoryProductStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl query_use_case::port::ProductReader for InMemoryProductStore {
    async fn list(
        &self,
    ) -> Result<
        Vec<query_use_case::port::ProductQueryData>,
        Box<dyn std::error::Error + Send + Sync>,
    > {
        let data = self.data.lock().await;
        Ok(data
            .values()
            .map(|product| query_use_case::port::ProductQueryData {
                id: product.id(),
                name: product.name().clone(),
                stock: product.stock(),
            })
            .collect::<Vec<query_use_case::port::ProductQueryData>>())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::ProductRepository for InMemoryProductStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, product_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.get(&id).cloned())
    }

    async fn put(
        &self,
        current: Option<Version>,
        product: Product,
    ) -> Result<Product, product_repository::Error> {
        let mut data = self.data.lock().await;
        let stored = data.get(&product.id()).map(Product::version);
        if stored != current {
            return Err(product_repository::Error::Conflict(product.id()));
        }
        data.insert(product.id(), product.clone());
        Ok(product)
    }
}
