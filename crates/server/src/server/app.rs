use std::sync::Arc;

use command_use_case::port::ProductRepository;
use query_use_case::port::ProductReader;

#[derive(Clone)]
pub struct App {
    product_reader: Arc<dyn ProductReader + Send + Sync>,
    product_repository: Arc<dyn ProductRepository + Send + Sync>,
}

impl App {
    pub fn new(
        product_reader: Arc<dyn ProductReader + Send + Sync>,
        product_repository: Arc<dyn ProductRepository + Send + Sync>,
    ) -> Self {
        Self {
            product_reader,
            product_repository,
        }
    }
}

impl command_use_case::order_product::HasOrderProduct for App {
    fn order_product(
        &self,
    ) -> Arc<dyn command_use_case::order_product::OrderProduct + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::order_product::OrderProduct for App {}

impl command_use_case::port::HasProductRepository for App {
    fn product_repository(&self) -> Arc<dyn ProductRepository + Send + Sync> {
        self.product_repository.clone()
    }
}

impl command_use_case::restock_product::HasRestockProduct for App {
    fn restock_product(
        &self,
    ) -> Arc<dyn command_use_case::restock_product::RestockProduct + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::restock_product::RestockProduct for App {}

impl query_use_case::port::HasProductReader for App {
    fn product_reader(&self) -> Arc<dyn ProductReader + Send + Sync> {
        self.product_reader.clone()
    }
}

impl query_use_case::list_products::HasListProducts for App {
    fn list_products(&self) -> Arc<dyn query_use_case::list_products::ListProducts + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl query_use_case::list_products::ListProducts for App {}
