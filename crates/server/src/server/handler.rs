mod list_products;
mod order_product;
mod restock_product;

use axum::{http::StatusCode, Router};

use command_use_case::{order_product::HasOrderProduct, restock_product::HasRestockProduct};
use query_use_case::list_products::HasListProducts;

pub fn router<
    T: Clone + HasListProducts + HasOrderProduct + HasRestockProduct + Send + Sync + 'static,
>() -> Router<T> {
    Router::new()
        .merge(list_products::router())
        .merge(order_product::router())
        .merge(restock_product::router())
}

/// Responds with an empty 500. The cause is only logged.
fn internal_server_error<E: std::error::Error>(e: E) -> (StatusCode, String) {
    tracing::error!(error = ?e, "internal server error");
    (StatusCode::INTERNAL_SERVER_ERROR, String::new())
}
