use axum::{extract::State, http::StatusCode, Json, Router};

use query_use_case::{self, list_products::HasListProducts};

use super::internal_server_error;

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBodyProduct {
    id: i64,
    name: String,
    stock: u64,
}

impl From<query_use_case::list_products::Product> for ResponseBodyProduct {
    fn from(
        query_use_case::list_products::Product {
            id,
            name,
            stock,
        }: query_use_case::list_products::Product,
    ) -> Self {
        Self { id, name, stock }
    }
}

async fn handler<T: HasListProducts>(
    State(state): State<T>,
) -> Result<Json<Vec<ResponseBodyProduct>>, (StatusCode, String)> {
    let use_case = state.list_products();
    let query_use_case::list_products::Output(products) = use_case
        .execute(query_use_case::list_products::Input)
        .await
        .map_err(internal_server_error)?;
    Ok(Json(
        products
            .into_iter()
            .map(ResponseBodyProduct::from)
            .collect(),
    ))
}

pub fn router<T: Clone + HasListProducts + Send + Sync + 'static>() -> Router<T> {
    Router::new()
        .route("/api/products", axum::routing::get(handler::<T>))
        .route("/api/products/", axum::routing::get(handler::<T>))
}
