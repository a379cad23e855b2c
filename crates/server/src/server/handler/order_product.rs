use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json, Router,
};

use command_use_case::{
    self,
    order_product::{Error, HasOrderProduct},
};

use super::internal_server_error;

#[derive(serde::Deserialize)]
struct PathParameters {
    product_id: i64,
    quantity: i64,
}

impl From<PathParameters> for command_use_case::order_product::Input {
    fn from(
        PathParameters {
            product_id,
            quantity,
        }: PathParameters,
    ) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    id: i64,
    name: String,
    stock: u64,
}

impl From<command_use_case::order_product::Output> for ResponseBody {
    fn from(
        command_use_case::order_product::Output {
            id,
            name,
            stock,
        }: command_use_case::order_product::Output,
    ) -> Self {
        Self { id, name, stock }
    }
}

fn error_response(e: Error) -> (StatusCode, String) {
    match e {
        Error::ConstraintViolation(_) | Error::InsufficientStock(_) => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        Error::ProductNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        Error::ProductGet(_) | Error::ProductOrder(_) | Error::ProductPut(_) => {
            internal_server_error(e)
        }
    }
}

async fn handler<T: HasOrderProduct>(
    State(state): State<T>,
    Path(path_parameters): Path<PathParameters>,
) -> Result<Json<ResponseBody>, (StatusCode, String)> {
    let use_case = state.order_product();
    let input = command_use_case::order_product::Input::from(path_parameters);
    let output = use_case.execute(input).await.map_err(error_response)?;
    Ok(Json(ResponseBody::from(output)))
}

pub fn router<T: Clone + HasOrderProduct + Send + Sync + 'static>() -> Router<T> {
    Router::new()
        .route(
            "/api/order/products/:product_id/:quantity",
            axum::routing::get(handler::<T>),
        )
        .route(
            "/api/order/products/:product_id/:quantity/",
            axum::routing::get(handler::<T>),
        )
}
