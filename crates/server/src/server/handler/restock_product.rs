use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json, Router,
};

use command_use_case::{
    self,
    restock_product::{Error, HasRestockProduct},
};

use super::internal_server_error;

#[derive(serde::Deserialize)]
struct PathParameters {
    product_id: i64,
    quantity: i64,
}

impl From<PathParameters> for command_use_case::restock_product::Input {
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

impl From<command_use_case::restock_product::Output> for ResponseBody {
    fn from(
        command_use_case::restock_product::Output {
            id,
            name,
            stock,
        }: command_use_case::restock_product::Output,
    ) -> Self {
        Self { id, name, stock }
    }
}

fn error_response(e: Error) -> (StatusCode, String) {
    match e {
        Error::ConstraintViolation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        Error::ProductNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        Error::ProductGet(_) | Error::ProductPut(_) | Error::ProductRestock(_) => {
            internal_server_error(e)
        }
    }
}

async fn handler<T: HasRestockProduct>(
    State(state): State<T>,
    Path(path_parameters): Path<PathParameters>,
) -> Result<Json<ResponseBody>, (StatusCode, String)> {
    let use_case = state.restock_product();
    let input = command_use_case::restock_product::Input::from(path_parameters);
    let output = use_case.execute(input).await.map_err(error_response)?;
    Ok(Json(ResponseBody::from(output)))
}

pub fn router<T: Clone + HasRestockProduct + Send + Sync + 'static>() -> Router<T> {
    Router::new()
        .route(
            "/api/add/products/:product_id/:quantity",
            axum::routing::get(handler::<T>),
        )
        .route(
            "/api/add/products/:product_id/:quantity/",
            axum::routing::get(handler::<T>),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use command_use_case::{
        constraint_violation::{ConstraintViolation, ConstraintViolations},
        port::product_repository,
        restock_product::MockRestockProduct,
    };
    use write_model::{aggregate::product, value_object::ProductId};

    use crate::server::handler::tests::{
        build_error, build_get_request, send_request, ResponseExt as _,
    };

    use super::*;

    #[tokio::test]
    async fn test_happy_path() -> anyhow::Result<()> {
        let mocks = Mocks::with_happy_path_behavior(1, 5);
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/1/5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.into_body_as_json::<ResponseBody>().await?,
            ResponseBody {
                id: 1,
                name: "Men Jeans".to_string(),
                stock: 105,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_trailing_slash() -> anyhow::Result<()> {
        let mocks = Mocks::with_happy_path_behavior(1, 5);
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/1/5/")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.into_body_as_json::<ResponseBody>().await?,
            ResponseBody {
                id: 1,
                name: "Men Jeans".to_string(),
                stock: 105,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_product_not_found() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(Error::ProductNotFound(ProductId::try_from(17_i64)?));
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/17/5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.into_body_string().await?, "Product not found");
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_overflow() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(Error::ProductRestock(product::Error::StockOverflow));
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/1/5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.into_body_string().await?, "");
        Ok(())
    }

    #[tokio::test]
    async fn test_constraint_violation() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(Error::ConstraintViolation(ConstraintViolations::new(
            vec![ConstraintViolation {
                path: "addToStock.quantity".to_string(),
                message: "must be greater than 0".to_string(),
            }],
        )));
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/2/-5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.into_body_string().await?,
            "addToStock.quantity: must be greater than 0"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_path() -> anyhow::Result<()> {
        let mocks = Mocks {
            restock_product: Arc::new(MockRestockProduct::new()),
        };
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/abc/5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_error() -> anyhow::Result<()> {
        let mocks = Mocks::with_error(Error::ProductPut(product_repository::Error::from(
            build_error(),
        )));
        let app = router().with_state(mocks.clone());
        let request = build_get_request("/api/add/products/1/5")?;
        let response = send_request(app, request).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.into_body_string().await?, "");
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        restock_product: Arc<MockRestockProduct>,
    }

    impl Mocks {
        fn with_happy_path_behavior(product_id: i64, quantity: i64) -> Self {
            let mut restock_product = MockRestockProduct::new();
            restock_product.expect_execute().return_once(move |input| {
                assert_eq!(input.product_id, product_id);
                assert_eq!(input.quantity, quantity);
                Ok(command_use_case::restock_product::Output {
                    id: product_id,
                    name: "Men Jeans".to_string(),
                    stock: 105,
                })
            });
            Self {
                restock_product: Arc::new(restock_product),
            }
        }

        fn with_error(error: Error) -> Self {
            let mut restock_product = MockRestockProduct::new();
            restock_product
                .expect_execute()
                .return_once(move |_| Err(error));
            Self {
                restock_product: Arc::new(restock_product),
            }
        }
    }

    impl command_use_case::restock_product::HasRestockProduct for Mocks {
        fn restock_product(
            &self,
        ) -> Arc<dyn command_use_case::restock_product::RestockProduct + Send + Sync> {
            self.restock_product.clone()
        }
    }
}
