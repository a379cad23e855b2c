use std::{str::FromStr as _, sync::Arc};

use axum::http::StatusCode;
use command_use_case::port::ProductRepository as _;
use in_memory_store::InMemoryProductStore;
use server::App;
use write_model::{
    aggregate::Product,
    value_object::{ProductId, ProductName, Stock},
};

const CATALOG: [(i64, &str); 5] = [
    (1, "Men Jeans"),
    (2, "Men Jacket"),
    (3, "Women Shoe"),
    (4, "Women Shirt"),
    (5, "Children Short"),
];

async fn build_app() -> anyhow::Result<axum::Router> {
    let store = Arc::new(InMemoryProductStore::new());
    for (id, name) in CATALOG {
        store
            .put(
                None,
                Product::create(
                    ProductId::try_from(id)?,
                    ProductName::from_str(name)?,
                    Stock::from(100),
                ),
            )
            .await?;
    }
    Ok(server::router(App::new(store.clone(), store)))
}

async fn get(app: &axum::Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
    let request = axum::http::Request::builder()
        .method(axum::http::Method::GET)
        .uri(uri)
        .body(axum::body::Body::empty())?;
    let response = tower::ServiceExt::oneshot(app.clone(), request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(body.to_vec())?))
}

#[tokio::test]
async fn test_list_products() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/products").await?;
    assert_eq!(status, StatusCode::OK);
    let expected = serde_json::Value::Array(
        CATALOG
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id, "name": name, "stock": 100 }))
            .collect(),
    );
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body)?, expected);

    let (_, again) = get(&app, "/api/products").await?;
    assert_eq!(again, body);
    Ok(())
}

#[tokio::test]
async fn test_trailing_slash() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/products/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?
            .as_array()
            .map(Vec::len),
        Some(CATALOG.len())
    );

    let (status, body) = get(&app, "/api/order/products/1/5/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?,
        serde_json::json!({ "id": 1, "name": "Men Jeans", "stock": 95 })
    );

    let (status, body) = get(&app, "/api/order/products/17/5/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));

    let (status, body) = get(&app, "/api/add/products/1/5/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?,
        serde_json::json!({ "id": 1, "name": "Men Jeans", "stock": 100 })
    );

    let (status, body) = get(&app, "/api/add/products/17/5/").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
    Ok(())
}

#[tokio::test]
async fn test_order() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/order/products/1/5").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?,
        serde_json::json!({ "id": 1, "name": "Men Jeans", "stock": 95 })
    );
    Ok(())
}

#[tokio::test]
async fn test_order_product_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/order/products/17/5").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
    Ok(())
}

#[tokio::test]
async fn test_order_insufficient_stock() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/order/products/2/500").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Product has not enough stock for your order"));

    let (_, body) = get(&app, "/api/products").await?;
    let products = serde_json::from_str::<serde_json::Value>(&body)?;
    assert_eq!(products[1]["stock"], 100);
    Ok(())
}

#[tokio::test]
async fn test_order_constraint_violation() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/order/products/2/-5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("order.quantity: must be greater than 0"));

    let (status, body) = get(&app, "/api/order/products/-2/5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("order.id: must be greater than 0"));

    // an invalid id is reported even though no such product exists
    let (status, body) = get(&app, "/api/order/products/0/5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("order.id: must be greater than 0"));
    Ok(())
}

#[tokio::test]
async fn test_add_to_stock() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/add/products/1/5").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body)?,
        serde_json::json!({ "id": 1, "name": "Men Jeans", "stock": 105 })
    );
    Ok(())
}

#[tokio::test]
async fn test_add_to_stock_product_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/add/products/17/5").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
    Ok(())
}

#[tokio::test]
async fn test_add_to_stock_constraint_violation() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = get(&app, "/api/add/products/2/-5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("addToStock.quantity: must be greater than 0"));

    let (status, body) = get(&app, "/api/add/products/-2/5").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("addToStock.id: must be greater than 0"));
    Ok(())
}
