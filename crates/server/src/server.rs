mod app;
mod handler;

use std::net::SocketAddr;

use command_use_case::{order_product::HasOrderProduct, restock_product::HasRestockProduct};
use query_use_case::list_products::HasListProducts;

pub use self::app::App;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bind")]
    Bind(#[source] std::io::Error),
    #[error("serve")]
    Serve(#[source] std::io::Error),
}

pub fn router<
    T: Clone + HasListProducts + HasOrderProduct + HasRestockProduct + Send + Sync + 'static,
>(
    app: T,
) -> axum::Router {
    handler::router().with_state(app)
}

pub async fn run<
    T: Clone + HasListProducts + HasOrderProduct + HasRestockProduct + Send + Sync + 'static,
>(
    app: T,
    addr: SocketAddr,
) -> Result<(), Error> {
    let tcp_listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::Bind)?;
    tracing::info!(%addr, "listening");
    axum::serve(tcp_listener, router(app))
        .await
        .map_err(Error::Serve)?;
    Ok(())
}
