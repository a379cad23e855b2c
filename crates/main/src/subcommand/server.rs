use std::{net::SocketAddr, path::PathBuf, str::FromStr as _, sync::Arc};

use anyhow::Context as _;
use command_use_case::port::ProductRepository;
use file_system_store::FileSystemProductStore;
use in_memory_store::InMemoryProductStore;
use query_use_case::port::ProductReader;
use server::App;
use write_model::{
    aggregate::Product,
    value_object::{ProductId, ProductName, Stock},
};

const DEFAULT_CATALOG: [(i64, &str, u64); 5] = [
    (1, "Men Jeans", 100),
    (2, "Men Jacket", 100),
    (3, "Women Shoe", 100),
    (4, "Women Shirt", 100),
    (5, "Children Short", 100),
];

#[derive(clap::Args)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "ADDR", default_value = "0.0.0.0:3000")]
    addr: SocketAddr,
    /// Directory of the product data file. Products are kept in memory if omitted
    #[arg(long, env = "DATA_DIR")]
    data_dir: Option<PathBuf>,
    /// Do not seed the default catalog into an empty store
    #[arg(long, env = "NO_SEED")]
    no_seed: bool,
}

pub async fn run(
    Args {
        addr,
        data_dir,
        no_seed,
    }: Args,
) -> anyhow::Result<()> {
    let (product_reader, product_repository): (
        Arc<dyn ProductReader + Send + Sync>,
        Arc<dyn ProductRepository + Send + Sync>,
    ) = match data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using file system store");
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create data dir {}", dir.display()))?;
            let store = Arc::new(FileSystemProductStore::new(dir));
            (store.clone(), store)
        }
        None => {
            tracing::info!("using in-memory store");
            let store = Arc::new(InMemoryProductStore::new());
            (store.clone(), store)
        }
    };
    if !no_seed {
        seed(product_reader.as_ref(), product_repository.as_ref()).await?;
    }
    let app = App::new(product_reader, product_repository);
    Ok(server::run(app, addr).await?)
}

/// Stores the default catalog if the store holds no products.
async fn seed(
    product_reader: &(dyn ProductReader + Send + Sync),
    product_repository: &(dyn ProductRepository + Send + Sync),
) -> anyhow::Result<()> {
    let products = product_reader
        .list()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    if !products.is_empty() {
        return Ok(());
    }
    for (id, name, stock) in DEFAULT_CATALOG {
        let product = Product::create(
            ProductId::try_from(id)?,
            ProductName::from_str(name)?,
            Stock::from(stock),
        );
        product_repository.put(None, product).await?;
    }
    tracing::info!(count = DEFAULT_CATALOG.len(), "seeded default catalog");
    Ok(())
}
