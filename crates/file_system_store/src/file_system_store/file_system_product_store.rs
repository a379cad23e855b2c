use std::{
    collections::BTreeMap,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::Arc,
};

use command_use_case::port::product_repository;
use tokio::sync::Mutex;
use write_model::{
    aggregate::Product,
    value_object::{ProductId, ProductName, Stock, Version},
};

const FILE_NAME: &str = "products.jsonl";

/// One stored revision of a product. The file is a log of these; the last line per id wins.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ProductJson {
    id: i64,
    name: String,
    stock: u64,
    version: u32,
}

impl From<&Product> for ProductJson {
    fn from(product: &Product) -> Self {
        Self {
            id: i64::from(product.id()),
            name: product.name().to_string(),
            stock: u64::from(product.stock()),
            version: u32::from(product.version()),
        }
    }
}

impl TryFrom<ProductJson> for Product {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(
        ProductJson {
            id,
            name,
            stock,
            version,
        }: ProductJson,
    ) -> Result<Self, Self::Error> {
        Ok(Product::reconstruct(
            ProductId::try_from(id)?,
            ProductName::try_from(name)?,
            Stock::from(stock),
            Version::try_from(version)?,
        ))
    }
}

type Cache = BTreeMap<ProductId, Product>;

#[derive(Clone)]
pub struct FileSystemProductStore {
    cache: Arc<Mutex<Option<Cache>>>,
    dir: PathBuf,
}

impl FileSystemProductStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            cache: Arc::new(Mutex::new(None)),
            dir,
        }
    }

    async fn get_impl(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load()?);
        }
        Ok(cache.as_ref().and_then(|cache| cache.get(&id).cloned()))
    }

    async fn list_impl(
        &self,
    ) -> Result<
        Vec<query_use_case::port::ProductQueryData>,
        Box<dyn std::error::Error + Send + Sync>,
    > {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load()?);
        }
        Ok(cache
            .iter()
            .flat_map(|cache| cache.values())
            .map(|product| query_use_case::port::ProductQueryData {
                id: product.id(),
                name: product.name().clone(),
                stock: product.stock(),
            })
            .collect())
    }

    fn load(&self) -> Result<Cache, Box<dyn std::error::Error + Send + Sync>> {
        let path_buf = self.dir.join(FILE_NAME);
        if !path_buf.exists() {
            return Ok(Cache::new());
        }
        let mut bytes = std::fs::read(&path_buf)?;
        if bytes.last().is_some_and(|b| *b != b'\n') {
            // a write was interrupted; drop the partial line so that appends start on a new line
            let len = bytes
                .iter()
                .rposition(|b| *b == b'\n')
                .map_or(0, |i| i + 1);
            tracing::warn!(
                path = %path_buf.display(),
                discarded = bytes.len() - len,
                "truncating partially written line"
            );
            OpenOptions::new()
                .write(true)
                .open(&path_buf)?
                .set_len(u64::try_from(len)?)?;
            bytes.truncate(len);
        }
        let mut cache = Cache::new();
        for line in std::str::from_utf8(&bytes)?.lines() {
            if line.is_empty() {
                continue;
            }
            let product = Product::try_from(serde_json::from_str::<ProductJson>(line)?)?;
            cache.insert(product.id(), product);
        }
        Ok(cache)
    }

    async fn put_impl(
        &self,
        current: Option<Version>,
        product: Product,
    ) -> Result<Product, product_repository::Error> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load()?);
        }
        let stored = cache
            .as_ref()
            .expect("cache to be Some")
            .get(&product.id())
            .map(Product::version);
        if stored != current {
            return Err(product_repository::Error::Conflict(product.id()));
        }

        if let Err(e) = self.append(&product) {
            // the file may now end with a partial line; reload it on the next access
            *cache = None;
            return Err(product_repository::Error::from(e));
        }
        cache
            .as_mut()
            .expect("cache to be Some")
            .insert(product.id(), product.clone());
        Ok(product)
    }

    fn append(&self, product: &Product) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut data = serde_json::to_string(&ProductJson::from(product))?;
        data.push('\n');
        let path_buf = self.dir.join(FILE_NAME);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path_buf)?;
        file.write_all(data.as_bytes())?;
        file.sync_data()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::ProductRepository for FileSystemProductStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, product_repository::Error> {
        Ok(self.get_impl(id).await?)
    }

    async fn put(
        &self,
        current: Option<Version>,
        product: Product,
    ) -> Result<Product, product_repository::Error> {
        self.put_impl(current, product).await
    }
}

#[async_trait::async_trait]
impl query_use_case::port::ProductReader for FileSystemProductStore {
    async fn list(
        &self,
    ) -> Result<
        Vec<query_use_case::port::ProductQueryData>,
        Box<dyn std::error::Error + Send + Sync>,
    > {
        self.list_impl().await
    }
}
