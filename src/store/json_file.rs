use crate::model::{Article, Brand, CatalogRecord, Category, Order, Product};
use crate::store::error::{StoreError, StoreResult};
use crate::store::traits::{ArticleStore, BrandStore, CategoryStore, OrderStore, ProductStore};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

const ORDERS: &str = "orders";

const COLLECTIONS: [&str; 5] = [
    Product::COLLECTION,
    Category::COLLECTION,
    Brand::COLLECTION,
    Article::COLLECTION,
    ORDERS,
];

/// Flat-file backend: one JSON document per collection under `data_dir`,
/// shaped `{"<collection>": [ ... ]}` and pretty-printed on write.
///
/// Every mutation is a whole-document read-modify-write. A per-collection
/// async mutex serializes cycles within this process; writers in other
/// processes still race and the last full-file write wins. The write itself
/// is not atomic: a failure mid-write can leave a truncated document.
pub struct JsonFileStore {
    data_dir: PathBuf,
    locks: Mutex<HashMap<&'static str, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Creates the data directory and an empty document for any collection
    /// that does not have one yet. Existing documents are left untouched.
    pub async fn initialize(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::write("data dir", e))?;
        for collection in COLLECTIONS {
            let path = self.document_path(collection);
            if tokio::fs::try_exists(&path)
                .await
                .map_err(|e| StoreError::read(collection, e))?
            {
                continue;
            }
            log::info!("initializing empty collection document {:?}", path);
            self.write_records::<serde_json::Value>(collection, &[])
                .await?;
        }
        Ok(())
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    fn collection_lock(&self, collection: &'static str) -> Arc<tokio::sync::Mutex<()>> {
        self.locks
            .lock()
            .entry(collection)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    async fn read_records<E: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> StoreResult<Vec<E>> {
        let path = self.document_path(collection);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::read(collection, e))?;
        let mut document: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| StoreError::read(collection, e))?;
        let records = match document.get_mut(collection) {
            Some(value) => value.take(),
            // A document without its collection key reads as empty, matching
            // the `data.orders || []` tolerance of the original routes.
            None => serde_json::Value::Array(Vec::new()),
        };
        serde_json::from_value(records).map_err(|e| StoreError::read(collection, e))
    }

    async fn write_records<E: Serialize>(
        &self,
        collection: &'static str,
        records: &[E],
    ) -> StoreResult<()> {
        let mut document = serde_json::Map::new();
        document.insert(
            collection.to_string(),
            serde_json::to_value(records).map_err(|e| StoreError::write(collection, e))?,
        );
        let body = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::write(collection, e))?;
        tokio::fs::write(self.document_path(collection), body)
            .await
            .map_err(|e| StoreError::write(collection, e))
    }

    async fn load_collection<E: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> StoreResult<Vec<E>> {
        let lock = self.collection_lock(collection);
        let _guard = lock.lock().await;
        self.read_records(collection).await
    }

    /// One scoped read-modify-write cycle under the collection lock. The
    /// transform runs on the freshly read array; nothing is written when it
    /// fails, so the prior document survives any pre-write error.
    async fn with_collection<E, F, R>(
        &self,
        collection: &'static str,
        bootstrap_missing: bool,
        f: F,
    ) -> StoreResult<R>
    where
        E: Serialize + DeserializeOwned,
        F: FnOnce(Vec<E>) -> StoreResult<(Vec<E>, R)>,
    {
        let lock = self.collection_lock(collection);
        let _guard = lock.lock().await;
        let records = match self.read_records::<E>(collection).await {
            Ok(records) => records,
            Err(e) if bootstrap_missing && e.is_missing_document() => Vec::new(),
            Err(e) => return Err(e),
        };
        let (records, out) = f(records)?;
        self.write_records(collection, &records).await?;
        Ok(out)
    }
}

#[async_trait::async_trait]
impl ProductStore for JsonFileStore {
    async fn load_products(&self) -> StoreResult<Vec<Product>> {
        self.load_collection(Product::COLLECTION).await
    }

    async fn update_products<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Product>) -> StoreResult<(Vec<Product>, R)> + Send + 'static,
        R: Send + 'static,
    {
        self.with_collection(Product::COLLECTION, false, f).await
    }
}

#[async_trait::async_trait]
impl CategoryStore for JsonFileStore {
    async fn load_categories(&self) -> StoreResult<Vec<Category>> {
        self.load_collection(Category::COLLECTION).await
    }

    async fn update_categories<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Category>) -> StoreResult<(Vec<Category>, R)> + Send + 'static,
        R: Send + 'static,
    {
        self.with_collection(Category::COLLECTION, false, f).await
    }
}

#[async_trait::async_trait]
impl BrandStore for JsonFileStore {
    async fn load_brands(&self) -> StoreResult<Vec<Brand>> {
        self.load_collection(Brand::COLLECTION).await
    }

    async fn update_brands<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Brand>) -> StoreResult<(Vec<Brand>, R)> + Send + 'static,
        R: Send + 'static,
    {
        self.with_collection(Brand::COLLECTION, false, f).await
    }
}

#[async_trait::async_trait]
impl ArticleStore for JsonFileStore {
    async fn load_articles(&self) -> StoreResult<Vec<Article>> {
        self.load_collection(Article::COLLECTION).await
    }

    async fn update_articles<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Article>) -> StoreResult<(Vec<Article>, R)> + Send + 'static,
        R: Send + 'static,
    {
        self.with_collection(Article::COLLECTION, false, f).await
    }
}

#[async_trait::async_trait]
impl OrderStore for JsonFileStore {
    async fn load_orders(&self) -> StoreResult<Vec<Order>> {
        self.load_collection(ORDERS).await
    }

    async fn append_order(&self, order: Order) -> StoreResult<()> {
        self.with_collection(ORDERS, true, move |mut orders: Vec<Order>| {
            orders.push(order);
            Ok((orders, ()))
        })
        .await
    }

    async fn update_orders<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Order>) -> StoreResult<(Vec<Order>, R)> + Send + 'static,
        R: Send + 'static,
    {
        self.with_collection(ORDERS, false, f).await
    }
}
