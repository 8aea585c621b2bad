use crate::model::{Article, Brand, Category, Order, Product};
use crate::store::error::StoreResult;
use crate::store::traits::{ArticleStore, BrandStore, CategoryStore, OrderStore, ProductStore};
use parking_lot::Mutex;

/// In-memory store used by tests as a stand-in for the flat-file backend.
/// Each collection sits behind its own mutex, so cycles on one collection
/// serialize the same way the file store's per-collection lock does.
#[derive(Default)]
pub struct MemoryStore {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
    brands: Mutex<Vec<Brand>>,
    articles: Mutex<Vec<Article>>,
    orders: Mutex<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.products.lock() = products;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock() = categories;
        self
    }

    pub fn with_brands(self, brands: Vec<Brand>) -> Self {
        *self.brands.lock() = brands;
        self
    }

    pub fn with_articles(self, articles: Vec<Article>) -> Self {
        *self.articles.lock() = articles;
        self
    }
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn load_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.lock().clone())
    }

    async fn update_products<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Product>) -> StoreResult<(Vec<Product>, R)> + Send + 'static,
        R: Send + 'static,
    {
        let mut guard = self.products.lock();
        let (records, out) = f(guard.clone())?;
        *guard = records;
        Ok(out)
    }
}

#[async_trait::async_trait]
impl CategoryStore for MemoryStore {
    async fn load_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.lock().clone())
    }

    async fn update_categories<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Category>) -> StoreResult<(Vec<Category>, R)> + Send + 'static,
        R: Send + 'static,
    {
        let mut guard = self.categories.lock();
        let (records, out) = f(guard.clone())?;
        *guard = records;
        Ok(out)
    }
}

#[async_trait::async_trait]
impl BrandStore for MemoryStore {
    async fn load_brands(&self) -> StoreResult<Vec<Brand>> {
        Ok(self.brands.lock().clone())
    }

    async fn update_brands<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Brand>) -> StoreResult<(Vec<Brand>, R)> + Send + 'static,
        R: Send + 'static,
    {
        let mut guard = self.brands.lock();
        let (records, out) = f(guard.clone())?;
        *guard = records;
        Ok(out)
    }
}

#[async_trait::async_trait]
impl ArticleStore for MemoryStore {
    async fn load_articles(&self) -> StoreResult<Vec<Article>> {
        Ok(self.articles.lock().clone())
    }

    async fn update_articles<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Article>) -> StoreResult<(Vec<Article>, R)> + Send + 'static,
        R: Send + 'static,
    {
        let mut guard = self.articles.lock();
        let (records, out) = f(guard.clone())?;
        *guard = records;
        Ok(out)
    }
}

#[async_trait::async_trait]
impl OrderStore for MemoryStore {
    async fn load_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.lock().clone())
    }

    async fn append_order(&self, order: Order) -> StoreResult<()> {
        self.orders.lock().push(order);
        Ok(())
    }

    async fn update_orders<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Order>) -> StoreResult<(Vec<Order>, R)> + Send + 'static,
        R: Send + 'static,
    {
        let mut guard = self.orders.lock();
        let (records, out) = f(guard.clone())?;
        *guard = records;
        Ok(out)
    }
}
