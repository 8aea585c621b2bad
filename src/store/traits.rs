use crate::model::{Article, Brand, Category, Order, Product};
use crate::store::error::StoreResult;

/// Per-collection access in the shape the flat-file layout dictates: load the
/// whole array, or run one scoped read-modify-write cycle. The `update_*`
/// methods take a pure transform over the full collection and persist its
/// result; a transform error leaves the prior on-disk state intact. Whether
/// concurrent cycles on one collection are serialized is up to the backend.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    async fn load_products(&self) -> StoreResult<Vec<Product>>;
    async fn update_products<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Product>) -> StoreResult<(Vec<Product>, R)> + Send + 'static,
        R: Send + 'static;
}

#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn load_categories(&self) -> StoreResult<Vec<Category>>;
    async fn update_categories<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Category>) -> StoreResult<(Vec<Category>, R)> + Send + 'static,
        R: Send + 'static;
}

#[async_trait::async_trait]
pub trait BrandStore: Send + Sync {
    async fn load_brands(&self) -> StoreResult<Vec<Brand>>;
    async fn update_brands<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Brand>) -> StoreResult<(Vec<Brand>, R)> + Send + 'static,
        R: Send + 'static;
}

#[async_trait::async_trait]
pub trait ArticleStore: Send + Sync {
    async fn load_articles(&self) -> StoreResult<Vec<Article>>;
    async fn update_articles<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Article>) -> StoreResult<(Vec<Article>, R)> + Send + 'static,
        R: Send + 'static;
}

#[async_trait::async_trait]
pub trait OrderStore: Send + Sync {
    async fn load_orders(&self) -> StoreResult<Vec<Order>>;
    /// Appends one order, bootstrapping an empty collection when the backing
    /// document does not exist yet. Orders is the only collection with this
    /// first-write behavior.
    async fn append_order(&self, order: Order) -> StoreResult<()>;
    async fn update_orders<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(Vec<Order>) -> StoreResult<(Vec<Order>, R)> + Send + 'static,
        R: Send + 'static;
}

pub trait Store:
    ProductStore + CategoryStore + BrandStore + ArticleStore + OrderStore + Send + Sync
{
}

impl<T: ProductStore + CategoryStore + BrandStore + ArticleStore + OrderStore + Send + Sync> Store
    for T
{
}
