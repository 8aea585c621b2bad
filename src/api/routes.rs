use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Products
        .route("/products", get(handlers::list_products::<S>))
        .route("/products", post(handlers::create_product::<S>))
        .route("/products/:key", get(handlers::get_product::<S>))
        .route("/products/:key", put(handlers::update_product::<S>))
        .route("/products/:key", delete(handlers::delete_product::<S>))
        // Categories
        .route("/categories", get(handlers::list_categories::<S>))
        .route("/categories", post(handlers::create_category::<S>))
        .route("/categories/:key", get(handlers::get_category::<S>))
        .route("/categories/:key", put(handlers::update_category::<S>))
        .route("/categories/:key", delete(handlers::delete_category::<S>))
        // Brands
        .route("/brands", get(handlers::list_brands::<S>))
        .route("/brands", post(handlers::create_brand::<S>))
        .route("/brands/:key", get(handlers::get_brand::<S>))
        .route("/brands/:key", put(handlers::update_brand::<S>))
        .route("/brands/:key", delete(handlers::delete_brand::<S>))
        // Articles (blog)
        .route("/articles", get(handlers::list_articles::<S>))
        .route("/articles", post(handlers::create_article::<S>))
        .route("/articles/:key", get(handlers::get_article::<S>))
        .route("/articles/:key", put(handlers::update_article::<S>))
        .route("/articles/:key", delete(handlers::delete_article::<S>))
        // Orders
        .route("/orders", get(handlers::list_orders::<S>))
        .route("/orders", post(handlers::submit_order::<S>))
        .route("/orders/:key", get(handlers::get_order::<S>))
        .route("/orders/:key", put(handlers::update_order::<S>))
        .route("/orders/:key", delete(handlers::delete_order::<S>))
}
