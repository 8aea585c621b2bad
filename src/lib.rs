pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic entry points
pub use logic::{
    filter_products, generate_order_id, merge_patch, next_document_id, paginate, query_products,
    slugify, sort_products,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{JsonFileStore, MemoryStore, Store, StoreError, StoreResult};

/// Runs the configured server; used by integration tooling.
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = crate::config::AppConfig::load()?;

    let store = crate::store::JsonFileStore::new(&config.storage.data_dir);
    store.initialize().await?;
    let store = Arc::new(store);

    let app = crate::api::routes::create_router().with_state(store);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::model::{PriceBucket, Product, ProductStatus, SortKey};

    #[test]
    fn product_deserializes_minimal_legacy_record() {
        // Records written before optional fields existed must still load.
        let json = r#"{
            "documentId": "7",
            "name": "Legacy Runner",
            "slug": "legacy-runner"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.document_id, "7");
        assert_eq!(product.price, 0);
        assert_eq!(product.status, ProductStatus::Active);
        assert!(product.category.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn product_serializes_camel_case_fields() {
        let json = r#"{
            "documentId": "1",
            "name": "Air Max",
            "slug": "air-max",
            "price": 2000000,
            "shortDescription": "classic",
            "status": "inactive"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.short_description, "classic");
        assert_eq!(product.status, ProductStatus::Inactive);

        let out = serde_json::to_value(&product).unwrap();
        assert_eq!(out["documentId"], "1");
        assert_eq!(out["shortDescription"], "classic");
        assert!(out.get("short_description").is_none());
    }

    #[test]
    fn sort_key_uses_kebab_case_wire_values() {
        assert_eq!(
            serde_json::from_str::<SortKey>("\"price-asc\"").unwrap(),
            SortKey::PriceAsc
        );
        assert_eq!(
            serde_json::from_str::<SortKey>("\"newest\"").unwrap(),
            SortKey::Newest
        );
        assert!(serde_json::from_str::<SortKey>("\"priceAsc\"").is_err());
    }

    #[test]
    fn price_bucket_wire_values() {
        for (raw, expected) in [
            ("\"all\"", PriceBucket::All),
            ("\"under-50\"", PriceBucket::Under50),
            ("\"50-100\"", PriceBucket::From50To100),
            ("\"100-200\"", PriceBucket::From100To200),
            ("\"above-200\"", PriceBucket::Above200),
        ] {
            assert_eq!(serde_json::from_str::<PriceBucket>(raw).unwrap(), expected);
        }
    }
}
