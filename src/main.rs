use axum::serve;
use flatshop::api::routes::create_router;
use flatshop::config::AppConfig;
use flatshop::seed;
use flatshop::store::JsonFileStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new().filter_level(LevelFilter::Info).init();

    println!("flatshop: storefront API over flat JSON files");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, data_dir={}",
        config.server.host, config.server.port, config.storage.data_dir
    );

    let store = JsonFileStore::new(&config.storage.data_dir);
    store.initialize().await?;
    println!("Collection documents ready in {}", config.storage.data_dir);

    let store = Arc::new(store);

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
        println!("Seed data loaded successfully");
    }

    run_server(create_router().with_state(store), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("flatshop server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
