use habitra::{AppState, FileStore, SyncEngine, TaskOrder, storage};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = storage::resolve_data_path();
    let order_path = storage::resolve_order_path();
    for path in [&data_path, &order_path] {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let store = FileStore::load(data_path).await;
    let engine = SyncEngine::load(store).await?;
    let order: TaskOrder = storage::load_json(&order_path).await;
    let state = AppState::new(engine, order, order_path);

    let app = habitra::router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
