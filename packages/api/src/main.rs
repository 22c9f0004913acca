use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{create_app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_url =
        std::env::var("DB_URL").unwrap_or_else(|_| "sqlite://tic_tac_toe.db?mode=rwc".to_string());
    let pool = shared::db::connect(&db_url).await?;
    shared::db::init_schema(&pool).await?;

    let state = AppState::new(pool);
    let app = create_app(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
