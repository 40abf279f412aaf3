use asistu_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("asistu_backend=info,tower_http=info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool(config).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    if config.webhook_verify_token.is_none() {
        tracing::warn!("WEBHOOK_VERIFY_TOKEN is not set; webhook verification requests will be refused");
    }

    let app = routes::router(AppState::new(pool));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
