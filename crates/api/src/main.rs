use anyhow::Context;

use orderdesk_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let services = orderdesk_api::app::services::build_in_memory_services(&config);
    let app = orderdesk_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
