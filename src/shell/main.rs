use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use backoffice::shared::infrastructure::filesystem::ProjectFiles;
use backoffice::shared::infrastructure::unit_of_work::in_memory::InMemoryStore;
use backoffice::shell::config::AppConfig;
use backoffice::shell::http::{cors_layer, router};
use backoffice::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory store for now
    let store = Arc::new(InMemoryStore::new());
    let files = Arc::new(ProjectFiles::new(config.projects_root.clone()));
    let state = AppState::new(store, files, config.policy);

    let app = router(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        projects_root = %config.projects_root.display(),
        overlap_scope = ?config.policy.overlap_scope,
        "GraphQL endpoint: http://{}/gql",
        config.bind_addr
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("could not bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
