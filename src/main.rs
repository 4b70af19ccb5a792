use axum::{Router, http::header, routing::get};
use careportal::api::handlers::api_routes;
use careportal::api::openapi::ApiDoc;
use careportal::config::CONFIG;
use careportal::core::services::AccountService;
use careportal::infrastructure::{
    auth::in_memory::InMemoryAuthBackend, logging::in_memory::InMemoryLogging,
    session::in_memory::InMemorySessionStore, storage::in_memory::InMemoryProfileStore,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    // Initialize the backend stand-ins
    let auth = InMemoryAuthBackend::new(CONFIG.jwt_secret.clone());
    let profiles = InMemoryProfileStore::new();
    let sessions = InMemorySessionStore::new();
    let logging = InMemoryLogging::new();
    let service = Arc::new(AccountService::new(
        logging,
        auth,
        profiles,
        sessions,
        CONFIG.jwt_secret.clone(),
    ));

    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
