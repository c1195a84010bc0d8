use axum::Router;
use billmate::api::handlers::{AppService, api_routes};
use billmate::api::openapi::ApiDoc;
use billmate::config::CONFIG;
use billmate::infrastructure::{
    auth::jwt::JwtService, invites::in_memory::InMemoryInvites, ledger::sheet::SheetLedger,
    logging::in_memory::InMemoryLogging, sheets::in_memory::InMemorySpreadsheets,
};
use http::header;
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
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();
    info!("Starting with {:?}", *CONFIG);

    let ledger = SheetLedger::new(InMemorySpreadsheets::new());
    let logging = InMemoryLogging::new();
    let auth = JwtService::new(CONFIG.jwt_secret.clone(), CONFIG.session_ttl_secs);
    let invites = InMemoryInvites::new();
    let service: Arc<AppService> = Arc::new(AppService::new(
        ledger,
        logging,
        auth,
        invites,
        CONFIG.service_settings(),
    ));

    let app = Router::new()
        .route("/", axum::routing::get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
