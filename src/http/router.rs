use crate::app_context::AppContext;
use crate::cli::Args;
use crate::sessions::storage::HashMapSessionStorage;
use crate::{health, http::cors, page, sessions};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapSessionStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let cycle_routes = Router::new()
        .route("/", post(sessions::handlers::begin_cycle))
        .route("/:generation", get(sessions::handlers::outcome))
        .route("/:generation/report", post(sessions::handlers::report));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route("/:session-id", get(sessions::handlers::state))
        .route(
            "/:session-id/destination/clipboard",
            get(sessions::handlers::clipboard),
        )
        .nest("/:session-id/cycles", cycle_routes);

    Router::new()
        .route("/", get(page::handlers::index))
        .route("/config", get(page::handlers::config))
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
                .layer(cors_policy),
        )
}
