// Composition root for the activities service.
//
// Responsibilities
// - Read config from environment.
// - Wire the in-memory directory into the use case handlers.
// - Assemble the REST, GraphQL and static routes into one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use axum::{Router, response::Redirect, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(http::router(state))
        .merge(graphql::router(schema))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
