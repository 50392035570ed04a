//! API routes

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::config::Config;
use crate::conversation::ConversationState;
use crate::core::Graph;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub graph: Arc<Graph>,
}

impl AppState {
    pub fn new(config: Config, graph: Graph) -> Self {
        Self {
            config,
            graph: Arc::new(graph),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn step(
    State(state): State<AppState>,
    Json(conversation): Json<ConversationState>,
) -> Json<ConversationState> {
    tracing::info!(
        session_id = %conversation.session_id,
        messages = conversation.len(),
        "Running conversation step"
    );

    Json(state.graph.run(&conversation).await)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/step", post(step))
}
