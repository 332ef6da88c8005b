use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use ferrodash_core::{DashboardLayout, Envelope, Rendered};

use super::envelope;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/layout", get(layout))
}

/// Page description computed at startup: options, headings and bindings.
async fn layout(State(state): State<Arc<AppState>>) -> Json<Envelope<DashboardLayout>> {
    let started = Instant::now();
    tracing::debug!("serving layout");
    Json(envelope(
        started,
        Rendered {
            output: state.layout.clone(),
            warnings: Vec::new(),
        },
    ))
}
