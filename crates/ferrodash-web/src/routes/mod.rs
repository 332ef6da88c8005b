pub mod assets;
pub mod callbacks;
pub mod layout;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use ferrodash_core::{Envelope, EnvelopeMeta, Rendered};

use crate::error::WebError;
use crate::state::AppState;

/// Assemble every route; state is attached by [`crate::build_router`].
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(assets::routes())
        .merge(layout::routes())
        .merge(callbacks::routes())
        .route("/health", get(health))
        .fallback(not_found)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "stocks": state.datasets.series.stocks().len(),
    }))
}

async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound(format!("no route for {}", uri.path()))
}

/// Wrap a binding result, moving its warnings into the envelope metadata.
pub(crate) fn envelope<T>(started: Instant, rendered: Rendered<T>) -> Envelope<T> {
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    Envelope::success(
        EnvelopeMeta::for_request(latency_ms).with_warnings(rendered.warnings),
        rendered.output,
    )
}
