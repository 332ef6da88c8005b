//! Server-side bindings. Each route takes the current values of a binding's
//! input slots and answers with the values of its output slots.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use ferrodash_core::{
    change_color, update_dropdown, update_graph, DashboardView, Envelope, GraphInputs,
    ThemeInput, ThemeStyles, WindowOptions, WindowSelections,
};

use super::envelope;
use crate::error::WebError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/callbacks/update-graph", post(graph))
        .route("/api/callbacks/update-dropdown", post(dropdown))
        .route("/api/callbacks/change-color", post(color))
}

async fn graph(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GraphInputs>, JsonRejection>,
) -> Result<Json<Envelope<DashboardView>>, WebError> {
    let started = Instant::now();
    let Json(inputs) = payload?;
    tracing::debug!(stock = ?inputs.stock, windows = ?inputs.windows, theme = ?inputs.theme, "update-graph");

    Ok(Json(envelope(started, update_graph(&state.datasets, &inputs))))
}

async fn dropdown(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WindowSelections>, JsonRejection>,
) -> Result<Json<Envelope<WindowOptions>>, WebError> {
    let started = Instant::now();
    let Json(selections) = payload?;
    tracing::debug!(windows = ?selections.windows, "update-dropdown");

    Ok(Json(envelope(
        started,
        update_dropdown(&state.datasets, &selections),
    )))
}

async fn color(
    payload: Result<Json<ThemeInput>, JsonRejection>,
) -> Result<Json<Envelope<ThemeStyles>>, WebError> {
    let started = Instant::now();
    let Json(input) = payload?;
    tracing::debug!(theme = ?input.theme, "change-color");

    Ok(Json(envelope(started, change_color(&input))))
}
