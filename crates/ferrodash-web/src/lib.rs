//! # Ferrodash Web
//!
//! axum server for the ferrodash dashboard. The page itself is static and
//! embedded in the binary; every interaction posts the current widget values
//! to a callback route and receives the refreshed outputs in an
//! [`Envelope`](ferrodash_core::Envelope).
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/` | dashboard page |
//! | GET | `/assets/dashboard.js`, `/assets/dashboard.css` | page assets |
//! | GET | `/health` | liveness |
//! | GET | `/api/layout` | `Envelope<DashboardLayout>` |
//! | POST | `/api/callbacks/update-graph` | `Envelope<DashboardView>` |
//! | POST | `/api/callbacks/update-dropdown` | `Envelope<WindowOptions>` |
//! | POST | `/api/callbacks/change-color` | `Envelope<ThemeStyles>` |

pub mod cli;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ServerError, WebError};
pub use state::AppState;

/// Assemble the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
