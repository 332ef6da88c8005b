use std::sync::Arc;

use ferrodash_core::{DashboardLayout, Datasets};

/// Shared application state, passed to all route handlers via `axum::extract::State`.
///
/// Nothing here changes after startup, so handlers read it without locks.
#[derive(Debug)]
pub struct AppState {
    pub datasets: Datasets,
    pub layout: DashboardLayout,
}

impl AppState {
    pub fn new(datasets: Datasets) -> Arc<Self> {
        let layout = DashboardLayout::from_datasets(&datasets);
        Arc::new(Self { datasets, layout })
    }
}
