//! HTTP route definitions.

mod health;
mod live;
mod stats;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(live::routes())
        .merge(stats::routes())
}
