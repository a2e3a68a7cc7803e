//! Wicket Server - live match state and player statistics over HTTP.
//!
//! This server exposes the wicket-engine predicates to scoring clients and
//! folds completed matches into PostgreSQL-backed player records.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;

use crate::db::PgPlayerStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: PgPlayerStore,
}
