//! Route modules organized by bounded context.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod fixtures;
pub mod health;
pub mod leaderboard;
pub mod selections;

/// Returns the full application router, without middleware layers.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest(
            "/api/v1/fixtures",
            fixtures::router()
                .merge(selections::router())
                .merge(leaderboard::router()),
        )
        .nest("/api/v1/admin", admin::router())
}
