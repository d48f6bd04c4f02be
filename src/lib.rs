pub mod appresult;
pub mod board;
pub mod config;
pub mod messages;
pub mod res;

use axum::{extract::FromRef, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};
pub use board::Board;
pub use config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub board: Board,
}

/// Builds the HTTP application around `board`.
///
/// The board's sweeper is not started here; see [`Board::spawn_sweeper`].
pub fn app(board: Board) -> Router {
    Router::new()
        .route("/", get(res::index))
        .route("/api-docs", get(res::api_docs))
        .nest("/api", messages::router())
        .with_state(AppState { board })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
