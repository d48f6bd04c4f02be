mod list;
mod post;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list::list_messages))
        .route("/message", post(post::post_message))
}
