use axum::{debug_handler, extract::State, Json};

use crate::{board::{Board, Message}, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn list_messages(State(board): State<Board>) -> Json<Vec<Message>> {
    Json(board.list().await)
}
